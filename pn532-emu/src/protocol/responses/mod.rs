// pn532-emu/src/protocol/responses/mod.rs

pub mod target;

pub use target::TargetInfo;

use crate::constants::{
    PN532_CMD_GET_FIRMWARE_VERSION, PN532_CMD_IN_DATA_EXCHANGE, PN532_CMD_INLIST_PASSIVE_TARGET,
    PN532_CMD_SAM_CONFIGURATION, PN532_RESP_GET_FIRMWARE_VERSION, PN532_RESP_IN_DATA_EXCHANGE,
    PN532_RESP_INLIST_PASSIVE_TARGET, PN532_RESP_SAM_CONFIGURATION, STATUS_ERROR, STATUS_OK,
};
use crate::protocol::frame::OutboundFrame;
use crate::protocol::parser::{byte_at, ensure_len, expect_response_code, slice_at};
use crate::types::{BlockData, FirmwareVersion};
use crate::{Error, Result};

/// Status byte carried at the start of SAMConfiguration and InDataExchange
/// replies.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok = STATUS_OK,
    Error = STATUS_ERROR,
}

impl Status {
    pub fn from_byte(byte: u8) -> Self {
        if byte == STATUS_OK {
            Self::Ok
        } else {
            Self::Error
        }
    }
}

/// High-level response. `encode` produces the payload that follows the
/// response opcode inside the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    FirmwareVersion(FirmwareVersion),
    SamConfiguration {
        status: Status,
    },
    InListPassiveTarget {
        target: Option<TargetInfo>,
    },
    InDataExchange {
        status: Status,
        data: Option<BlockData>,
    },
}

impl Response {
    /// Shorthand for an InDataExchange reply carrying only a status byte.
    pub fn exchange_status(status: Status) -> Self {
        Self::InDataExchange { status, data: None }
    }

    /// Return the response opcode (command + 1).
    pub fn response_code(&self) -> u8 {
        match self {
            Self::FirmwareVersion(_) => PN532_RESP_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => PN532_RESP_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => PN532_RESP_INLIST_PASSIVE_TARGET,
            Self::InDataExchange { .. } => PN532_RESP_IN_DATA_EXCHANGE,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::FirmwareVersion(fw) => fw.to_bytes().to_vec(),
            Self::SamConfiguration { status } => vec![*status as u8],
            Self::InListPassiveTarget { target: None } => vec![0x00],
            Self::InListPassiveTarget {
                target: Some(target),
            } => {
                let mut v = vec![0x01];
                v.extend(target.encode());
                v
            }
            Self::InDataExchange { status, data } => {
                let mut v = vec![*status as u8];
                if let Some(block) = data {
                    v.extend_from_slice(block.as_bytes());
                }
                v
            }
        }
    }

    pub fn into_frame(self) -> OutboundFrame {
        OutboundFrame::new(self.response_code(), self.encode())
    }

    /// Decode a response frame for the given command opcode (host side).
    pub fn decode(expected_cmd: u8, frame: &OutboundFrame) -> Result<Self> {
        expect_response_code(frame.opcode, expected_cmd.wrapping_add(1))?;
        let data = &frame.payload[..];

        match expected_cmd {
            PN532_CMD_GET_FIRMWARE_VERSION => {
                let b = slice_at(data, 0, 4)?;
                Ok(Self::FirmwareVersion(FirmwareVersion {
                    ic: b[0],
                    version: b[1],
                    revision: b[2],
                    support: b[3],
                }))
            }
            PN532_CMD_SAM_CONFIGURATION => Ok(Self::SamConfiguration {
                status: Status::from_byte(byte_at(data, 0)?),
            }),
            PN532_CMD_INLIST_PASSIVE_TARGET => match byte_at(data, 0)? {
                0 => Ok(Self::InListPassiveTarget { target: None }),
                _ => Ok(Self::InListPassiveTarget {
                    target: Some(TargetInfo::decode(&data[1..])?),
                }),
            },
            PN532_CMD_IN_DATA_EXCHANGE => {
                ensure_len(data, 1)?;
                let status = Status::from_byte(data[0]);
                let block = match data.len() {
                    1 => None,
                    _ => Some(BlockData::try_from(&data[1..])?),
                };
                Ok(Self::InDataExchange {
                    status,
                    data: block,
                })
            }
            _ => Err(Error::UnexpectedResponse {
                expected: expected_cmd.wrapping_add(1),
                actual: frame.opcode,
            }),
        }
    }
}

/// What the command processor decided for one accepted frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Queue this response frame.
    Respond(Response),
    /// Send nothing at all (unknown top-level command).
    Suppressed,
}
