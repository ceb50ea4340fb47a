// pn532-emu/src/protocol/commands/mod.rs

pub mod mifare;

pub use mifare::MifareCommand;

use crate::constants::{
    PN532_CMD_GET_FIRMWARE_VERSION, PN532_CMD_IN_DATA_EXCHANGE, PN532_CMD_INLIST_PASSIVE_TARGET,
    PN532_CMD_SAM_CONFIGURATION,
};
use crate::protocol::parser::{byte_at, ensure_len};
use crate::Result;

/// Top-level controller command. Opcodes the emulated firmware does not
/// implement decode to `Unsupported` rather than an error so the device can
/// stay silent for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GetFirmwareVersion,
    /// SAM mode/timeout/IRQ parameters are accepted and ignored.
    SamConfiguration,
    InListPassiveTarget {
        max_targets: u8,
        baud_rate: u8,
    },
    /// `data` holds the card command byte followed by its parameters.
    InDataExchange {
        target: u8,
        data: Vec<u8>,
    },
    Unsupported(u8),
}

impl Command {
    /// Decode an accepted frame's opcode and payload (opcode excluded).
    pub fn decode(opcode: u8, payload: &[u8]) -> Result<Self> {
        match opcode {
            PN532_CMD_GET_FIRMWARE_VERSION => Ok(Self::GetFirmwareVersion),
            PN532_CMD_SAM_CONFIGURATION => Ok(Self::SamConfiguration),
            PN532_CMD_INLIST_PASSIVE_TARGET => Ok(Self::InListPassiveTarget {
                max_targets: byte_at(payload, 0)?,
                baud_rate: byte_at(payload, 1)?,
            }),
            PN532_CMD_IN_DATA_EXCHANGE => {
                ensure_len(payload, 2)?;
                Ok(Self::InDataExchange {
                    target: payload[0],
                    data: payload[1..].to_vec(),
                })
            }
            other => Ok(Self::Unsupported(other)),
        }
    }

    /// Return the opcode of this command.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => PN532_CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration => PN532_CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => PN532_CMD_INLIST_PASSIVE_TARGET,
            Self::InDataExchange { .. } => PN532_CMD_IN_DATA_EXCHANGE,
            Self::Unsupported(code) => *code,
        }
    }

    /// Encode the command parameters (opcode excluded), as a host writes them.
    pub fn encode_params(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion | Self::Unsupported(_) => Vec::new(),
            // Normal mode, 1 s timeout, use IRQ
            Self::SamConfiguration => vec![0x01, 0x14, 0x01],
            Self::InListPassiveTarget {
                max_targets,
                baud_rate,
            } => vec![*max_targets, *baud_rate],
            Self::InDataExchange { target, data } => {
                let mut v = Vec::with_capacity(1 + data.len());
                v.push(*target);
                v.extend_from_slice(data);
                v
            }
        }
    }

    /// Build a full host->device frame for this command.
    pub fn to_frame(&self) -> Result<Vec<u8>> {
        crate::protocol::Frame::encode_command(self.command_code(), &self.encode_params())
    }
}
