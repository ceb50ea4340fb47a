// pn532-emu/src/protocol/commands/mifare.rs

use crate::constants::{
    MIFARE_BLOCK_SIZE, MIFARE_CMD_AUTH_A, MIFARE_CMD_AUTH_B, MIFARE_CMD_READ, MIFARE_CMD_WRITE,
    MIFARE_KEY_LEN,
};
use crate::protocol::parser::{byte_at, slice_at};
use crate::types::{BlockData, KeyKind, MifareKey};
use crate::Result;

/// MIFARE Classic command tunnelled through InDataExchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MifareCommand {
    /// Trailing bytes after the key (hosts usually append the UID) are ignored.
    /// `key` is `None` when fewer than six key bytes were sent; such an
    /// attempt never authenticates.
    Authenticate {
        kind: KeyKind,
        block: u8,
        key: Option<MifareKey>,
    },
    Read {
        block: u8,
    },
    Write {
        block: u8,
        data: BlockData,
    },
    Unsupported(u8),
}

impl MifareCommand {
    /// Decode the card command byte and its parameters.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let code = byte_at(data, 0)?;
        match code {
            MIFARE_CMD_AUTH_A | MIFARE_CMD_AUTH_B => {
                let kind = if code == MIFARE_CMD_AUTH_A {
                    KeyKind::A
                } else {
                    KeyKind::B
                };
                Ok(Self::Authenticate {
                    kind,
                    block: byte_at(data, 1)?,
                    key: slice_at(data, 2, MIFARE_KEY_LEN)
                        .and_then(MifareKey::try_from)
                        .ok(),
                })
            }
            MIFARE_CMD_READ => Ok(Self::Read {
                block: byte_at(data, 1)?,
            }),
            MIFARE_CMD_WRITE => Ok(Self::Write {
                block: byte_at(data, 1)?,
                data: BlockData::try_from(slice_at(data, 2, MIFARE_BLOCK_SIZE)?)?,
            }),
            other => Ok(Self::Unsupported(other)),
        }
    }

    pub fn command_code(&self) -> u8 {
        match self {
            Self::Authenticate {
                kind: KeyKind::A, ..
            } => MIFARE_CMD_AUTH_A,
            Self::Authenticate {
                kind: KeyKind::B, ..
            } => MIFARE_CMD_AUTH_B,
            Self::Read { .. } => MIFARE_CMD_READ,
            Self::Write { .. } => MIFARE_CMD_WRITE,
            Self::Unsupported(code) => *code,
        }
    }

    /// Encode as the InDataExchange data field (command byte first).
    pub fn encode(&self) -> Vec<u8> {
        let mut v = vec![self.command_code()];
        match self {
            Self::Authenticate { block, key, .. } => {
                v.push(*block);
                if let Some(key) = key {
                    v.extend_from_slice(key.as_bytes());
                }
            }
            Self::Read { block } => v.push(*block),
            Self::Write { block, data } => {
                v.push(*block);
                v.extend_from_slice(data.as_bytes());
            }
            Self::Unsupported(_) => {}
        }
        v
    }
}
