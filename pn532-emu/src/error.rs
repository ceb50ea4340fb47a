// pn532-emu/src/error.rs

use thiserror::Error;

/// Common error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },
    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("transmitter busy: previous frame not fully read")]
    TransmitterBusy,

    #[error("block {0} is outside the card memory")]
    BlockOutOfRange(u8),
    #[error("sector {0} is outside the card memory")]
    SectorOutOfRange(u8),
    #[error("card slot {0} does not exist")]
    CardSlotOutOfRange(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("hex parse error: {0}")]
    Hex(String),
}

pub type Result<T> = std::result::Result<T, Error>;
