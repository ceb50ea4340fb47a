// pn532-emu/src/config.rs

//! Emulator configuration. The defaults reproduce the reference device.

use std::time::Duration;

use crate::constants::VIRTUAL_CARD_SLOTS;
use crate::types::{FirmwareVersion, Uid};
use crate::{Error, Result};

/// Simulated command processing time between frame acceptance and the
/// response becoming readable.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(1);

/// Card 1 UID: DE AD BE EF
pub const DEFAULT_CARD1_UID: Uid = Uid::from_bytes([0xDE, 0xAD, 0xBE, 0xEF]);

/// Card 2 UID: CA FE BA BE
pub const DEFAULT_CARD2_UID: Uid = Uid::from_bytes([0xCA, 0xFE, 0xBA, 0xBE]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardConfig {
    pub uid: Uid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmulatorConfig {
    pub processing_delay: Duration,
    pub firmware: FirmwareVersion,
    pub cards: [CardConfig; VIRTUAL_CARD_SLOTS],
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            processing_delay: DEFAULT_PROCESSING_DELAY,
            firmware: FirmwareVersion::default(),
            cards: [
                CardConfig {
                    uid: DEFAULT_CARD1_UID,
                },
                CardConfig {
                    uid: DEFAULT_CARD2_UID,
                },
            ],
        }
    }
}

impl EmulatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.processing_delay.is_zero() {
            return Err(Error::InvalidConfig(
                "processing delay must be non-zero".into(),
            ));
        }
        Ok(())
    }
}
