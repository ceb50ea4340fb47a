// pn532-emu/src/device/builder.rs

use std::time::Duration;

use crate::config::EmulatorConfig;
use crate::device::handle::Emulator;
use crate::hal::Peripherals;
use crate::types::{FirmwareVersion, Uid};
use crate::{Error, Result};

/// Helper to construct an Emulator with a non-default configuration.
#[derive(Debug, Clone, Default)]
pub struct EmulatorBuilder {
    config: EmulatorConfig,
    bad_slot: Option<usize>,
}

impl EmulatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: EmulatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.config.processing_delay = delay;
        self
    }

    pub fn with_firmware(mut self, firmware: FirmwareVersion) -> Self {
        self.config.firmware = firmware;
        self
    }

    /// Set the UID of card `slot` (0 or 1). An unknown slot is reported by
    /// `build`.
    pub fn with_card_uid(mut self, slot: usize, uid: Uid) -> Self {
        match self.config.cards.get_mut(slot) {
            Some(card) => card.uid = uid,
            None => self.bad_slot = Some(slot),
        }
        self
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Consume the builder and return an emulator driving `peripherals`.
    pub fn build<P: Peripherals>(self, peripherals: P) -> Result<Emulator<P>> {
        if let Some(slot) = self.bad_slot {
            return Err(Error::CardSlotOutOfRange(slot));
        }
        Emulator::new(self.config, peripherals)
    }
}
