// pn532-emu/src/prelude.rs

pub use crate::card::{AuthSession, CardStore, CardType, VirtualCard};
pub use crate::config::{CardConfig, EmulatorConfig};
pub use crate::device::{Emulator, EmulatorBuilder, Phase, PhaseKind};
pub use crate::hal::{BusDevice, MockPeripherals, Peripherals, TriggerLevels};
pub use crate::protocol::{Command, CommandOutcome, Frame, MifareCommand, Response, Status};
pub use crate::{
    BlockData, Error, FirmwareVersion, KeyKind, Level, MifareKey, Result, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
