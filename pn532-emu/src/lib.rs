// pn532-emu/src/lib.rs

//! pn532-emu
//!
//! Byte-level emulator of a PN532 NFC controller with two simulated
//! MIFARE Classic 1K cards, for testing host drivers without hardware.
#![warn(missing_docs)]

pub mod card;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod hal;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
