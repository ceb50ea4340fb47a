// pn532-emu/src/device/mod.rs

//! The emulated controller: busy-state machine, command execution and
//! operator trigger handling around the protocol codec.

pub mod builder;
pub mod handle;
pub mod phase;
pub mod processor;
pub mod triggers;

pub use builder::EmulatorBuilder;
pub use handle::Emulator;
pub use phase::{Phase, PhaseKind};
pub use processor::CommandProcessor;
pub use triggers::{EdgeDetector, TriggerEdges};
