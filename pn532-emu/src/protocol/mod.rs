// pn532-emu/src/protocol/mod.rs

pub mod checksum;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod receiver;
pub mod responses;
pub mod transmitter;

pub use checksum::{dcs, lcs};
pub use commands::*;
pub use frame::{Frame, InboundFrame, OutboundFrame};
pub use receiver::{FrameOutcome, FrameReceiver};
pub use responses::*;
pub use transmitter::ResponseTransmitter;
