//! Test support helpers intended for use by unit and integration tests,
//! benches and the demo.
//!
//! These play the host side of the bus: write a command frame, read the
//! ACK, fire the processing delay and read the response back.
#![allow(dead_code)]

use crate::constants::{PN532_ACK_FRAME, PN532_FRAME_OVERHEAD};
use crate::device::{Emulator, PhaseKind};
use crate::hal::{BusDevice, MockPeripherals};
use crate::protocol::{Frame, OutboundFrame};
use crate::{Error, Result};

/// Emulator with the default configuration on mock peripherals.
#[doc(hidden)]
pub fn mock_emulator() -> Result<Emulator<MockPeripherals>> {
    Emulator::new(Default::default(), MockPeripherals::new())
}

/// Write raw bytes to the emulator as the host would.
#[doc(hidden)]
pub fn write_all<B: BusDevice>(dev: &mut B, bytes: &[u8]) {
    for &b in bytes {
        dev.write(b);
    }
}

/// Read `n` bytes from the emulator.
#[doc(hidden)]
pub fn read_bytes<B: BusDevice>(dev: &mut B, n: usize) -> Vec<u8> {
    (0..n).map(|_| dev.read()).collect()
}

/// Run one complete exchange: write the command frame, read and check the
/// ACK, expire the processing delay and read the response frame.
///
/// Returns `Ok(None)` when the emulator stays silent (unsupported command).
#[doc(hidden)]
pub fn exchange(
    emu: &mut Emulator<MockPeripherals>,
    opcode: u8,
    params: &[u8],
) -> Result<Option<OutboundFrame>> {
    write_all(emu, &Frame::encode_command(opcode, params)?);
    if emu.phase().kind() != PhaseKind::AckPending {
        return Err(Error::FrameFormat("command frame not accepted".into()));
    }

    let ack = read_bytes(emu, PN532_ACK_FRAME.len());
    if !Frame::is_ack(&ack) {
        return Err(Error::FrameFormat(format!("expected ACK, got {:02X?}", ack)));
    }
    emu.on_delay_elapsed();
    if emu.phase().kind() != PhaseKind::ResponsePending {
        return Ok(None);
    }
    read_response(emu).map(Some)
}

/// Read a response frame whose header announces its own length.
#[doc(hidden)]
pub fn read_response(emu: &mut Emulator<MockPeripherals>) -> Result<OutboundFrame> {
    let mut bytes = read_bytes(emu, 5);
    let len = bytes[3] as usize;
    bytes.extend(read_bytes(emu, PN532_FRAME_OVERHEAD + len - 5));
    Frame::decode_response(&bytes)
}
