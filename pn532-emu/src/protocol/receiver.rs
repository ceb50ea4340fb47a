// pn532-emu/src/protocol/receiver.rs

//! Byte-clocked parser for host->device information frames.
//!
//! Framing and checksum failures are never reported upward as errors: the
//! parser drops the partial frame and waits for the next preamble, which is
//! what the real controller does while the host retries.

use crate::constants::{
    PN532_MAX_COMMAND_LEN, PN532_POSTAMBLE, PN532_PREAMBLE, PN532_START_CODE,
    PN532_TFI_HOST_TO_DEVICE,
};
use crate::protocol::checksum::{dcs_matches, lcs_matches};
use crate::protocol::frame::InboundFrame;

/// Result of feeding one byte to the receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Byte consumed, no complete frame yet.
    Continue,
    /// A checksum-valid frame was completed by this byte.
    FrameReady(InboundFrame),
    /// A partially received frame was dropped and the parser resynchronised.
    FrameRejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RxState {
    WaitPreamble,
    WaitStart1,
    WaitStart2,
    ReadLength,
    ReadLengthChecksum,
    ReadTfi,
    ReadCommandByte,
    /// `index` counts command bytes received so far, opcode included.
    ReadPayload { index: usize },
    ReadPostamble,
}

/// Inbound frame state machine. All counters live on the instance so
/// independent emulated devices never share parser state.
#[derive(Debug, Clone)]
pub struct FrameReceiver {
    state: RxState,
    length: u8,
    checksum: u8,
    opcode: u8,
    payload: Vec<u8>,
}

impl Default for FrameReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameReceiver {
    pub fn new() -> Self {
        Self {
            state: RxState::WaitPreamble,
            length: 0,
            checksum: 0,
            opcode: 0,
            payload: Vec::with_capacity(PN532_MAX_COMMAND_LEN),
        }
    }

    /// True while no frame is in progress.
    pub fn is_idle(&self) -> bool {
        self.state == RxState::WaitPreamble
    }

    /// Drop any partial frame.
    pub fn reset(&mut self) {
        self.state = RxState::WaitPreamble;
        self.payload.clear();
    }

    fn reject(&mut self) -> FrameOutcome {
        self.reset();
        FrameOutcome::FrameRejected
    }

    /// Consume one inbound byte.
    pub fn feed(&mut self, byte: u8) -> FrameOutcome {
        match self.state {
            RxState::WaitPreamble => {
                if byte == PN532_PREAMBLE {
                    self.state = RxState::WaitStart1;
                }
                FrameOutcome::Continue
            }
            RxState::WaitStart1 => {
                self.state = if byte == PN532_START_CODE[0] {
                    RxState::WaitStart2
                } else {
                    RxState::WaitPreamble
                };
                FrameOutcome::Continue
            }
            RxState::WaitStart2 => {
                // A longer run of zeros is still a preamble: the last two
                // bytes seen are 00 00, so keep waiting for FF.
                self.state = match byte {
                    b if b == PN532_START_CODE[1] => RxState::ReadLength,
                    PN532_PREAMBLE => RxState::WaitStart2,
                    _ => RxState::WaitPreamble,
                };
                FrameOutcome::Continue
            }
            RxState::ReadLength => {
                self.length = byte;
                self.state = RxState::ReadLengthChecksum;
                FrameOutcome::Continue
            }
            RxState::ReadLengthChecksum => {
                if !lcs_matches(self.length, byte) {
                    log::trace!("length checksum mismatch (len={:#04x} lcs={:#04x})", self.length, byte);
                    return self.reject();
                }
                // LEN must cover TFI + opcode and the command must fit the buffer.
                let command_len = self.length as usize;
                if command_len < 2 || command_len - 1 > PN532_MAX_COMMAND_LEN {
                    log::trace!("unsupported frame length {}", self.length);
                    return self.reject();
                }
                self.checksum = 0;
                self.payload.clear();
                self.state = RxState::ReadTfi;
                FrameOutcome::Continue
            }
            RxState::ReadTfi => {
                if byte != PN532_TFI_HOST_TO_DEVICE {
                    log::trace!("unexpected TFI {:#04x}", byte);
                    return self.reject();
                }
                self.checksum = byte;
                self.state = RxState::ReadCommandByte;
                FrameOutcome::Continue
            }
            RxState::ReadCommandByte => {
                self.opcode = byte;
                self.checksum = self.checksum.wrapping_add(byte);
                self.state = RxState::ReadPayload { index: 1 };
                FrameOutcome::Continue
            }
            RxState::ReadPayload { index } => {
                if index < self.length as usize - 1 {
                    self.payload.push(byte);
                    self.checksum = self.checksum.wrapping_add(byte);
                    self.state = RxState::ReadPayload { index: index + 1 };
                    return FrameOutcome::Continue;
                }
                // This byte is the DCS
                if !dcs_matches(self.checksum, byte) {
                    log::trace!("data checksum mismatch for opcode {:#04x}", self.opcode);
                    return self.reject();
                }
                self.state = RxState::ReadPostamble;
                FrameOutcome::Continue
            }
            RxState::ReadPostamble => {
                self.state = RxState::WaitPreamble;
                if byte != PN532_POSTAMBLE {
                    log::trace!("invalid postamble {:#04x}", byte);
                    return self.reject();
                }
                let payload = std::mem::take(&mut self.payload);
                FrameOutcome::FrameReady(InboundFrame {
                    opcode: self.opcode,
                    payload,
                })
            }
        }
    }
}
