// pn532-emu/src/protocol/transmitter.rs

//! Byte-at-a-time serializer for the device->host direction.

use crate::constants::{
    PN532_ACK_FRAME, PN532_POSTAMBLE, PN532_PREAMBLE, PN532_READY, PN532_START_CODE,
    PN532_TFI_DEVICE_TO_HOST,
};
use crate::protocol::checksum::{lcs, sum};
use crate::protocol::frame::OutboundFrame;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum TxState {
    Idle,
    Ack { index: usize },
    Response { frame: OutboundFrame, index: usize },
}

/// Serializes either the ACK frame or one response frame, one byte per
/// bus read. A new sequence can only be queued once the previous one has
/// been fully drained.
#[derive(Debug, Clone)]
pub struct ResponseTransmitter {
    state: TxState,
}

impl Default for ResponseTransmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseTransmitter {
    pub fn new() -> Self {
        Self {
            state: TxState::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == TxState::Idle
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.is_idle() {
            Ok(())
        } else {
            Err(Error::TransmitterBusy)
        }
    }

    /// Start sending the 6-byte ACK frame.
    pub fn queue_ack(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.state = TxState::Ack { index: 0 };
        Ok(())
    }

    /// Start sending a response frame.
    pub fn queue_response(&mut self, frame: OutboundFrame) -> Result<()> {
        self.ensure_idle()?;
        self.state = TxState::Response { frame, index: 0 };
        Ok(())
    }

    /// Abandon whatever is being sent.
    pub fn clear(&mut self) {
        self.state = TxState::Idle;
    }

    /// Produce the next outbound byte. Returns the READY byte when idle.
    pub fn next_byte(&mut self) -> u8 {
        match &mut self.state {
            TxState::Idle => PN532_READY,
            TxState::Ack { index } => {
                let byte = PN532_ACK_FRAME[*index];
                *index += 1;
                if *index >= PN532_ACK_FRAME.len() {
                    self.state = TxState::Idle;
                }
                byte
            }
            TxState::Response { frame, index } => {
                let byte = response_byte(frame, *index);
                *index += 1;
                if *index >= frame.wire_len() {
                    self.state = TxState::Idle;
                }
                byte
            }
        }
    }
}

/// Byte at position `index` of the serialized response frame.
fn response_byte(frame: &OutboundFrame, index: usize) -> u8 {
    let n = frame.payload.len();
    match index {
        0 => PN532_PREAMBLE,
        1 => PN532_START_CODE[0],
        2 => PN532_START_CODE[1],
        3 => frame.len_field(),
        4 => lcs(frame.len_field()),
        5 => PN532_TFI_DEVICE_TO_HOST,
        6 => frame.opcode,
        i if i < 7 + n => frame.payload[i - 7],
        i if i == 7 + n => {
            let total = PN532_TFI_DEVICE_TO_HOST
                .wrapping_add(frame.opcode)
                .wrapping_add(sum(&frame.payload));
            0u8.wrapping_sub(total)
        }
        _ => PN532_POSTAMBLE,
    }
}
