// pn532-emu/src/protocol/frame.rs

use crate::constants::{
    PN532_ACK_FRAME, PN532_FRAME_OVERHEAD, PN532_MAX_COMMAND_LEN, PN532_POSTAMBLE,
    PN532_PREAMBLE, PN532_START_CODE, PN532_TFI_DEVICE_TO_HOST, PN532_TFI_HOST_TO_DEVICE,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// A command accepted by the frame receiver. `payload` excludes the opcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundFrame {
    pub opcode: u8,
    pub payload: Vec<u8>,
}

impl InboundFrame {
    /// Command bytes carried by the frame (opcode + payload), i.e. LEN - 1.
    pub fn command_len(&self) -> usize {
        self.payload.len() + 1
    }
}

/// A response queued for the transmitter. `opcode` is the request opcode + 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundFrame {
    pub opcode: u8,
    pub payload: Vec<u8>,
}

impl OutboundFrame {
    pub fn new(opcode: u8, payload: Vec<u8>) -> Self {
        Self { opcode, payload }
    }

    /// Value of the LEN byte: TFI + opcode + payload.
    pub fn len_field(&self) -> u8 {
        (self.payload.len() + 2) as u8
    }

    /// Number of bytes the frame occupies on the wire.
    pub fn wire_len(&self) -> usize {
        PN532_FRAME_OVERHEAD + self.len_field() as usize
    }
}

/// Whole-frame helpers for the host side of the link. The emulator itself
/// works byte by byte; these build the frames a host driver would write
/// and check the frames it would read back.
///
/// Format: [Preamble] [00 FF] [LEN] [LCS] [TFI] [Data(LEN-1)] [DCS] [Postamble]
pub struct Frame;

impl Frame {
    /// Encode a host->device command frame.
    pub fn encode_command(opcode: u8, params: &[u8]) -> Result<Vec<u8>> {
        if params.len() + 1 > PN532_MAX_COMMAND_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_MAX_COMMAND_LEN - 1,
                actual: params.len(),
            });
        }

        let mut body = Vec::with_capacity(params.len() + 2);
        body.push(PN532_TFI_HOST_TO_DEVICE);
        body.push(opcode);
        body.extend_from_slice(params);

        let len = body.len() as u8;
        let mut out = Vec::with_capacity(PN532_FRAME_OVERHEAD + body.len());
        out.push(PN532_PREAMBLE);
        out.extend_from_slice(&PN532_START_CODE);
        out.push(len);
        out.push(lcs(len));
        out.extend_from_slice(&body);
        out.push(dcs(&body));
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }

    /// Decode a device->host response frame.
    pub fn decode_response(frame: &[u8]) -> Result<OutboundFrame> {
        // Smallest response: overhead + TFI + opcode
        let min = PN532_FRAME_OVERHEAD + 2;
        if frame.len() < min {
            return Err(Error::InvalidLength {
                expected: min,
                actual: frame.len(),
            });
        }

        if frame[0] != PN532_PREAMBLE || frame[1..3] != PN532_START_CODE {
            return Err(Error::FrameFormat("invalid start code".into()));
        }

        let len = frame[3];
        let lcs_expected = lcs(len);
        if frame[4] != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: frame[4],
            });
        }

        let required_len = PN532_FRAME_OVERHEAD + len as usize;
        if frame.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let body = &frame[5..5 + len as usize];
        if body[0] != PN532_TFI_DEVICE_TO_HOST {
            return Err(Error::FrameFormat(format!("unexpected TFI {:#04x}", body[0])));
        }

        let dcs_actual = frame[5 + len as usize];
        let dcs_expected = dcs(body);
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        if frame[required_len - 1] != PN532_POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        Ok(OutboundFrame::new(body[1], body[2..].to_vec()))
    }

    /// True when `bytes` is exactly the ACK frame.
    pub fn is_ack(bytes: &[u8]) -> bool {
        bytes == PN532_ACK_FRAME
    }
}
