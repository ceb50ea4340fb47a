#[path = "../common/mod.rs"]
mod common;

use pn532_emu::protocol::{Frame, FrameOutcome, FrameReceiver, InboundFrame};
use proptest::prelude::*;

fn feed_all(rx: &mut FrameReceiver, bytes: &[u8]) -> Vec<InboundFrame> {
    bytes
        .iter()
        .filter_map(|&b| match rx.feed(b) {
            FrameOutcome::FrameReady(f) => Some(f),
            _ => None,
        })
        .collect()
}

#[test]
fn back_to_back_frames() {
    let mut rx = FrameReceiver::new();
    let mut bytes = Frame::encode_command(0x02, &[]).unwrap();
    bytes.extend(Frame::encode_command(0x4A, &[0x01, 0x00]).unwrap());
    let frames = feed_all(&mut rx, &bytes);
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].opcode, 0x02);
    assert_eq!(frames[1].opcode, 0x4A);
    assert_eq!(frames[1].payload, vec![0x01, 0x00]);
    assert!(rx.is_idle());
}

#[test]
fn frame_filling_the_buffer_is_accepted() {
    // 63 parameters + opcode = 64 command bytes, LEN = 0x41
    let params: Vec<u8> = (0..63).collect();
    let bytes = Frame::encode_command(0x40, &params).unwrap();
    assert_eq!(bytes[3], 0x41);
    let mut rx = FrameReceiver::new();
    let frames = feed_all(&mut rx, &bytes);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].opcode, 0x40);
    assert_eq!(frames[0].payload, params);
    assert_eq!(frames[0].command_len(), 64);
    assert!(rx.is_idle());
}

#[test]
fn wrong_tfi_is_dropped() {
    let mut rx = FrameReceiver::new();
    // a device->host frame written back to the device
    let frames = feed_all(&mut rx, &common::fixtures::firmware_version_response());
    assert!(frames.is_empty());
    // the receiver still accepts the next valid frame
    let frames = feed_all(&mut rx, &common::fixtures::get_firmware_version_frame());
    assert_eq!(frames.len(), 1);
}

proptest! {
    // Garbage before a valid start code never yields a frame and never
    // prevents the following frame from being accepted.
    // A trailing lone 0x00 in the garbage merges with the real preamble and
    // must not break synchronisation either.
    #[test]
    fn garbage_prefix_resyncs(
        body in prop::collection::vec(any::<u8>().prop_filter("no preamble", |b| *b != 0x00), 0..64),
        trailing_zero in prop::bool::ANY,
    ) {
        let mut garbage = body;
        if trailing_zero {
            garbage.push(0x00);
        }
        let mut rx = FrameReceiver::new();
        prop_assert!(feed_all(&mut rx, &garbage).is_empty());
        let frames = feed_all(&mut rx, &common::fixtures::get_firmware_version_frame());
        prop_assert_eq!(frames.len(), 1);
        prop_assert_eq!(frames[0].opcode, 0x02);
    }

    // Flipping any bit of the length checksum or data checksum must reject
    // the frame.
    #[test]
    fn corrupted_checksums_rejected(
        params in prop::collection::vec(any::<u8>(), 0..32),
        flip in 1u8..=255,
        which in prop::bool::ANY,
    ) {
        let mut bytes = Frame::encode_command(0x40, &params).unwrap();
        let idx = if which { 4 } else { bytes.len() - 2 };
        bytes[idx] ^= flip;
        let mut rx = FrameReceiver::new();
        prop_assert!(feed_all(&mut rx, &bytes).is_empty());
    }

    // Arbitrary input never panics and every accepted frame has consistent
    // checksums.
    #[test]
    fn random_input_no_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut rx = FrameReceiver::new();
        for f in feed_all(&mut rx, &bytes) {
            prop_assert!(f.command_len() <= 64);
            let again = Frame::encode_command(f.opcode, &f.payload).unwrap();
            let mut check = FrameReceiver::new();
            prop_assert_eq!(feed_all(&mut check, &again), vec![f]);
        }
    }
}
