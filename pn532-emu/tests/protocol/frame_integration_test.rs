#[path = "../common/mod.rs"]
mod common;

use pn532_emu::protocol::{Command, Frame, FrameOutcome, FrameReceiver, Response, Status};
use pn532_emu::Error;

#[test]
fn firmware_frame_matches_fixture() {
    let frame = Frame::encode_command(0x02, &[]).unwrap();
    assert_eq!(frame, common::fixtures::get_firmware_version_frame());
    assert_eq!(
        Command::GetFirmwareVersion.to_frame().unwrap(),
        common::fixtures::get_firmware_version_frame()
    );
}

#[test]
fn firmware_response_fixture_decodes() {
    let frame = Frame::decode_response(&common::fixtures::firmware_version_response()).unwrap();
    assert_eq!(frame.opcode, 0x03);
    match Response::decode(0x02, &frame).unwrap() {
        Response::FirmwareVersion(fw) => assert_eq!(fw.to_bytes(), [0x32, 0x01, 0x06, 0x07]),
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn ack_fixture() {
    assert!(Frame::is_ack(&common::fixtures::ack_frame()));
    assert!(!Frame::is_ack(&common::fixtures::firmware_version_response()));
}

#[test]
fn host_frames_are_accepted_by_receiver() {
    let commands = [
        Command::SamConfiguration,
        Command::InListPassiveTarget {
            max_targets: 1,
            baud_rate: 0,
        },
        Command::InDataExchange {
            target: 1,
            data: common::fixtures::write_params(4, [0x11; 16])[1..].to_vec(),
        },
    ];
    for cmd in commands {
        let mut rx = FrameReceiver::new();
        let mut ready = None;
        for b in cmd.to_frame().unwrap() {
            if let FrameOutcome::FrameReady(f) = rx.feed(b) {
                ready = Some(f);
            }
        }
        let frame = ready.expect("frame accepted");
        assert_eq!(frame.opcode, cmd.command_code());
        assert_eq!(frame.payload, cmd.encode_params());
        assert_eq!(Command::decode(frame.opcode, &frame.payload).unwrap(), cmd);
    }
}

#[test]
fn oversized_command_rejected_by_encoder() {
    let params = vec![0u8; 64];
    assert!(matches!(
        Frame::encode_command(0x40, &params),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn corrupted_response_is_reported() {
    let mut bytes = common::fixtures::firmware_version_response();
    bytes[8] ^= 0x01;
    assert!(matches!(
        Frame::decode_response(&bytes),
        Err(Error::ChecksumMismatch { .. })
    ));

    let mut bytes = common::fixtures::firmware_version_response();
    bytes[4] = 0x00;
    assert!(Frame::decode_response(&bytes).is_err());
}

#[test]
fn exchange_status_response_round_trip() {
    let frame = Response::exchange_status(Status::Error).into_frame();
    assert_eq!(frame.opcode, 0x41);
    assert_eq!(
        Response::decode(0x40, &frame).unwrap(),
        Response::InDataExchange {
            status: Status::Error,
            data: None
        }
    );
}
