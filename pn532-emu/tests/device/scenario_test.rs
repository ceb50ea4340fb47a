#[path = "../common/mod.rs"]
mod common;

use anyhow::Result;
use common::fixtures::{auth_params, inlist_params, read_params, write_params};
use common::fixtures::{CARD1_UID, CARD2_UID, DEFAULT_KEY};
use common::helpers::{emulator, request, tap_card};
use pn532_emu::test_support;
use pn532_emu::{KeyKind, Level, PhaseKind};

#[test]
fn firmware_version_round_trip() -> Result<()> {
    let mut emu = emulator()?;
    let frame = request(&mut emu, 0x02, &[])?;
    assert_eq!(frame.opcode, 0x03);
    assert_eq!(frame.payload, vec![0x32, 0x01, 0x06, 0x07]);
    Ok(())
}

#[test]
fn sam_configuration_ok() -> Result<()> {
    let mut emu = emulator()?;
    let frame = request(&mut emu, 0x14, &common::fixtures::sam_params())?;
    assert_eq!(frame.opcode, 0x15);
    assert_eq!(frame.payload, vec![0x00]);
    Ok(())
}

#[test]
fn inlist_after_card1_trigger() -> Result<()> {
    let mut emu = emulator()?;
    tap_card(&mut emu, 0);
    let frame = request(&mut emu, 0x4A, &inlist_params())?;
    assert_eq!(frame.opcode, 0x4B);
    assert_eq!(
        frame.payload,
        hex::decode("0101000404DEADBEEF08")?
    );
    Ok(())
}

#[test]
fn inlist_reports_card2_uid() -> Result<()> {
    let mut emu = emulator()?;
    tap_card(&mut emu, 1);
    let frame = request(&mut emu, 0x4A, &inlist_params())?;
    assert_eq!(&frame.payload[5..9], &CARD2_UID);
    Ok(())
}

#[test]
fn inlist_without_card_finds_nothing() -> Result<()> {
    let mut emu = emulator()?;
    let frame = request(&mut emu, 0x4A, &inlist_params())?;
    assert_eq!(frame.payload, vec![0x00]);
    Ok(())
}

#[test]
fn write_without_auth_leaves_memory() -> Result<()> {
    let mut emu = emulator()?;
    tap_card(&mut emu, 0);
    let before = emu.card(0).unwrap().memory().read_block(4)?;

    let frame = request(&mut emu, 0x40, &write_params(4, [0xAB; 16]))?;
    assert_eq!(frame.opcode, 0x41);
    assert_eq!(frame.payload, vec![0x01]);
    assert_eq!(emu.card(0).unwrap().memory().read_block(4)?, before);
    Ok(())
}

#[test]
fn auth_then_read_manufacturer_block() -> Result<()> {
    let mut emu = emulator()?;
    tap_card(&mut emu, 0);

    let auth = request(&mut emu, 0x40, &auth_params(0x60, 0, DEFAULT_KEY, &CARD1_UID))?;
    assert_eq!(auth.payload, vec![0x00]);
    assert_eq!(emu.auth_session().sector(), Some(0));
    assert_eq!(emu.auth_session().key_kind(), Some(KeyKind::A));

    let read = request(&mut emu, 0x40, &read_params(0))?;
    assert_eq!(read.payload.len(), 17);
    assert_eq!(read.payload[0], 0x00);
    assert_eq!(&read.payload[1..5], &CARD1_UID);
    Ok(())
}

#[test]
fn write_then_read_back() -> Result<()> {
    let mut emu = emulator()?;
    tap_card(&mut emu, 0);
    request(&mut emu, 0x40, &auth_params(0x61, 6, DEFAULT_KEY, &CARD1_UID))?;

    let data: [u8; 16] = core::array::from_fn(|i| i as u8);
    assert_eq!(request(&mut emu, 0x40, &write_params(5, data))?.payload, vec![0x00]);
    let read = request(&mut emu, 0x40, &read_params(5))?;
    assert_eq!(&read.payload[1..], &data);
    Ok(())
}

#[test]
fn changed_key_takes_effect() -> Result<()> {
    let mut emu = emulator()?;
    tap_card(&mut emu, 0);
    request(&mut emu, 0x40, &auth_params(0x60, 4, DEFAULT_KEY, &CARD1_UID))?;

    // new trailer for sector 1: key A 11.., default access bits, key B 22..
    let mut trailer = [0x11u8; 16];
    trailer[6..10].copy_from_slice(&[0xFF, 0x07, 0x80, 0x69]);
    trailer[10..].copy_from_slice(&[0x22; 6]);
    assert_eq!(request(&mut emu, 0x40, &write_params(7, trailer))?.payload, vec![0x00]);

    let old = request(&mut emu, 0x40, &auth_params(0x60, 4, DEFAULT_KEY, &CARD1_UID))?;
    assert_eq!(old.payload, vec![0x01]);
    let new_a = request(&mut emu, 0x40, &auth_params(0x60, 4, [0x11; 6], &CARD1_UID))?;
    assert_eq!(new_a.payload, vec![0x00]);
    let new_b = request(&mut emu, 0x40, &auth_params(0x61, 4, [0x22; 6], &CARD1_UID))?;
    assert_eq!(new_b.payload, vec![0x00]);
    Ok(())
}

#[test]
fn failed_auth_moves_session_sector() -> Result<()> {
    let mut emu = emulator()?;
    tap_card(&mut emu, 0);
    request(&mut emu, 0x40, &auth_params(0x60, 0, DEFAULT_KEY, &CARD1_UID))?;
    let bad = request(&mut emu, 0x40, &auth_params(0x60, 12, [0x00; 6], &CARD1_UID))?;
    assert_eq!(bad.payload, vec![0x01]);
    assert_eq!(emu.auth_session().sector(), Some(3));

    assert_eq!(request(&mut emu, 0x40, &read_params(0))?.payload, vec![0x01]);
    assert_eq!(request(&mut emu, 0x40, &read_params(12))?.payload[0], 0x00);
    Ok(())
}

#[test]
fn unsupported_sub_command_is_status_error() -> Result<()> {
    let mut emu = emulator()?;
    tap_card(&mut emu, 0);
    let frame = request(&mut emu, 0x40, &[0x01, 0xC0, 0x04])?;
    assert_eq!(frame.payload, vec![0x01]);
    Ok(())
}

#[test]
fn exchange_without_card_is_status_error() -> Result<()> {
    let mut emu = emulator()?;
    let frame = request(&mut emu, 0x40, &read_params(0))?;
    assert_eq!(frame.payload, vec![0x01]);
    Ok(())
}

#[test]
fn unsupported_command_is_silent() -> Result<()> {
    let mut emu = emulator()?;
    // InRelease is not implemented by the emulated firmware
    assert!(test_support::exchange(&mut emu, 0x52, &[0x00])?.is_none());
    assert_eq!(emu.phase().kind(), PhaseKind::Idle);
    assert_eq!(emu.peripherals().irq(), Some(Level::High));
    assert_eq!(test_support::read_bytes(&mut emu, 3), vec![0x01; 3]);

    // the device is usable again straight away
    assert_eq!(request(&mut emu, 0x02, &[])?.opcode, 0x03);
    Ok(())
}

#[test]
fn irq_sequence_for_one_exchange() -> Result<()> {
    let mut emu = emulator()?;
    request(&mut emu, 0x02, &[])?;
    assert_eq!(
        emu.peripherals().irq_history,
        vec![Level::High, Level::High, Level::Low, Level::High]
    );
    assert_eq!(emu.peripherals().pending_delays(), 1);
    Ok(())
}

#[test]
fn corrupted_frame_gets_no_ack() -> Result<()> {
    let mut emu = emulator()?;
    let mut bytes = common::fixtures::get_firmware_version_frame();
    bytes[7] ^= 0xFF;
    test_support::write_all(&mut emu, &bytes);
    assert_eq!(emu.phase().kind(), PhaseKind::Idle);
    assert_eq!(emu.peripherals().pending_delays(), 0);
    assert_eq!(test_support::read_bytes(&mut emu, 6), vec![0x01; 6]);
    Ok(())
}

#[test]
fn truncated_key_still_moves_session() -> Result<()> {
    let mut emu = emulator()?;
    tap_card(&mut emu, 0);
    // AuthA on block 8 with a single key byte
    let auth = request(&mut emu, 0x40, &[0x01, 0x60, 0x08, 0xFF])?;
    assert_eq!(auth.payload, vec![0x01]);
    assert_eq!(emu.auth_session().sector(), Some(2));
    assert_eq!(request(&mut emu, 0x40, &read_params(8))?.payload[0], 0x00);
    Ok(())
}
