#[path = "../common/mod.rs"]
mod common;

use anyhow::Result;
use common::helpers::{emulator, press_reset, request, tap_card};
use pn532_emu::hal::BusDevice;
use proptest::prelude::*;

#[test]
fn second_card_replaces_first() -> Result<()> {
    let mut emu = emulator()?;
    tap_card(&mut emu, 0);
    tap_card(&mut emu, 1);
    assert_eq!(emu.cards().active_slot(), Some(1));
    assert_eq!(emu.cards().present_count(), 1);
    assert!(!emu.card(0).unwrap().is_present());
    Ok(())
}

#[test]
fn reset_clears_field() -> Result<()> {
    let mut emu = emulator()?;
    tap_card(&mut emu, 0);
    assert_eq!(request(&mut emu, 0x4A, &[0x01, 0x00])?.payload[0], 0x01);
    press_reset(&mut emu);
    assert!(emu.active_card().is_none());
    assert_eq!(request(&mut emu, 0x4A, &[0x01, 0x00])?.payload, vec![0x00]);
    Ok(())
}

#[test]
fn held_trigger_does_not_reinsert_after_reset() -> Result<()> {
    let mut emu = emulator()?;
    emu.peripherals_mut().set_card1(true);
    emu.read();
    press_reset(&mut emu);
    emu.read();
    // card 1 input never went low, so there was no new edge
    assert!(emu.active_card().is_none());
    Ok(())
}

#[test]
fn session_survives_card_swap() -> Result<()> {
    let mut emu = emulator()?;
    tap_card(&mut emu, 0);
    let params = common::fixtures::auth_params(0x60, 8, [0xFF; 6], &common::fixtures::CARD1_UID);
    request(&mut emu, 0x40, &params)?;
    tap_card(&mut emu, 1);
    // card 2 has the same default keys and the session still points at sector 2
    let read = request(&mut emu, 0x40, &common::fixtures::read_params(9))?;
    assert_eq!(read.payload[0], 0x00);
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum Input {
    Card1(bool),
    Card2(bool),
    Reset(bool),
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        any::<bool>().prop_map(Input::Card1),
        any::<bool>().prop_map(Input::Card2),
        any::<bool>().prop_map(Input::Reset),
    ]
}

proptest! {
    // Whatever the operator does, at most one card is present and the
    // active slot points at it.
    #[test]
    fn at_most_one_card_present(inputs in prop::collection::vec(input(), 0..64)) {
        let mut emu = emulator().unwrap();
        for i in inputs {
            match i {
                Input::Card1(v) => emu.peripherals_mut().set_card1(v),
                Input::Card2(v) => emu.peripherals_mut().set_card2(v),
                Input::Reset(v) => emu.peripherals_mut().set_reset(v),
            }
            emu.read();

            let cards = emu.cards();
            prop_assert!(cards.present_count() <= 1);
            match cards.active_slot() {
                Some(slot) => prop_assert!(cards.card(slot).unwrap().is_present()),
                None => prop_assert_eq!(cards.present_count(), 0),
            }
        }
    }

    // After a reset edge the next discovery always finds nothing.
    #[test]
    fn reset_always_empties_field(placed in prop::option::of(0usize..2)) {
        let mut emu = emulator().unwrap();
        if let Some(slot) = placed {
            tap_card(&mut emu, slot);
        }
        press_reset(&mut emu);
        let frame = request(&mut emu, 0x4A, &[0x01, 0x00]).unwrap();
        prop_assert_eq!(frame.payload, vec![0x00]);
    }
}
