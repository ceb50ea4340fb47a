use anyhow::{anyhow, Result};
use pn532_emu::hal::MockPeripherals;
use pn532_emu::protocol::OutboundFrame;
use pn532_emu::test_support;
use pn532_emu::Emulator;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn emulator() -> Result<Emulator<MockPeripherals>> {
    init_logger();
    Ok(test_support::mock_emulator()?)
}

/// Run an exchange that must produce a response.
pub fn request(emu: &mut Emulator<MockPeripherals>, opcode: u8, params: &[u8]) -> Result<OutboundFrame> {
    test_support::exchange(emu, opcode, params)?
        .ok_or_else(|| anyhow!("no response to command 0x{:02X}", opcode))
}

/// Raise then lower a card trigger, sampling on two bus reads.
pub fn tap_card(emu: &mut Emulator<MockPeripherals>, slot: usize) {
    use pn532_emu::hal::BusDevice;
    match slot {
        0 => emu.peripherals_mut().set_card1(true),
        _ => emu.peripherals_mut().set_card2(true),
    }
    emu.read();
    match slot {
        0 => emu.peripherals_mut().set_card1(false),
        _ => emu.peripherals_mut().set_card2(false),
    }
    emu.read();
}

pub fn press_reset(emu: &mut Emulator<MockPeripherals>) {
    use pn532_emu::hal::BusDevice;
    emu.peripherals_mut().set_reset(true);
    emu.read();
    emu.peripherals_mut().set_reset(false);
    emu.read();
}
