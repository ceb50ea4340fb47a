// pn532-emu/src/hal/traits.rs

use std::time::Duration;

use crate::types::Level;

/// Levels of the operator inputs at the moment they were sampled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerLevels {
    pub card1: bool,
    pub card2: bool,
    pub reset: bool,
}

/// The target side of the byte bus. The bus itself (addressing, clock
/// stretching) lives outside the emulator and calls these per event.
pub trait BusDevice {
    /// Start of a transaction. Returns true to acknowledge.
    fn connect(&mut self, address: u8, read: bool) -> bool;

    /// One byte written by the host. Returns true to acknowledge.
    fn write(&mut self, byte: u8) -> bool;

    /// One byte requested by the host.
    fn read(&mut self) -> u8;

    /// End of a transaction.
    fn disconnect(&mut self) {}
}

/// Everything the emulator touches besides the bus: sampled operator inputs,
/// a one-shot timer and the IRQ output line.
pub trait Peripherals {
    /// Sample the card/reset inputs. Called once per bus read.
    fn sample_triggers(&mut self) -> TriggerLevels;

    /// Arm a one-shot timer. When it expires the owner must call
    /// `Emulator::on_delay_elapsed` exactly once.
    fn schedule_delay(&mut self, delay: Duration);

    /// Drive the IRQ line (active low).
    fn set_irq(&mut self, level: Level);
}
