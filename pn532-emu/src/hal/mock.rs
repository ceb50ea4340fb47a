// pn532-emu/src/hal/mock.rs

use std::time::Duration;

use crate::hal::traits::{Peripherals, TriggerLevels};
use crate::types::Level;

/// Mock peripherals for tests. Records scheduled delays and IRQ levels and
/// returns whatever trigger levels the test has set.
#[derive(Debug, Default)]
pub struct MockPeripherals {
    pub triggers: TriggerLevels,
    pub scheduled: Vec<Duration>,
    pub irq_history: Vec<Level>,
    /// Number of times the triggers were sampled
    pub samples: usize,
}

impl MockPeripherals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_card1(&mut self, level: bool) {
        self.triggers.card1 = level;
    }

    pub fn set_card2(&mut self, level: bool) {
        self.triggers.card2 = level;
    }

    pub fn set_reset(&mut self, level: bool) {
        self.triggers.reset = level;
    }

    /// Last level driven on the IRQ line, if any.
    pub fn irq(&self) -> Option<Level> {
        self.irq_history.last().copied()
    }

    /// Number of one-shot delays armed so far.
    pub fn pending_delays(&self) -> usize {
        self.scheduled.len()
    }
}

impl Peripherals for MockPeripherals {
    fn sample_triggers(&mut self) -> TriggerLevels {
        self.samples += 1;
        self.triggers
    }

    fn schedule_delay(&mut self, delay: Duration) {
        self.scheduled.push(delay);
    }

    fn set_irq(&mut self, level: Level) {
        self.irq_history.push(level);
    }
}
