// pn532-emu/src/device/triggers.rs

use crate::hal::TriggerLevels;

/// Inputs that went from low to high since the previous sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerEdges {
    pub card1: bool,
    pub card2: bool,
    pub reset: bool,
}

impl TriggerEdges {
    pub fn card(&self, slot: usize) -> bool {
        match slot {
            0 => self.card1,
            1 => self.card2,
            _ => false,
        }
    }

    pub fn any(&self) -> bool {
        self.card1 || self.card2 || self.reset
    }
}

/// Rising-edge detector over the sampled operator inputs. All inputs are
/// assumed low before the first sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    last: TriggerLevels,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, now: TriggerLevels) -> TriggerEdges {
        let edges = TriggerEdges {
            card1: now.card1 && !self.last.card1,
            card2: now.card2 && !self.last.card2,
            reset: now.reset && !self.last.reset,
        };
        self.last = now;
        edges
    }
}
