// pn532-emu/src/hal/tokio_timer.rs

//! Tokio-backed peripherals: the processing delay is a real timer.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::hal::traits::{Peripherals, TriggerLevels};
use crate::types::Level;

/// Receives one notification per expired processing delay. Forward each to
/// `Emulator::on_delay_elapsed`.
#[derive(Debug)]
pub struct DelayEvents {
    rx: mpsc::UnboundedReceiver<()>,
}

impl DelayEvents {
    /// Wait for the next expired delay. `None` once the peripherals are dropped.
    pub async fn next(&mut self) -> Option<()> {
        self.rx.recv().await
    }
}

#[derive(Debug)]
pub struct TokioPeripherals {
    pub triggers: TriggerLevels,
    irq: Level,
    tx: mpsc::UnboundedSender<()>,
}

impl TokioPeripherals {
    pub fn new() -> (Self, DelayEvents) {
        let (tx, rx) = mpsc::unbounded_channel();
        let this = Self {
            triggers: TriggerLevels::default(),
            irq: Level::High,
            tx,
        };
        (this, DelayEvents { rx })
    }

    pub fn irq(&self) -> Level {
        self.irq
    }
}

impl Peripherals for TokioPeripherals {
    fn sample_triggers(&mut self) -> TriggerLevels {
        self.triggers
    }

    fn schedule_delay(&mut self, delay: Duration) {
        let tx = self.tx.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(());
                });
            }
            Err(_) => {
                // No runtime to run the timer on; expire immediately so the
                // command still completes.
                log::warn!("no tokio runtime, processing delay expires immediately");
                let _ = tx.send(());
            }
        }
    }

    fn set_irq(&mut self, level: Level) {
        self.irq = level;
    }
}
