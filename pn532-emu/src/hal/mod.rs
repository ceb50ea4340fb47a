// pn532-emu/src/hal/mod.rs

pub mod mock;
pub mod traits;
#[cfg(feature = "async")]
pub mod tokio_timer;

pub use mock::MockPeripherals;
pub use traits::{BusDevice, Peripherals, TriggerLevels};
#[cfg(feature = "async")]
pub use tokio_timer::{DelayEvents, TokioPeripherals};
