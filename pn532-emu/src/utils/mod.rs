//! Utilities for pn532-emu: small, reusable helpers used across the crate.

pub mod hex;

pub use hex::*;
