// Shared helpers for the integration test crates. Each aggregator pulls this
// in with `#[path]`, so not every crate uses every helper.
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
