//! Chart providers.
//!
//! A provider takes an already-resolved request (provider symbol, interval,
//! window) and returns the upstream chart payload. Symbol and range mapping
//! happen in the resolver, not in providers.

mod traits;

pub mod yahoo;

pub use traits::ChartProvider;
