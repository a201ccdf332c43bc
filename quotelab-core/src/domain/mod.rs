//! Domain types shared across the pipeline.

pub mod interval;
pub mod quote;

pub use interval::TimeInterval;
pub use quote::Quote;
