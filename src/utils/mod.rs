//! Shared utilities

pub mod time;

pub use time::TimeRange;
