//! Actuation schedulers
//!
//! Converts a normalized line into the command stream for the actuator
//! driver. Two disciplines:
//!
//! - [`fixed`]: fixed-pitch rendering, two hammer banks alternating
//!   through an eight-slot scan cycle, terminated by a line feed
//! - [`proportional`]: variable-spacing rendering matched against a
//!   rotating type chain, no line feed

pub mod chain;
pub mod fixed;
pub mod proportional;

pub use chain::{Chain, CHAIN, CHAIN_SLOTS};
pub use fixed::{FixedPitchScheduler, ScanSlot, BANK_COLUMNS, SCAN_CYCLE};
pub use proportional::{ProportionalScheduler, CELL_WIDTH};
