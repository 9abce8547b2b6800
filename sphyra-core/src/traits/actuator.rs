//! Actuator driver trait
//!
//! This trait abstracts over the print mechanism electronics: the
//! hammer solenoids, the mechanism step line, and the paper feed.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single command observed on the actuator boundary
///
/// Drivers that record or forward the command stream (tracing, host
/// simulation) use this as their event vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActuatorEvent {
    /// Hammer strike commanded at a column or solenoid index
    Fire(u8),
    /// Mechanism advanced by one discrete time unit
    Step,
    /// Paper advanced by one line
    Linefeed,
}

/// Trait for print actuator drivers
///
/// Commands are fire-and-forget, synchronous, and must be observed in
/// emission order. The mechanism is assumed to accept them reliably;
/// a driver that can fail must surface the failure out-of-band, since
/// a partially completed strike sequence has no safe rollback and the
/// scheduling core performs no recovery.
pub trait ActuatorDriver {
    /// Command a strike at the given position
    fn fire(&mut self, position: u8);

    /// Advance the mechanism by one time unit
    fn step(&mut self);

    /// Advance the paper by one line
    fn linefeed(&mut self);
}
