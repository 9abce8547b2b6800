//! Actuator drivers
//!
//! This module provides the available print actuator backends:
//!
//! - GPIO solenoid bank: pulses discrete output pins
//! - Trace driver: records commands for host tests and diagnostics

pub mod gpio;
pub mod trace;

pub use gpio::{SolenoidBank, SolenoidBankConfig};
pub use trace::TraceActuator;
