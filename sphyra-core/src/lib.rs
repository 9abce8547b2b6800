//! Board-agnostic control logic for the Sphyra chain printer
//!
//! This crate contains all print logic that does not depend on
//! specific hardware implementations:
//!
//! - Actuator driver trait (hammer fire, mechanism step, paper feed)
//! - Line model and input normalization
//! - Fixed-pitch scheduler (two-bank phase scan)
//! - Proportional scheduler (rotating type chain simulation)
//! - Debug overlay for unsupported characters

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod line;
pub mod printer;
pub mod scheduler;
pub mod traits;
