//! Actuator driver implementations
//!
//! This crate provides concrete implementations of the actuator trait
//! defined in sphyra-core:
//!
//! - GPIO solenoid bank (embedded-hal output pins)
//! - Trace driver recording the command stream

#![no_std]
#![deny(unsafe_code)]

pub mod actuator;
