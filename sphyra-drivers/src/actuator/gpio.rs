//! GPIO solenoid bank
//!
//! Drives the hammer solenoids, the mechanism step line, and the
//! paper feed through discrete output pins. Each command is a single
//! active-high pulse of configurable width.
//!
//! # Usage
//!
//! ```ignore
//! let bank = SolenoidBank::new(hammers, step_pin, feed_pin, delay,
//!     SolenoidBankConfig::default());
//! let mut printer = Printer::new(bank);
//! printer.print_standard("01100101")?;
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use sphyra_core::line::MAX_COLUMNS;
use sphyra_core::traits::ActuatorDriver;

/// Pulse widths for the solenoid bank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SolenoidBankConfig {
    /// Hammer strike pulse width in microseconds
    pub strike_pulse_us: u32,
    /// Step line pulse width in microseconds
    pub step_pulse_us: u32,
    /// Paper feed pulse width in microseconds
    pub feed_pulse_us: u32,
}

impl Default for SolenoidBankConfig {
    fn default() -> Self {
        Self {
            strike_pulse_us: 800,
            step_pulse_us: 200,
            feed_pulse_us: 1500,
        }
    }
}

/// Solenoid bank actuator
///
/// Owns one output pin per hammer column plus the step and feed
/// lines. Pin errors are ignored: the actuator boundary is
/// fire-and-forget and the bank has no feedback channel.
pub struct SolenoidBank<P, D> {
    hammers: [P; MAX_COLUMNS],
    step_pin: P,
    feed_pin: P,
    delay: D,
    config: SolenoidBankConfig,
}

impl<P: OutputPin, D: DelayNs> SolenoidBank<P, D> {
    /// Create a bank from its pins
    pub fn new(
        hammers: [P; MAX_COLUMNS],
        step_pin: P,
        feed_pin: P,
        delay: D,
        config: SolenoidBankConfig,
    ) -> Self {
        Self {
            hammers,
            step_pin,
            feed_pin,
            delay,
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &SolenoidBankConfig {
        &self.config
    }

    fn pulse(pin: &mut P, delay: &mut D, width_us: u32) {
        let _ = pin.set_high();
        delay.delay_us(width_us);
        let _ = pin.set_low();
    }
}

impl<P: OutputPin, D: DelayNs> ActuatorDriver for SolenoidBank<P, D> {
    fn fire(&mut self, position: u8) {
        // Positions beyond the bank are not wired
        if let Some(pin) = self.hammers.get_mut(position as usize) {
            Self::pulse(pin, &mut self.delay, self.config.strike_pulse_us);
        }
    }

    fn step(&mut self) {
        Self::pulse(
            &mut self.step_pin,
            &mut self.delay,
            self.config.step_pulse_us,
        );
    }

    fn linefeed(&mut self) {
        Self::pulse(
            &mut self.feed_pin,
            &mut self.delay,
            self.config.feed_pulse_us,
        );
    }
}
