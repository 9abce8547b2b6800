//! Caller-facing print operations
//!
//! [`Printer`] owns the injected actuator driver and exposes the three
//! print operations: standard (fixed pitch), debug overlay, and
//! proportional. All malformed input is normalized rather than
//! rejected; the only error is an empty line.

pub mod overlay;

use crate::line::Line;
use crate::scheduler::{FixedPitchScheduler, ProportionalScheduler};
use crate::traits::ActuatorDriver;
use overlay::DebugOverlay;

/// Errors returned by print operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PrintError {
    /// The input line was empty
    EmptyLine,
}

/// Chain printer front-end
///
/// The driver is injected at construction and is the only state that
/// outlives a print call.
///
/// ```ignore
/// let mut printer = Printer::new(driver);
/// printer.print_standard("01100101")?;
/// ```
pub struct Printer<D> {
    driver: D,
}

impl<D: ActuatorDriver> Printer<D> {
    /// Create a printer around an actuator driver
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Borrow the driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Release the driver
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Print a line at fixed pitch, ending with a line feed
    ///
    /// The input is normalized first: truncated to eight characters,
    /// unsupported characters replaced with blanks.
    pub fn print_standard(&mut self, line: &str) -> Result<(), PrintError> {
        if line.is_empty() {
            return Err(PrintError::EmptyLine);
        }
        let line = Line::normalize(line);
        FixedPitchScheduler::new(&line).run(&mut self.driver);
        Ok(())
    }

    /// Overstrike unsupported characters so they stand out on paper
    ///
    /// Renders two fixed-pitch passes, each with its own line feed:
    /// the normalized line with `1` forced into every unsupported
    /// column, then a line holding `0` at those columns alone. The
    /// overstruck columns come out as solid blocks instead of valid
    /// symbols.
    pub fn print_debug(&mut self, line: &str) -> Result<(), PrintError> {
        if line.is_empty() {
            return Err(PrintError::EmptyLine);
        }
        let overlay = DebugOverlay::build(line);
        FixedPitchScheduler::new(&overlay.first_pass).run(&mut self.driver);
        FixedPitchScheduler::new(&overlay.second_pass).run(&mut self.driver);
        Ok(())
    }

    /// Print a line at proportional spacing
    ///
    /// Schedules against the rotating type chain; emits no terminal
    /// line feed.
    pub fn print_proportional(&mut self, line: &str) -> Result<(), PrintError> {
        if line.is_empty() {
            return Err(PrintError::EmptyLine);
        }
        let line = Line::normalize(line);
        ProportionalScheduler::new(&line).run(&mut self.driver);
        Ok(())
    }
}
