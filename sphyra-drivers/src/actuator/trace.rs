//! Trace actuator
//!
//! Records the command stream instead of driving hardware. Useful for
//! host-side tests, bring-up diagnostics, and inspecting scheduler
//! output.
//!
//! ```ignore
//! let mut printer = Printer::new(TraceActuator::<64>::new());
//! printer.print_standard("01100101")?;
//! for event in printer.driver().events() {
//!     // replay or assert on the command stream
//! }
//! ```

use heapless::Vec;

use sphyra_core::traits::{ActuatorDriver, ActuatorEvent};

/// Actuator driver that records every command in order
///
/// `CAP` bounds the trace; commands beyond it are counted as dropped
/// rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TraceActuator<const CAP: usize> {
    events: Vec<ActuatorEvent, CAP>,
    dropped: usize,
}

impl<const CAP: usize> TraceActuator<CAP> {
    /// Create an empty trace
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            dropped: 0,
        }
    }

    /// Recorded commands in emission order
    pub fn events(&self) -> &[ActuatorEvent] {
        &self.events
    }

    /// Commands that did not fit in the trace
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Number of recorded fire commands
    pub fn fire_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ActuatorEvent::Fire(_)))
            .count()
    }

    /// Number of recorded step commands
    pub fn step_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ActuatorEvent::Step))
            .count()
    }

    /// Number of recorded line feeds
    pub fn linefeed_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ActuatorEvent::Linefeed))
            .count()
    }

    /// Discard the recorded trace
    pub fn clear(&mut self) {
        self.events.clear();
        self.dropped = 0;
    }

    fn record(&mut self, event: ActuatorEvent) {
        if self.events.push(event).is_err() {
            self.dropped += 1;
        }
    }
}

impl<const CAP: usize> Default for TraceActuator<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> ActuatorDriver for TraceActuator<CAP> {
    fn fire(&mut self, position: u8) {
        self.record(ActuatorEvent::Fire(position));
    }

    fn step(&mut self) {
        self.record(ActuatorEvent::Step);
    }

    fn linefeed(&mut self) {
        self.record(ActuatorEvent::Linefeed);
    }
}

#[cfg(test)]
mod tests {
    use sphyra_core::printer::Printer;
    use sphyra_core::traits::ActuatorEvent::{Fire, Linefeed, Step};

    use super::*;

    #[test]
    fn test_trace_preserves_order() {
        let mut trace = TraceActuator::<8>::new();
        trace.fire(2);
        trace.step();
        trace.linefeed();

        assert_eq!(trace.events(), &[Fire(2), Step, Linefeed]);
        assert_eq!(trace.fire_count(), 1);
        assert_eq!(trace.step_count(), 1);
        assert_eq!(trace.linefeed_count(), 1);
    }

    #[test]
    fn test_overflow_is_counted() {
        let mut trace = TraceActuator::<2>::new();
        trace.step();
        trace.step();
        trace.step();

        assert_eq!(trace.events().len(), 2);
        assert_eq!(trace.dropped(), 1);

        trace.clear();
        assert!(trace.events().is_empty());
        assert_eq!(trace.dropped(), 0);
    }

    #[test]
    fn test_full_standard_print_trace() {
        let mut printer = Printer::new(TraceActuator::<64>::new());
        printer.print_standard("01100101").unwrap();

        let trace = printer.driver();
        assert_eq!(trace.fire_count(), 8);
        assert_eq!(trace.step_count(), 8);
        assert_eq!(trace.linefeed_count(), 1);
        assert_eq!(trace.dropped(), 0);

        // The scan ends with its line feed
        assert_eq!(trace.events().last(), Some(&Linefeed));
    }

    #[test]
    fn test_full_debug_print_trace() {
        let mut printer = Printer::new(TraceActuator::<64>::new());
        printer.print_debug("0s11a444fkjhsgew").unwrap();

        let trace = printer.driver();
        assert_eq!(trace.fire_count(), 13);
        assert_eq!(trace.linefeed_count(), 2);
    }

    #[test]
    fn test_full_proportional_print_trace() {
        let mut printer = Printer::new(TraceActuator::<64>::new());
        printer.print_proportional("11111111").unwrap();

        let trace = printer.driver();
        assert_eq!(trace.fire_count(), 8);
        assert_eq!(trace.linefeed_count(), 0);
    }
}
