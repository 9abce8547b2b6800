//! Proportional scheduler
//!
//! Variable-spacing rendering. The line expands into a layout of blank
//! and payload slots, and the rotating type chain is matched against
//! it: a solenoid fires only when the symbol its slot requires passes
//! directly underneath. Narrow symbol pairs (a `1` following a `1`)
//! sit closer together than any other pair, which is what makes the
//! spacing proportional.

use heapless::Vec;

use super::chain::{Chain, CHAIN_SLOTS};
use crate::line::{Line, Symbol};
use crate::traits::ActuatorDriver;

/// Layout slots per addressed solenoid cell
pub const CELL_WIDTH: usize = 3;

/// Build the variable-spacing layout for a line
///
/// Every line symbol becomes one payload slot. The first payload is
/// preceded by one blank slot; a later payload by one blank when the
/// previous and current symbols are both `One`, otherwise by two.
/// Blank payload slots occupy space but never fire. Worst case is 23
/// slots for a full eight-column line, so one chain revolution always
/// covers the layout.
pub(crate) fn build_layout(line: &Line) -> Vec<Symbol, CHAIN_SLOTS> {
    let mut layout = Vec::new();
    let mut prev: Option<Symbol> = None;
    for symbol in line.symbols() {
        let gap = match prev {
            None => 1,
            Some(Symbol::One) if symbol == Symbol::One => 1,
            Some(_) => 2,
        };
        for _ in 0..gap {
            let _ = layout.push(Symbol::Blank);
        }
        let _ = layout.push(symbol);
        prev = Some(symbol);
    }
    layout
}

/// Proportional scheduler state for one print call
///
/// Constructed fresh per line and consumed by [`run`](Self::run).
pub struct ProportionalScheduler {
    layout: Vec<Symbol, CHAIN_SLOTS>,
    chain: Chain,
    /// Bitmask of layout slots already fired
    fired: u32,
    /// Strikes still owed
    remaining: usize,
}

impl ProportionalScheduler {
    /// Derive the layout for a line, with the chain at its reference
    /// position
    pub fn new(line: &Line) -> Self {
        Self {
            layout: build_layout(line),
            chain: Chain::new(),
            fired: 0,
            remaining: line.required_actuations(),
        }
    }

    /// Layout width of this call in slots
    pub fn layout_len(&self) -> usize {
        self.layout.len()
    }

    /// Run the chain match to completion
    ///
    /// Each round scans the layout in ascending slot order and fires
    /// every unfired striking slot whose symbol is aligned under it,
    /// then rotates the chain and emits one step. No terminal line
    /// feed; the call ends when every required slot has fired.
    pub fn run<D: ActuatorDriver>(mut self, driver: &mut D) {
        while self.remaining > 0 {
            for (index, &required) in self.layout.iter().enumerate() {
                if !required.strikes() || self.fired & (1 << index) != 0 {
                    continue;
                }
                if self.chain.slot_at(index) == required {
                    driver.fire((index / CELL_WIDTH) as u8);
                    self.fired |= 1 << index;
                    self.remaining -= 1;
                }
            }
            self.chain.rotate();
            driver.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::test_support::Recorder;
    use crate::traits::ActuatorEvent::{Fire, Step};

    fn run(input: &str) -> Recorder {
        let line = Line::normalize(input);
        let mut recorder = Recorder::new();
        ProportionalScheduler::new(&line).run(&mut recorder);
        recorder
    }

    fn layout_of(input: &str) -> Vec<Symbol, CHAIN_SLOTS> {
        build_layout(&Line::normalize(input))
    }

    #[test]
    fn test_layout_spacing() {
        // Leading blank, then one payload per symbol
        assert_eq!(layout_of("0").as_slice(), &[Symbol::Blank, Symbol::Zero]);

        // Consecutive ones pack with a single blank between them
        assert_eq!(
            layout_of("11").as_slice(),
            &[Symbol::Blank, Symbol::One, Symbol::Blank, Symbol::One]
        );

        // Any other adjacency gets two blanks
        assert_eq!(
            layout_of("01").as_slice(),
            &[
                Symbol::Blank,
                Symbol::Zero,
                Symbol::Blank,
                Symbol::Blank,
                Symbol::One
            ]
        );
    }

    #[test]
    fn test_layout_length_for_packed_ones() {
        assert_eq!(layout_of("11111111").len(), 16);
        // Mixed full-width line: 2 + 7 * 3 slots except the packed pair
        assert_eq!(layout_of("01100101").len(), 22);
    }

    #[test]
    fn test_single_symbol_addresses_solenoid_zero() {
        let recorder = run("0");
        assert_eq!(recorder.events.as_slice(), &[Fire(0), Step]);
    }

    #[test]
    fn test_packed_ones_exact_trace() {
        // Payloads sit at odd layout indices 1..=15; the chain carries
        // a One at base slots 5, 13, 21, so pairs of slots fire on
        // every second round
        let recorder = run("11111111");
        assert_eq!(
            recorder.events.as_slice(),
            &[
                Fire(1),
                Fire(4),
                Step,
                Step,
                Fire(1),
                Fire(3),
                Step,
                Step,
                Fire(0),
                Fire(3),
                Step,
                Step,
                Fire(2),
                Fire(5),
                Step
            ]
        );
        assert_eq!(recorder.fire_count(), 8);
        assert_eq!(recorder.linefeed_count(), 0);
    }

    #[test]
    fn test_blank_payload_never_fires() {
        let recorder = run("0 1");
        assert_eq!(recorder.fire_count(), 2);
        let fired: std::vec::Vec<u8> = recorder.fires().collect();
        // Zero at layout slot 1, One at layout slot 7
        assert_eq!(fired, [0, 2]);
    }

    #[test]
    fn test_full_line_fires_distinct_solenoids() {
        let recorder = run("01100101");
        assert_eq!(recorder.fire_count(), 8);
        let mut fired: std::vec::Vec<u8> = recorder.fires().collect();
        fired.sort_unstable();
        assert_eq!(fired, [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    proptest! {
        #[test]
        fn fires_match_required_actuations(input in "[01 ]{1,8}") {
            let line = Line::normalize(&input);
            let recorder = run(&input);
            prop_assert_eq!(recorder.fire_count(), line.required_actuations());
            prop_assert_eq!(recorder.linefeed_count(), 0);
        }

        #[test]
        fn one_revolution_suffices(input in "[01 ]{1,8}") {
            let recorder = run(&input);
            prop_assert!(recorder.step_count() <= CHAIN_SLOTS);
        }

        #[test]
        fn layout_length_tracks_adjacency(input in "[01 ]{1,8}") {
            let line = Line::normalize(&input);
            let layout = build_layout(&line);

            let mut expected = 0;
            let mut prev: Option<Symbol> = None;
            for s in line.symbols() {
                expected += match prev {
                    None => 2,
                    Some(Symbol::One) if s == Symbol::One => 2,
                    Some(_) => 3,
                };
                prev = Some(s);
            }
            prop_assert_eq!(layout.len(), expected);
        }
    }
}
