//! Fixed-pitch scheduler
//!
//! Scans the line with two banks of four hammers. Each scan slot
//! aligns one column offset of each bank with a target symbol; the
//! aligned hammer fires when its column holds that symbol. The targets
//! follow the fixed eight-slot [`SCAN_CYCLE`], after which every
//! column has been aligned with both symbol values, so a full line
//! always completes within one cycle.

use crate::line::{Line, Symbol};
use crate::traits::ActuatorDriver;

/// Columns per hammer bank
pub const BANK_COLUMNS: usize = 4;

/// One slot of the scan cycle
///
/// `column` is the offset within each bank. `bank_a` and `bank_b` are
/// the symbols aligned under the low bank (columns 0-3) and the high
/// bank (columns 4-7) while this slot is active; they are never blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanSlot {
    /// Offset within each bank
    pub column: u8,
    /// Target symbol for the low bank
    pub bank_a: Symbol,
    /// Target symbol for the high bank
    pub bank_b: Symbol,
}

/// The eight-slot scan cycle
///
/// Within a four-slot window the bank targets swap every slot; across
/// the window boundary they carry over unchanged. Each column offset
/// therefore appears once with each target symbol per cycle.
pub const SCAN_CYCLE: [ScanSlot; 8] = [
    ScanSlot { column: 0, bank_a: Symbol::Zero, bank_b: Symbol::One },
    ScanSlot { column: 1, bank_a: Symbol::One, bank_b: Symbol::Zero },
    ScanSlot { column: 2, bank_a: Symbol::Zero, bank_b: Symbol::One },
    ScanSlot { column: 3, bank_a: Symbol::One, bank_b: Symbol::Zero },
    ScanSlot { column: 0, bank_a: Symbol::One, bank_b: Symbol::Zero },
    ScanSlot { column: 1, bank_a: Symbol::Zero, bank_b: Symbol::One },
    ScanSlot { column: 2, bank_a: Symbol::One, bank_b: Symbol::Zero },
    ScanSlot { column: 3, bank_a: Symbol::Zero, bank_b: Symbol::One },
];

/// Fixed-pitch scheduler state for one print call
///
/// Constructed fresh per line and consumed by [`run`](Self::run);
/// nothing survives the terminal line feed.
pub struct FixedPitchScheduler<'a> {
    line: &'a Line,
    /// Index into [`SCAN_CYCLE`]
    cursor: u8,
    /// Bitmask of columns already fired
    fired: u8,
    /// Strikes still owed before the line feed
    remaining: usize,
}

impl<'a> FixedPitchScheduler<'a> {
    /// Prepare a scan over a normalized line
    pub fn new(line: &'a Line) -> Self {
        Self {
            line,
            cursor: 0,
            fired: 0,
            remaining: line.required_actuations(),
        }
    }

    /// Run the scan to completion
    ///
    /// Emits one fire per non-blank column, one step per scan slot,
    /// and a terminal line feed. Fires within a slot go in ascending
    /// column order.
    pub fn run<D: ActuatorDriver>(mut self, driver: &mut D) {
        while self.remaining > 0 {
            let slot = &SCAN_CYCLE[self.cursor as usize];
            self.strike_if_aligned(slot.column, slot.bank_a, driver);
            self.strike_if_aligned(slot.column + BANK_COLUMNS as u8, slot.bank_b, driver);
            driver.step();
            self.cursor = (self.cursor + 1) % SCAN_CYCLE.len() as u8;
        }
        driver.linefeed();
    }

    /// Fire a column when its symbol sits under the aligned target
    fn strike_if_aligned<D: ActuatorDriver>(
        &mut self,
        column: u8,
        target: Symbol,
        driver: &mut D,
    ) {
        if self.fired & (1 << column) != 0 {
            return;
        }
        if self.line.get(column as usize) == Some(target) {
            driver.fire(column);
            self.fired |= 1 << column;
            self.remaining -= 1;
        }
    }
}
