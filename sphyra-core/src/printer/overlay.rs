//! Debug overlay derivation
//!
//! Unsupported characters normalize to blanks and would silently
//! vanish from the printout. The overlay re-renders them as an
//! overstruck block: pass one prints the normalized line with `1`
//! forced into every flagged column, pass two prints `0` into those
//! columns alone. Struck on top of each other the two passes leave a
//! solid mark where the head had no symbol for the input.

use crate::line::{self, Line, Symbol};

/// The two overlay passes derived from raw input
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebugOverlay {
    /// Normalized line with `One` at every flagged column
    pub first_pass: Line,
    /// Blank line with `Zero` at every flagged column
    pub second_pass: Line,
}

impl DebugOverlay {
    /// Derive both passes from raw (pre-normalization) input
    ///
    /// Flagged columns come from the raw first-eight-character view,
    /// so characters that normalization would erase still mark their
    /// column.
    pub fn build(raw: &str) -> Self {
        let mask = line::unsupported_mask(raw);

        let mut first_pass = Line::normalize(raw);
        let mut second_pass = Line::blank(first_pass.len());
        for column in 0..first_pass.len() {
            if mask & (1 << column) != 0 {
                first_pass.set(column, Symbol::One);
                second_pass.set(column, Symbol::Zero);
            }
        }

        Self {
            first_pass,
            second_pass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_example() {
        use Symbol::{Blank, One, Zero};

        // Raw first eight: "0s11a444", unsupported at {1, 4, 5, 6, 7}
        let overlay = DebugOverlay::build("0s11a444fkjhsgew");

        assert_eq!(
            overlay.first_pass,
            Line::from_symbols(&[Zero, One, One, One, One, One, One, One])
        );
        assert_eq!(
            overlay.second_pass,
            Line::from_symbols(&[Blank, Zero, Blank, Blank, Zero, Zero, Zero, Zero])
        );
    }

    #[test]
    fn test_overlay_short_input() {
        use Symbol::{Blank, One, Zero};

        // "013 4 110" truncates to "013 4 11"; '3' and '4' flagged
        let overlay = DebugOverlay::build("013 4 110");

        assert_eq!(
            overlay.first_pass,
            Line::from_symbols(&[Zero, One, One, Blank, One, Blank, One, One])
        );
        assert_eq!(
            overlay.second_pass,
            Line::from_symbols(&[Blank, Blank, Zero, Blank, Zero, Blank, Blank, Blank])
        );
    }

    #[test]
    fn test_overlay_clean_input_changes_nothing() {
        let overlay = DebugOverlay::build("01 10");

        assert_eq!(overlay.first_pass, Line::normalize("01 10"));
        assert_eq!(overlay.second_pass, Line::blank(5));
    }

    #[test]
    fn test_passes_share_the_line_width() {
        let overlay = DebugOverlay::build("0z1");
        assert_eq!(overlay.first_pass.len(), 3);
        assert_eq!(overlay.second_pass.len(), 3);
    }
}
