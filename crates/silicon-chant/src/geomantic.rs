//! Geomantic rendering of a sigil.
//!
//! Geomantic signs are four-bit figures: each of the four rows is either a
//! single point or a pair. A byte therefore holds exactly two signs, low
//! nibble first, and a sigil prints as a row of sign pairs. The meanings
//! are left to the reader to look up; only the mathematics lives here.

use std::io::{self, Write};

use silicon_chant_core::{nth_bit, Sigil};

/// One figure row: a pair for a set bit, a single point for a clear bit.
fn figure_row(bit: u8) -> &'static str {
    if bit == 1 {
        "# #  "
    } else {
        " #   "
    }
}

/// Render every byte of the sigil as two geomantic signs, four text rows
/// high. An empty sigil renders four empty rows.
pub fn render<W: Write>(sigil: &Sigil, out: &mut W) -> io::Result<()> {
    for row in 0..4 {
        for &byte in sigil.as_bytes() {
            write!(out, "{}", figure_row(nth_bit(byte, row)))?;
            write!(out, "{}", figure_row(nth_bit(byte, row + 4)))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
