//! Sigil: a fixed-length byte string derived from a phrase.
//!
//! A sigil is stored as an explicitly-sized immutable buffer. Zero bytes are
//! ordinary sigil content and never terminate anything.

use bytes::{Bytes, BytesMut};
use std::fmt;

/// An immutable byte string produced by the square fold.
///
/// For a phrase of n bytes the sigil has length L, the smallest non-negative
/// integer with L^2 >= n. Any byte value may appear, including zero.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sigil(Bytes);

impl Sigil {
    /// Fold a phrase into a sigil.
    ///
    /// The phrase is tiled row-major into an L x L grid (L as above), with
    /// unused trailing cells left as zero padding. The grid is then folded
    /// row by row into an L-byte accumulator: while phrase bytes remain,
    /// column j becomes `!(acc[j] ^ phrase[cursor])` (XNOR); once the input
    /// is exhausted the cell is left untouched for that pass, since XOR with
    /// the zero padding changes nothing and no complement is applied.
    ///
    /// XOR alone would pin the top bit to 0 for seven-bit input; the
    /// complement makes the top bit depend on the parity of passes, so the
    /// full byte range can appear in the output. The exhausted-input
    /// asymmetry (plain carry-through, not XNOR) is part of the contract.
    pub fn from_phrase(phrase: &[u8]) -> Self {
        let side = side_length(phrase.len());
        let mut acc = BytesMut::zeroed(side);

        let mut cursor = 0;
        for _row in 0..side {
            for cell in acc.iter_mut() {
                if cursor < phrase.len() {
                    *cell = !(*cell ^ phrase[cursor]);
                    cursor += 1;
                }
            }
        }

        Self(acc.freeze())
    }

    /// Create a sigil from raw bytes, bypassing the fold.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// The raw sigil bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes (the side length of the folded square).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sigil is empty (folded from an empty phrase).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Hex rendering of the sigil bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Debug for Sigil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sigil({})", self.to_hex())
    }
}

impl fmt::Display for Sigil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Sigil {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Smallest non-negative L with L^2 >= n.
///
/// This is the side of the square the phrase is tiled into, and therefore
/// the sigil length. Zero for an empty phrase.
pub fn side_length(n: usize) -> usize {
    let mut side = 0usize;
    while side * side < n {
        side += 1;
    }
    side
}
