//! # Silicon Chant Core
//!
//! Pure primitives for silicon-chant: the sigil fold and bit inspection.
//!
//! This crate contains no I/O, no sockets, no terminal handling. It is pure
//! computation over byte buffers.
//!
//! ## Key Types
//!
//! - [`Sigil`] - A fixed-length byte string derived from a phrase
//!
//! ## The fold
//!
//! A phrase is tiled row-major into the smallest square that holds it, padded
//! with zero bytes, and the rows are folded together with bitwise XNOR. See
//! [`Sigil::from_phrase`] for the exact rules, including the deliberate
//! asymmetry once the input runs out.

pub mod bits;
pub mod sigil;

pub use bits::nth_bit;
pub use sigil::{side_length, Sigil};
