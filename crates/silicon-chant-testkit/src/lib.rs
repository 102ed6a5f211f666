//! # Silicon Chant Testkit
//!
//! Testing utilities for silicon-chant.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: phrases with hand-computed fold results, so the
//!   XNOR fold stays bit-exact across refactors
//! - **Generators**: proptest strategies for phrases and chant
//!   specifications
//! - **Fixtures**: a recording fake engine so dispatch can be tested
//!   without ever exhausting memory, the stack, or a disk
//!
//! ## Golden Vectors
//!
//! ```rust
//! use silicon_chant_testkit::vectors::all_vectors;
//! use silicon_chant_core::Sigil;
//!
//! for vector in all_vectors() {
//!     assert_eq!(Sigil::from_phrase(vector.phrase).as_bytes(), vector.expected);
//! }
//! ```
//!
//! ## Dispatch without exhaustion
//!
//! ```rust
//! use silicon_chant_testkit::fixtures::RecordingChanter;
//! use silicon_chant_engine::{ChantSpec, Chanter};
//! use silicon_chant_core::Sigil;
//!
//! let mut fake = RecordingChanter::new();
//! fake.chant(&Sigil::from_phrase(b"hello world"), &ChantSpec::Heap).unwrap();
//! assert_eq!(fake.calls().len(), 1);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{AutoConfirm, FailingChanter, RecordingChanter};
pub use generators::{ascii_phrase, chant_spec, phrase};
pub use vectors::{all_vectors, verify_all_vectors, SigilVector};
