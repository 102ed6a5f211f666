//! Golden fold vectors.
//!
//! The fold must stay bit-exact, including the asymmetric treatment of
//! exhausted input (plain carry-through, no complement). Every expected
//! value here was computed by hand from the algorithm definition.

use silicon_chant_core::Sigil;

/// A golden fold vector.
#[derive(Debug, Clone)]
pub struct SigilVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Input phrase bytes.
    pub phrase: &'static [u8],
    /// Expected sigil bytes.
    pub expected: &'static [u8],
}

/// Get all golden fold vectors.
pub fn all_vectors() -> Vec<SigilVector> {
    vec![
        SigilVector {
            name: "empty phrase, empty sigil",
            phrase: b"",
            expected: &[],
        },
        SigilVector {
            name: "single byte, one pass",
            phrase: b"a",
            expected: &[0x9e],
        },
        SigilVector {
            name: "two bytes, second row is pure carry-through",
            phrase: b"ab",
            expected: &[0x9e, 0x9d],
        },
        SigilVector {
            name: "exactly full 2x2 square",
            phrase: b"abcd",
            expected: &[0x02, 0x06],
        },
        SigilVector {
            name: "hello world, the canonical 4x4 trace",
            phrase: b"hello world",
            expected: &[0x8a, 0xd6, 0x80, 0x03],
        },
        SigilVector {
            name: "silicon chant, 13 bytes into a 4x4 square",
            phrase: b"silicon chant",
            expected: &[0x07, 0x91, 0x9c, 0xd8],
        },
        SigilVector {
            name: "zero bytes are ordinary content",
            phrase: &[0x00, 0xff, 0x00, 0xff, 0x00],
            // L=3: row one XNORs 00 ff 00, row two XNORs ff 00 into the
            // first two cells, the rest is carry-through.
            expected: &[0xff, 0xff, 0xff],
        },
    ]
}

/// Fold every vector's phrase and report (name, matches, got-hex).
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let sigil = Sigil::from_phrase(v.phrase);
            let matches = sigil.as_bytes() == v.expected;
            (v.name.to_string(), matches, sigil.to_hex())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_match() {
        for (name, matches, got) in verify_all_vectors() {
            assert!(matches, "vector '{}' folded to {}", name, got);
        }
    }

    #[test]
    fn test_vector_lengths_obey_the_square_law() {
        for v in all_vectors() {
            let l = v.expected.len();
            assert!(l * l >= v.phrase.len(), "vector '{}'", v.name);
            if !v.phrase.is_empty() {
                assert!((l - 1) * (l - 1) < v.phrase.len(), "vector '{}'", v.name);
            }
        }
    }
}
