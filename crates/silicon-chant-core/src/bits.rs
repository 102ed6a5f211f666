//! Bit inspection for display consumers.

/// Extract bit `n` of a byte, with bit 0 the least significant.
///
/// Returns 0 or 1. Bits 4..8 address the high nibble, which the geomantic
/// display renders as the second sign of each byte.
pub fn nth_bit(byte: u8, n: u32) -> u8 {
    (byte >> n) & 0x01
}
