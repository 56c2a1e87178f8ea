//! Conversion between the canonical octet order and the in-memory word order of [`Uuid`].
//!
//! RFC 9562 defines the wire and storage form of a UUID as sixteen octets in network byte order:
//!
//! ```text
//! | time_low | time_mid | time_hi_and_version | clk_seq_hi_res | clk_seq_low | node      |
//! | 0 .. 3   | 4 .. 5   | 6 .. 7              | 8              | 9           | 10 .. 15  |
//! ```
//!
//! [`Uuid`] keeps its first three fields as little-endian words instead, so the in-memory image
//! is `[3][2][1][0]-[5][4]-[7][6]-[8..15]`. The functions here are the only translators between
//! the two orders; all generators go through them.

use crate::{Error, Result, Uuid};

/// Swaps octets 0↔3, 1↔2, 4↔5 and 6↔7, leaving octets 8 to 15 untouched.
///
/// The permutation is its own inverse.
pub(crate) const fn swap_words(src: [u8; 16]) -> [u8; 16] {
    [
        src[3], src[2], src[1], src[0], src[5], src[4], src[7], src[6], src[8], src[9], src[10],
        src[11], src[12], src[13], src[14], src[15],
    ]
}

/// Returns the canonical RFC 9562 octets of `value`.
///
/// # Examples
///
/// ```rust
/// use rfcuuid::{layout, Uuid};
///
/// assert_eq!(layout::to_octets(&Uuid::MAX), [0xff; 16]);
/// assert_eq!(layout::to_octets(&Uuid::NIL), [0x00; 16]);
/// ```
pub const fn to_octets(value: &Uuid) -> [u8; 16] {
    swap_words(value.to_bytes_le())
}

/// Creates a [`Uuid`] from canonical RFC 9562 octets.
///
/// Inputs longer than sixteen bytes are accepted and only the first sixteen are used.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] if `octets` is shorter than sixteen bytes.
pub fn from_octets(octets: &[u8]) -> Result<Uuid> {
    match octets.get(..16) {
        Some(head) => {
            let mut buffer = [0u8; 16];
            buffer.copy_from_slice(head);
            Ok(from_octet_array(buffer))
        }
        None => Err(Error::InvalidLength {
            name: "octets",
            expected: 16,
            actual: octets.len(),
        }),
    }
}

/// Creates a [`Uuid`] from a complete canonical octet array.
pub(crate) const fn from_octet_array(octets: [u8; 16]) -> Uuid {
    Uuid::from_bytes_le(swap_words(octets))
}
