//! UUIDv8-related functionality
//!
//! UUIDv8 carries an experimental or vendor-specific payload. Only the version and variant bits
//! are set by this crate; uniqueness is entirely up to the caller.

use crate::{fields, layout, Error, Result, Uuid};

/// Packs three custom fields into UUIDv8 octets.
///
/// `custom_a` fills the first 48 bits, `custom_b` the next 16 bits of which the top four are then
/// replaced by the version, and `custom_c` the last 64 bits of which the top two are then
/// replaced by the variant.
pub fn pack_v8(custom_a: [u8; 6], custom_b: [u8; 2], custom_c: [u8; 8]) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    bytes[..6].copy_from_slice(&custom_a);
    bytes[6..8].copy_from_slice(&custom_b);
    bytes[8..].copy_from_slice(&custom_c);
    fields::stamp(&mut bytes, 8);
    bytes
}

/// Generates a UUIDv8 object from a 16-byte custom payload.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] if `payload` is not exactly sixteen bytes long.
///
/// # Examples
///
/// ```rust
/// let uuid = rfcuuid::uuid8(&[0xff; 16])?;
/// assert_eq!(uuid.to_string(), "ffffffff-ffff-8fff-bfff-ffffffffffff");
/// assert!(rfcuuid::uuid8(&[0xff; 4]).is_err());
/// # Ok::<(), rfcuuid::Error>(())
/// ```
pub fn uuid8(payload: &[u8]) -> Result<Uuid> {
    Error::check_length("payload", 16, payload.len())?;
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(payload);
    fields::stamp(&mut bytes, 8);
    Ok(layout::from_octet_array(bytes))
}

/// Generates a UUIDv8 object from three custom segments of 6, 2 and 8 bytes.
///
/// See [`pack_v8`] for the placement of each segment.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] unless the segments are exactly 6, 2 and 8 bytes long.
pub fn uuid8_from_segments(custom_a: &[u8], custom_b: &[u8], custom_c: &[u8]) -> Result<Uuid> {
    Error::check_length("custom_a", 6, custom_a.len())?;
    Error::check_length("custom_b", 2, custom_b.len())?;
    Error::check_length("custom_c", 8, custom_c.len())?;

    let mut a = [0u8; 6];
    let mut b = [0u8; 2];
    let mut c = [0u8; 8];
    a.copy_from_slice(custom_a);
    b.copy_from_slice(custom_b);
    c.copy_from_slice(custom_c);
    Ok(layout::from_octet_array(pack_v8(a, b, c)))
}
