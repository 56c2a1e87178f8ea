//! Version and variant fields.

/// Writes the 4-bit `version` into the top nibble of octet 6 and the RFC variant `10` into the
/// top two bits of octet 8 of a canonical octet buffer.
///
/// The payload bits underneath are preserved; whatever was in the version and variant positions
/// before is overwritten. Call this after every other payload bit has been set.
///
/// # Examples
///
/// ```rust
/// use rfcuuid::fields::stamp;
///
/// let mut bytes = [0xffu8; 16];
/// stamp(&mut bytes, 4);
/// assert_eq!(bytes[6], 0x4f);
/// assert_eq!(bytes[8], 0xbf);
/// ```
pub fn stamp(bytes: &mut [u8; 16], version: u8) {
    debug_assert!(version < 16);
    bytes[6] = (version << 4) | (bytes[6] & 0x0f);
    bytes[8] = 0x80 | (bytes[8] & 0x3f);
}

/// Variant field of a UUID, which determines the layout of the other fields.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xxx`, reserved for NCS backward compatibility (including the Nil UUID).
    Var0,
    /// `10xx`, the variant specified by RFC 9562. Every generator in this crate emits it.
    Var10,
    /// `110x`, reserved for Microsoft Corporation backward compatibility.
    Var110,
    /// `111x`, reserved for future definition (including the Max UUID).
    VarReserved,
}

impl Variant {
    /// Classifies the variant from octet 8 of a canonical octet buffer.
    pub const fn from_octet(octet: u8) -> Self {
        match octet >> 5 {
            0b000..=0b011 => Self::Var0,
            0b100 | 0b101 => Self::Var10,
            0b110 => Self::Var110,
            _ => Self::VarReserved,
        }
    }
}
