use std::{cmp, fmt, str};

use fstr::FStr;

use crate::{fields::Variant, layout, Result};

/// Represents a Universally Unique IDentifier.
///
/// The value is held in the in-memory word order used by GUID structures, where `time_low`,
/// `time_mid` and `time_hi_and_version` are little-endian words. Use [`Uuid::to_octets`] and
/// [`Uuid::from_octets`] (or the [`layout`] module) to move between that order and the canonical
/// RFC 9562 octets. Comparison, formatting and serialization all follow the canonical octets.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Namespace ID for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self::from_bytes([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace ID for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self::from_bytes([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace ID for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self::from_bytes([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace ID for X.500 DNs in DER or text format (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self::from_bytes([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Creates an object from canonical RFC 9562 octets.
    pub const fn from_bytes(octets: [u8; 16]) -> Self {
        layout::from_octet_array(octets)
    }

    /// Creates an object from a byte slice holding canonical octets, using the first sixteen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`](crate::Error::InvalidLength) if `octets` is shorter than
    /// sixteen bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfcuuid::Uuid;
    ///
    /// let x = Uuid::from_octets(&[0xff; 20])?;
    /// assert_eq!(x, Uuid::MAX);
    /// assert!(Uuid::from_octets(&[0xff; 15]).is_err());
    /// # Ok::<(), rfcuuid::Error>(())
    /// ```
    pub fn from_octets(octets: &[u8]) -> Result<Self> {
        layout::from_octets(octets)
    }

    /// Returns the canonical RFC 9562 octets.
    pub const fn to_octets(&self) -> [u8; 16] {
        layout::to_octets(self)
    }

    /// Creates an object from the in-memory word order (`[3][2][1][0]-[5][4]-[7][6]-[8..15]`).
    pub const fn from_bytes_le(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns the in-memory word order (`[3][2][1][0]-[5][4]-[7][6]-[8..15]`).
    pub const fn to_bytes_le(&self) -> [u8; 16] {
        self.0
    }

    /// Creates an object from the GUID-style field values.
    pub const fn from_fields(d1: u32, d2: u16, d3: u16, d4: [u8; 8]) -> Self {
        let d1 = d1.to_le_bytes();
        let d2 = d2.to_le_bytes();
        let d3 = d3.to_le_bytes();
        Self([
            d1[0], d1[1], d1[2], d1[3], d2[0], d2[1], d3[0], d3[1], d4[0], d4[1], d4[2], d4[3],
            d4[4], d4[5], d4[6], d4[7],
        ])
    }

    /// Returns the GUID-style field values.
    pub const fn as_fields(&self) -> (u32, u16, u16, [u8; 8]) {
        let b = &self.0;
        (
            u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
            u16::from_le_bytes([b[4], b[5]]),
            u16::from_le_bytes([b[6], b[7]]),
            [b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]],
        )
    }

    /// Creates an object from UUIDv7 field values.
    ///
    /// # Panics
    ///
    /// Panics if any argument is out of the range of its field.
    pub const fn from_fields_v7(unix_ts_ms: u64, rand_a: u16, rand_b: u64) -> Self {
        if unix_ts_ms >= 1 << 48 || rand_a >= 1 << 12 || rand_b >= 1 << 62 {
            panic!("invalid field value");
        }

        Self::from_bytes([
            (unix_ts_ms >> 40) as u8,
            (unix_ts_ms >> 32) as u8,
            (unix_ts_ms >> 24) as u8,
            (unix_ts_ms >> 16) as u8,
            (unix_ts_ms >> 8) as u8,
            unix_ts_ms as u8,
            0x70 | (rand_a >> 8) as u8,
            rand_a as u8,
            0x80 | (rand_b >> 56) as u8,
            (rand_b >> 48) as u8,
            (rand_b >> 40) as u8,
            (rand_b >> 32) as u8,
            (rand_b >> 24) as u8,
            (rand_b >> 16) as u8,
            (rand_b >> 8) as u8,
            rand_b as u8,
        ])
    }

    /// Returns the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        Variant::from_octet(self.0[8])
    }

    /// Returns the version field value of the UUID or `None` if the UUID does not have the RFC
    /// variant `10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[7] >> 4),
            _ => None,
        }
    }

    /// Returns `true` if this is the Nil UUID.
    pub const fn is_nil(&self) -> bool {
        u128::from_ne_bytes(self.0) == 0
    }

    /// Returns `true` if this is the Max UUID.
    pub const fn is_max(&self) -> bool {
        u128::from_ne_bytes(self.0) == u128::MAX
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfcuuid::Uuid;
    ///
    /// let x = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), rfcuuid::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let octets = self.to_octets();
        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for (i, e) in octets.iter().enumerate() {
            let e = *e as usize;
            *buf_iter.next().unwrap() = DIGITS[e >> 4];
            *buf_iter.next().unwrap() = DIGITS[e & 15];
            if i == 3 || i == 5 || i == 7 || i == 9 {
                *buf_iter.next().unwrap() = b'-';
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: `buffer` contains ASCII hex digits and hyphens only.
        unsafe { FStr::from_inner_unchecked(buffer) }
    }
}

impl Ord for Uuid {
    /// Compares the canonical octets, which orders the first three fields as integers.
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.to_octets().cmp(&other.to_octets())
    }
}

impl PartialOrd for Uuid {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Uuid").field(&self.to_string()).finish()
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError {};
        let mut dst = [0u8; 16];
        let mut iter = src.chars();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            let lo = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            *e = (hi << 4) | lo;
            if (i == 3 || i == 5 || i == 7 || i == 9) && iter.next().ok_or(ERR)? != '-' {
                return Err(ERR);
            }
        }
        if iter.next().is_none() {
            Ok(Self::from_bytes(dst))
        } else {
            Err(ERR)
        }
    }
}

impl From<Uuid> for u128 {
    /// Interprets the canonical octets as a big-endian integer.
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.to_octets())
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self::from_bytes(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("invalid string representation")]
pub struct ParseError {}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.to_octets())
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self::from_bytes(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(&self.to_octets())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from_bytes)
                .map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::Uuid;
    use crate::fields::Variant;

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((u64, u16, u64), &'static str)] {
        const MAX_UINT48: u64 = (1 << 48) - 1;
        const MAX_UINT12: u16 = (1 << 12) - 1;
        const MAX_UINT62: u64 = (1 << 62) - 1;

        &[
            ((0, 0, 0), "00000000-0000-7000-8000-000000000000"),
            ((MAX_UINT48, 0, 0), "ffffffff-ffff-7000-8000-000000000000"),
            ((0, MAX_UINT12, 0), "00000000-0000-7fff-8000-000000000000"),
            ((0, 0, MAX_UINT62), "00000000-0000-7000-bfff-ffffffffffff"),
            (
                (MAX_UINT48, MAX_UINT12, MAX_UINT62),
                "ffffffff-ffff-7fff-bfff-ffffffffffff",
            ),
            (
                (0x17f22e279b0, 0xcc3, 0x18c4dc0c0c07398f),
                "017f22e2-79b0-7cc3-98c4-dc0c0c07398f",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (fs, text) in prepare_cases() {
            let from_fields = Uuid::from_fields_v7(fs.0, fs.1, fs.2);
            assert_eq!(Ok(from_fields), text.parse());
            assert_eq!(Ok(from_fields), text.to_uppercase().parse());
            assert_eq!(&from_fields.encode() as &str, *text);
            assert_eq!(&from_fields.to_string(), text);
            assert_eq!(&uuid::Uuid::from_bytes(from_fields.to_octets()).to_string(), text);
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            " 0180a8f0-5b82-75b4-9fef-ecad657c30bb",
            "0180a8f0-5b84-7438-ab50-f0626f78002b ",
            " 0180a8f0-5b84-7438-ab50-f063bd5331af ",
            "+0180a8f0-5b84-7438-ab50-f06405d35edb",
            "-0180a8f0-5b84-7438-ab50-f06508df4c2d",
            "+180a8f0-5b84-7438-ab50-f066aa10a367",
            "-180a8f0-5b84-7438-ab50-f067cdce1d69",
            "0180a8f05b847438ab50f068decfbfd7",
            "0180a8f0-5b847438-ab50-f06991838802",
            "{0180a8f0-5b84-7438-ab50-f06ac2e5e082}",
            "0180a8f0-5b84-74 8-ab50-f06bed27bdc7",
            "0180a8g0-5b84-7438-ab50-f06c91175b8a",
            "0180a8f0-5b84-7438-ab50_f06d3ea24429",
        ];

        for e in cases {
            assert!(e.parse::<Uuid>().is_err());
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
        assert!(Uuid::NIL.is_nil() && !Uuid::NIL.is_max());
        assert!(Uuid::MAX.is_max() && !Uuid::MAX.is_nil());
        assert_eq!(Uuid::NIL.variant(), Variant::Var0);
        assert_eq!(Uuid::MAX.variant(), Variant::VarReserved);
        assert_eq!(Uuid::NIL.version(), None);
        assert_eq!(Uuid::MAX.version(), None);
        assert_eq!(Uuid::default(), Uuid::NIL);
    }

    /// Formats well-known namespaces
    #[test]
    fn formats_well_known_namespaces() {
        assert_eq!(
            Uuid::NAMESPACE_DNS.to_string(),
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            Uuid::NAMESPACE_URL.to_string(),
            "6ba7b811-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            Uuid::NAMESPACE_OID.to_string(),
            "6ba7b812-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            Uuid::NAMESPACE_X500.to_string(),
            "6ba7b814-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(Uuid::NAMESPACE_DNS.version(), Some(1));
    }

    /// Exposes GUID-style fields in native integers
    #[test]
    fn exposes_guid_style_fields_in_native_integers() {
        let (d1, d2, d3, d4) = Uuid::NAMESPACE_DNS.as_fields();
        assert_eq!(d1, 0x6ba7_b810);
        assert_eq!(d2, 0x9dad);
        assert_eq!(d3, 0x11d1);
        assert_eq!(d4, [0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]);
        assert_eq!(Uuid::from_fields(d1, d2, d3, d4), Uuid::NAMESPACE_DNS);
    }

    /// Orders by canonical octets
    #[test]
    fn orders_by_canonical_octets() {
        // 0x00000001 is stored as [01, 00, 00, 00] in memory but must sort below 0x00000100
        let a = Uuid::from_fields(0x0000_0001, 0, 0, [0; 8]);
        let b = Uuid::from_fields(0x0000_0100, 0, 0, [0; 8]);
        assert!(a < b);
        assert!(Uuid::NIL < a && b < Uuid::MAX);
        for _ in 0..1_000 {
            let (x, y): (u128, u128) = (rand::random(), rand::random());
            assert_eq!(Uuid::from(x).cmp(&Uuid::from(y)), x.cmp(&y));
        }
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v7(fs.0, fs.1, fs.2);
            assert_eq!(Uuid::from_bytes(e.to_octets()), e);
            assert_eq!(Uuid::from_octets(&e.to_octets()).unwrap(), e);
            assert_eq!(Uuid::from_bytes_le(e.to_bytes_le()), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));

            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }

    /// Debug-formats as canonical string
    #[test]
    fn debug_formats_as_canonical_string() {
        assert_eq!(
            format!("{:?}", Uuid::NAMESPACE_OID),
            "Uuid(\"6ba7b812-9dad-11d1-80b4-00c04fd430c8\")"
        );
    }
}
