//! UUIDv7-related functionality
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The generator keeps no state between calls. UUIDs generated within the same millisecond share
//! the `unix_ts_ms` prefix and rely on the 74 random bits for uniqueness; they are not
//! guaranteed to be in increasing order.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::{fields, layout, rand_source::random_bytes, RandSource, Result, Uuid};

const MAX_UINT48: u64 = (1 << 48) - 1;

/// Packs a Unix timestamp in milliseconds and ten random bytes into UUIDv7 octets.
///
/// Only the low 48 bits of `unix_ts_ms` are used.
pub fn pack_v7(unix_ts_ms: u64, random: [u8; 10]) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    bytes[..6].copy_from_slice(&(unix_ts_ms & MAX_UINT48).to_be_bytes()[2..]);
    bytes[6..].copy_from_slice(&random);
    fields::stamp(&mut bytes, 7);
    bytes
}

/// Returns the milliseconds elapsed from the Unix epoch to `time`, or zero if `time` precedes
/// the epoch.
pub fn unix_ts_ms(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}

/// Generates a UUIDv7 object from a Unix timestamp in milliseconds and the random source given.
///
/// # Errors
///
/// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if `rng` fails.
pub fn generate_v7(rng: &mut impl RandSource, unix_ts_ms: u64) -> Result<Uuid> {
    Ok(layout::from_octet_array(pack_v7(
        unix_ts_ms,
        random_bytes(rng)?,
    )))
}
