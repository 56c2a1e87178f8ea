//! UUIDv4-related functionality

use crate::{fields, layout, rand_source::random_bytes, RandSource, Result, Uuid};

/// Generates a UUIDv4 object from the random source given.
///
/// All the 122 bits other than the version and variant fields are random.
///
/// # Errors
///
/// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if `rng` fails.
pub fn generate_v4(rng: &mut impl RandSource) -> Result<Uuid> {
    let mut bytes: [u8; 16] = random_bytes(rng)?;
    fields::stamp(&mut bytes, 4);
    Ok(layout::from_octet_array(bytes))
}
