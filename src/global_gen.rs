//! Default generator and entry point functions.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::SystemTime;

use crate::{layout, time_based, v4, v7, OsRandSource, Result, TimeBasedGenerator, Uuid};

/// Returns the lock handle of process-wide time-based generator, creating one if none exists.
///
/// A poisoned lock is recovered; the clock state is written only after every fallible step.
fn lock_global_gen() -> MutexGuard<'static, TimeBasedGenerator> {
    static G: OnceLock<Mutex<TimeBasedGenerator>> = OnceLock::new();
    G.get_or_init(|| {
        log::debug!("initializing process-wide time-based generator");
        Mutex::new(TimeBasedGenerator::new())
    })
    .lock()
    .unwrap_or_else(PoisonError::into_inner)
}

/// Generates a UUIDv1 object.
///
/// This function employs a global generator and holds its lock until the UUID is fully built, so
/// UUIDs generated by concurrent callers are unique and, unless the system clock goes backwards,
/// carry increasing timestamps in the order the lock was acquired.
///
/// # Errors
///
/// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the operating
/// system's random number generator fails while initializing the clock sequence or node
/// identifier.
///
/// # Examples
///
/// ```rust
/// let uuid = rfcuuid::uuid1()?;
/// println!("{}", uuid); // e.g., "c232ab00-9414-11ec-b3c8-9f6bdeced846"
/// println!("{:?}", uuid.to_octets()); // as 16-byte big-endian array
/// # Ok::<(), rfcuuid::Error>(())
/// ```
pub fn uuid1() -> Result<Uuid> {
    lock_global_gen().generate_v1()
}

/// Generates a UUIDv1 object, holding the global generator's lock only while the clock state is
/// advanced.
///
/// UUIDs generated by concurrent callers are still unique, but they may be returned in a different
/// order than their timestamps.
///
/// # Errors
///
/// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the operating
/// system's random number generator fails.
pub fn uuid1_unsynchronized() -> Result<Uuid> {
    let fields = lock_global_gen().next_fields()?;
    Ok(layout::from_octet_array(time_based::pack_v1(&fields)))
}

/// Generates a UUIDv6 object.
///
/// This function employs a global generator, sharing its clock sequence and node identifier with
/// [`uuid1()`]. UUIDs generated by this function sort by their creation time unless the system
/// clock goes backwards.
///
/// # Errors
///
/// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the operating
/// system's random number generator fails.
///
/// # Examples
///
/// ```rust
/// let x = rfcuuid::uuid6()?;
/// let y = rfcuuid::uuid6()?;
/// assert!(x < y);
/// assert_eq!(x.version(), Some(6));
/// # Ok::<(), rfcuuid::Error>(())
/// ```
pub fn uuid6() -> Result<Uuid> {
    lock_global_gen().generate_v6()
}

/// Generates a UUIDv6 object, holding the global generator's lock only while the clock state is
/// advanced.
///
/// # Errors
///
/// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the operating
/// system's random number generator fails.
pub fn uuid6_unsynchronized() -> Result<Uuid> {
    let fields = lock_global_gen().next_fields()?;
    Ok(layout::from_octet_array(time_based::pack_v6(&fields)))
}

/// Looks up the node identifier of the global generator again.
///
/// Returns `true` if the node identifier has changed, in which case a new clock sequence is also
/// chosen. The generator state is left untouched if an error is returned.
///
/// # Errors
///
/// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the operating
/// system's random number generator fails.
pub fn refresh_node_id() -> Result<bool> {
    lock_global_gen().refresh_node_id()
}

/// Generates a UUIDv4 object.
///
/// # Errors
///
/// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the operating
/// system's random number generator fails.
///
/// # Examples
///
/// ```rust
/// let uuid = rfcuuid::uuid4()?;
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// # Ok::<(), rfcuuid::Error>(())
/// ```
pub fn uuid4() -> Result<Uuid> {
    v4::generate_v4(&mut OsRandSource::default())
}

/// Generates a UUIDv7 object from the current time.
///
/// # Errors
///
/// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the operating
/// system's random number generator fails.
///
/// # Examples
///
/// ```rust
/// let uuid = rfcuuid::uuid7()?;
/// println!("{}", uuid); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
///
/// let uuid_string: String = rfcuuid::uuid7()?.to_string();
/// # Ok::<(), rfcuuid::Error>(())
/// ```
pub fn uuid7() -> Result<Uuid> {
    uuid7_at(SystemTime::now())
}

/// Generates a UUIDv7 object from the time given.
///
/// A time before the Unix epoch is encoded as zero.
///
/// # Errors
///
/// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the operating
/// system's random number generator fails.
///
/// # Examples
///
/// ```rust
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let uuid = rfcuuid::uuid7_at(UNIX_EPOCH + Duration::from_millis(0x017f_22e2_79b0))?;
/// assert!(uuid.to_string().starts_with("017f22e2-79b0-7"));
/// # Ok::<(), rfcuuid::Error>(())
/// ```
pub fn uuid7_at(time: SystemTime) -> Result<Uuid> {
    v7::generate_v7(&mut OsRandSource::default(), v7::unix_ts_ms(time))
}

#[cfg(test)]
fn count_set_bits(samples: &[String]) -> [u32; 128] {
    // count '1' of each bit
    let mut bins = [0u32; 128];
    for e in samples {
        let mut it = bins.iter_mut().rev();
        for c in e.chars().rev() {
            if let Some(mut num) = c.to_digit(16) {
                for _ in 0..4 {
                    *it.next().unwrap() += num & 1;
                    num >>= 1;
                }
            }
        }
    }
    bins
}
