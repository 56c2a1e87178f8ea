//! Clock sequence and node state shared by the time-based generators (UUIDv1 and UUIDv6).

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{rand_source::random_bytes, RandSource, Result};

/// Number of 100-nanosecond ticks from the Gregorian reform (1582-10-15T00:00:00Z) to the Unix
/// epoch.
pub const GREGORIAN_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

const MAX_TIMESTAMP: u64 = (1 << 60) - 1;
const MAX_CLOCK_SEQUENCE: u16 = (1 << 14) - 1;

/// A trait that defines the system clock interface for the time-based generators.
pub trait TimeSource {
    /// Returns the current time as a duration since the Unix epoch.
    fn unix_time(&mut self) -> Duration;
}

/// The default [`TimeSource`] that reads [`SystemTime::now()`].
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn unix_time(&mut self) -> Duration {
        // a clock set before 1970 is treated as the epoch itself
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
    }
}

/// Converts a duration since the Unix epoch into the 60-bit count of 100-nanosecond ticks since
/// the Gregorian reform.
pub fn gregorian_ticks(unix_time: Duration) -> u64 {
    unix_time
        .as_secs()
        .wrapping_mul(10_000_000)
        .wrapping_add((unix_time.subsec_nanos() / 100) as u64)
        .wrapping_add(GREGORIAN_OFFSET)
        & MAX_TIMESTAMP
}

/// A trait that defines how the node identifier is looked up.
pub trait NodeSource {
    /// Returns a 48-bit hardware address if one is available.
    ///
    /// Returning `None` makes the state fall back to a random node identifier.
    fn node_id(&mut self) -> Option<[u8; 6]>;
}

/// The default [`NodeSource`] that returns the MAC address of a network interface.
///
/// Without the `hardware-node` crate feature, this always returns `None`.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct HardwareNodeId;

impl NodeSource for HardwareNodeId {
    #[cfg(feature = "hardware-node")]
    fn node_id(&mut self) -> Option<[u8; 6]> {
        match mac_address::get_mac_address() {
            Ok(Some(address)) if address.bytes() != [0; 6] => Some(address.bytes()),
            Ok(_) => None,
            Err(err) => {
                log::debug!("could not enumerate network interfaces: {}", err);
                None
            }
        }
    }

    #[cfg(not(feature = "hardware-node"))]
    fn node_id(&mut self) -> Option<[u8; 6]> {
        None
    }
}

/// A [`NodeSource`] that never reports a hardware address, so that the node identifier is always
/// random.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct RandomNodeId;

impl NodeSource for RandomNodeId {
    fn node_id(&mut self) -> Option<[u8; 6]> {
        None
    }
}

/// Field values of a time-based UUID, returned by [`ClockState::tick()`].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct TimeBasedFields {
    /// 60-bit count of 100-nanosecond ticks since the Gregorian reform.
    pub timestamp: u64,
    /// 14-bit clock sequence.
    pub clock_sequence: u16,
    /// 48-bit node identifier.
    pub node_id: [u8; 6],
}

/// Mutable state of the time-based generators: the last timestamp, the clock sequence and the
/// node identifier.
///
/// The clock sequence and the node identifier are resolved on the first [`tick`](Self::tick).
/// The state itself performs no locking; share it through a lock (e.g., by putting the owning
/// [`TimeBasedGenerator`](crate::TimeBasedGenerator) in a `Mutex`) to serialize concurrent
/// callers.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct ClockState {
    /// Last clock reading.
    last_observed: u64,
    /// Last timestamp emitted, which may run ahead of `last_observed` when readings repeat.
    last_timestamp: u64,
    clock_sequence: Option<u16>,
    node_id: Option<[u8; 6]>,
}

impl ClockState {
    /// Creates an uninitialized state.
    pub const fn new() -> Self {
        Self {
            last_observed: 0,
            last_timestamp: 0,
            clock_sequence: None,
            node_id: None,
        }
    }

    /// Creates a state with a predetermined clock sequence and node identifier.
    ///
    /// # Panics
    ///
    /// Panics if `clock_sequence` is not a 14-bit integer.
    pub const fn with_node(clock_sequence: u16, node_id: [u8; 6]) -> Self {
        assert!(
            clock_sequence <= MAX_CLOCK_SEQUENCE,
            "`clock_sequence` must be a 14-bit integer"
        );
        Self {
            last_observed: 0,
            last_timestamp: 0,
            clock_sequence: Some(clock_sequence),
            node_id: Some(node_id),
        }
    }

    /// Returns the current clock sequence, if already resolved.
    pub const fn clock_sequence(&self) -> Option<u16> {
        self.clock_sequence
    }

    /// Returns the current node identifier, if already resolved.
    pub const fn node_id(&self) -> Option<[u8; 6]> {
        self.node_id
    }

    /// Returns the last timestamp emitted.
    pub const fn last_timestamp(&self) -> u64 {
        self.last_timestamp
    }

    /// Advances the state with a clock reading and returns the field values for the next UUID.
    ///
    /// `now` is the count of 100-nanosecond ticks since the Gregorian reform; bits above the 60th
    /// are ignored.
    ///
    /// - If `now` is smaller than the previous reading, the clock has moved backward and a new
    ///   clock sequence is generated so that the timestamps reused do not collide with those
    ///   already emitted.
    /// - Otherwise, if `now` does not exceed the last timestamp emitted, the last timestamp plus
    ///   one is emitted instead, keeping successive UUIDs distinct and increasing even when the
    ///   clock reading repeats.
    ///
    /// The reading is then recorded as the previous reading.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if `rng` fails
    /// while a clock sequence or a random node identifier is generated.
    pub fn tick(
        &mut self,
        now: u64,
        rng: &mut impl RandSource,
        nodes: &mut impl NodeSource,
    ) -> Result<TimeBasedFields> {
        let node_id = match self.node_id {
            Some(node_id) => node_id,
            None => resolve_node_id(rng, nodes)?,
        };
        let mut clock_sequence = match self.clock_sequence {
            Some(clock_sequence) => clock_sequence,
            None => new_clock_sequence(rng, None)?,
        };

        let now = now & MAX_TIMESTAMP;
        let timestamp = if now < self.last_observed {
            clock_sequence = new_clock_sequence(rng, Some(clock_sequence))?;
            log::warn!(
                "clock moved backward by {} ticks; clock sequence regenerated",
                self.last_observed - now
            );
            now
        } else if now <= self.last_timestamp {
            log::trace!("clock reading {} already used; advancing timestamp", now);
            (self.last_timestamp + 1) & MAX_TIMESTAMP
        } else {
            now
        };

        self.last_observed = now;
        self.last_timestamp = timestamp;
        self.clock_sequence = Some(clock_sequence);
        self.node_id = Some(node_id);
        Ok(TimeBasedFields {
            timestamp,
            clock_sequence,
            node_id,
        })
    }

    /// Looks up the node identifier again and, only if it differs from the current one, adopts it
    /// with a newly generated clock sequence.
    ///
    /// Returns `true` if the node identifier has changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if `rng` fails.
    /// The state is left unchanged in that case.
    pub fn refresh_node(
        &mut self,
        rng: &mut impl RandSource,
        nodes: &mut impl NodeSource,
    ) -> Result<bool> {
        let node_id = resolve_node_id(rng, nodes)?;
        if self.node_id == Some(node_id) {
            log::debug!("node id unchanged after refresh");
            return Ok(false);
        }

        let clock_sequence = new_clock_sequence(rng, self.clock_sequence)?;
        log::debug!("node id changed; clock sequence regenerated");
        self.node_id = Some(node_id);
        self.clock_sequence = Some(clock_sequence);
        Ok(true)
    }
}

/// Returns the hardware node identifier or, if unavailable, a random one with the multicast bit
/// set as RFC 9562 requires.
fn resolve_node_id(rng: &mut impl RandSource, nodes: &mut impl NodeSource) -> Result<[u8; 6]> {
    if let Some(node_id) = nodes.node_id() {
        log::debug!("using hardware address as node id");
        return Ok(node_id);
    }

    let mut node_id: [u8; 6] = random_bytes(rng)?;
    node_id[0] |= 0x01;
    log::debug!("no hardware address available; using random node id");
    Ok(node_id)
}

/// Generates a random 14-bit clock sequence that differs from `previous`.
fn new_clock_sequence(rng: &mut impl RandSource, previous: Option<u16>) -> Result<u16> {
    let clock_sequence = u16::from_be_bytes(random_bytes(rng)?) & MAX_CLOCK_SEQUENCE;
    if previous == Some(clock_sequence) {
        Ok((clock_sequence + 1) & MAX_CLOCK_SEQUENCE)
    } else {
        Ok(clock_sequence)
    }
}
