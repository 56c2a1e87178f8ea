//! Time-based generator (UUIDv1 and UUIDv6) and related types.
//!
//! # Field and bit layout
//!
//! Both versions carry a 60-bit count of 100-nanosecond ticks since 1582-10-15T00:00:00Z, a
//! 14-bit clock sequence and a 48-bit node identifier. UUIDv1 stores the timestamp from its
//! least significant part:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_high       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! UUIDv6 stores the same timestamp from its most significant part (`time_high`, `time_mid`,
//! `time_low`) so that the octets sort in creation order.

use rand::rngs::OsRng;

use crate::{
    clock::{
        self, ClockState, HardwareNodeId, NodeSource, StdSystemTime, TimeBasedFields, TimeSource,
    },
    fields, layout,
    rand_source::Adapter,
    OsRandSource, RandSource, Result, Uuid,
};

/// Packs time-based field values into UUIDv1 octets.
pub fn pack_v1(fs: &TimeBasedFields) -> [u8; 16] {
    let ts = fs.timestamp;
    let mut bytes = [0u8; 16];
    bytes[..4].copy_from_slice(&(ts as u32).to_be_bytes());
    bytes[4..6].copy_from_slice(&((ts >> 32) as u16).to_be_bytes());
    bytes[6..8].copy_from_slice(&((ts >> 48) as u16 & 0x0fff).to_be_bytes());
    pack_clock_and_node(&mut bytes, fs);
    fields::stamp(&mut bytes, 1);
    bytes
}

/// Packs time-based field values into UUIDv6 octets.
pub fn pack_v6(fs: &TimeBasedFields) -> [u8; 16] {
    let ts = fs.timestamp;
    let mut bytes = [0u8; 16];
    bytes[..4].copy_from_slice(&((ts >> 28) as u32).to_be_bytes());
    bytes[4..6].copy_from_slice(&((ts >> 12) as u16).to_be_bytes());
    bytes[6..8].copy_from_slice(&(ts as u16 & 0x0fff).to_be_bytes());
    pack_clock_and_node(&mut bytes, fs);
    fields::stamp(&mut bytes, 6);
    bytes
}

fn pack_clock_and_node(bytes: &mut [u8; 16], fs: &TimeBasedFields) {
    bytes[8] = (fs.clock_sequence >> 8) as u8 & 0x3f;
    bytes[9] = fs.clock_sequence as u8;
    bytes[10..].copy_from_slice(&fs.node_id);
}

/// Represents a UUIDv1 and UUIDv6 generator that owns a [`ClockState`].
///
/// This type provides the interface to customize the system clock, random number generator and
/// node identifier lookup of the time-based generators. Every method takes `&mut self`, so the
/// borrow checker already rules out unsynchronized access; to share one generator across threads,
/// put it behind a lock of your choice. The following example guarantees the process-wide
/// (cross-thread) uniqueness using Rust's standard synchronization mechanism.
///
/// # Examples
///
/// ```rust
/// use std::{sync, thread};
/// use rfcuuid::TimeBasedGenerator;
///
/// let g = sync::Arc::new(sync::Mutex::new(TimeBasedGenerator::new()));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 let uuid = g.lock().unwrap().generate_v6().unwrap();
///                 println!("{} by thread {}", uuid, i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// # Generator functions
///
/// | Flavor                | Version | Timestamp |
/// | --------------------- | ------- | --------- |
/// | [`generate_v1`]       | 1       | Now       |
/// | [`generate_v6`]       | 6       | Now       |
/// | [`generate_v1_core`]  | 1       | Argument  |
/// | [`generate_v6_core`]  | 6       | Argument  |
///
/// [`generate_v1`]: TimeBasedGenerator::generate_v1
/// [`generate_v6`]: TimeBasedGenerator::generate_v6
/// [`generate_v1_core`]: TimeBasedGenerator::generate_v1_core
/// [`generate_v6_core`]: TimeBasedGenerator::generate_v6_core
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TimeBasedGenerator<T = StdSystemTime, R = OsRandSource, N = HardwareNodeId> {
    state: ClockState,

    /// The system clock used by the generator.
    time_source: T,

    /// The random number generator used by the generator.
    rng: R,

    /// The node identifier lookup used by the generator.
    nodes: N,
}

impl TimeBasedGenerator {
    /// Creates a generator instance that reads the system clock, the operating system's entropy
    /// source and the hardware address of a network interface.
    pub const fn new() -> Self {
        Self::with_sources(StdSystemTime, Adapter(OsRng), HardwareNodeId)
    }
}

impl<T: TimeSource, R: RandSource, N: NodeSource> TimeBasedGenerator<T, R, N> {
    /// Creates a generator instance with the specified clock, random number generator and node
    /// identifier lookup.
    pub const fn with_sources(time_source: T, rng: R, nodes: N) -> Self {
        Self {
            state: ClockState::new(),
            time_source,
            rng,
            nodes,
        }
    }

    /// Returns a reference to the clock state.
    pub const fn state(&self) -> &ClockState {
        &self.state
    }

    /// Advances the clock state with the current time and returns the field values for the next
    /// UUID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the random
    /// number generator fails.
    pub fn next_fields(&mut self) -> Result<TimeBasedFields> {
        let now = clock::gregorian_ticks(self.time_source.unix_time());
        self.next_fields_core(now)
    }

    /// Advances the clock state with `timestamp` (100-nanosecond ticks since the Gregorian
    /// reform) and returns the field values for the next UUID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the random
    /// number generator fails.
    pub fn next_fields_core(&mut self, timestamp: u64) -> Result<TimeBasedFields> {
        self.state.tick(timestamp, &mut self.rng, &mut self.nodes)
    }

    /// Generates a new UUIDv1 object from the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the random
    /// number generator fails.
    pub fn generate_v1(&mut self) -> Result<Uuid> {
        self.next_fields()
            .map(|fs| layout::from_octet_array(pack_v1(&fs)))
    }

    /// Generates a new UUIDv6 object from the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the random
    /// number generator fails.
    pub fn generate_v6(&mut self) -> Result<Uuid> {
        self.next_fields()
            .map(|fs| layout::from_octet_array(pack_v6(&fs)))
    }

    /// Generates a new UUIDv1 object from `timestamp` (100-nanosecond ticks since the Gregorian
    /// reform).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the random
    /// number generator fails.
    pub fn generate_v1_core(&mut self, timestamp: u64) -> Result<Uuid> {
        self.next_fields_core(timestamp)
            .map(|fs| layout::from_octet_array(pack_v1(&fs)))
    }

    /// Generates a new UUIDv6 object from `timestamp` (100-nanosecond ticks since the Gregorian
    /// reform).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the random
    /// number generator fails.
    pub fn generate_v6_core(&mut self, timestamp: u64) -> Result<Uuid> {
        self.next_fields_core(timestamp)
            .map(|fs| layout::from_octet_array(pack_v6(&fs)))
    }

    /// Looks up the node identifier again, regenerating the clock sequence if it has changed.
    ///
    /// Returns `true` if the node identifier has changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the random
    /// number generator fails.
    pub fn refresh_node_id(&mut self) -> Result<bool> {
        self.state.refresh_node(&mut self.rng, &mut self.nodes)
    }
}
