//! A Rust implementation of RFC 9562 UUID versions 1, 3, 4, 5, 6, 7 and 8
//!
//! ```rust
//! use rfcuuid::{uuid1, uuid4, uuid5, uuid6, uuid7, Uuid};
//!
//! let uuid = uuid7()?;
//! println!("{}", uuid); // e.g. "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", uuid.to_octets()); // as 16-byte big-endian array
//!
//! println!("{}", uuid1()?); // e.g. "c232ab00-9414-11ec-b3c8-9f6bdeced846"
//! println!("{}", uuid6()?); // e.g. "1ec9414c-232a-6b00-b3c8-9f6bdeced846"
//! println!("{}", uuid4()?); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//!
//! let uuid = uuid5(&Uuid::NAMESPACE_DNS, "example.com");
//! assert_eq!(uuid.to_string(), "cfbff0d1-9375-5685-968c-48ce8b15ae17");
//! # Ok::<(), rfcuuid::Error>(())
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562).
//!
//! # Byte order
//!
//! [`Uuid`] keeps its value in the word order of in-memory GUID structures, where the first
//! three fields are little-endian. Everything that leaves the crate (strings, [`Uuid::to_octets`],
//! `u128`, serde) uses the canonical big-endian octets; the [`layout`] module converts between
//! the two.
//!
//! # Time-based versions
//!
//! UUIDv1 and UUIDv6 share a single clock sequence and node identifier. The free functions
//! [`uuid1()`] and [`uuid6()`] use a process-wide [`TimeBasedGenerator`]; create your own
//! instance to supply a custom clock, random number generator or node identifier.
//!
//! ```rust
//! use rfcuuid::clock::{RandomNodeId, StdSystemTime};
//! use rfcuuid::{OsRandSource, TimeBasedGenerator};
//!
//! let rng = OsRandSource::default();
//! let mut g = TimeBasedGenerator::with_sources(StdSystemTime, rng, RandomNodeId);
//! let x = g.generate_v6()?;
//! let y = g.generate_v6()?;
//! assert!(x < y);
//! # Ok::<(), rfcuuid::Error>(())
//! ```
//!
//! # Crate features
//!
//! - `hardware-node` (default): looks up the MAC address of a network interface for the node
//!   identifier of UUIDv1 and UUIDv6. A random node identifier is used otherwise.
//! - `serde`: serializes [`Uuid`] as a string or as sixteen canonical octets.
//! - `uuid`: converts [`Uuid`] from and into `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, Result};

mod id;
pub use id::{ParseError, Uuid};

pub mod fields;
pub use fields::Variant;

pub mod layout;

pub mod rand_source;
pub use rand_source::{OsRandSource, RandSource};

pub mod clock;

pub mod time_based;
pub use time_based::TimeBasedGenerator;

pub mod name;
#[doc(inline)]
pub use name::{uuid3, uuid5};

pub mod v4;

pub mod v7;

pub mod v8;
#[doc(inline)]
pub use v8::{uuid8, uuid8_from_segments};

mod global_gen;
pub use global_gen::{
    refresh_node_id, uuid1, uuid1_unsynchronized, uuid4, uuid6, uuid6_unsynchronized, uuid7,
    uuid7_at,
};
