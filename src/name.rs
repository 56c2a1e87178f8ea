//! Name-based UUIDs (versions 3 and 5)
//!
//! A name-based UUID is derived deterministically from a namespace ID and a name: the canonical
//! octets of the namespace are concatenated with the octets of the name, hashed, and the first
//! sixteen bytes of the digest become the payload. The same pair always yields the same UUID, in
//! this process, in another one, or in any other conforming implementation.
//!
//! Where possible, prefer version 5 (SHA-1) over version 3 (MD5).

use digest::Digest;
use md5::Md5;
use sha1::Sha1;

use crate::{fields, layout, Uuid};

/// Hash algorithm that derives a name-based UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum HashAlgorithm {
    /// MD5, used by UUIDv3.
    Md5,
    /// SHA-1, used by UUIDv5.
    Sha1,
}

impl HashAlgorithm {
    /// Returns the version number of the UUIDs derived with this algorithm.
    pub const fn version(self) -> u8 {
        match self {
            Self::Md5 => 3,
            Self::Sha1 => 5,
        }
    }

    /// Returns the first sixteen bytes of the digest of the namespace octets followed by `name`.
    pub fn digest(self, namespace: &Uuid, name: &[u8]) -> [u8; 16] {
        match self {
            Self::Md5 => digest_prefix::<Md5>(namespace, name),
            Self::Sha1 => digest_prefix::<Sha1>(namespace, name),
        }
    }
}

fn digest_prefix<D: Digest>(namespace: &Uuid, name: &[u8]) -> [u8; 16] {
    let digest = D::new()
        .chain_update(namespace.to_octets())
        .chain_update(name)
        .finalize();
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    bytes
}

/// Generates a name-based UUID with the hash algorithm specified.
pub fn generate(algorithm: HashAlgorithm, namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    let mut bytes = algorithm.digest(namespace, name.as_ref());
    fields::stamp(&mut bytes, algorithm.version());
    layout::from_octet_array(bytes)
}

/// Generates a UUIDv3 object from a namespace ID and a name by MD5 hashing.
///
/// # Examples
///
/// ```rust
/// use rfcuuid::{uuid3, Uuid};
///
/// let uuid = uuid3(&Uuid::NAMESPACE_DNS, "www.example.com");
/// assert_eq!(uuid.to_string(), "5df41881-3aed-3515-88a7-2f4a814cf09e");
/// ```
pub fn uuid3(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    generate(HashAlgorithm::Md5, namespace, name)
}

/// Generates a UUIDv5 object from a namespace ID and a name by SHA-1 hashing.
///
/// # Examples
///
/// ```rust
/// use rfcuuid::{uuid5, Uuid};
///
/// let uuid = uuid5(&Uuid::NAMESPACE_DNS, "www.example.com");
/// assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
/// ```
pub fn uuid5(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    generate(HashAlgorithm::Sha1, namespace, name)
}

#[cfg(test)]
mod tests {
    use super::{uuid3, uuid5, HashAlgorithm};
    use crate::{fields::Variant, Uuid};

    const NAMESPACES: [Uuid; 4] = [
        Uuid::NAMESPACE_DNS,
        Uuid::NAMESPACE_URL,
        Uuid::NAMESPACE_OID,
        Uuid::NAMESPACE_X500,
    ];

    /// Returns a random printable ASCII string of 50 characters
    fn random_name() -> String {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        (0..50).map(|_| rng.gen_range(32u8..127) as char).collect()
    }

    /// Reproduces published test vectors
    #[test]
    fn reproduces_published_test_vectors() {
        let cases = [
            (
                uuid5(&Uuid::NAMESPACE_DNS, "example.com"),
                "cfbff0d1-9375-5685-968c-48ce8b15ae17",
            ),
            (
                uuid3(&Uuid::NAMESPACE_DNS, "www.example.com"),
                "5df41881-3aed-3515-88a7-2f4a814cf09e",
            ),
            (
                uuid5(&Uuid::NAMESPACE_DNS, "www.example.com"),
                "2ed6657d-e927-568b-95e1-2665a8aea6a2",
            ),
            (
                uuid3(&Uuid::NAMESPACE_URL, "https://example.com/"),
                "b9dcdff8-af4a-365d-8043-0f8361942709",
            ),
            (
                uuid5(&Uuid::NAMESPACE_URL, "https://example.com/"),
                "dd2c1780-811a-5296-81c5-178a0ef488bc",
            ),
            (
                uuid5(&Uuid::NAMESPACE_DNS, ""),
                "4ebd0208-8328-5d69-8c44-ec50939c0967",
            ),
        ];

        for (generated, text) in cases {
            assert_eq!(generated.to_string(), text);
        }
    }

    /// Agrees with uuid crate for random names
    #[test]
    fn agrees_with_uuid_crate_for_random_names() {
        for _ in 0..1_000 {
            let name = random_name();
            for ns in NAMESPACES {
                let uuid_ns = uuid::Uuid::from_bytes(ns.to_octets());
                assert_eq!(
                    uuid3(&ns, &name).to_octets(),
                    *uuid::Uuid::new_v3(&uuid_ns, name.as_bytes()).as_bytes()
                );
                assert_eq!(
                    uuid5(&ns, &name).to_octets(),
                    *uuid::Uuid::new_v5(&uuid_ns, name.as_bytes()).as_bytes()
                );
            }
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for _ in 0..1_000 {
            let name = random_name();
            let v3 = uuid3(&Uuid::NAMESPACE_DNS, &name);
            assert_eq!(v3.variant(), Variant::Var10);
            assert_eq!(v3.version(), Some(3));
            let v5 = uuid5(&Uuid::NAMESPACE_DNS, &name);
            assert_eq!(v5.variant(), Variant::Var10);
            assert_eq!(v5.version(), Some(5));
        }
    }

    /// Generates same UUID for same namespace and name
    #[test]
    fn generates_same_uuid_for_same_namespace_and_name() {
        let custom = Uuid::from(rand::random::<u128>());
        for ns in NAMESPACES.into_iter().chain([custom]) {
            assert_eq!(uuid3(&ns, "Test"), uuid3(&ns, "Test"));
            assert_eq!(uuid5(&ns, "Test"), uuid5(&ns, "Test"));
            assert_eq!(uuid5(&ns, "Test"), uuid5(&ns, String::from("Test")));
            assert_eq!(uuid5(&ns, "Test"), uuid5(&ns, b"Test"));
        }
    }

    /// Generates different UUIDs for different namespaces
    #[test]
    fn generates_different_uuids_for_different_namespaces() {
        use std::collections::HashSet;
        let custom = Uuid::from(rand::random::<u128>());
        let all: Vec<Uuid> = NAMESPACES.into_iter().chain([custom]).collect();

        let v3: HashSet<Uuid> = all.iter().map(|ns| uuid3(ns, "Test")).collect();
        assert_eq!(v3.len(), all.len());
        let v5: HashSet<Uuid> = all.iter().map(|ns| uuid5(ns, "Test")).collect();
        assert_eq!(v5.len(), all.len());
    }

    /// Generates unique UUIDs for distinct names
    #[test]
    fn generates_unique_uuids_for_distinct_names() {
        use std::collections::HashSet;
        let names: HashSet<String> = (0..1_000).map(|_| random_name()).collect();
        let s: HashSet<Uuid> = names
            .iter()
            .map(|name| uuid5(&Uuid::NAMESPACE_DNS, name))
            .collect();
        assert_eq!(s.len(), names.len());
    }

    /// Places namespace before name in hash input
    #[test]
    fn places_namespace_before_name_in_hash_input() {
        use digest::Digest;
        let expected = sha1::Sha1::digest(
            [
                Uuid::NAMESPACE_URL.to_octets().as_slice(),
                b"urn:example".as_slice(),
            ]
            .concat(),
        );
        assert_eq!(
            HashAlgorithm::Sha1.digest(&Uuid::NAMESPACE_URL, b"urn:example"),
            expected[..16]
        );
        assert_eq!(HashAlgorithm::Md5.version(), 3);
        assert_eq!(HashAlgorithm::Sha1.version(), 5);
    }
}
