//! Source of cryptographically secure random bytes.

use rand::{rngs::OsRng, CryptoRng, RngCore};

use crate::Result;

/// A trait that defines the random number generator interface consumed by the generators.
///
/// Implementations must be cryptographically secure. A failure must be reported as
/// [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) rather than be papered over
/// with weaker entropy; callers never retry.
pub trait RandSource {
    /// Fills `dest` with random data.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;
}

impl<T: RandSource + ?Sized> RandSource for &mut T {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).try_fill_bytes(dest)
    }
}

/// An adapter that implements [`RandSource`] for [`RngCore`] + [`CryptoRng`] types of `rand`
/// (v0.8) crate.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore + CryptoRng> RandSource for Adapter<T> {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        self.0.try_fill_bytes(dest).map_err(Into::into)
    }
}

/// The default random source that reads the operating system's entropy source on every call.
pub type OsRandSource = Adapter<OsRng>;

/// Returns a fresh buffer of `N` random bytes.
pub(crate) fn random_bytes<const N: usize>(rng: &mut impl RandSource) -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
pub(crate) mod mock {
    //! Deterministic and failing random sources for tests.

    use super::RandSource;
    use crate::Result;

    /// Emits an incrementing byte sequence starting from the given value.
    #[derive(Debug, Default)]
    pub struct SequentialRand(pub u8);

    impl RandSource for SequentialRand {
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
            for e in dest {
                *e = self.0;
                self.0 = self.0.wrapping_add(1);
            }
            Ok(())
        }
    }

    /// Always fails as if the entropy source were unavailable.
    #[derive(Debug, Default)]
    pub struct FailingRand;

    impl RandSource for FailingRand {
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<()> {
            Err(rand::Error::new("entropy source offline").into())
        }
    }
}
