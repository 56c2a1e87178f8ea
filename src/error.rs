//! Error types

/// A specialized [`Result`](std::result::Result) type for UUID generation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error returned by fallible UUID generation and conversion functions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A fixed-size input does not have the length required.
    ///
    /// This is raised before any generator state is touched, so the caller may correct the input
    /// and call again.
    #[error("invalid length of `{name}`: expected {expected} bytes, found {actual}")]
    InvalidLength {
        /// Name of the offending argument.
        name: &'static str,
        /// Length required (or the minimum length for octet decoding).
        expected: usize,
        /// Length actually given.
        actual: usize,
    },

    /// The cryptographically secure random number generator failed to produce bytes.
    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(#[from] rand::Error),
}

impl Error {
    /// Returns `Ok(())` if `actual` equals `expected`, or an [`Error::InvalidLength`] otherwise.
    pub(crate) fn check_length(name: &'static str, expected: usize, actual: usize) -> Result<()> {
        if actual == expected {
            Ok(())
        } else {
            Err(Self::InvalidLength {
                name,
                expected,
                actual,
            })
        }
    }
}
