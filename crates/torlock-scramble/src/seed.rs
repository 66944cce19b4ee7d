//! Reproducible scramble seeds.

use std::error::Error;
use std::fmt::{self, Display};
use std::str::FromStr;

use rand::RngExt as _;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying one scramble sequence.
///
/// Seeds round-trip through their 64-character lowercase hex form, so a
/// scramble can be shared or rerun by quoting its seed. A seed can also be
/// derived from an arbitrary text phrase, which always hashes to the same
/// seed.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use torlock_scramble::ScrambleSeed;
///
/// let seed = ScrambleSeed::from_phrase("daily 2026-08-07");
/// let restored = ScrambleSeed::from_str(&seed.to_string()).unwrap();
/// assert_eq!(seed, restored);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrambleSeed([u8; 32]);

impl ScrambleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread's entropy source.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0_u8; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from a text phrase via SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// The raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Display for ScrambleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// A string that is not a 64-character hex seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedParseError {
    /// The rejected input.
    pub text: String,
}

impl Display for SeedParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid scramble seed {:?}", self.text)
    }
}

impl Error for SeedParseError {}

impl FromStr for ScrambleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SeedParseError { text: s.to_owned() };

        if s.len() != 64 || !s.is_ascii() {
            return Err(err());
        }
        let mut bytes = [0_u8; 32];
        for (byte, chunk) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let chunk = std::str::from_utf8(chunk).map_err(|_| err())?;
            *byte = u8::from_str_radix(chunk, 16).map_err(|_| err())?;
        }
        Ok(Self(bytes))
    }
}
