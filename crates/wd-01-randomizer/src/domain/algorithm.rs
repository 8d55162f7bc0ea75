//! Random algorithm identifiers

use std::fmt;
use std::str::FromStr;

use crate::error::RandomizerError;

/// Generator algorithms a `SecureRandomSource` can be built on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RandomAlgorithm {
    /// ChaCha12 block cipher generator seeded from OS entropy.
    #[default]
    StdRng,
    /// Direct reads from the operating system entropy source.
    OsRng,
}

impl RandomAlgorithm {
    /// Canonical configuration name.
    pub fn as_str(self) -> &'static str {
        match self {
            RandomAlgorithm::StdRng => "StdRng",
            RandomAlgorithm::OsRng => "OsRng",
        }
    }
}

impl fmt::Display for RandomAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RandomAlgorithm {
    type Err = RandomizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("StdRng") || name.eq_ignore_ascii_case("ChaCha12") {
            Ok(RandomAlgorithm::StdRng)
        } else if name.eq_ignore_ascii_case("OsRng") || name.eq_ignore_ascii_case("OS") {
            Ok(RandomAlgorithm::OsRng)
        } else {
            Err(RandomizerError::UnsupportedAlgorithm(s.to_string()))
        }
    }
}
