//! Domain layer: pure randomizer logic, no I/O.

pub mod algorithm;
pub mod charset;
pub mod guid;

pub use algorithm::RandomAlgorithm;
pub use charset::{
    contains, union, CharacterSet, CHAR_ALPHANUMERICS, CHAR_DIGITS, CHAR_LETTERS, CHAR_LOWERS,
    CHAR_SPECIALS, CHAR_UPPERS,
};
pub use guid::{format_guid, is_canonical_guid, FALLBACK_HOST, GUID_LENGTH};
