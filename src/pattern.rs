use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;
use core::str::FromStr;

use crate::errors::{PatternError, Result};

/// The repeating take-ratio of a merge.
///
/// Position `i` is the number of elements taken from the `i`-th collection in
/// every round. A pattern always names at least two collections and every
/// entry is at least `1`.
///
/// # Examples
///
/// ```
/// use pattern_merge::Pattern;
///
/// let pattern: Pattern = "5, 2, 3".parse().unwrap();
/// assert_eq!(&*pattern, &[5, 2, 3]);
/// assert_eq!(pattern.round_len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    sizes: Vec<usize>,
}

impl Pattern {
    /// Validate a list of group sizes.
    pub fn new(sizes: Vec<usize>) -> Result<Self, PatternError> {
        if sizes.len() < 2 {
            return Err(PatternError::TooShort);
        }
        if sizes.iter().any(|&n| n == 0) {
            return Err(PatternError::NotPositive);
        }
        Ok(Self { sizes })
    }

    /// Validate untyped entries, where `None` marks an entry that was not an
    /// integer and `Some(Err(_))` an integer that is not a valid size.
    fn from_entries(entries: Vec<Option<Result<usize, PatternError>>>) -> Result<Self, PatternError> {
        if entries.len() < 2 {
            return Err(PatternError::TooShort);
        }
        let entries = entries
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or(PatternError::NotIntegers)?;
        let sizes = entries.into_iter().collect::<Result<Vec<usize>, _>>()?;
        Self::new(sizes)
    }

    /// The number of elements a full round takes across all collections.
    ///
    /// Saturates at `usize::MAX`.
    pub fn round_len(&self) -> usize {
        self.sizes
            .iter()
            .fold(0usize, |len, &size| len.saturating_add(size))
    }

    /// The group sizes as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.sizes
    }
}

impl Deref for Pattern {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.sizes
    }
}

impl From<Pattern> for Vec<usize> {
    fn from(pattern: Pattern) -> Self {
        pattern.sizes
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.sizes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// Parses group sizes separated by commas and/or whitespace.
impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(parse_entry)
            .collect();
        Self::from_entries(entries)
    }
}

/// Read one textual entry. Returns `None` unless the token is an optionally
/// signed run of ASCII digits.
fn parse_entry(token: &str) -> Option<Result<usize, PatternError>> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if negative {
        return Some(Err(PatternError::NotPositive));
    }
    Some(digits.parse::<usize>().map_err(|_| PatternError::TooLarge))
}

#[cfg(feature = "serde")]
impl serde::Serialize for Pattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::Serialize as _;

        self.sizes.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Pattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;
        use serde::Deserialize as _;

        // Integers past u64 arrive as floats in self-describing formats.
        const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;
        const I64_LIMIT: f64 = -9_223_372_036_854_775_808.0;

        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Entry {
            Size(u64),
            Negative(i64),
            Float(f64),
            Other(serde::de::IgnoredAny),
        }

        let entries = Vec::<Entry>::deserialize(deserializer)?
            .into_iter()
            .map(|entry| match entry {
                Entry::Size(n) => Some(usize::try_from(n).map_err(|_| PatternError::TooLarge)),
                Entry::Negative(_) => Some(Err(PatternError::NotPositive)),
                Entry::Float(n) if n >= U64_LIMIT => Some(Err(PatternError::TooLarge)),
                Entry::Float(n) if n < I64_LIMIT => Some(Err(PatternError::NotPositive)),
                Entry::Float(_) | Entry::Other(_) => None,
            })
            .collect();
        Self::from_entries(entries).map_err(D::Error::custom)
    }
}

/// Conversion into a [`Pattern`].
///
/// Implemented for anything that reads naturally as a list of group sizes,
/// so constructors can take `[5, 2, 3]`, `vec![5, 2, 3]` or `"5,2,3"`.
pub trait IntoPattern {
    /// Validate `self` and turn it into a pattern.
    fn into_pattern(self) -> Result<Pattern>;
}

impl IntoPattern for Pattern {
    fn into_pattern(self) -> Result<Pattern> {
        Ok(self)
    }
}

impl IntoPattern for Vec<usize> {
    fn into_pattern(self) -> Result<Pattern> {
        Ok(Pattern::new(self)?)
    }
}

impl IntoPattern for &[usize] {
    fn into_pattern(self) -> Result<Pattern> {
        Ok(Pattern::new(self.to_vec())?)
    }
}

impl<const N: usize> IntoPattern for [usize; N] {
    fn into_pattern(self) -> Result<Pattern> {
        Ok(Pattern::new(self.to_vec())?)
    }
}

impl IntoPattern for &str {
    fn into_pattern(self) -> Result<Pattern> {
        Ok(self.parse::<Pattern>()?)
    }
}
