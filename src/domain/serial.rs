use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{3})\.([0-9]{3})$").expect("serial pattern is valid"));

/// A ship serial number.
///
/// Format: `XXX.YYY`, where each group is exactly three decimal digits,
/// `XXX` is between 100 and 300 and `YYY` is between 1 and 999 (inclusive).
///
/// Examples: `150.500`, `100.001`, `300.999`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SerialNumber {
    prefix: u16,
    suffix: u16,
}

impl SerialNumber {
    /// Returns the first group (`XXX`).
    #[must_use]
    pub const fn prefix(&self) -> u16 {
        self.prefix
    }

    /// Returns the second group (`YYY`).
    #[must_use]
    pub const fn suffix(&self) -> u16 {
        self.suffix
    }

    /// Returns `true` if `s` is a well-formed serial number.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        s.parse::<Self>().is_ok()
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:03}.{:03}", self.prefix, self.suffix)
    }
}

/// Errors that can occur while parsing a serial number.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The input is not two three-digit groups separated by a dot.
    #[error("Invalid serial number '{0}': must be in the format XXX.YYY")]
    Syntax(String),

    /// The first group is outside `100..=300`.
    #[error("Invalid serial number '{0}': XXX must be between 100 and 300 (inclusive)")]
    Prefix(String),

    /// The second group is outside `1..=999`.
    #[error("Invalid serial number '{0}': YYY must be between 1 and 999 (inclusive)")]
    Suffix(String),
}

impl FromStr for SerialNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = PATTERN
            .captures(s)
            .ok_or_else(|| Error::Syntax(s.to_string()))?;

        // Both groups are exactly three ASCII digits, so these cannot overflow.
        let group = |i: usize| {
            captures[i]
                .parse::<u16>()
                .map_err(|_| Error::Syntax(s.to_string()))
        };
        let prefix = group(1)?;
        let suffix = group(2)?;

        if !(100..=300).contains(&prefix) {
            return Err(Error::Prefix(s.to_string()));
        }
        if !(1..=999).contains(&suffix) {
            return Err(Error::Suffix(s.to_string()));
        }

        Ok(Self { prefix, suffix })
    }
}

impl TryFrom<&str> for SerialNumber {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}
