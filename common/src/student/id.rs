use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::student::validate;

/// A student identifier that has passed [`validate::validate_identifier`].
///
/// The only ways to build one are [`FromStr`] and [`TryFrom<String>`], so an
/// invalid identifier never reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(String);

impl StudentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StudentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl TryFrom<String> for StudentId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ValidationError::EmptyIdentifier);
        }
        if !validate::validate_identifier(&value) {
            return Err(ValidationError::InvalidIdentifier(value));
        }
        Ok(Self(value))
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StudentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StudentId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StudentId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
