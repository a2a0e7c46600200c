use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Name of a word set as listed by the set catalog.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SetId(String);

impl SetId {
    /// Creates a new `SetId`.
    ///
    /// # Errors
    ///
    /// Returns `SetIdError::Empty` when the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, SetIdError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SetIdError::Empty);
        }
        Ok(Self(name))
    }

    /// Returns the underlying set name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SetIdError {
    #[error("set name must not be empty")]
    Empty,
}

impl fmt::Debug for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SetId({})", self.0)
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_names() {
        assert_eq!(SetId::new("  ").unwrap_err(), SetIdError::Empty);
        assert_eq!(SetId::new("").unwrap_err(), SetIdError::Empty);
    }

    #[test]
    fn keeps_name_verbatim() {
        let id = SetId::new("animals").unwrap();
        assert_eq!(id.as_str(), "animals");
        assert_eq!(id.to_string(), "animals");
    }
}
