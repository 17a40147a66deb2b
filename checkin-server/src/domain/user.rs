//! User identifier type.

use std::fmt;

/// Error returned when parsing an invalid user id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid user id: {reason}")]
pub struct InvalidUserId {
    reason: &'static str,
}

/// An opaque user identifier.
///
/// User accounts live in an external identity system; this server only
/// ever sees the id that a verified session resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Parse a user id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidUserId> {
        if s.is_empty() {
            return Err(InvalidUserId {
                reason: "must not be empty",
            });
        }
        Ok(UserId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
