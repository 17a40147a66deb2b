//! Check-in types.
//!
//! A check-in records what a user ordered at a place and when they
//! visited. Text fields enforce their length limits at construction time,
//! so a `CheckIn` that exists is always valid.

use std::fmt;

use chrono::{DateTime, Utc};

use super::{GeoPoint, PlaceId, UserId};

/// Maximum length of the dish description.
pub const MAX_DISH_LEN: usize = 100;

/// Maximum length of the optional note.
pub const MAX_NOTE_LEN: usize = 500;

/// Error returned when validating check-in text fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCheckInText {
    /// Dish text is missing or empty
    #[error("dishText is required and must not be empty")]
    EmptyDish,

    /// Dish text exceeds the length limit
    #[error("dishText must be {MAX_DISH_LEN} characters or less")]
    DishTooLong,

    /// Note text exceeds the length limit
    #[error("noteText must be {MAX_NOTE_LEN} characters or less")]
    NoteTooLong,
}

/// The dish a user ordered, at most [`MAX_DISH_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishText(String);

impl DishText {
    /// Parse dish text, enforcing non-emptiness and the length limit.
    pub fn parse(s: &str) -> Result<Self, InvalidCheckInText> {
        if s.is_empty() {
            return Err(InvalidCheckInText::EmptyDish);
        }
        if s.chars().count() > MAX_DISH_LEN {
            return Err(InvalidCheckInText::DishTooLong);
        }
        Ok(DishText(s.to_string()))
    }

    /// Returns the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DishText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An optional free-form note, at most [`MAX_NOTE_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteText(String);

impl NoteText {
    /// Parse note text, enforcing the length limit.
    pub fn parse(s: &str) -> Result<Self, InvalidCheckInText> {
        if s.chars().count() > MAX_NOTE_LEN {
            return Err(InvalidCheckInText::NoteTooLong);
        }
        Ok(NoteText(s.to_string()))
    }

    /// Returns the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a stored check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CheckInId(pub u64);

impl fmt::Display for CheckInId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded visit: which place, what dish, and when.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckIn {
    /// Storage-assigned identifier.
    pub id: CheckInId,

    /// Owner of the check-in.
    pub user: UserId,

    /// Provider id of the place visited.
    pub place_id: PlaceId,

    /// Place name as it was at check-in time.
    pub place_name: String,

    /// Place location as it was at check-in time.
    pub location: GeoPoint,

    /// What was ordered.
    pub dish: DishText,

    /// Optional note.
    pub note: Option<NoteText>,

    /// When the visit happened.
    pub visited_at: DateTime<Utc>,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}
