//! Check-in persistence seam.
//!
//! The real backing store (a relational database) is an external
//! collaborator; handlers only see the [`CheckInStore`] trait. The
//! in-memory implementation backs development and tests.
//!
//! Every operation is scoped to the owning user: a check-in that exists
//! but belongs to someone else is indistinguishable from one that does
//! not exist.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::{CheckIn, CheckInId, DishText, GeoPoint, NoteText, PlaceId, UserId};

/// Errors from a check-in store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// No check-in with that id owned by the requesting user
    #[error("check-in not found")]
    NotFound,

    /// Backend failure (for database-backed implementations)
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Fields of a check-in supplied by the user.
///
/// Used both for creation and for full updates; identity and bookkeeping
/// timestamps are the store's responsibility.
#[derive(Debug, Clone)]
pub struct CheckInDraft {
    pub place_id: PlaceId,
    pub place_name: String,
    pub location: GeoPoint,
    pub dish: DishText,
    pub note: Option<NoteText>,
    pub visited_at: DateTime<Utc>,
}

/// Storage for check-ins.
pub trait CheckInStore {
    /// Create a check-in owned by `user`.
    fn create(
        &self,
        user: &UserId,
        draft: CheckInDraft,
    ) -> impl Future<Output = Result<CheckIn, StoreError>> + Send;

    /// List a user's check-ins, most recent visit first.
    fn list_for_user(&self, user: &UserId)
    -> impl Future<Output = Result<Vec<CheckIn>, StoreError>> + Send;

    /// Replace the user-supplied fields of an existing check-in.
    fn update(
        &self,
        user: &UserId,
        id: CheckInId,
        draft: CheckInDraft,
    ) -> impl Future<Output = Result<CheckIn, StoreError>> + Send;

    /// Delete a check-in.
    fn delete(
        &self,
        user: &UserId,
        id: CheckInId,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// In-memory check-in store.
#[derive(Clone, Default)]
pub struct MemoryCheckInStore {
    entries: Arc<RwLock<BTreeMap<CheckInId, CheckIn>>>,
    next_id: Arc<AtomicU64>,
}

impl MemoryCheckInStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored check-ins across all users.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no check-ins.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl CheckInStore for MemoryCheckInStore {
    async fn create(&self, user: &UserId, draft: CheckInDraft) -> Result<CheckIn, StoreError> {
        let id = CheckInId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let now = Utc::now();

        let checkin = CheckIn {
            id,
            user: user.clone(),
            place_id: draft.place_id,
            place_name: draft.place_name,
            location: draft.location,
            dish: draft.dish,
            note: draft.note,
            visited_at: draft.visited_at,
            created_at: now,
            updated_at: now,
        };

        let mut entries = self.entries.write().await;
        entries.insert(id, checkin.clone());
        Ok(checkin)
    }

    async fn list_for_user(&self, user: &UserId) -> Result<Vec<CheckIn>, StoreError> {
        let entries = self.entries.read().await;
        let mut mine: Vec<CheckIn> = entries
            .values()
            .filter(|c| &c.user == user)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.visited_at.cmp(&a.visited_at));
        Ok(mine)
    }

    async fn update(
        &self,
        user: &UserId,
        id: CheckInId,
        draft: CheckInDraft,
    ) -> Result<CheckIn, StoreError> {
        let mut entries = self.entries.write().await;

        let existing = entries
            .get_mut(&id)
            .filter(|c| &c.user == user)
            .ok_or(StoreError::NotFound)?;

        existing.place_id = draft.place_id;
        existing.place_name = draft.place_name;
        existing.location = draft.location;
        existing.dish = draft.dish;
        existing.note = draft.note;
        existing.visited_at = draft.visited_at;
        existing.updated_at = Utc::now();

        Ok(existing.clone())
    }

    async fn delete(&self, user: &UserId, id: CheckInId) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;

        match entries.get(&id) {
            Some(c) if &c.user == user => {
                entries.remove(&id);
                Ok(())
            }
            _ => Err(StoreError::NotFound),
        }
    }
}
