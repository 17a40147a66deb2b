//! Persistence seams.

mod checkins;

pub use checkins::{CheckInDraft, CheckInStore, MemoryCheckInStore, StoreError};
