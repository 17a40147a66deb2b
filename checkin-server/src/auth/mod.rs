//! Session verification seam.

mod sessions;

pub use sessions::{MemorySessions, SessionVerifier};
