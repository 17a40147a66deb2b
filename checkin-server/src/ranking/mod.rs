//! Hybrid ranking of nearby-place results.
//!
//! The upstream provider returns candidates in its own relevance order,
//! which tends to favour prominence over closeness. This module re-ranks
//! candidates by a score that blends geographic proximity (weighted 70%)
//! with the provider's ordering (weighted 30%), then truncates to the
//! top 10.
//!
//! Everything here is pure and stateless: one ranking pass is a function
//! of the origin, the candidate list, and the search radius.

mod rank;
mod score;

pub use rank::{MAX_RESULTS, RankedPlace, rank_places};
pub use score::{PROXIMITY_WEIGHT, RELEVANCE_WEIGHT, RankingContext, hybrid_score};
