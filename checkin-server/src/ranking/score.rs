//! Hybrid score combining proximity and provider relevance.

/// Weight given to geographic proximity.
pub const PROXIMITY_WEIGHT: f64 = 0.7;

/// Weight given to the provider's own relevance ordering.
pub const RELEVANCE_WEIGHT: f64 = 0.3;

/// Parameters shared by every candidate in one ranking pass.
#[derive(Debug, Clone, Copy)]
pub struct RankingContext {
    /// Number of candidates in the raw result set. Must be at least 1.
    pub total_candidates: usize,

    /// Search radius in meters. Must be positive.
    pub search_radius_meters: f64,
}

/// Compute the hybrid score for one candidate, in `[0, 1]`.
///
/// Blends two signals, weighted 70% proximity / 30% relevance:
///
/// - relevance: `1 - position / total`, so the provider's first result
///   scores highest;
/// - proximity: `1 - min(distance / radius, 1)`, so distances at or
///   beyond the search radius all count as maximally far.
///
/// `relevance_position` is the candidate's zero-based index in the
/// provider's ordering. The result is 1.0 exactly for the provider's
/// first result at zero distance.
///
/// Preconditions (enforced by the request-validation layer, not here):
/// `ctx.total_candidates >= 1` and `ctx.search_radius_meters > 0`.
pub fn hybrid_score(distance_meters: f64, relevance_position: usize, ctx: &RankingContext) -> f64 {
    let relevance = 1.0 - relevance_position as f64 / ctx.total_candidates as f64;

    let normalized = (distance_meters / ctx.search_radius_meters).min(1.0);
    let proximity = 1.0 - normalized;

    RELEVANCE_WEIGHT * relevance + PROXIMITY_WEIGHT * proximity
}
