//! Ranking pipeline for nearby-place results.
//!
//! Takes the raw ordered candidate list from the search provider and
//! re-ranks it: score every candidate, sort by score descending, keep the
//! top results.

use crate::domain::{GeoPoint, Place, distance_meters};

use super::score::{RankingContext, hybrid_score};

/// Maximum number of places returned after ranking.
pub const MAX_RESULTS: usize = 10;

/// A candidate with its derived distance and hybrid score.
#[derive(Debug, Clone)]
pub struct RankedPlace {
    /// The place itself.
    pub place: Place,

    /// Great-circle distance from the search origin, in meters.
    pub distance_meters: f64,

    /// Hybrid score in `[0, 1]`, higher is better.
    pub score: f64,
}

/// Re-rank a raw provider result set around a search origin.
///
/// Each candidate's relevance position is its index in `places` (the
/// provider's own ordering). The returned list is sorted by score
/// descending and truncated to [`MAX_RESULTS`]; with fewer candidates
/// than that, all of them are returned.
///
/// The sort is stable, so candidates with equal scores keep provider
/// order; exact tie order is not a contract guarantee.
///
/// Precondition: `search_radius_meters > 0` (enforced by request
/// validation).
pub fn rank_places(
    origin: GeoPoint,
    places: &[Place],
    search_radius_meters: f64,
) -> Vec<RankedPlace> {
    if places.is_empty() {
        return Vec::new();
    }

    let ctx = RankingContext {
        total_candidates: places.len(),
        search_radius_meters,
    };

    let mut ranked: Vec<RankedPlace> = places
        .iter()
        .enumerate()
        .map(|(position, place)| {
            let distance = distance_meters(origin, place.location);
            RankedPlace {
                place: place.clone(),
                distance_meters: distance,
                score: hybrid_score(distance, position, &ctx),
            }
        })
        .collect();

    // Stable sort: equal scores keep provider order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(MAX_RESULTS);

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlaceId;

    fn origin() -> GeoPoint {
        GeoPoint::new(40.7128, -74.006).unwrap()
    }

    /// A place roughly `meters` north of the origin.
    fn place_at(id: &str, meters: f64) -> Place {
        // One degree of latitude is ~111,195 m
        let lat = 40.7128 + meters / 111_195.0;
        Place {
            id: PlaceId::parse(id).unwrap(),
            name: format!("Place {id}"),
            location: GeoPoint::new(lat, -74.006).unwrap(),
            address: None,
            kinds: vec!["restaurant".to_string()],
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(rank_places(origin(), &[], 1000.0).is_empty());
    }

    #[test]
    fn fewer_than_max_returns_all() {
        let places: Vec<Place> = (0..4).map(|i| place_at(&format!("p{i}"), i as f64 * 100.0)).collect();
        let ranked = rank_places(origin(), &places, 1000.0);
        assert_eq!(ranked.len(), 4);
    }

    #[test]
    fn truncates_to_max_results() {
        // 15 raw candidates with distinct positions and distances
        let places: Vec<Place> = (0..15)
            .map(|i| place_at(&format!("p{i}"), 50.0 + i as f64 * 60.0))
            .collect();
        let ranked = rank_places(origin(), &places, 1000.0);

        assert_eq!(ranked.len(), MAX_RESULTS);
        for pair in ranked.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "not sorted: {} before {}",
                pair[0].score,
                pair[1].score
            );
        }
    }

    #[test]
    fn nearest_candidate_beats_most_relevant_far_one() {
        // Provider order: the 800 m place is position 0, the 50 m place
        // position 5. Proximity dominance should put the 50 m place first.
        let mut places = vec![place_at("far-relevant", 800.0)];
        places.extend((1..5).map(|i| place_at(&format!("mid{i}"), 400.0 + i as f64 * 10.0)));
        places.push(place_at("near", 50.0));
        places.extend((6..10).map(|i| place_at(&format!("tail{i}"), 900.0)));

        let ranked = rank_places(origin(), &places, 1000.0);
        assert_eq!(ranked[0].place.id.as_str(), "near");
    }

    #[test]
    fn relevance_can_outweigh_a_modest_distance_gap() {
        // 400 m at position 0 beats 100 m at position 9
        let mut places = vec![place_at("relevant", 400.0)];
        places.extend((1..9).map(|i| place_at(&format!("mid{i}"), 950.0)));
        places.push(place_at("close-but-last", 100.0));

        let ranked = rank_places(origin(), &places, 1000.0);
        let relevant_idx = ranked
            .iter()
            .position(|r| r.place.id.as_str() == "relevant")
            .unwrap();
        let close_idx = ranked
            .iter()
            .position(|r| r.place.id.as_str() == "close-but-last")
            .unwrap();
        assert!(relevant_idx < close_idx);
    }

    #[test]
    fn distances_are_carried_through() {
        let places = vec![place_at("p0", 500.0)];
        let ranked = rank_places(origin(), &places, 1000.0);
        assert!((ranked[0].distance_meters - 500.0).abs() < 5.0);
    }
}
