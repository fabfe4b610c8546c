//! Domain Services
//!
//! Fuzzy ranking of duplicate candidates against a typed name pair.

use kernel::id::CustomerId;
use platform::fuzzy::{FuzzyOptions, match_pattern};

use crate::domain::entities::CustomerSummary;

/// Weight of the first name in the combined score
pub const FIRST_NAME_WEIGHT: f64 = 0.5;
/// Weight of the last name in the combined score
pub const LAST_NAME_WEIGHT: f64 = 0.5;

/// Candidate with its combined score (`0.0` is a perfect match)
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub candidate: CustomerSummary,
    pub score: f64,
}

/// Score one candidate against the typed pair.
///
/// Every non-empty typed key must match its field; empty keys are ignored
/// and their weight drops out of the mean. `None` when nothing was typed or
/// a key does not match.
pub fn score_candidate(
    candidate: &CustomerSummary,
    first_name: &str,
    last_name: &str,
    options: &FuzzyOptions,
) -> Option<f64> {
    let keys = [
        (first_name, candidate.first_name.as_str(), FIRST_NAME_WEIGHT),
        (last_name, candidate.last_name.as_str(), LAST_NAME_WEIGHT),
    ];

    let mut weighted = 0.0;
    let mut weights = 0.0;
    for (pattern, text, weight) in keys {
        if pattern.trim().is_empty() {
            continue;
        }
        let found = match_pattern(pattern, text, options)?;
        weighted += found.score * weight;
        weights += weight;
    }

    (weights > 0.0).then(|| weighted / weights)
}

/// Rank candidates best match first.
///
/// Rejected candidates and the record with id `exclude` (the one being
/// edited) are dropped. Ties keep their input order.
pub fn rank_candidates(
    candidates: &[CustomerSummary],
    first_name: &str,
    last_name: &str,
    exclude: Option<CustomerId>,
    options: &FuzzyOptions,
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .filter(|c| Some(c.id) != exclude)
        .filter_map(|c| {
            score_candidate(c, first_name, last_name, options).map(|score| RankedCandidate {
                candidate: c.clone(),
                score,
            })
        })
        .collect();

    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(first: &str, last: &str) -> CustomerSummary {
        CustomerSummary {
            id: CustomerId::new(),
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    fn names(ranked: &[RankedCandidate]) -> Vec<String> {
        ranked
            .iter()
            .map(|r| format!("{} {}", r.candidate.first_name, r.candidate.last_name))
            .collect()
    }

    fn pool() -> Vec<CustomerSummary> {
        vec![
            summary("Jon", "Doe"),
            summary("Jane", "Dow"),
            summary("John", "Doe"),
            summary("Mark", "Smith"),
        ]
    }

    #[test]
    fn test_rank_orders_by_score() {
        let ranked = rank_candidates(&pool(), "John", "Doe", None, &FuzzyOptions::default());

        assert_eq!(names(&ranked), vec!["John Doe", "Jon Doe"]);
        assert_eq!(ranked[0].score, 0.0);
        assert!((ranked[1].score - 0.125).abs() < 1e-9);
    }

    #[test]
    fn test_rank_excludes_edited_record() {
        let candidates = pool();
        let edited = candidates[2].id;

        let ranked = rank_candidates(
            &candidates,
            "John",
            "Doe",
            Some(edited),
            &FuzzyOptions::default(),
        );

        assert_eq!(names(&ranked), vec!["Jon Doe"]);
    }

    #[test]
    fn test_rank_single_key() {
        let ranked = rank_candidates(&pool(), "Jo", "", None, &FuzzyOptions::default());
        assert_eq!(names(&ranked), vec!["Jon Doe", "John Doe"]);
    }

    #[test]
    fn test_rank_requires_every_typed_key() {
        // First name matches, last name does not
        let ranked = rank_candidates(&pool(), "John", "Smith", None, &FuzzyOptions::default());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_rank_nothing_typed() {
        let ranked = rank_candidates(&pool(), " ", "", None, &FuzzyOptions::default());
        assert!(ranked.is_empty());
    }
}
