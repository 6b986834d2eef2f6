//! Neighbour-based score prediction.
//!
//! ## Algorithm
//! For every unknown item `u`:
//! 1. Take `u`'s similarity row, sorted by descending similarity, without `u`
//! 2. Keep the first `k` entries that belong to the profile
//! 3. Score = mean of their similarities (0 when there are none)
//!
//! Then sort all predictions descending with a stable sort and take the
//! top `N`. Unknown items arrive in ascending id order, so equal scores
//! resolve to the lowest item id.

use crate::profile::Profile;
use data_loader::MovieId;
use similarity::SimilarityMatrix;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PredictorError {
    #[error("Neighbour count k must be greater than 0")]
    ZeroNeighbours,
}

/// Predicted score of one unknown item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub movie_id: MovieId,
    pub score: f64,
}

/// kNN predictor over an item-item similarity matrix
#[derive(Debug, Clone, Copy)]
pub struct Predictor {
    k: usize,
}

impl Predictor {
    pub fn new(k: usize) -> Result<Self, PredictorError> {
        if k == 0 {
            return Err(PredictorError::ZeroNeighbours);
        }
        Ok(Self { k })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Score a single item against the profile
    pub fn score(&self, matrix: &SimilarityMatrix, profile: &Profile, item: MovieId) -> f64 {
        let (count, sum) = matrix
            .neighbours(item)
            .into_iter()
            .filter(|&(other, _)| profile.contains(other))
            .take(self.k)
            .fold((0usize, 0.0), |(count, sum), (_, sim)| (count + 1, sum + sim));

        if count == 0 {
            0.0
        } else {
            sum / count as f64
        }
    }

    /// The Prediction Set: one score per unknown item, in input order
    #[instrument(skip_all, fields(k = self.k, profile = profile.len(), items = unknown_items.len()))]
    pub fn predict(
        &self,
        matrix: &SimilarityMatrix,
        profile: &Profile,
        unknown_items: &[MovieId],
    ) -> Vec<Prediction> {
        let predictions: Vec<Prediction> = unknown_items
            .iter()
            .map(|&movie_id| Prediction {
                movie_id,
                score: self.score(matrix, profile, movie_id),
            })
            .collect();

        let scored = predictions.iter().filter(|p| p.score > 0.0).count();
        debug!(
            "Predicted {} items, {} with a positive score",
            predictions.len(),
            scored
        );
        predictions
    }
}

/// Best `n` predictions, highest score first; ties keep input order
pub fn top_n(mut predictions: Vec<Prediction>, n: usize) -> Vec<Prediction> {
    predictions.sort_by(|a, b| b.score.total_cmp(&a.score));
    predictions.truncate(n);
    predictions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> SimilarityMatrix {
        SimilarityMatrix::from_rows(
            vec![10, 20, 30, 40],
            vec![
                vec![1.0, 0.8, 0.5, 0.1],
                vec![0.8, 1.0, 0.5, 0.3],
                vec![0.5, 0.5, 1.0, 0.9],
                vec![0.1, 0.3, 0.9, 1.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_zero_k_is_rejected() {
        assert_eq!(Predictor::new(0).unwrap_err(), PredictorError::ZeroNeighbours);
        assert_eq!(Predictor::new(3).unwrap().k(), 3);
    }

    #[test]
    fn test_single_profile_neighbour() {
        let profile = Profile::from_items(1, [10]);
        let predictor = Predictor::new(1).unwrap();

        assert_eq!(predictor.score(&matrix(), &profile, 20), 0.8);
    }

    #[test]
    fn test_mean_over_k_profile_neighbours() {
        let profile = Profile::from_items(1, [10, 30, 40]);
        let m = matrix();

        // Row 20 sorted: 10 (0.8), 30 (0.5), 40 (0.3)
        let k2 = Predictor::new(2).unwrap().score(&m, &profile, 20);
        assert!((k2 - 0.65).abs() < 1e-12);

        // Fewer profile neighbours than k: mean over what exists
        let k10 = Predictor::new(10).unwrap().score(&m, &profile, 20);
        assert!((k10 - (0.8 + 0.5 + 0.3) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_neighbours_outside_profile_are_skipped() {
        // Row 30 sorted: 40 (0.9), 10 (0.5), 20 (0.5); 40 is not liked
        let profile = Profile::from_items(1, [10, 20]);
        let score = Predictor::new(1).unwrap().score(&matrix(), &profile, 30);
        assert_eq!(score, 0.5);
    }

    #[test]
    fn test_self_similarity_is_not_a_neighbour() {
        // Item 10 is in the profile but scored anyway: its own 1.0 is skipped
        let profile = Profile::from_items(1, [10]);
        let score = Predictor::new(1).unwrap().score(&matrix(), &profile, 10);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_profile_scores_zero() {
        let profile = Profile::from_items(1, []);
        let predictions = Predictor::new(3)
            .unwrap()
            .predict(&matrix(), &profile, &[10, 20, 30, 40]);

        assert_eq!(predictions.len(), 4);
        assert!(predictions.iter().all(|p| p.score == 0.0));
        let ids: Vec<MovieId> = top_n(predictions, 2).iter().map(|p| p.movie_id).collect();
        assert_eq!(ids, vec![10, 20]);
    }

    #[test]
    fn test_unknown_item_outside_matrix() {
        let profile = Profile::from_items(1, [10]);
        assert_eq!(Predictor::new(1).unwrap().score(&matrix(), &profile, 99), 0.0);
    }

    #[test]
    fn test_top_n_is_stable() {
        let predictions = vec![
            Prediction { movie_id: 1, score: 0.5 },
            Prediction { movie_id: 2, score: 0.9 },
            Prediction { movie_id: 3, score: 0.5 },
            Prediction { movie_id: 4, score: 0.1 },
        ];

        let ids: Vec<MovieId> = top_n(predictions, 3).iter().map(|p| p.movie_id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
