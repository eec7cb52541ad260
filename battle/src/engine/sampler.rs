//! Weighted selection of one outcome branch

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

use tallgrass_protocol::OutcomeBranch;

/// Draw the index of one branch, weighted by its percentage.
///
/// Negative or non-finite percentages count as zero. When no branch has a
/// usable weight every branch is equally likely. `None` only for an empty
/// slice.
pub fn sample_index<R: Rng + ?Sized>(branches: &[OutcomeBranch], rng: &mut R) -> Option<usize> {
    if branches.is_empty() {
        return None;
    }

    // Scaled into [0, 1] so huge percentages cannot overflow the total
    let max = branches.iter().map(|b| weight(b.percentage)).fold(0.0, f64::max);
    let weights = branches.iter().map(|b| {
        if max > 0.0 {
            weight(b.percentage) / max
        } else {
            0.0
        }
    });

    match WeightedIndex::new(weights) {
        Ok(dist) => Some(dist.sample(rng)),
        Err(e) => {
            tracing::warn!(
                branches = branches.len(),
                error = %e,
                "Degenerate branch probabilities, sampling uniformly"
            );
            Some(rng.gen_range(0..branches.len()))
        }
    }
}

/// Draw one branch, weighted by its percentage. See [`sample_index`].
pub fn sample<'a, R: Rng + ?Sized>(
    branches: &'a [OutcomeBranch],
    rng: &mut R,
) -> Option<&'a OutcomeBranch> {
    sample_index(branches, rng).map(|i| &branches[i])
}

/// Whether the weights are usable as-is (at least one positive, finite weight)
pub fn is_degenerate(branches: &[OutcomeBranch]) -> bool {
    !branches.iter().any(|b| weight(b.percentage) > 0.0)
}

fn weight(percentage: f64) -> f64 {
    if percentage.is_finite() && percentage > 0.0 {
        percentage
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn branches(weights: &[f64]) -> Vec<OutcomeBranch> {
        weights
            .iter()
            .map(|w| OutcomeBranch::new(*w, Vec::new()))
            .collect()
    }

    #[test]
    fn test_empty_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample(&[], &mut rng).is_none());
    }

    #[test]
    fn test_single_branch_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(1);
        let only = branches(&[100.0]);
        for _ in 0..50 {
            assert_eq!(sample_index(&only, &mut rng), Some(0));
        }
    }

    #[test]
    fn test_zero_weight_branch_is_never_chosen() {
        let mut rng = StdRng::seed_from_u64(7);
        let set = branches(&[0.0, 100.0, 0.0]);
        for _ in 0..500 {
            assert_eq!(sample_index(&set, &mut rng), Some(1));
        }
    }

    #[test]
    fn test_all_zero_weights_fall_back_to_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let set = branches(&[0.0, 0.0, 0.0, 0.0]);
        assert!(is_degenerate(&set));

        let mut counts = [0usize; 4];
        for _ in 0..4_000 {
            counts[sample_index(&set, &mut rng).unwrap()] += 1;
        }
        for count in counts {
            assert!(count > 800, "uniform fallback skewed: {:?}", counts);
        }
    }

    #[test]
    fn test_invalid_weights_count_as_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let set = branches(&[f64::NAN, -20.0, 50.0]);
        assert!(!is_degenerate(&set));
        for _ in 0..200 {
            assert_eq!(sample_index(&set, &mut rng), Some(2));
        }
    }

    #[test]
    fn test_frequencies_follow_weights() {
        let mut rng = StdRng::seed_from_u64(2024);
        let set = branches(&[80.0, 20.0]);
        let draws = 20_000;

        let hits = (0..draws)
            .filter(|_| sample_index(&set, &mut rng) == Some(0))
            .count();
        let freq = hits as f64 / draws as f64;
        assert!((freq - 0.8).abs() < 0.02, "observed {}", freq);
    }

    #[test]
    fn test_huge_weights_do_not_overflow() {
        let mut rng = StdRng::seed_from_u64(11);
        let even = branches(&[1e308, 1e308]);
        let mut counts = [0usize; 2];
        for _ in 0..2_000 {
            counts[sample_index(&even, &mut rng).unwrap()] += 1;
        }
        assert!(counts[0] > 800 && counts[1] > 800, "skewed: {:?}", counts);

        let lopsided = branches(&[f64::MAX, 0.0]);
        for _ in 0..200 {
            assert_eq!(sample_index(&lopsided, &mut rng), Some(0));
        }
    }
}
