//! Roulette-wheel selection over weighted candidates.

use rand::Rng;

/// Weight substituted when a candidate has none, or one the sampler cannot use
pub const DEFAULT_SELECTION_WEIGHT: f64 = 1.0;

/// Normalize a stored selection weight.
///
/// Absent, zero, negative, NaN and infinite weights all become
/// [`DEFAULT_SELECTION_WEIGHT`], so every candidate keeps a nonzero share.
pub fn normalize_weight(weight: Option<f64>) -> f64 {
    match weight {
        Some(w) if w.is_finite() && w > 0.0 => w,
        _ => DEFAULT_SELECTION_WEIGHT,
    }
}

/// Pick one item with probability proportional to its normalized weight.
///
/// Returns `None` only for an empty slice.
pub fn sample<'a, T, R>(
    items: &'a [T],
    weight_of: impl Fn(&T) -> Option<f64>,
    rng: &mut R,
) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return None;
    }

    let weights: Vec<f64> = items
        .iter()
        .map(|item| normalize_weight(weight_of(item)))
        .collect();
    let total: f64 = weights.iter().sum();
    let draw = rng.random::<f64>() * total;

    items.get(pick_index(&weights, draw))
}

/// Walk `weights` subtracting from `draw`; the first index where the remainder
/// reaches zero wins. Falls back to index 0 if rounding exhausts the walk.
fn pick_index(weights: &[f64], draw: f64) -> usize {
    let mut remaining = draw;
    for (index, weight) in weights.iter().enumerate() {
        remaining -= weight;
        if remaining <= 0.0 {
            return index;
        }
    }
    0
}
