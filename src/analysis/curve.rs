//! Working-curve construction for area computation.
//!
//! Area under a precision-recall curve is measured over an augmented copy of
//! the samples: the curve is anchored at (recall 0, precision 1) on the left
//! and (recall 1, precision 0) on the right, whether or not the raw data
//! reaches those corners. Interpolation, when requested, runs on the raw
//! precisions before the anchors are added.

use num_traits::Float;

/// Replace every precision with the maximum precision at equal or higher recall.
///
/// Scans right to left keeping a running maximum seeded at zero, so the
/// result is non-increasing from left to right and pointwise `>=` the input
/// for non-negative precisions.
///
/// # Example
///
/// ```
/// use pr_eval::analysis::interpolate_precision;
///
/// let smoothed = interpolate_precision(&[0.5, 0.9, 0.4, 0.6]);
/// assert_eq!(smoothed, vec![0.9, 0.9, 0.6, 0.6]);
/// ```
#[must_use]
pub fn interpolate_precision<T: Float>(precisions: &[T]) -> Vec<T> {
    let mut interpolated = vec![T::zero(); precisions.len()];
    let mut running_max = T::zero();

    for (slot, &precision) in interpolated.iter_mut().zip(precisions).rev() {
        if precision > running_max {
            running_max = precision;
        }
        *slot = running_max;
    }

    interpolated
}

/// Build the anchored working curve used for area computation.
///
/// Returns `(precisions, recalls)`, each of length `N + 2`: the artificial
/// point (recall 0, precision 1) first, then the input samples in order, then
/// the artificial point (recall 1, precision 0).
#[must_use]
pub fn augment_curve<T: Float>(precisions: &[T], recalls: &[T]) -> (Vec<T>, Vec<T>) {
    let mut curve_precisions = Vec::with_capacity(precisions.len() + 2);
    curve_precisions.push(T::one());
    curve_precisions.extend_from_slice(precisions);
    curve_precisions.push(T::zero());

    let mut curve_recalls = Vec::with_capacity(recalls.len() + 2);
    curve_recalls.push(T::zero());
    curve_recalls.extend_from_slice(recalls);
    curve_recalls.push(T::one());

    (curve_precisions, curve_recalls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolation_removes_dips() {
        let raw = [1.0, 0.5, 0.8, 0.3];
        assert_eq!(interpolate_precision(&raw), vec![1.0, 0.8, 0.8, 0.3]);
    }

    #[test]
    fn test_interpolation_keeps_non_increasing_sequence() {
        let raw = [0.9, 0.8, 0.7];
        assert_eq!(interpolate_precision(&raw), raw.to_vec());
    }

    #[test]
    fn test_interpolation_seeded_at_zero() {
        // Negative precisions are lifted to the zero seed.
        assert_eq!(interpolate_precision(&[-0.5, -0.2]), vec![0.0, 0.0]);
        assert!(interpolate_precision::<f64>(&[]).is_empty());
    }

    #[test]
    fn test_interpolation_f32() {
        let raw: [f32; 3] = [0.2, 0.6, 0.1];
        assert_eq!(interpolate_precision(&raw), vec![0.6_f32, 0.6, 0.1]);
    }

    #[test]
    fn test_augment_adds_anchors() {
        let (p, r) = augment_curve(&[0.7, 0.4], &[0.2, 0.6]);
        assert_eq!(p, vec![1.0, 0.7, 0.4, 0.0]);
        assert_eq!(r, vec![0.0, 0.2, 0.6, 1.0]);
    }

    #[test]
    fn test_augment_empty() {
        let (p, r) = augment_curve::<f64>(&[], &[]);
        assert_eq!(p, vec![1.0, 0.0]);
        assert_eq!(r, vec![0.0, 1.0]);
    }
}
