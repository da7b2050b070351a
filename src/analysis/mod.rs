//! Precision-recall curve analysis.
//!
//! [`PrecisionRecallAnalyzer`] borrows two parallel slices, one of precision
//! and one of recall values, and computes the summary statistics of the curve
//! they describe:
//!
//! - [`area_under`](PrecisionRecallAnalyzer::area_under): trapezoidal area
//!   under the anchored curve, optionally with interpolated precision
//! - [`average_precision`](PrecisionRecallAnalyzer::average_precision): mean
//!   of the precision samples
//! - [`break_even_point`](PrecisionRecallAnalyzer::break_even_point):
//!   precision at the first sample whose recall exceeds its precision
//! - [`maximum_f_score`](PrecisionRecallAnalyzer::maximum_f_score): best
//!   pointwise F-beta score
//!
//! Recall is expected to be non-decreasing along the slices. The analyzer
//! does not check this; [`crate::input::validate_inputs`] does.
//!
//! Everything here is generic over [`num_traits::Float`], so the same code
//! serves `f32` and `f64` samples.

mod curve;

pub use curve::{augment_curve, interpolate_precision};

use num_traits::Float;

use crate::error::{Error, Result};

/// Beta used for F-scores when none is given (the F1 score).
pub const DEFAULT_BETA: f64 = 1.0;

/// Trapezoidal area under the polyline through `(x[i], y[i])`.
///
/// Sums `(x[i] - x[i-1]) * (y[i] + y[i-1]) / 2` over consecutive points. `x`
/// is expected to be non-decreasing but this is not checked: segments where
/// `x` decreases contribute negative area. If the slices differ in length
/// only the common prefix is used.
///
/// # Example
///
/// ```
/// use pr_eval::analysis::area_under_curve;
///
/// assert_eq!(area_under_curve(&[0.0, 1.0], &[1.0, 1.0]), 1.0);
/// assert_eq!(area_under_curve(&[0.0, 1.0, 2.0], &[0.0, 0.0, 0.0]), 0.0);
/// ```
#[must_use]
pub fn area_under_curve<T: Float>(x: &[T], y: &[T]) -> T {
    let two = T::one() + T::one();
    let mut area = T::zero();

    for (xs, ys) in x.windows(2).zip(y.windows(2)) {
        area = area + (xs[1] - xs[0]) * (ys[1] + ys[0]) / two;
    }

    area
}

/// Read-only view over a precision-recall curve.
///
/// Holds borrowed precision and recall slices of equal length. All methods
/// are pure and may be called any number of times in any order.
///
/// # Example
///
/// ```
/// use pr_eval::analysis::PrecisionRecallAnalyzer;
///
/// let precisions = [0.9, 0.8, 0.3];
/// let recalls = [0.1, 0.5, 0.9];
/// let analyzer = PrecisionRecallAnalyzer::new(&precisions, &recalls)?;
///
/// assert_eq!(analyzer.break_even_point(), 0.3);
/// assert!(analyzer.area_under(true) >= analyzer.area_under(false));
/// # Ok::<(), pr_eval::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PrecisionRecallAnalyzer<'a, T> {
    precisions: &'a [T],
    recalls: &'a [T],
}

impl<'a, T: Float> PrecisionRecallAnalyzer<'a, T> {
    /// Create an analyzer over caller-owned precision and recall slices.
    ///
    /// Fails with [`Error::LengthMismatch`] when the slices differ in length.
    /// Empty slices are accepted.
    pub fn new(precisions: &'a [T], recalls: &'a [T]) -> Result<Self> {
        if precisions.len() != recalls.len() {
            return Err(Error::LengthMismatch {
                precisions: precisions.len(),
                recalls: recalls.len(),
            });
        }
        Ok(Self {
            precisions,
            recalls,
        })
    }

    /// Number of samples on the curve.
    #[must_use]
    pub fn len(&self) -> usize {
        self.precisions.len()
    }

    /// Check if the curve has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.precisions.is_empty()
    }

    /// The borrowed precision values.
    #[must_use]
    pub fn precisions(&self) -> &'a [T] {
        self.precisions
    }

    /// The borrowed recall values.
    #[must_use]
    pub fn recalls(&self) -> &'a [T] {
        self.recalls
    }

    /// F-beta score of a single precision/recall pair.
    ///
    /// Computes `(1 + beta²) * p * r / (beta² * p + r)`, and returns exactly
    /// zero whenever `p * r == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use pr_eval::analysis::PrecisionRecallAnalyzer;
    ///
    /// let f1: f64 = PrecisionRecallAnalyzer::f_score(0.5, 1.0, 1.0);
    /// assert!((f1 - 2.0 / 3.0).abs() < 1e-12);
    /// assert_eq!(PrecisionRecallAnalyzer::f_score(0.0, 0.0, 2.0), 0.0);
    /// ```
    #[must_use]
    pub fn f_score(precision: T, recall: T, beta: T) -> T {
        let product = precision * recall;
        if product == T::zero() {
            return T::zero();
        }
        let beta_sq = beta * beta;
        (T::one() + beta_sq) * product / (beta_sq * precision + recall)
    }

    /// Maximum F-beta score over all samples.
    ///
    /// Each sample is scored on its own precision and recall. The maximum is
    /// seeded at zero, so an empty curve or one where no score is positive
    /// yields zero.
    #[must_use]
    pub fn maximum_f_score(&self, beta: T) -> T {
        self.precisions
            .iter()
            .zip(self.recalls)
            .map(|(&p, &r)| Self::f_score(p, r, beta))
            .fold(T::zero(), |best, score| if score > best { score } else { best })
    }

    /// Arithmetic mean of the precision samples.
    ///
    /// Fails with [`Error::EmptyInput`] on an empty curve.
    pub fn average_precision(&self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyInput);
        }
        let sum = self.precisions.iter().fold(T::zero(), |sum, &p| sum + p);
        let count = T::from(self.len()).unwrap_or_else(T::infinity);
        Ok(sum / count)
    }

    /// Precision at the first sample where recall strictly exceeds precision.
    ///
    /// This is the literal first-crossing rule, not an interpolated
    /// `precision == recall` point. Returns zero when precision stays at or
    /// above recall for the whole curve, so a zero result is ambiguous with a
    /// genuine crossing at zero precision.
    #[must_use]
    pub fn break_even_point(&self) -> T {
        self.precisions
            .iter()
            .zip(self.recalls)
            .find(|&(&p, &r)| r > p)
            .map_or_else(T::zero, |(&p, _)| p)
    }

    /// Area under the curve anchored at (0, 1) and (1, 0).
    ///
    /// With `interpolate` set, precisions are first replaced by their
    /// right-to-left running maximum (see [`interpolate_precision`]). The
    /// anchor points are added afterwards and are never interpolated.
    #[must_use]
    pub fn area_under(&self, interpolate: bool) -> T {
        let (curve_precisions, curve_recalls) = if interpolate {
            augment_curve(&interpolate_precision(self.precisions), self.recalls)
        } else {
            augment_curve(self.precisions, self.recalls)
        };
        area_under_curve(&curve_recalls, &curve_precisions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = PrecisionRecallAnalyzer::new(&[0.5, 0.5], &[0.5]).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                precisions: 2,
                recalls: 1
            }
        ));
    }

    #[test]
    fn test_f_score_zero_product() {
        for beta in [0.5, 1.0, 2.0, 10.0] {
            assert_eq!(PrecisionRecallAnalyzer::f_score(0.0, 0.7, beta), 0.0);
            assert_eq!(PrecisionRecallAnalyzer::f_score(0.7, 0.0, beta), 0.0);
            assert_eq!(PrecisionRecallAnalyzer::f_score(0.0, 0.0, beta), 0.0);
        }
    }

    #[test]
    fn test_f1_is_harmonic_mean() {
        let (p, r) = (0.6, 0.3);
        assert_close(PrecisionRecallAnalyzer::f_score(p, r, 1.0), 2.0 * p * r / (p + r));
    }

    #[test]
    fn test_f_score_beta_weights_recall() {
        // beta = 2 favours recall, so the high-recall pair scores higher.
        let high_recall = PrecisionRecallAnalyzer::f_score(0.4, 0.9, 2.0);
        let high_precision = PrecisionRecallAnalyzer::f_score(0.9, 0.4, 2.0);
        assert!(high_recall > high_precision);
        assert_close(high_recall, 5.0 * 0.36 / (4.0 * 0.4 + 0.9));
    }

    #[test]
    fn test_maximum_f_score_pointwise() {
        let analyzer = PrecisionRecallAnalyzer::new(&[0.5, 1.0], &[0.25, 0.5]).unwrap();
        assert_close(analyzer.maximum_f_score(1.0), 2.0 / 3.0);
    }

    #[test]
    fn test_maximum_f_score_no_signal() {
        let analyzer = PrecisionRecallAnalyzer::new(&[0.0, 0.9], &[0.4, 0.0]).unwrap();
        assert_eq!(analyzer.maximum_f_score(1.0), 0.0);

        let empty = PrecisionRecallAnalyzer::<f64>::new(&[], &[]).unwrap();
        assert_eq!(empty.maximum_f_score(1.0), 0.0);
    }

    #[test]
    fn test_average_precision() {
        let ones = PrecisionRecallAnalyzer::new(&[1.0, 1.0, 1.0], &[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(ones.average_precision().unwrap(), 1.0);

        let zeros = PrecisionRecallAnalyzer::new(&[0.0, 0.0, 0.0], &[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(zeros.average_precision().unwrap(), 0.0);

        let half = PrecisionRecallAnalyzer::new(&[1.0, 0.0], &[0.1, 0.2]).unwrap();
        assert_eq!(half.average_precision().unwrap(), 0.5);
    }

    #[test]
    fn test_average_precision_f32_divides_by_length() {
        // Past 2^24 an f32 sum of ones stops growing, the divisor must not.
        let n = (1 << 24) + 2;
        let precisions = vec![1.0_f32; n];
        let recalls = vec![0.5_f32; n];
        let analyzer = PrecisionRecallAnalyzer::new(&precisions, &recalls).unwrap();

        let average = analyzer.average_precision().unwrap();
        assert_eq!(average, 16_777_216.0_f32 / 16_777_218.0_f32);
        assert!(average < 1.0);
    }

    #[test]
    fn test_maximum_f_score_default_beta_is_f1() {
        let (p, r) = ([0.4, 0.9, 0.6], [0.2, 0.5, 0.8]);
        let analyzer = PrecisionRecallAnalyzer::new(&p, &r).unwrap();
        let best_f1 = p
            .iter()
            .zip(&r)
            .map(|(&p, &r)| 2.0 * p * r / (p + r))
            .fold(0.0, f64::max);
        assert_close(analyzer.maximum_f_score(DEFAULT_BETA), best_f1);
    }

    #[test]
    fn test_average_precision_empty() {
        let empty = PrecisionRecallAnalyzer::<f32>::new(&[], &[]).unwrap();
        assert!(matches!(empty.average_precision(), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_break_even_first_crossing() {
        let analyzer =
            PrecisionRecallAnalyzer::new(&[0.9, 0.8, 0.3], &[0.1, 0.5, 0.9]).unwrap();
        assert_eq!(analyzer.break_even_point(), 0.3);
    }

    #[test]
    fn test_break_even_requires_strict_crossing() {
        // recall == precision at index 1 is not a crossing.
        let analyzer = PrecisionRecallAnalyzer::new(&[0.9, 0.5, 0.2], &[0.2, 0.5, 0.7]).unwrap();
        assert_eq!(analyzer.break_even_point(), 0.2);
    }

    #[test]
    fn test_break_even_none_found() {
        let analyzer = PrecisionRecallAnalyzer::new(&[1.0, 0.9], &[0.1, 0.9]).unwrap();
        assert_eq!(analyzer.break_even_point(), 0.0);
    }

    #[test]
    fn test_area_single_point() {
        let analyzer = PrecisionRecallAnalyzer::new(&[0.5], &[0.5]).unwrap();
        assert_eq!(analyzer.area_under(false), 0.5);
        assert_eq!(analyzer.area_under(true), 0.5);
    }

    #[test]
    fn test_area_interpolation_fills_dip() {
        let analyzer = PrecisionRecallAnalyzer::new(&[0.5, 1.0], &[0.25, 0.5]).unwrap();
        assert_close(analyzer.area_under(false), 0.625);
        assert_close(analyzer.area_under(true), 0.75);
    }

    #[test]
    fn test_area_empty_curve_uses_anchors() {
        let empty = PrecisionRecallAnalyzer::<f64>::new(&[], &[]).unwrap();
        assert_eq!(empty.area_under(false), 0.5);
    }

    #[test]
    fn test_area_f32() {
        let precisions: [f32; 1] = [0.5];
        let recalls: [f32; 1] = [0.5];
        let analyzer = PrecisionRecallAnalyzer::new(&precisions, &recalls).unwrap();
        assert_eq!(analyzer.area_under(false), 0.5_f32);
    }

    #[test]
    fn test_area_under_curve_primitive() {
        assert_eq!(area_under_curve(&[0.0, 1.0, 2.0], &[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(area_under_curve(&[0.0, 1.0], &[1.0, 1.0]), 1.0);
        assert_eq!(area_under_curve::<f64>(&[], &[]), 0.0);
        assert_eq!(area_under_curve(&[0.3], &[0.9]), 0.0);
    }

    #[test]
    fn test_area_under_curve_signed_for_decreasing_x() {
        assert_close(area_under_curve(&[0.0, 1.0, 0.5], &[1.0, 1.0, 1.0]), 0.5);
        assert_close(area_under_curve(&[1.0, 0.0], &[1.0, 1.0]), -1.0);
    }
}
