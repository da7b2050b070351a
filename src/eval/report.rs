//! Report types for evaluation results.
//!
//! This module defines the data structures that evaluation produces and that
//! can be serialized to JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::input::ElementType;

/// One of the summary statistics of a precision-recall curve.
///
/// Variants are declared in output order: asking for `k` outputs yields the
/// first `k` of [`Metric::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Area under the anchored curve.
    AreaUnder,
    /// Area under the anchored curve with interpolated precision.
    AreaUnderInterpolated,
    /// Mean precision.
    AveragePrecision,
    /// Precision at the first sample where recall exceeds precision.
    BreakEvenPoint,
    /// Maximum pointwise F1 score.
    MaximumFScore,
}

impl Metric {
    /// All metrics in output order.
    pub const ALL: [Metric; 5] = [
        Metric::AreaUnder,
        Metric::AreaUnderInterpolated,
        Metric::AveragePrecision,
        Metric::BreakEvenPoint,
        Metric::MaximumFScore,
    ];

    /// Short column label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AreaUnder => "AUC",
            Self::AreaUnderInterpolated => "AUC (interp)",
            Self::AveragePrecision => "AvgPrec",
            Self::BreakEvenPoint => "BEP",
            Self::MaximumFScore => "Max F1",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AreaUnder => "area under curve",
            Self::AreaUnderInterpolated => "area under curve (interpolated)",
            Self::AveragePrecision => "average precision",
            Self::BreakEvenPoint => "break-even point",
            Self::MaximumFScore => "maximum F-score",
        };
        f.write_str(name)
    }
}

/// Maximum F-score at a caller-chosen beta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetaScore {
    /// Weight of recall relative to precision.
    pub beta: f64,
    /// Maximum pointwise F-beta score.
    pub maximum_f_score: f64,
}

/// Results of evaluating one precision-recall curve.
///
/// Metrics that were not requested are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveReport {
    /// Curve name, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Number of samples on the curve.
    pub samples: usize,

    /// Float width the analysis ran at.
    pub element_type: ElementType,

    /// Area under the curve without interpolation.
    pub area_under: Option<f64>,

    /// Area under the curve with interpolated precision.
    pub area_under_interpolated: Option<f64>,

    /// Mean precision.
    pub average_precision: Option<f64>,

    /// Break-even point.
    pub break_even_point: Option<f64>,

    /// Maximum F1 score.
    pub maximum_f_score: Option<f64>,

    /// Maximum F-scores at additional betas.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub f_scores: Vec<BetaScore>,
}

impl CurveReport {
    /// Create an empty report for a curve.
    #[must_use]
    pub fn new(samples: usize, element_type: ElementType) -> Self {
        Self {
            name: None,
            samples,
            element_type,
            area_under: None,
            area_under_interpolated: None,
            average_precision: None,
            break_even_point: None,
            maximum_f_score: None,
            f_scores: Vec::new(),
        }
    }

    /// Get the value of a metric, if it was computed.
    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::AreaUnder => self.area_under,
            Metric::AreaUnderInterpolated => self.area_under_interpolated,
            Metric::AveragePrecision => self.average_precision,
            Metric::BreakEvenPoint => self.break_even_point,
            Metric::MaximumFScore => self.maximum_f_score,
        }
    }

    /// Store the value of a metric.
    pub fn set(&mut self, metric: Metric, value: f64) {
        let slot = match metric {
            Metric::AreaUnder => &mut self.area_under,
            Metric::AreaUnderInterpolated => &mut self.area_under_interpolated,
            Metric::AveragePrecision => &mut self.average_precision,
            Metric::BreakEvenPoint => &mut self.break_even_point,
            Metric::MaximumFScore => &mut self.maximum_f_score,
        };
        *slot = Some(value);
    }

    /// Computed metrics in output order.
    #[must_use]
    pub fn values(&self) -> Vec<(Metric, f64)> {
        Metric::ALL
            .iter()
            .filter_map(|&m| self.get(m).map(|v| (m, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut report = CurveReport::new(3, ElementType::Double);
        assert!(report.values().is_empty());

        report.set(Metric::BreakEvenPoint, 0.3);
        report.set(Metric::AreaUnder, 0.5);

        assert_eq!(report.get(Metric::BreakEvenPoint), Some(0.3));
        assert_eq!(report.get(Metric::MaximumFScore), None);
        assert_eq!(
            report.values(),
            vec![(Metric::AreaUnder, 0.5), (Metric::BreakEvenPoint, 0.3)]
        );
    }

    #[test]
    fn test_json_skips_empty_betas() {
        let mut report = CurveReport::new(1, ElementType::Single);
        report.set(Metric::AreaUnder, 0.5);
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"area_under\":0.5"));
        assert!(json.contains("\"element_type\":\"single\""));
        assert!(!json.contains("f_scores"));
        assert!(!json.contains("name"));
    }

    #[test]
    fn test_metric_order() {
        assert_eq!(Metric::ALL[0], Metric::AreaUnder);
        assert_eq!(Metric::ALL[4], Metric::MaximumFScore);
        assert_eq!(Metric::BreakEvenPoint.to_string(), "break-even point");
    }
}
