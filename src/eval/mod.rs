//! Evaluation entry points.
//!
//! [`evaluate`] is the boundary between dynamically typed input and the
//! generic analyzer: it validates the arrays, rejects empty curves, picks the
//! `f32` or `f64` analyzer, and computes the outputs selected by an
//! [`EvalConfig`]. Either every requested output is produced or an error is
//! returned before any is.
//!
//! [`evaluate_batch`] runs independent curves in parallel.

pub mod config;
pub mod report;

pub use config::{EvalConfig, EvalConfigBuilder};
pub use report::{BetaScore, CurveReport, Metric};

use log::{debug, trace};
use num_traits::Float;
use rayon::prelude::*;

use crate::analysis::{DEFAULT_BETA, PrecisionRecallAnalyzer};
use crate::error::{Error, Result};
use crate::import::PrCurve;
use crate::input::{CurveView, ElementType, SampleArray, validate_inputs};

/// Evaluate one curve given as dynamically typed arrays.
///
/// # Example
///
/// ```
/// use pr_eval::{EvalConfig, Metric, SampleArray};
/// use pr_eval::eval::evaluate;
///
/// let precisions = SampleArray::from(vec![0.5]);
/// let recalls = SampleArray::from(vec![0.5]);
/// let config = EvalConfig::builder().outputs(1).build()?;
///
/// let report = evaluate(&precisions, &recalls, &config)?;
/// assert_eq!(report.get(Metric::AreaUnder), Some(0.5));
/// assert_eq!(report.get(Metric::AveragePrecision), None);
/// # Ok::<(), pr_eval::Error>(())
/// ```
pub fn evaluate(
    precisions: &SampleArray,
    recalls: &SampleArray,
    config: &EvalConfig,
) -> Result<CurveReport> {
    let view = validate_inputs(precisions, recalls)?;
    if view.is_empty() {
        return Err(Error::EmptyInput);
    }

    debug!(
        "Evaluating {} samples as {} ({} outputs, {} extra betas)",
        view.len(),
        view.element_type(),
        config.metrics().len(),
        config.betas.len()
    );

    match view {
        CurveView::Single(analyzer) => analyze(&analyzer, ElementType::Single, config),
        CurveView::Double(analyzer) => analyze(&analyzer, ElementType::Double, config),
    }
}

/// Evaluate an owned curve at the float width set in `config`.
///
/// The curve name is copied into the report.
pub fn evaluate_curve(curve: &PrCurve, config: &EvalConfig) -> Result<CurveReport> {
    let (precisions, recalls) = curve.to_sample_arrays(config.element_type);
    let mut report = evaluate(&precisions, &recalls, config)?;
    report.name.clone_from(&curve.name);
    Ok(report)
}

/// Evaluate independent curves in parallel.
///
/// Returns one result per curve, in input order. A failing curve does not
/// affect the others.
pub fn evaluate_batch(curves: &[PrCurve], config: &EvalConfig) -> Vec<Result<CurveReport>> {
    debug!("Evaluating batch of {} curves", curves.len());
    curves
        .par_iter()
        .map(|curve| evaluate_curve(curve, config))
        .collect()
}

fn analyze<T: Float>(
    analyzer: &PrecisionRecallAnalyzer<'_, T>,
    element_type: ElementType,
    config: &EvalConfig,
) -> Result<CurveReport> {
    let widen = |value: T| value.to_f64().unwrap_or(f64::NAN);
    let mut report = CurveReport::new(analyzer.len(), element_type);
    let default_beta = T::from(DEFAULT_BETA).ok_or(Error::InvalidBeta(DEFAULT_BETA))?;

    for &metric in config.metrics() {
        let value = match metric {
            Metric::AreaUnder => analyzer.area_under(false),
            Metric::AreaUnderInterpolated => analyzer.area_under(true),
            Metric::AveragePrecision => analyzer.average_precision()?,
            Metric::BreakEvenPoint => analyzer.break_even_point(),
            Metric::MaximumFScore => analyzer.maximum_f_score(default_beta),
        };
        trace!("{metric}: {}", widen(value));
        report.set(metric, widen(value));
    }

    for &beta in &config.betas {
        let weight = T::from(beta).ok_or(Error::InvalidBeta(beta))?;
        report.f_scores.push(BetaScore {
            beta,
            maximum_f_score: widen(analyzer.maximum_f_score(weight)),
        });
    }

    Ok(report)
}
