//! # pr-eval
//!
//! Precision-recall curve analysis.
//!
//! Given parallel arrays of precision and recall samples (recall
//! non-decreasing), this library computes the standard summary statistics of
//! the curve: area under the curve with and without interpolated precision,
//! average precision, break-even point and maximum F-score.
//!
//! ## Quick Start
//!
//! ```rust
//! use pr_eval::PrecisionRecallAnalyzer;
//!
//! let precisions = [1.0, 0.8, 0.6, 0.65];
//! let recalls = [0.1, 0.4, 0.7, 0.9];
//!
//! let analyzer = PrecisionRecallAnalyzer::new(&precisions, &recalls)?;
//! let auc = analyzer.area_under(false);
//! let auc_interp = analyzer.area_under(true);
//! assert!(auc_interp >= auc);
//! assert!(analyzer.maximum_f_score(1.0) > 0.0);
//! # Ok::<(), pr_eval::Error>(())
//! ```
//!
//! For data whose float width is only known at runtime, wrap the arrays in
//! [`SampleArray`] and call [`eval::evaluate`], which validates the input and
//! dispatches to the matching analyzer.
//!
//! ## Modules
//!
//! - [`analysis`]: The generic analyzer and curve primitives
//! - [`input`]: Runtime-typed sample arrays and validation
//! - [`eval`]: Configuration, evaluation entry points and reports
//! - [`import`]: CSV and JSON curve loading
//! - [`error`]: Error types for the library

pub mod analysis;
pub mod error;
pub mod eval;
pub mod import;
pub mod input;

// Re-export commonly used types
pub use analysis::{DEFAULT_BETA, PrecisionRecallAnalyzer, area_under_curve};
pub use error::{Error, Result};
pub use eval::{CurveReport, EvalConfig, Metric};
pub use import::{CsvImporter, CsvSchema, PrCurve};
pub use input::{ElementType, SampleArray};
