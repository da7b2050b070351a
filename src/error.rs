//! Error types for pr-eval operations.

use thiserror::Error;

use crate::input::ElementType;

/// Result type alias for pr-eval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating or analysing precision-recall data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The curve has no samples.
    #[error("Empty input: at least one precision/recall pair is required")]
    EmptyInput,

    /// Precision and recall arrays have different lengths.
    #[error(
        "The recall and precision arrays need to have the same number of elements \
         (precisions: {precisions}, recalls: {recalls})"
    )]
    LengthMismatch {
        /// Number of precision values.
        precisions: usize,
        /// Number of recall values.
        recalls: usize,
    },

    /// Precision and recall arrays use different element types.
    #[error(
        "The precision and recall arrays need to have the same data type \
         (precisions: {precisions}, recalls: {recalls})"
    )]
    ElementTypeMismatch {
        /// Element type of the precision array.
        precisions: ElementType,
        /// Element type of the recall array.
        recalls: ElementType,
    },

    /// Element type that cannot be analysed (only real f32/f64 are supported).
    #[error("Unsupported element type: {0} (only real single and double precision are supported)")]
    UnsupportedElementType(ElementType),

    /// Recall values decrease somewhere along the curve.
    #[error(
        "The recall values are not monotonic increasing: recall[{}] = {previous} > recall[{index}] = {current}",
        .index.saturating_sub(1)
    )]
    NonMonotonicRecall {
        /// Index of the first value that is smaller than its predecessor.
        index: usize,
        /// Recall value at `index - 1`.
        previous: f64,
        /// Recall value at `index`.
        current: f64,
    },

    /// More outputs requested than the analysis produces.
    #[error("Invalid output count: {requested} (at most {max} outputs are available)")]
    InvalidOutputCount {
        /// Requested number of outputs.
        requested: usize,
        /// Maximum number of outputs.
        max: usize,
    },

    /// F-score weight that is not a finite positive number.
    #[error("Invalid beta: {0} (expected a finite value > 0)")]
    InvalidBeta(f64),

    /// Error importing CSV data.
    #[error("CSV import error at line {line}: {reason}")]
    CsvImport {
        /// Line number where the error occurred.
        line: usize,
        /// Reason for the failure.
        reason: String,
    },

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_monotonic_message_names_both_indices() {
        let err = Error::NonMonotonicRecall {
            index: 3,
            previous: 0.5,
            current: 0.4,
        };
        let msg = err.to_string();
        assert!(msg.contains("recall[2] = 0.5"));
        assert!(msg.contains("recall[3] = 0.4"));
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = Error::ElementTypeMismatch {
            precisions: ElementType::Single,
            recalls: ElementType::Double,
        };
        assert!(err.to_string().contains("precisions: single"));
        assert!(err.to_string().contains("recalls: double"));
    }
}
