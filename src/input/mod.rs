//! Dynamically typed sample arrays and their validation.
//!
//! Callers that do not know the element width of their data at compile time
//! (file loaders, the CLI, foreign bindings) hand precision and recall values
//! over as [`SampleArray`]s. [`validate_inputs`] checks the pair and returns a
//! [`CurveView`] that carries an analyzer instantiated at the matching float
//! width.

mod validator;

pub use validator::validate_inputs;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::PrecisionRecallAnalyzer;

/// Numeric representation of the elements of a [`SampleArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    /// 32-bit real floating point.
    Single,
    /// 64-bit real floating point.
    Double,
    /// Pairs of 32-bit floats (real, imaginary).
    ComplexSingle,
    /// Pairs of 64-bit floats (real, imaginary).
    ComplexDouble,
}

impl ElementType {
    /// Whether the analysis can run on this representation.
    #[must_use]
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Single | Self::Double)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::ComplexSingle => "complex single",
            Self::ComplexDouble => "complex double",
        };
        f.write_str(name)
    }
}

/// An array of samples whose element type is known only at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleArray {
    /// 32-bit real values.
    F32(Vec<f32>),
    /// 64-bit real values.
    F64(Vec<f64>),
    /// 32-bit complex values as `[re, im]`.
    Complex32(Vec<[f32; 2]>),
    /// 64-bit complex values as `[re, im]`.
    Complex64(Vec<[f64; 2]>),
}

impl SampleArray {
    /// The element representation of this array.
    #[must_use]
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::F32(_) => ElementType::Single,
            Self::F64(_) => ElementType::Double,
            Self::Complex32(_) => ElementType::ComplexSingle,
            Self::Complex64(_) => ElementType::ComplexDouble,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
            Self::Complex32(v) => v.len(),
            Self::Complex64(v) => v.len(),
        }
    }

    /// Check if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f32>> for SampleArray {
    fn from(values: Vec<f32>) -> Self {
        Self::F32(values)
    }
}

impl From<Vec<f64>> for SampleArray {
    fn from(values: Vec<f64>) -> Self {
        Self::F64(values)
    }
}

/// A validated curve bound to an analyzer of the matching float width.
#[derive(Debug, Clone, Copy)]
pub enum CurveView<'a> {
    /// Curve with 32-bit samples.
    Single(PrecisionRecallAnalyzer<'a, f32>),
    /// Curve with 64-bit samples.
    Double(PrecisionRecallAnalyzer<'a, f64>),
}

impl CurveView<'_> {
    /// Number of samples on the curve.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(a) => a.len(),
            Self::Double(a) => a.len(),
        }
    }

    /// Check if the curve has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element type the analyzer was instantiated with.
    #[must_use]
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Single(_) => ElementType::Single,
            Self::Double(_) => ElementType::Double,
        }
    }
}
