//! Evaluation configuration.

use crate::error::{Error, Result};
use crate::eval::report::Metric;
use crate::input::ElementType;

/// Configuration for curve evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalConfig {
    /// How many outputs to compute, taken in [`Metric::ALL`] order.
    pub outputs: usize,

    /// Extra betas to report the maximum F-score at.
    pub betas: Vec<f64>,

    /// Float width used when evaluating owned `f64` curves.
    pub element_type: ElementType,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            outputs: Metric::ALL.len(),
            betas: Vec::new(),
            element_type: ElementType::Double,
        }
    }
}

impl EvalConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> EvalConfigBuilder {
        EvalConfigBuilder::default()
    }

    /// The metrics selected by `outputs`, in output order.
    #[must_use]
    pub fn metrics(&self) -> &'static [Metric] {
        &Metric::ALL[..self.outputs.min(Metric::ALL.len())]
    }
}

/// Builder for [`EvalConfig`].
#[derive(Debug, Default)]
pub struct EvalConfigBuilder {
    outputs: Option<usize>,
    betas: Vec<f64>,
    element_type: Option<ElementType>,
}

impl EvalConfigBuilder {
    /// Set the number of outputs (0 to 5).
    #[must_use]
    pub fn outputs(mut self, outputs: usize) -> Self {
        self.outputs = Some(outputs);
        self
    }

    /// Add a beta to report the maximum F-score at.
    #[must_use]
    pub fn beta(mut self, beta: f64) -> Self {
        self.betas.push(beta);
        self
    }

    /// Replace the list of extra betas.
    #[must_use]
    pub fn betas(mut self, betas: Vec<f64>) -> Self {
        self.betas = betas;
        self
    }

    /// Set the float width for owned curves.
    #[must_use]
    pub fn element_type(mut self, element_type: ElementType) -> Self {
        self.element_type = Some(element_type);
        self
    }

    /// Build the configuration.
    ///
    /// Fails if more outputs are requested than exist, if a beta is not a
    /// finite positive number, or if the element type is complex.
    pub fn build(self) -> Result<EvalConfig> {
        let outputs = self.outputs.unwrap_or(Metric::ALL.len());
        if outputs > Metric::ALL.len() {
            return Err(Error::InvalidOutputCount {
                requested: outputs,
                max: Metric::ALL.len(),
            });
        }

        if let Some(&beta) = self.betas.iter().find(|b| !b.is_finite() || **b <= 0.0) {
            return Err(Error::InvalidBeta(beta));
        }

        let element_type = self.element_type.unwrap_or(ElementType::Double);
        if !element_type.is_supported() {
            return Err(Error::UnsupportedElementType(element_type));
        }

        Ok(EvalConfig {
            outputs,
            betas: self.betas,
            element_type,
        })
    }
}
