//! Subcommand implementations and shared helpers.

pub mod analyze;
pub mod batch;
pub mod import;

use std::path::Path;

use anyhow::{Context, Result};
use pr_eval::{CsvSchema, CurveReport, ElementType, EvalConfig};
use serde_json::Value;

/// Build a CSV schema from optional column overrides.
pub fn schema(precision_col: Option<String>, recall_col: Option<String>) -> CsvSchema {
    let mut schema = CsvSchema::builder();
    if let Some(col) = precision_col {
        schema = schema.precision_column(col);
    }
    if let Some(col) = recall_col {
        schema = schema.recall_column(col);
    }
    schema.build()
}

/// Build and validate the evaluation config from CLI flags.
pub fn config(element_type: ElementType, outputs: usize, betas: Vec<f64>) -> Result<EvalConfig> {
    EvalConfig::builder()
        .element_type(element_type)
        .outputs(outputs)
        .betas(betas)
        .build()
        .context("Invalid analysis options")
}

/// Print one report as a two-column table.
pub fn print_report(report: &CurveReport) {
    if let Some(name) = &report.name {
        println!("Curve: {}", name);
    }
    println!("Samples: {} ({})", report.samples, report.element_type);
    println!("{:-<44}", "");

    for (metric, value) in report.values() {
        println!("{:<34} {:>9.6}", metric.to_string(), value);
    }
    for score in &report.f_scores {
        println!(
            "{:<34} {:>9.6}",
            format!("maximum F-score (beta = {})", score.beta),
            score.maximum_f_score
        );
    }
}

/// Write a JSON value to a file.
pub fn write_json(path: &Path, value: &Value) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write to {}", path.display()))
}
