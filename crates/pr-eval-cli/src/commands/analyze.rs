//! Single-curve analysis command.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use pr_eval::eval::evaluate_curve;
use pr_eval::import::load_curves;
use pr_eval::{CsvSchema, EvalConfig, PrCurve};

use super::{print_report, write_json};

/// Where the curve comes from.
pub enum Source {
    /// A JSON or CSV file.
    File { path: PathBuf, schema: CsvSchema },
    /// Values given on the command line.
    Inline { precisions: Vec<f64>, recalls: Vec<f64> },
}

pub fn run(
    source: Source,
    config: &EvalConfig,
    json: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let curves = match source {
        Source::File { path, schema } => {
            if verbose {
                eprintln!("Loading curve from: {}", path.display());
            }
            load_curves(&path, &schema)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        Source::Inline { precisions, recalls } => {
            if precisions.is_empty() && recalls.is_empty() {
                bail!("Provide --input or both --precisions and --recalls");
            }
            vec![PrCurve::new(precisions, recalls)]
        }
    };

    let mut reports = Vec::with_capacity(curves.len());
    for curve in &curves {
        let report = evaluate_curve(curve, config).with_context(|| {
            format!(
                "Failed to analyse curve '{}'",
                curve.name.as_deref().unwrap_or("<inline>")
            )
        })?;
        reports.push(report);
    }

    let value = if reports.len() == 1 {
        serde_json::to_value(&reports[0])?
    } else {
        serde_json::to_value(&reports)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_report(report);
        }
    }

    if let Some(output_path) = output {
        write_json(&output_path, &value)?;
        if verbose {
            eprintln!("Saved to: {}", output_path.display());
        }
    }

    Ok(())
}
