//! Parallel analysis of many curve files.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use pr_eval::eval::evaluate_batch;
use pr_eval::import::load_curves;
use pr_eval::{CsvSchema, EvalConfig, Metric, PrCurve};

use super::write_json;

pub fn run(
    inputs: &[PathBuf],
    config: &EvalConfig,
    json: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let schema = CsvSchema::auto_detect();
    let mut curves: Vec<PrCurve> = Vec::new();

    for path in inputs {
        let loaded = load_curves(path, &schema)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        if verbose {
            eprintln!("Loaded {} curve(s) from {}", loaded.len(), path.display());
        }
        curves.extend(loaded);
    }

    let results = evaluate_batch(&curves, config);

    let mut reports = Vec::new();
    let mut failures = 0;
    for (curve, result) in curves.iter().zip(results) {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                failures += 1;
                log::error!("{}: {}", curve.name.as_deref().unwrap_or("<unnamed>"), e);
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_table(&reports, config);
    }

    if let Some(output_path) = output {
        write_json(&output_path, &serde_json::to_value(&reports)?)?;
        if verbose {
            eprintln!("Saved to: {}", output_path.display());
        }
    }

    if failures > 0 {
        bail!("{} of {} curves could not be analysed", failures, curves.len());
    }

    Ok(())
}

fn print_table(reports: &[pr_eval::CurveReport], config: &EvalConfig) {
    let metrics: &[Metric] = config.metrics();

    print!("{:<24} {:>8}", "Curve", "Samples");
    for metric in metrics {
        print!(" {:>12}", metric.label());
    }
    println!();
    println!("{:-<1$}", "", 33 + 13 * metrics.len());

    for report in reports {
        let name = shorten_name(report.name.as_deref().unwrap_or("-"));

        print!("{:<24} {:>8}", name, report.samples);
        for &metric in metrics {
            match report.get(metric) {
                Some(value) => print!(" {:>12.6}", value),
                None => print!(" {:>12}", "-"),
            }
        }
        println!();
    }
}

/// Fit a curve name into the 22-column name field, keeping its tail.
fn shorten_name(name: &str) -> String {
    if name.chars().count() <= 22 {
        return name.to_string();
    }
    let tail = name.char_indices().rev().nth(18).map_or(name, |(i, _)| &name[i..]);
    format!("...{tail}")
}
