//! CSV import command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use pr_eval::{CsvImporter, CsvSchema};

use super::write_json;

pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    schema: CsvSchema,
    verbose: bool,
) -> Result<()> {
    if verbose {
        eprintln!("Importing from: {}", input.display());
    }

    let curve = CsvImporter::new(schema)
        .import(&input)
        .with_context(|| format!("Failed to import CSV from {}", input.display()))?;

    println!("Imported {} samples", curve.len());

    let is_sorted = curve.recalls.windows(2).all(|w| w[0] <= w[1]);
    if !is_sorted {
        log::warn!("recall values in {} are not monotonic increasing", input.display());
    }

    if let Some(output_path) = output {
        write_json(&output_path, &serde_json::to_value(&curve)?)?;
        println!("Saved to: {}", output_path.display());
    } else {
        println!("{}", serde_json::to_string_pretty(&curve)?);
    }

    Ok(())
}
