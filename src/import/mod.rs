//! Loading precision-recall curves from CSV and JSON files.
//!
//! A curve file holds one precision and one recall value per sample. CSV
//! files are matched against a [`CsvSchema`]; columns that are not named
//! explicitly are found through common aliases, case-insensitively.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pr_eval::import::{CsvImporter, CsvSchema};
//!
//! let schema = CsvSchema::builder()
//!     .precision_column("prec@k")
//!     .recall_column("rec@k")
//!     .build();
//!
//! let curve = CsvImporter::new(schema).import("detector.csv")?;
//! ```

use std::path::Path;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::input::{ElementType, SampleArray};

/// An owned precision-recall curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrCurve {
    /// Curve name, typically the source file stem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Precision value of each sample.
    pub precisions: Vec<f64>,

    /// Recall value of each sample, expected non-decreasing.
    pub recalls: Vec<f64>,
}

impl PrCurve {
    /// Create an unnamed curve.
    #[must_use]
    pub fn new(precisions: Vec<f64>, recalls: Vec<f64>) -> Self {
        Self {
            name: None,
            precisions,
            recalls,
        }
    }

    /// Attach a name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Number of samples, counted on the longer of the two arrays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.precisions.len().max(self.recalls.len())
    }

    /// Check if the curve has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the samples into arrays of the requested element type.
    ///
    /// Values are narrowed for [`ElementType::Single`]. Complex element types
    /// produce complex arrays with a zero imaginary part, which validation
    /// will then reject.
    #[must_use]
    pub fn to_sample_arrays(&self, element_type: ElementType) -> (SampleArray, SampleArray) {
        let convert = |values: &[f64]| match element_type {
            ElementType::Double => SampleArray::F64(values.to_vec()),
            ElementType::Single => SampleArray::F32(values.iter().map(|&v| v as f32).collect()),
            ElementType::ComplexSingle => {
                SampleArray::Complex32(values.iter().map(|&v| [v as f32, 0.0]).collect())
            }
            ElementType::ComplexDouble => {
                SampleArray::Complex64(values.iter().map(|&v| [v, 0.0]).collect())
            }
        };
        (convert(&self.precisions), convert(&self.recalls))
    }
}

/// Schema for CSV import.
#[derive(Debug, Clone, Default)]
pub struct CsvSchema {
    /// Column name for precision values.
    pub precision_column: Option<String>,
    /// Column name for recall values.
    pub recall_column: Option<String>,
}

impl CsvSchema {
    /// Create a schema builder.
    #[must_use]
    pub fn builder() -> CsvSchemaBuilder {
        CsvSchemaBuilder::default()
    }

    /// Create a schema that auto-detects columns from common names.
    #[must_use]
    pub fn auto_detect() -> Self {
        Self::default()
    }

    /// Try to find a column index by name (case-insensitive, with aliases).
    fn find_column(&self, headers: &[&str], primary: Option<&str>, aliases: &[&str]) -> Option<usize> {
        if let Some(name) = primary {
            if let Some(idx) = find_header_index(headers, name) {
                return Some(idx);
            }
        }

        aliases
            .iter()
            .find_map(|alias| find_header_index(headers, alias))
    }
}

/// Builder for CSV schema.
#[derive(Debug, Default)]
pub struct CsvSchemaBuilder {
    schema: CsvSchema,
}

impl CsvSchemaBuilder {
    /// Set the precision column name.
    #[must_use]
    pub fn precision_column(mut self, name: impl Into<String>) -> Self {
        self.schema.precision_column = Some(name.into());
        self
    }

    /// Set the recall column name.
    #[must_use]
    pub fn recall_column(mut self, name: impl Into<String>) -> Self {
        self.schema.recall_column = Some(name.into());
        self
    }

    /// Build the schema.
    #[must_use]
    pub fn build(self) -> CsvSchema {
        self.schema
    }
}

const PRECISION_ALIASES: &[&str] = &["precision", "precisions", "prec", "p"];
const RECALL_ALIASES: &[&str] = &["recall", "recalls", "rec", "r", "tpr"];

/// CSV importer for precision-recall curves.
pub struct CsvImporter {
    schema: CsvSchema,
}

impl CsvImporter {
    /// Create a new importer with the given schema.
    #[must_use]
    pub fn new(schema: CsvSchema) -> Self {
        Self { schema }
    }

    /// Create an importer that auto-detects columns.
    #[must_use]
    pub fn auto_detect() -> Self {
        Self::new(CsvSchema::auto_detect())
    }

    /// Import a curve from a CSV file.
    ///
    /// The curve is named after the file stem.
    pub fn import(&self, path: impl AsRef<Path>) -> Result<PrCurve> {
        let path = path.as_ref();
        let reader = csv::Reader::from_path(path)?;
        let mut curve = self.read(reader)?;
        curve.name = path.file_stem().map(|s| s.to_string_lossy().into_owned());
        debug!("Imported {} samples from {}", curve.len(), path.display());
        Ok(curve)
    }

    /// Import an unnamed curve from any CSV source.
    pub fn import_reader(&self, source: impl std::io::Read) -> Result<PrCurve> {
        self.read(csv::Reader::from_reader(source))
    }

    fn read<R: std::io::Read>(&self, mut reader: csv::Reader<R>) -> Result<PrCurve> {
        let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();

        let precision_idx = self
            .schema
            .find_column(&header_refs, self.schema.precision_column.as_deref(), PRECISION_ALIASES)
            .ok_or_else(|| Error::CsvImport {
                line: 1,
                reason: "Could not find precision column".to_string(),
            })?;

        let recall_idx = self
            .schema
            .find_column(&header_refs, self.schema.recall_column.as_deref(), RECALL_ALIASES)
            .ok_or_else(|| Error::CsvImport {
                line: 1,
                reason: "Could not find recall column".to_string(),
            })?;

        trace!(
            "precision column '{}', recall column '{}'",
            headers[precision_idx], headers[recall_idx]
        );

        let mut precisions = Vec::new();
        let mut recalls = Vec::new();

        for (line_num, record) in reader.records().enumerate() {
            let line = line_num + 2; // +2 for 1-based and header
            let record = record.map_err(|e| Error::CsvImport {
                line,
                reason: e.to_string(),
            })?;

            let precision = record.get(precision_idx).unwrap_or("").trim();
            let recall = record.get(recall_idx).unwrap_or("").trim();

            if precision.is_empty() && recall.is_empty() {
                continue;
            }

            precisions.push(parse_value(precision, "precision", line)?);
            recalls.push(parse_value(recall, "recall", line)?);
        }

        Ok(PrCurve::new(precisions, recalls))
    }
}

fn parse_value(field: &str, column: &str, line: usize) -> Result<f64> {
    field.parse().map_err(|_| Error::CsvImport {
        line,
        reason: format!("Invalid {column} value '{field}'"),
    })
}

/// Find a header index by name (case-insensitive).
fn find_header_index(headers: &[&str], name: &str) -> Option<usize> {
    let name_lower = name.to_lowercase();
    headers.iter().position(|h| h.trim().to_lowercase() == name_lower)
}

/// JSON curve files hold either one curve or a list of curves.
#[derive(Deserialize)]
#[serde(untagged)]
enum CurveFile {
    Many(Vec<PrCurve>),
    One(PrCurve),
}

/// Load every curve stored in a JSON or CSV file.
///
/// Content starting with `{` or `[` is parsed as JSON and JSON errors are
/// returned as is. Anything else is read as CSV with `schema`. Unnamed
/// curves are named after the file stem, with an index suffix when the file
/// holds several.
pub fn load_curves(path: impl AsRef<Path>, schema: &CsvSchema) -> Result<Vec<PrCurve>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    if content.trim_start().starts_with(['{', '[']) {
        let file: CurveFile = serde_json::from_str(&content)?;
        let mut curves = match file {
            CurveFile::Many(curves) => curves,
            CurveFile::One(curve) => vec![curve],
        };
        let multiple = curves.len() > 1;
        for (i, curve) in curves.iter_mut().enumerate() {
            if curve.name.is_none() {
                curve.name = Some(if multiple { format!("{stem}#{i}") } else { stem.clone() });
            }
        }
        debug!("Loaded {} curve(s) from JSON {}", curves.len(), path.display());
        return Ok(curves);
    }

    let importer = CsvImporter::new(schema.clone());
    let curve = importer.import_reader(content.as_bytes())?.with_name(stem);
    debug!("Loaded {} samples from CSV {}", curve.len(), path.display());
    Ok(vec![curve])
}
