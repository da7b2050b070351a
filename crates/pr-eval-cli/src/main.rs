//! pr-eval CLI - Precision-recall curve analysis tool

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pr_eval::ElementType;

mod commands;

/// Precision-recall curve analysis tool.
#[derive(Parser)]
#[command(name = "pr-eval")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Float width to run the analysis at.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Dtype {
    /// 32-bit floats
    F32,
    /// 64-bit floats
    F64,
}

impl From<Dtype> for ElementType {
    fn from(dtype: Dtype) -> Self {
        match dtype {
            Dtype::F32 => ElementType::Single,
            Dtype::F64 => ElementType::Double,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a precision-recall curve
    Analyze {
        /// Input JSON or CSV file with precision and recall values
        #[arg(short, long, conflicts_with_all = ["precisions", "recalls"])]
        input: Option<PathBuf>,

        /// Comma-separated precision values
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, requires = "recalls")]
        precisions: Vec<f64>,

        /// Comma-separated recall values
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, requires = "precisions")]
        recalls: Vec<f64>,

        /// Float width for the analysis
        #[arg(long, value_enum, default_value = "f64")]
        dtype: Dtype,

        /// Number of outputs (AUC, interpolated AUC, average precision, break-even point, max F1)
        #[arg(long, default_value_t = 5)]
        outputs: usize,

        /// Also report the maximum F-score at this beta (repeatable)
        #[arg(long = "beta")]
        betas: Vec<f64>,

        /// Precision column name (CSV input)
        #[arg(long)]
        precision_col: Option<String>,

        /// Recall column name (CSV input)
        #[arg(long)]
        recall_col: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Output file (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Analyse many curve files in parallel
    Batch {
        /// Input JSON or CSV files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Float width for the analysis
        #[arg(long, value_enum, default_value = "f64")]
        dtype: Dtype,

        /// Number of outputs
        #[arg(long, default_value_t = 5)]
        outputs: usize,

        /// Also report the maximum F-score at this beta (repeatable)
        #[arg(long = "beta")]
        betas: Vec<f64>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Output file (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a CSV curve into a JSON curve file
    Import {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Precision column name
        #[arg(long)]
        precision_col: Option<String>,

        /// Recall column name
        #[arg(long)]
        recall_col: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Analyze {
            input,
            precisions,
            recalls,
            dtype,
            outputs,
            betas,
            precision_col,
            recall_col,
            json,
            output,
        } => {
            let source = match input {
                Some(path) => commands::analyze::Source::File {
                    path,
                    schema: commands::schema(precision_col, recall_col),
                },
                None => commands::analyze::Source::Inline { precisions, recalls },
            };
            let config = commands::config(dtype.into(), outputs, betas)?;
            commands::analyze::run(source, &config, json, output, cli.verbose)
        }
        Commands::Batch {
            inputs,
            dtype,
            outputs,
            betas,
            json,
            output,
        } => {
            let config = commands::config(dtype.into(), outputs, betas)?;
            commands::batch::run(&inputs, &config, json, output, cli.verbose)
        }
        Commands::Import {
            input,
            output,
            precision_col,
            recall_col,
        } => commands::import::run(
            input,
            output,
            commands::schema(precision_col, recall_col),
            cli.verbose,
        ),
    }
}
