//! plic CLI: batch protein-ligand interaction counting.

use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use plic::analyze::SitePolicy;
use plic::batch::{run_batch_records, BatchConfig, FailurePolicy};
use plic::error::PlicResult;
use plic::manifest::load_manifest;
use plic::mode::{select_mode, Mode};
use plic::report::{results_path, write_results};
use plic::streaming::StreamEmitter;

#[derive(Parser)]
#[command(
    name = "plic",
    version,
    about = "Count protein-ligand interactions for a CSV manifest of complexes",
    long_about = "\
plic merges each protein-ligand pair listed in a CSV manifest into a
temporary complex, detects structural interactions (hydrogen bonds split
by donor orientation, hydrophobic contacts, salt bridges) at each binding
site, and writes a result table of per-record counts alongside the
pass-through affinity label.

The manifest needs four named columns: protein, ligand, key, pk.
Relative structure paths are resolved against the data directory.
Prediction writes results/<manifest_stem>_count_interactions.csv.",
    after_long_help = "\
EXAMPLES:
  # Count interactions for every record of val.csv:
  plic --predict --val_csv_file val.csv --val_data_dir data

  # Keep going past failing records, marking them in the output:
  plic --predict --val_csv_file val.csv --keep_going

  # Sum all binding sites instead of taking the first:
  plic --predict --val_csv_file val.csv --aggregate_sites"
)]
struct Cli {
    /// Training manifest (accepted for interface compatibility; training
    /// itself is unsupported).
    #[arg(long = "csv_file", default_value = "train.csv")]
    csv_file: PathBuf,

    /// Manifest processed by --predict.
    #[arg(long = "val_csv_file", default_value = "val.csv")]
    val_csv_file: PathBuf,

    /// Root for structure paths of --csv_file.
    #[arg(long = "data_dir", default_value = "data")]
    data_dir: PathBuf,

    /// Root for structure paths of --val_csv_file.
    #[arg(long = "val_data_dir", default_value = "data")]
    val_data_dir: PathBuf,

    /// Label reported in streaming events.
    #[arg(long = "model_name", default_value = "test")]
    model_name: String,

    /// Train a model (always fails: nothing to train for this task).
    #[arg(long)]
    train: bool,

    /// Run the interaction-counting batch and write the result table.
    #[arg(long)]
    predict: bool,

    /// Directory for ephemeral combined structures.
    #[arg(long = "temp_dir", default_value = "temp_files")]
    temp_dir: PathBuf,

    /// Directory the result table is written to.
    #[arg(long = "results_dir", default_value = "results")]
    results_dir: PathBuf,

    /// Record per-record failures in the output instead of aborting.
    #[arg(long = "keep_going")]
    keep_going: bool,

    /// Sum interaction counts over all binding sites instead of the first.
    #[arg(long = "aggregate_sites")]
    aggregate_sites: bool,

    /// Emit NDJSON progress events to stderr instead of a progress bar.
    #[arg(long)]
    stream: bool,
}

fn main() -> Result<(), String> {
    if let Err(err) = run_cli() {
        return Err(err.to_string());
    }
    Ok(())
}

fn run_cli() -> PlicResult<()> {
    let cli = Cli::parse();
    match select_mode(cli.train, cli.predict)? {
        Mode::Predict => predict(&cli),
    }
}

fn predict(cli: &Cli) -> PlicResult<()> {
    let config = BatchConfig {
        manifest: cli.val_csv_file.clone(),
        data_dir: cli.val_data_dir.clone(),
        temp_dir: cli.temp_dir.clone(),
        site_policy: if cli.aggregate_sites {
            SitePolicy::Aggregate
        } else {
            SitePolicy::First
        },
        failure_policy: if cli.keep_going {
            FailurePolicy::SkipAndRecord
        } else {
            FailurePolicy::FailFast
        },
    };

    let emitter = StreamEmitter::new(cli.stream);
    let records = load_manifest(&config.manifest, &config.data_dir)?;
    let total = records.len();
    emitter.emit_batch_started(
        &config.manifest.display().to_string(),
        &cli.model_name,
        total,
    );

    let bar = if cli.stream {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar
    };

    let table = run_batch_records(&config, &records, &emitter, |key| {
        bar.set_message(key.to_string());
        bar.inc(1);
    })?;
    bar.finish_and_clear();

    let output = results_path(&cli.results_dir, &config.manifest);
    write_results(&table, &output)?;
    eprintln!(
        "wrote {} rows ({} failed) to {}",
        table.len(),
        table.failures(),
        output.display()
    );
    Ok(())
}
