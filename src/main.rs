use clap::Parser;
use std::path::PathBuf;

use sales_prep::{loader, pipeline, report, storage};

/// Prepare the Favorita sales CSVs into model-ready train and test tables.
#[derive(Debug, Parser)]
#[command(name = "sales-prep", version)]
struct Args {
    /// Directory holding train.csv, test.csv, stores.csv, holidays_events.csv,
    /// oil.csv and transactions.csv.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Write train_prepared.parquet and test_prepared.parquet here.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Number of training rows to preview.
    #[arg(long, default_value_t = 10)]
    preview: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    log::info!("Loading data from {}", args.data_dir.display());
    let raw = loader::load_all_tables_from_folder(&args.data_dir)?;
    log::info!("Data loaded successfully");

    let pipeline::Prepared { mut train, mut test } = pipeline::prepare(&raw)?;

    if let Some(dir) = &args.out_dir {
        let (train_path, test_path) = storage::write_prepared(dir, &mut train, &mut test)?;
        log::info!("Wrote {} and {}", train_path.display(), test_path.display());
    }

    println!("{}", report::format_summary(&train, &test, args.preview));
    Ok(())
}
