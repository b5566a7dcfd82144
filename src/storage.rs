// Write prepared DataFrames to Apache Parquet
//
// Load prepared DataFrames back from Parquet

use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const TRAIN_OUTPUT: &str = "train_prepared.parquet";
pub const TEST_OUTPUT: &str = "test_prepared.parquet";

/// Save a DataFrame to a Parquet file
pub fn write_parquet<P: AsRef<Path>>(df: &mut DataFrame, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    ParquetWriter::new(file)
        .with_compression(ParquetCompression::Zstd(None))
        .finish(df)
        .with_context(|| format!("Failed to write Parquet data to {}", path.display()))?;

    Ok(())
}

/// Load a DataFrame from a Parquet file
pub fn read_parquet<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open Parquet file: {}", path.display()))?;

    let df = ParquetReader::new(file)
        .finish()
        .with_context(|| format!("Failed to read Parquet data from {}", path.display()))?;

    Ok(df)
}

/// Write the prepared train and test tables into `dir`, creating it if
/// needed. Returns the two file paths.
pub fn write_prepared<P: AsRef<Path>>(
    dir: P,
    train: &mut DataFrame,
    test: &mut DataFrame,
) -> Result<(PathBuf, PathBuf)> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let train_path = dir.join(TRAIN_OUTPUT);
    let test_path = dir.join(TEST_OUTPUT);
    write_parquet(train, &train_path)?;
    write_parquet(test, &test_path)?;
    Ok((train_path, test_path))
}
