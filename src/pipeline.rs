// The full preparation run: normalize the lookup feeds, merge them onto
// train and test, add features, encode and align.

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::cleaner::{aggregate_transactions, normalize_holidays, normalize_oil};
use crate::encoder::{align_to, bools_to_int, one_hot_encode, CATEGORICAL_COLUMNS};
use crate::features::add_features;
use crate::loader::RawTables;
use crate::merger::{merge_all, Lookups};

/// Model-ready train and test tables with identical column sets.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub train: DataFrame,
    pub test: DataFrame,
}

fn log_shape(step: &str, name: &str, df: &DataFrame) {
    log::info!("{step}: {name} is {} rows x {} columns", df.height(), df.width());
}

/// Run every preparation step over the raw tables.
pub fn prepare(raw: &RawTables) -> Result<Prepared> {
    log::info!("Processing holidays...");
    let holidays = normalize_holidays(&raw.holidays).context("holiday normalization")?;
    log::debug!("{} distinct holiday dates", holidays.height());

    log::info!("Processing oil prices...");
    let oil = normalize_oil(&raw.oil).context("oil price normalization")?;

    log::info!("Processing transactions...");
    let transactions = aggregate_transactions(&raw.transactions).context("transaction aggregation")?;
    log::debug!(
        "transactions: {} raw rows -> {} (date, store) rows",
        raw.transactions.height(),
        transactions.height()
    );

    log::info!("Merging datasets...");
    let lookups = Lookups {
        stores: &raw.stores,
        transactions: &transactions,
        oil: &oil,
        holidays: &holidays,
    };
    let train = merge_all(&raw.train, lookups).context("merging train")?;
    let test = merge_all(&raw.test, lookups).context("merging test")?;
    log_shape("merge", "train", &train);
    log_shape("merge", "test", &test);

    log::info!("Adding time and lag features...");
    let train = add_features(&train, true).context("train features")?;
    let test = add_features(&test, false).context("test features")?;

    log::info!("Applying one-hot encoding...");
    let train = one_hot_encode(&train, &CATEGORICAL_COLUMNS).context("encoding train")?;
    let test = one_hot_encode(&test, &CATEGORICAL_COLUMNS).context("encoding test")?;
    let test = align_to(&train, &test).context("aligning test to train")?;

    log::info!("Converting boolean columns to int...");
    let train = bools_to_int(&train)?;
    let test = bools_to_int(&test)?;
    log_shape("done", "train", &train);
    log_shape("done", "test", &test);

    Ok(Prepared { train, test })
}
