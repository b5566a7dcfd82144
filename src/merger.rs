use anyhow::{ensure, Result};
use polars::prelude::*;

const ROW_INDEX: &str = "__row_index";

/// Lookup tables joined onto a sales table. All of them must be unique on
/// their join keys: stores on `store_nbr`, transactions on
/// `(date, store_nbr)`, oil and holidays on `date`.
#[derive(Debug, Clone, Copy)]
pub struct Lookups<'a> {
    pub stores: &'a DataFrame,
    pub transactions: &'a DataFrame,
    pub oil: &'a DataFrame,
    pub holidays: &'a DataFrame,
}

/// Left-join store attributes, transactions, oil price and holiday flag onto
/// `base`, keeping its rows and their order.
pub fn merge_all(base: &DataFrame, lookups: Lookups<'_>) -> Result<DataFrame> {
    let left = JoinArgs::new(JoinType::Left);

    let merged = base
        .clone()
        .lazy()
        .with_row_index(ROW_INDEX, None)
        .join(
            lookups.stores.clone().lazy(),
            [col("store_nbr")],
            [col("store_nbr")],
            left.clone(),
        )
        .join(
            lookups.transactions.clone().lazy(),
            [col("date"), col("store_nbr")],
            [col("date"), col("store_nbr")],
            left.clone(),
        )
        .join(
            lookups.oil.clone().lazy(),
            [col("date")],
            [col("date")],
            left.clone(),
        )
        .join(
            lookups.holidays.clone().lazy(),
            [col("date")],
            [col("date")],
            left,
        )
        .sort([ROW_INDEX], SortMultipleOptions::default())
        .collect()?
        .drop(ROW_INDEX)?;

    ensure!(
        merged.height() == base.height(),
        "merge changed the row count from {} to {}; a lookup table has duplicate join keys",
        base.height(),
        merged.height()
    );

    Ok(merged)
}
