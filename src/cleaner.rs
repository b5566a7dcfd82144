// Cleaning of the auxiliary feeds before they are joined onto the sales tables.
//
// Every output here is keyed uniquely (date, or date + store) so the merge
// step can rely on many-to-one joins.

use anyhow::Result;
use polars::prelude::*;

/// Boolean view of a flag column that may have been read either as a
/// boolean or as `True`/`False` text.
fn truthy(name: &str) -> Expr {
    let text = col(name).cast(DataType::String);
    text.clone()
        .eq(lit("true"))
        .or(text.clone().eq(lit("True")))
        .or(text.eq(lit("TRUE")))
        .fill_null(lit(false))
}

/// Reduce holiday events to one `(date, is_holiday)` row per date.
///
/// A date is a holiday when at least one of its entries is of type
/// `Holiday` and was not transferred.
pub fn normalize_holidays(holidays: &DataFrame) -> Result<DataFrame> {
    let flagged = col("type")
        .eq(lit("Holiday"))
        .fill_null(lit(false))
        .and(truthy("transferred").not())
        .cast(DataType::Int32)
        .alias("is_holiday");

    let out = holidays
        .clone()
        .lazy()
        .with_column(flagged)
        .group_by([col("date")])
        .agg([col("is_holiday").max().alias("is_holiday")])
        .sort(["date"], SortMultipleOptions::default())
        .collect()?;

    Ok(out)
}

/// Fill gaps in the daily oil price: forward first, then backward for any
/// leading gap.
pub fn normalize_oil(oil: &DataFrame) -> Result<DataFrame> {
    let out = oil
        .clone()
        .lazy()
        .sort(["date"], SortMultipleOptions::default().with_maintain_order(true))
        .with_column(
            col("dcoilwtico")
                .cast(DataType::Float64)
                .fill_null_with_strategy(FillNullStrategy::Forward(None))
                .fill_null_with_strategy(FillNullStrategy::Backward(None))
                .alias("dcoilwtico"),
        )
        .collect()?;

    Ok(out)
}

/// Sum transaction counts so there is exactly one row per (date, store).
pub fn aggregate_transactions(transactions: &DataFrame) -> Result<DataFrame> {
    let out = transactions
        .clone()
        .lazy()
        .group_by([col("date"), col("store_nbr")])
        .agg([col("transactions").sum().alias("transactions")])
        .sort(["date", "store_nbr"], SortMultipleOptions::default())
        .collect()?;

    Ok(out)
}
