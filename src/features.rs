use anyhow::Result;
use polars::prelude::*;

// === Helper functions ====================================================

/// Integer calendar fields derived from `date`. Day of week counts from
/// Monday = 0; week of year is the ISO week number.
fn calendar_exprs() -> [Expr; 5] {
    let date = || col("date").dt();
    [
        date().year().cast(DataType::Int32).alias("year"),
        date().month().cast(DataType::Int32).alias("month"),
        date().day().cast(DataType::Int32).alias("day"),
        (date().weekday().cast(DataType::Int32) - lit(1)).alias("dayofweek"),
        date().week().cast(DataType::Int32).alias("weekofyear"),
    ]
}

/// Sales lags and trailing mean within each (store, family) series. Each of
/// these only sees rows strictly before the current one.
fn lag_exprs() -> [Expr; 3] {
    let group = [col("store_nbr"), col("family")];
    let sales = || col("sales").cast(DataType::Float64);
    [
        sales().shift(lit(1)).over(group.clone()).alias("sales_lag_1"),
        sales().shift(lit(7)).over(group.clone()).alias("sales_lag_7"),
        sales()
            .shift(lit(1))
            .rolling_mean(RollingOptionsFixedWindow {
                window_size: 7,
                min_periods: 7,
                ..Default::default()
            })
            .over(group)
            .alias("sales_rolling_mean_7"),
    ]
}

/// Add calendar fields, and for training data also the lag features.
///
/// Training rows come back sorted by store, family and date; test rows keep
/// their order.
pub fn add_features(df: &DataFrame, is_train: bool) -> Result<DataFrame> {
    let mut lf = df.clone().lazy().with_columns(calendar_exprs());

    if is_train {
        lf = lf
            .sort(
                ["store_nbr", "family", "date"],
                SortMultipleOptions::default().with_maintain_order(true),
            )
            .with_columns(lag_exprs());
    }

    Ok(lf.collect()?)
}

// === Tests ===============================================================
