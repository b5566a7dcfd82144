// One-hot encoding and train/test schema alignment.
//
// Categories are ordered lexicographically and the smallest one of each
// column is dropped; it becomes the implicit baseline. Because train and
// test are encoded independently and then aligned on the train columns, a
// category that only appears in test is silently lost.

use anyhow::Result;
use polars::prelude::*;
use std::collections::BTreeSet;

/// Categorical columns expanded into indicator columns.
pub const CATEGORICAL_COLUMNS: [&str; 4] = ["family", "city", "state", "type"];

fn indicator_name(column: &str, category: &str) -> String {
    format!("{column}_{category}")
}

/// Distinct non-null values of a string column, in ascending order.
fn sorted_categories(df: &DataFrame, column: &str) -> Result<Vec<String>> {
    let values = df.column(column)?.cast(&DataType::String)?;
    let categories: BTreeSet<String> = values
        .str()?
        .into_iter()
        .flatten()
        .map(str::to_owned)
        .collect();
    Ok(categories.into_iter().collect())
}

/// Replace each column in `columns` with boolean indicator columns, one per
/// category except the first.
pub fn one_hot_encode(df: &DataFrame, columns: &[&str]) -> Result<DataFrame> {
    let mut keep: Vec<Expr> = df
        .get_column_names()
        .into_iter()
        .filter(|name| !columns.contains(&name.as_str()))
        .map(|name| col(name.clone()))
        .collect();

    for &column in columns {
        for category in sorted_categories(df, column)?.into_iter().skip(1) {
            keep.push(
                col(column)
                    .cast(DataType::String)
                    .eq(lit(category.clone()))
                    .fill_null(lit(false))
                    .alias(indicator_name(column, &category)),
            );
        }
    }

    Ok(df.clone().lazy().select(keep).collect()?)
}

/// Reshape `test` to exactly the columns of `train`, in train's order.
///
/// Columns missing from test are filled with zero of the train dtype; columns
/// only test has are dropped.
pub fn align_to(train: &DataFrame, test: &DataFrame) -> Result<DataFrame> {
    let exprs: Vec<Expr> = train
        .get_columns()
        .iter()
        .map(|column| {
            let name = column.name().clone();
            if test.column(name.as_str()).is_ok() {
                col(name)
            } else {
                log::debug!("test is missing column `{name}`, filling with 0");
                lit(0).cast(column.dtype().clone()).alias(name)
            }
        })
        .collect();

    Ok(test.clone().lazy().select(exprs).collect()?)
}

/// Cast every boolean column to `Int8`, leaving other columns untouched.
pub fn bools_to_int(df: &DataFrame) -> Result<DataFrame> {
    let casts: Vec<Expr> = df
        .get_columns()
        .iter()
        .filter(|column| column.dtype() == &DataType::Boolean)
        .map(|column| col(column.name().clone()).cast(DataType::Int8))
        .collect();

    if casts.is_empty() {
        return Ok(df.clone());
    }
    Ok(df.clone().lazy().with_columns(casts).collect()?)
}
