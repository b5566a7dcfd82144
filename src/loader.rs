use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::path::Path;

pub const TRAIN_FILE: &str = "train.csv";
pub const TEST_FILE: &str = "test.csv";
pub const STORES_FILE: &str = "stores.csv";
pub const HOLIDAYS_FILE: &str = "holidays_events.csv";
pub const OIL_FILE: &str = "oil.csv";
pub const TRANSACTIONS_FILE: &str = "transactions.csv";

const HOLIDAY_COLUMNS: [&str; 6] = [
    "date",
    "type",
    "locale",
    "locale_name",
    "description",
    "transferred",
];

/// The six raw input tables, exactly as read from disk.
#[derive(Debug, Clone)]
pub struct RawTables {
    pub train: DataFrame,
    pub test: DataFrame,
    pub stores: DataFrame,
    pub holidays: DataFrame,
    pub oil: DataFrame,
    pub transactions: DataFrame,
}

/// Load a single CSV file, optionally requiring a parsed `date` column.
pub fn load_csv_from_file<P: AsRef<Path>>(path: P, parse_dates: bool) -> Result<DataFrame> {
    let path = path.as_ref();
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(CsvParseOptions::default().with_try_parse_dates(parse_dates))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to open file: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to parse CSV in file: {}", path.display()))?;

    if parse_dates {
        let dtype = df
            .column("date")
            .with_context(|| format!("Missing column `date` in file: {}", path.display()))?
            .dtype();
        if dtype != &DataType::Date {
            bail!(
                "Column `date` in {} is not a calendar date (parsed as {dtype})",
                path.display()
            );
        }
    }

    Ok(df)
}

/// Fail unless every name in `required` is a column of `df`.
pub fn ensure_columns(df: &DataFrame, required: &[&str], source: &str) -> Result<()> {
    for name in required {
        if df.column(name).is_err() {
            bail!("Missing column `{name}` in {source}");
        }
    }
    Ok(())
}

/// Load all six input tables from a folder.
pub fn load_all_tables_from_folder<P: AsRef<Path>>(folder: P) -> Result<RawTables> {
    let folder = folder.as_ref();
    let load = |file: &str, parse_dates: bool, required: &[&str]| -> Result<DataFrame> {
        let df = load_csv_from_file(folder.join(file), parse_dates)?;
        ensure_columns(&df, required, file)?;
        log::debug!("{file}: {} rows x {} columns", df.height(), df.width());
        Ok(df)
    };

    let train = load(TRAIN_FILE, true, &["date", "store_nbr", "family", "sales"])?;
    let test = load(TEST_FILE, true, &["date", "store_nbr", "family"])?;
    let stores = load(STORES_FILE, false, &["store_nbr", "city", "state", "type"])?;
    let holidays = load(HOLIDAYS_FILE, true, &HOLIDAY_COLUMNS)?.select(HOLIDAY_COLUMNS)?;
    let oil = load(OIL_FILE, true, &["date", "dcoilwtico"])?;
    let transactions = load(TRANSACTIONS_FILE, true, &["date", "store_nbr", "transactions"])?;

    Ok(RawTables {
        train,
        test,
        stores,
        holidays,
        oil,
        transactions,
    })
}
