use polars::prelude::*;

/// Console summary of a run: both shapes and the first `preview_rows` rows of
/// the training table.
pub fn format_summary(train: &DataFrame, test: &DataFrame, preview_rows: usize) -> String {
    let (train_rows, train_cols) = train.shape();
    let (test_rows, test_cols) = test.shape();
    format!(
        "Final TRAIN dataset shape: ({train_rows}, {train_cols})\n\
         Final TEST dataset shape: ({test_rows}, {test_cols})\n\
         {}",
        train.head(Some(preview_rows))
    )
}
