//! csv-combine: merge CSV files with mismatched schemas into one output.

use anyhow::Result;

fn main() -> Result<()> {
    csv_combine::cli::run()
}
