//! Inspect command implementation

use anyhow::Result;
use clap::Args;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::table::Table;
use crate::utils::paths::basename;

#[derive(Args)]
pub struct InspectArgs {
    /// CSV files to inspect
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,
}

/// Preview what a merge of these files would look like: per-file header
/// and row count, plus the unioned column set when headers differ.
pub fn run(args: InspectArgs) -> Result<()> {
    let mut headers_seen: HashSet<Vec<String>> = HashSet::new();
    let mut columns: Vec<String> = Vec::new();
    let mut known: HashSet<String> = HashSet::new();

    for path in &args.files {
        match Table::read(path) {
            Ok(table) => {
                println!(
                    "{}: {} columns, {} rows",
                    basename(path),
                    table.header.len(),
                    table.rows.len()
                );
                println!("  columns: {}", table.header.join(", "));
                for name in &table.header {
                    if known.insert(name.clone()) {
                        columns.push(name.clone());
                    }
                }
                headers_seen.insert(table.header);
            }
            Err(err) => {
                println!("{}: unreadable ({})", basename(path), err);
            }
        }
    }

    if headers_seen.len() > 1 {
        println!("Headers differ; merging would union {} columns: {}", columns.len(), columns.join(", "));
    } else if !headers_seen.is_empty() {
        println!("All readable files share the same header.");
    }
    Ok(())
}
