//! Merge command implementation

use anyhow::Result;
use clap::Args;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::merge;

#[derive(Args)]
pub struct MergeArgs {
    /// Input CSV files, merged in the order given
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Destination path for the merged CSV (overwritten if it exists)
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,
}

pub fn run(args: MergeArgs) -> Result<()> {
    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path must not be empty");
    }

    // Drop duplicate selections while keeping the order files were given in.
    let mut seen = HashSet::new();
    let files: Vec<PathBuf> = args.files.into_iter().filter(|path| seen.insert(path.clone())).collect();

    let outcome = merge::merge(&files, &args.output);

    if !outcome.report.is_empty() {
        eprintln!("{}", outcome.report);
    }
    if outcome.success {
        println!("Merge complete!");
        Ok(())
    } else {
        println!("Merge failed!");
        std::process::exit(1);
    }
}
