//! Merge batches of CSV files into a single output file.
//!
//! Headers are unioned across files with mismatched schemas and absent
//! values are filled with blanks. Per-file read failures are collected
//! into a diagnostic report instead of aborting the batch; only a failure
//! to write the merged output fails the operation as a whole.

pub mod cli;
pub mod merge;
pub mod report;
pub mod table;
pub mod utils;
