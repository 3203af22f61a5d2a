//! Best-effort CSV merge.
//!
//! Reads every input it can, unions the observed headers, reindexes each
//! table against the union with blanks for absent columns, and writes one
//! concatenated CSV. Per-file read failures are reported but never fatal
//! to the batch; only the final write can fail the operation.

use crate::report::Report;
use crate::table::Table;
use crate::utils::paths::basename;
use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Emitted once per run when the inputs do not all share the same header
/// tuple, no matter how many files differ.
pub const HEADER_MISMATCH_WARNING: &str = "Warning: Not all files have matching headers. \
     Columns will be unioned and missing values filled with blanks.";

/// Result of one merge invocation. `success` reflects only whether the
/// merged output was written; the report may carry per-file read errors
/// and the header-mismatch warning even on success.
#[derive(Debug)]
pub struct MergeOutcome {
    pub success: bool,
    pub report: Report,
}

/// Merge `file_paths` into one CSV at `output_path`, overwriting it if it
/// exists.
///
/// Files are processed in the order given. A file that cannot be read or
/// parsed contributes zero rows and one report entry and does not block
/// the rest of the batch. The output header is the union of all observed
/// column names in first-seen order across files; rows keep their source
/// values where the source file had the column and are blank elsewhere.
///
/// Success is defined purely by the output write: if every input fails to
/// read, an empty output file is still written and the merge still counts
/// as successful.
pub fn merge(file_paths: &[PathBuf], output_path: &Path) -> MergeOutcome {
    let mut report = Report::new();
    let mut tables: Vec<Table> = Vec::new();
    let mut headers_seen: HashSet<Vec<String>> = HashSet::new();

    // Column union in first-seen order, so output column order is stable
    // across runs for the same input list.
    let mut columns: Vec<String> = Vec::new();
    let mut known: HashSet<String> = HashSet::new();

    for path in file_paths {
        match Table::read(path) {
            Ok(table) => {
                debug!(path = %path.display(), rows = table.rows.len(), "read input file");
                for name in &table.header {
                    if known.insert(name.clone()) {
                        columns.push(name.clone());
                    }
                }
                headers_seen.insert(table.header.clone());
                tables.push(table);
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unreadable input");
                report.push(format!("Error reading {}: {}", basename(path), err));
            }
        }
    }

    if headers_seen.len() > 1 {
        report.push(HEADER_MISMATCH_WARNING);
    }

    match write_merged(&tables, &columns, output_path) {
        Ok(()) => MergeOutcome { success: true, report },
        Err(err) => {
            report.push(format!("Error during merging or saving: {err}"));
            MergeOutcome { success: false, report }
        }
    }
}

fn write_merged(tables: &[Table], columns: &[String], output_path: &Path) -> Result<()> {
    // Zero readable inputs leaves a columnless table; the csv writer
    // cannot emit a zero-field record, so write the empty file directly.
    if columns.is_empty() {
        std::fs::write(output_path, "")?;
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(columns)?;
    for table in tables {
        for row in table.reindex(columns).rows {
            writer.write_record(&row)?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{merge, HEADER_MISMATCH_WARNING};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_csv(tmp: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = tmp.path().join(name);
        fs::write(&path, content).expect("write csv");
        path
    }

    fn read_lines(path: &std::path::Path) -> Vec<String> {
        fs::read_to_string(path).expect("read output").lines().map(str::to_string).collect()
    }

    #[test]
    fn matching_headers_merge_without_warning() {
        let tmp = TempDir::new().expect("tmp");
        let a = write_csv(&tmp, "a.csv", "id,name\n1,Alice\n2,Bob\n");
        let b = write_csv(&tmp, "b.csv", "id,name\n3,Carol\n");
        let out = tmp.path().join("out.csv");

        let outcome = merge(&[a, b], &out);
        assert!(outcome.success);
        assert!(outcome.report.is_empty());
        assert_eq!(read_lines(&out), ["id,name", "1,Alice", "2,Bob", "3,Carol"]);
    }

    #[test]
    fn mismatched_headers_union_columns_with_one_warning() {
        let tmp = TempDir::new().expect("tmp");
        let a = write_csv(&tmp, "a.csv", "id,name\n1,Alice\n2,Bob\n");
        let b = write_csv(&tmp, "b.csv", "id,age\n3,30\n4,41\n5,52\n");
        let out = tmp.path().join("out.csv");

        let outcome = merge(&[a, b], &out);
        assert!(outcome.success);
        assert_eq!(outcome.report.entries(), [HEADER_MISMATCH_WARNING]);

        // First-seen column order: a.csv contributes id,name then b.csv adds age.
        assert_eq!(
            read_lines(&out),
            ["id,name,age", "1,Alice,", "2,Bob,", "3,,30", "4,,41", "5,,52"]
        );
    }

    #[test]
    fn three_distinct_headers_still_warn_once() {
        let tmp = TempDir::new().expect("tmp");
        let a = write_csv(&tmp, "a.csv", "x\n1\n");
        let b = write_csv(&tmp, "b.csv", "y\n2\n");
        let c = write_csv(&tmp, "c.csv", "z\n3\n");
        let out = tmp.path().join("out.csv");

        let outcome = merge(&[a, b, c], &out);
        assert!(outcome.success);
        assert_eq!(outcome.report.len(), 1);
    }

    #[test]
    fn unreadable_file_is_reported_and_skipped() {
        let tmp = TempDir::new().expect("tmp");
        let a = write_csv(&tmp, "a.csv", "id,name\n1,Alice\n");
        let missing = tmp.path().join("missing.csv");
        let out = tmp.path().join("out.csv");

        let outcome = merge(&[a, missing], &out);
        assert!(outcome.success);
        assert_eq!(outcome.report.len(), 1);
        assert!(outcome.report.entries()[0].starts_with("Error reading missing.csv:"));
        assert_eq!(read_lines(&out), ["id,name", "1,Alice"]);
    }

    #[test]
    fn malformed_file_does_not_block_remaining_files() {
        let tmp = TempDir::new().expect("tmp");
        let bad = write_csv(&tmp, "bad.csv", "id,name\n1,Alice,extra\n");
        let good = write_csv(&tmp, "good.csv", "id,name\n2,Bob\n");
        let out = tmp.path().join("out.csv");

        let outcome = merge(&[bad, good], &out);
        assert!(outcome.success);
        assert_eq!(outcome.report.len(), 1);
        assert!(outcome.report.entries()[0].starts_with("Error reading bad.csv:"));
        assert_eq!(read_lines(&out), ["id,name", "2,Bob"]);
    }

    #[test]
    fn all_inputs_unreadable_still_succeeds_with_empty_output() {
        let tmp = TempDir::new().expect("tmp");
        let out = tmp.path().join("out.csv");

        let outcome = merge(&[tmp.path().join("x.csv"), tmp.path().join("y.csv")], &out);
        assert!(outcome.success);
        assert_eq!(outcome.report.len(), 2);
        assert_eq!(fs::read_to_string(&out).expect("read output"), "");
    }

    #[test]
    fn unwritable_output_fails_with_write_error_last() {
        let tmp = TempDir::new().expect("tmp");
        let a = write_csv(&tmp, "a.csv", "id\n1\n");
        let out = tmp.path().join("no_such_dir").join("out.csv");

        let outcome = merge(&[a], &out);
        assert!(!outcome.success);
        assert!(outcome
            .report
            .last()
            .expect("write error entry")
            .starts_with("Error during merging or saving:"));
    }

    #[test]
    fn duplicate_input_rows_are_not_deduplicated() {
        let tmp = TempDir::new().expect("tmp");
        let a = write_csv(&tmp, "a.csv", "id,name\n1,Alice\n2,Bob\n");
        let copy = write_csv(&tmp, "copy.csv", "id,name\n1,Alice\n2,Bob\n");
        let out = tmp.path().join("out.csv");

        let outcome = merge(&[a, copy], &out);
        assert!(outcome.success);
        assert_eq!(read_lines(&out).len(), 5, "header plus 2x2 rows, no dedup");
    }

    #[test]
    fn empty_file_list_writes_empty_output() {
        let tmp = TempDir::new().expect("tmp");
        let out = tmp.path().join("out.csv");

        let outcome = merge(&[], &out);
        assert!(outcome.success);
        assert!(outcome.report.is_empty());
        assert_eq!(fs::read_to_string(&out).expect("read output"), "");
    }

    #[test]
    fn output_overwrites_existing_file() {
        let tmp = TempDir::new().expect("tmp");
        let a = write_csv(&tmp, "a.csv", "id\n1\n");
        let out = write_csv(&tmp, "out.csv", "stale,content\nhere,too\n");

        let outcome = merge(&[a], &out);
        assert!(outcome.success);
        assert_eq!(read_lines(&out), ["id", "1"]);
    }

    #[test]
    fn quoted_fields_survive_the_round_trip() {
        let tmp = TempDir::new().expect("tmp");
        let a = write_csv(&tmp, "a.csv", "id,note\n1,\"hello, world\"\n");
        let out = tmp.path().join("out.csv");

        let outcome = merge(&[a], &out);
        assert!(outcome.success);
        assert_eq!(read_lines(&out), ["id,note", "1,\"hello, world\""]);
    }
}
