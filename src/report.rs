//! Ordered diagnostic report accumulated during one merge run.

use std::fmt;

/// Append-only list of diagnostics, returned to the caller whether or not
/// the merge itself succeeded. Entries carry no severity level; they are
/// presented as free text, newline-joined, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct Report {
    entries: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Last entry appended, if any. The write-failure diagnostic always
    /// lands here when a merge fails.
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries.join("\n"))
    }
}
