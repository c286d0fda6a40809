// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Capacity-bounded, insertion-ordered record store
//!
//! Entries are kept oldest-first. Once the configured capacity is exceeded
//! the oldest entry is evicted (FIFO). Entries are opaque strings and are
//! never modified after insertion.

use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::debug;

/// Append-only log with FIFO eviction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundedLog {
    entries: VecDeque<String>,
    capacity: Option<NonZeroUsize>,
}

impl BoundedLog {
    /// Create a log holding at most `capacity` entries
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.get()),
            capacity: Some(capacity),
        }
    }

    /// Create a log with no size limit
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Create a log from an optional capacity
    #[must_use]
    pub fn new(capacity: Option<NonZeroUsize>) -> Self {
        capacity.map_or_else(Self::unbounded, Self::with_capacity)
    }

    /// Configured capacity, `None` when unbounded
    #[must_use]
    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }

    /// Append an entry, evicting the oldest one if the log is over capacity
    pub fn add(&mut self, item: impl Into<String>) {
        self.entries.push_back(item.into());
        if let Some(cap) = self.capacity {
            while self.entries.len() > cap.get() {
                if let Some(evicted) = self.entries.pop_front() {
                    debug!(entry = %evicted, "evicted oldest log entry");
                }
            }
        }
    }

    /// All entries, oldest first
    #[must_use]
    pub fn get_all(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// Iterate entries, oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.iter().map(String::as_str)
    }

    /// Case-insensitive substring search, preserving stored order
    #[must_use]
    pub fn search(&self, keyword: &str) -> Vec<String> {
        let needle = keyword.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Remove every entry; the capacity is kept
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the log in its flat-file form: one entry per line, each
    /// terminated by `\n`. Entries containing newlines are not escaped.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.entries.iter().map(|e| e.len() + 1).sum());
        for entry in &self.entries {
            out.push_str(entry);
            out.push('\n');
        }
        out
    }

    /// Write every entry to `path`, one per line.
    ///
    /// The whole file is rendered first and written in a single call; the
    /// log itself is never touched.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render()).map_err(|e| Error::io(path, e))?;
        debug!(entries = self.len(), path = %path.display(), "exported log");
        Ok(())
    }

    /// Read a log previously written by [`BoundedLog::export_to_file`].
    ///
    /// Blank and whitespace-only lines are skipped, so such entries do not
    /// survive an export and reload; every other entry comes back unchanged.
    /// A file longer than `capacity` keeps its last entries. A missing file
    /// yields an empty log.
    pub fn load_from_file(path: &Path, capacity: Option<NonZeroUsize>) -> Result<Self> {
        let mut log = Self::new(capacity);
        if !path.exists() {
            return Ok(log);
        }
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            log.add(line);
        }
        Ok(log)
    }
}

impl<S: Into<String>> Extend<S> for BoundedLog {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_add_keeps_order() {
        let mut log = BoundedLog::unbounded();
        log.add("first");
        log.add("second");
        log.add("third");

        assert_eq!(log.get_all(), ["first", "second", "third"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_evicts_oldest() {
        let mut log = BoundedLog::with_capacity(cap(3));
        log.extend(["a", "b", "c", "d", "e"]);

        assert_eq!(log.get_all(), ["c", "d", "e"]);
        assert_eq!(log.capacity(), Some(cap(3)));
    }

    #[test]
    fn test_capacity_of_one() {
        let mut log = BoundedLog::with_capacity(cap(1));
        log.add("old");
        log.add("new");
        assert_eq!(log.get_all(), ["new"]);
    }

    #[test]
    fn test_get_all_is_repeatable() {
        let mut log = BoundedLog::unbounded();
        log.add("x");
        assert_eq!(log.get_all(), log.get_all());
    }

    #[test]
    fn test_search_case_insensitive() {
        let mut log = BoundedLog::unbounded();
        log.extend([
            "Path Main Gate -> Library",
            "Path Library -> Hostel",
            "Path Canteen -> Auditorium",
        ]);

        assert_eq!(
            log.search("LIBRARY"),
            ["Path Main Gate -> Library", "Path Library -> Hostel"]
        );
        assert!(log.search("observatory").is_empty());
        assert_eq!(log.search("").len(), 3);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut log = BoundedLog::with_capacity(cap(2));
        log.extend(["a", "b"]);
        log.clear();

        assert!(log.is_empty());
        assert!(log.get_all().is_empty());
        log.extend(["c", "d", "e"]);
        assert_eq!(log.get_all(), ["d", "e"]);
    }

    #[test]
    fn test_export_format() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("history.txt");
        let mut log = BoundedLog::unbounded();
        log.extend(["one", "two"]);

        log.export_to_file(&file).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_export_empty_log() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("empty.txt");
        BoundedLog::unbounded().export_to_file(&file).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "");
    }

    #[test]
    fn test_export_failure_leaves_log_intact() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("missing-dir").join("history.txt");
        let mut log = BoundedLog::unbounded();
        log.add("kept");

        let err = log.export_to_file(&file).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(log.get_all(), ["kept"]);
    }

    #[test]
    fn test_load_applies_capacity() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("history.log");
        fs::write(&file, "a\n\nb\nc\n").unwrap();

        let log = BoundedLog::load_from_file(&file, Some(cap(2))).unwrap();
        assert_eq!(log.get_all(), ["b", "c"]);
    }

    #[test]
    fn test_reload_drops_blank_entries() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("history.log");
        let mut log = BoundedLog::unbounded();
        log.extend(["first", "", "   ", "last"]);
        log.export_to_file(&file).unwrap();

        let reloaded = BoundedLog::load_from_file(&file, None).unwrap();
        assert_eq!(reloaded.get_all(), ["first", "last"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let log = BoundedLog::load_from_file(&dir.path().join("nope"), None).unwrap();
        assert!(log.is_empty());
        assert_eq!(log.capacity(), None);
    }
}
