use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, error, trace};

use crate::config::STORE_CAPACITY_FLOOR;
use crate::error::{LoggerError, Result};

/// Append-only store of persisted log lines.
///
/// Entries keep emission order and are never deduplicated or evicted; the
/// only way to drop them is [`clear`](RecordStore::clear). Capacity follows a
/// fixed schedule: zero until the first append, then the floor, then doubling
/// each time the store is full.
///
/// Growth and copies go through the fallible allocation APIs, so running out
/// of memory surfaces as [`LoggerError::Allocation`] instead of aborting.
///
/// # Examples
///
/// ```
/// # use pico_logger::RecordStore;
/// let mut store = RecordStore::new();
/// store.append("first").unwrap();
/// store.append("second").unwrap();
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.capacity(), 16);
/// assert_eq!(store.iter().collect::<Vec<_>>(), ["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    entries: Vec<String>,
    capacity: usize,
    floor: usize,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Creates an empty store using the default capacity floor.
    pub const fn new() -> Self {
        Self::with_floor(STORE_CAPACITY_FLOOR)
    }

    /// Creates an empty store that jumps to `floor` slots on first append.
    pub const fn with_floor(floor: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: 0,
            floor: if floor == 0 { 1 } else { floor },
        }
    }

    /// Copies `text` into a new owned entry at the end of the store.
    pub fn append(&mut self, text: &str) -> Result<()> {
        if self.entries.len() == self.capacity {
            self.grow()?;
        }

        let mut entry = String::new();
        entry.try_reserve_exact(text.len())?;
        entry.push_str(text);

        self.entries.push(entry);
        Ok(())
    }

    fn grow(&mut self) -> Result<()> {
        let new_capacity = if self.capacity == 0 {
            self.floor
        } else {
            self.capacity.saturating_mul(2)
        };
        self.entries.try_reserve_exact(new_capacity - self.entries.len())?;
        trace!(from = self.capacity, to = new_capacity, "record store grown");
        self.capacity = new_capacity;
        Ok(())
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of slots reserved by the growth schedule.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entry at `index`, in insertion order.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Iterates over the entries in insertion order without touching the
    /// store. Call again to start over.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Writes every entry to `path`, one per line, replacing whatever the
    /// file held before.
    ///
    /// When the file cannot be opened nothing is written and
    /// [`LoggerError::Persist`] is returned. The store is left untouched in
    /// every case.
    pub fn persist_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| {
            error!(path = %path.display(), error = %source, "failed to open log file");
            LoggerError::Persist {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let mut writer = BufWriter::new(file);
        for entry in &self.entries {
            writer.write_all(entry.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        debug!(path = %path.display(), entries = self.entries.len(), "log file saved");
        Ok(())
    }

    /// Drops every entry and returns capacity to zero.
    pub fn clear(&mut self) {
        self.entries = Vec::new();
        self.capacity = 0;
    }
}

/// Iterator over the entries of a [`RecordStore`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<&'a str> {
        self.inner.next_back().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_schedule() {
        let mut store = RecordStore::new();
        assert_eq!(store.capacity(), 0);

        let mut seen = Vec::new();
        for i in 0..40 {
            store.append(&format!("entry {}", i)).unwrap();
            if seen.last() != Some(&store.capacity()) {
                seen.push(store.capacity());
            }
            assert!(store.len() <= store.capacity());
        }
        assert_eq!(seen, [16, 32, 64]);
    }

    #[test]
    fn test_custom_floor() {
        let mut store = RecordStore::with_floor(2);
        for _ in 0..3 {
            store.append("x").unwrap();
        }
        assert_eq!(store.capacity(), 4);

        assert_eq!(RecordStore::with_floor(0).floor, 1);
    }

    #[test]
    fn test_entries_are_owned_copies() {
        let mut store = RecordStore::new();
        let mut source = String::from("original");
        store.append(&source).unwrap();
        source.push_str(" changed");
        assert_eq!(store.get(0), Some("original"));
    }
}
