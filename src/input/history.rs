use std::collections::VecDeque;
use std::io::{self, Write};

pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Bounded log of raw input lines. Once full, each append evicts the oldest
/// entry.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl History {
    pub fn new(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: VecDeque::with_capacity(max_entries.min(DEFAULT_MAX_ENTRIES)),
            max_entries,
        }
    }

    pub fn append(&mut self, entry: &str) {
        if entry.trim().is_empty() {
            return;
        }

        if self.entries.len() == self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.to_owned());
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Writes every retained entry prefixed with its 1-based ordinal.
    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        for (i, entry) in self.iter().enumerate() {
            writeln!(out, "{} {}", i + 1, entry)?;
        }
        Ok(())
    }
}
