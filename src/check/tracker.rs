//! Per-run resolution table.
//!
//! One entry per configured check, index-aligned with the input order.
//! Entries start `Pending` and move to `Resolved` exactly once.

/// Resolution state of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Pending,
    Resolved,
}

/// Tracks which checks have matched at least once.
#[derive(Debug, Clone)]
pub struct ResultTracker {
    entries: Vec<Resolution>,
}

impl ResultTracker {
    pub fn new(len: usize) -> Self {
        Self {
            entries: vec![Resolution::Pending; len],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_resolved(&self, index: usize) -> bool {
        self.entries[index] == Resolution::Resolved
    }

    /// Mark check `index` as resolved. Returns `false` if it already was.
    pub fn resolve(&mut self, index: usize) -> bool {
        let entry = &mut self.entries[index];
        if *entry == Resolution::Resolved {
            return false;
        }
        *entry = Resolution::Resolved;
        true
    }

    pub fn all_resolved(&self) -> bool {
        self.entries.iter().all(|e| *e == Resolution::Resolved)
    }

    pub fn pending(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| **e == Resolution::Pending)
            .count()
    }
}
