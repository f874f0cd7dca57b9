//! Bounded linear undo/redo history.
//!
//! A single ordered log of applied modifications plus a cursor pointing at the last applied
//! entry. New edits truncate the abandoned redo branch; when the log would exceed its capacity
//! the oldest entry is evicted and the cursor shifts back, preserving relative undo/redo
//! reachability for all surviving entries.
//!
//! Undo/redo targeting a detached element skip the page write but still move the cursor, so a
//! vanished element can never wedge the stack.

use crate::page::{ContentKind, NodeId, PageModel};

/// Default maximum number of retained modification records.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// One reversible edit. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModificationRecord {
    /// Element the edit applies to.
    pub handle: NodeId,
    /// Content slot the edit targets.
    pub kind: ContentKind,
    /// Content the element showed before this edit.
    pub original: String,
    /// Content this edit wrote.
    pub replacement: String,
}

impl ModificationRecord {
    /// Create a new record.
    pub fn new(
        handle: NodeId,
        kind: ContentKind,
        original: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            kind,
            original: original.into(),
            replacement: replacement.into(),
        }
    }
}

/// Index-addressed log of applied modifications with linear undo/redo.
///
/// `cursor == None` means nothing is currently applied; otherwise the cursor indexes the most
/// recently applied entry. Invariant: `cursor < entries.len()`.
#[derive(Debug)]
pub struct HistoryStack {
    entries: Vec<ModificationRecord>,
    cursor: Option<usize>,
    capacity: usize,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryStack {
    /// Create an empty stack with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stack retaining at most `capacity` records.
    ///
    /// A zero capacity is clamped to 1 so a push always retains at least itself.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            capacity: capacity.max(1),
        }
    }

    /// Record a new edit.
    ///
    /// Discards any entries after the cursor (the abandoned redo branch), appends, and points
    /// the cursor at the new entry. On overflow the oldest entry is evicted and the cursor
    /// decremented accordingly.
    pub fn push(&mut self, record: ModificationRecord) {
        match self.cursor {
            Some(c) => self.entries.truncate(c + 1),
            None => self.entries.clear(),
        }
        self.entries.push(record);
        self.cursor = Some(self.entries.len() - 1);

        if self.entries.len() > self.capacity {
            self.entries.remove(0);
            self.cursor = self.cursor.and_then(|c| c.checked_sub(1));
        }
    }

    /// Revert the entry under the cursor and retreat.
    ///
    /// No-op (returns `false`) when nothing is applied. If the target element has been detached
    /// the page write is skipped but the cursor still retreats.
    pub fn undo(&mut self, page: &mut PageModel) -> bool {
        let Some(c) = self.cursor else {
            return false;
        };
        let record = &self.entries[c];
        if page.write_content(record.handle, record.kind, &record.original) {
            page.set_modified(record.handle, false);
        }
        self.cursor = c.checked_sub(1);
        true
    }

    /// Re-apply the entry after the cursor and advance.
    ///
    /// No-op (returns `false`) at the top of the stack. Detached elements follow the same
    /// skip-the-write rule as [`undo`](Self::undo).
    pub fn redo(&mut self, page: &mut PageModel) -> bool {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.entries.len() {
            return false;
        }
        let record = &self.entries[next];
        if page.write_content(record.handle, record.kind, &record.replacement) {
            page.set_modified(record.handle, true);
        }
        self.cursor = Some(next);
        true
    }

    /// Drop every record and reset the cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// `true` if an undo would apply something.
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    /// `true` if a redo would apply something.
    pub fn can_redo(&self) -> bool {
        self.cursor.map_or(0, |c| c + 1) < self.entries.len()
    }

    /// Number of currently applied entries.
    pub fn undo_depth(&self) -> usize {
        self.cursor.map_or(0, |c| c + 1)
    }

    /// Number of undone entries available for redo.
    pub fn redo_depth(&self) -> usize {
        self.entries.len() - self.undo_depth()
    }

    /// Total retained records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no records are retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained records.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Retained records, oldest first (read-only).
    pub fn records(&self) -> &[ModificationRecord] {
        &self.entries
    }
}
