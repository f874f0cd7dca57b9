//! Snapshot store: pristine content capture and full restoration.
//!
//! The store records, per modified element, the content it had before its *first* modification.
//! No matter how many times an element is re-modified afterwards, the entry is written exactly
//! once and survives until a full reset. Restoration writes every original back and clears the
//! store in one pass.

use crate::page::{ContentKind, NodeId, PageModel};
use std::collections::HashMap;

/// Pristine content captured for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    /// Element the content belongs to.
    pub handle: NodeId,
    /// Content before the first modification.
    pub original: String,
    /// Which content slot was captured.
    pub kind: ContentKind,
}

/// Per-page store of pristine element content.
///
/// Invariant: for every element currently bearing a modified marker, exactly one entry exists
/// here. Entries are created by the modification engine via [`capture_once`](Self::capture_once)
/// and destroyed only by [`restore_all`](Self::restore_all).
#[derive(Debug, Default)]
pub struct SnapshotStore {
    entries: HashMap<NodeId, SnapshotEntry>,
}

impl SnapshotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture `content` as the pristine value for `handle`, unless one was already captured.
    ///
    /// Returns `true` if a new entry was created. Re-captures are no-ops: the original value is
    /// recorded exactly once even across many re-modifications (and across modes).
    pub fn capture_once(&mut self, handle: NodeId, content: String, kind: ContentKind) -> bool {
        if self.entries.contains_key(&handle) {
            return false;
        }
        self.entries.insert(
            handle,
            SnapshotEntry {
                handle,
                original: content,
                kind,
            },
        );
        true
    }

    /// Write every captured original back to the page and clear the store.
    ///
    /// Each restored element also has all of its markers stripped. Handles whose element has
    /// been detached from the page are skipped silently; their entries are still discarded.
    pub fn restore_all(&mut self, page: &mut PageModel) {
        for entry in self.entries.values() {
            if page.write_content(entry.handle, entry.kind, &entry.original) {
                page.clear_markers(entry.handle);
            }
        }
        self.entries.clear();
    }

    /// Number of captured elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` if a pristine value is held for `handle`.
    pub fn contains(&self, handle: NodeId) -> bool {
        self.entries.contains_key(&handle)
    }

    /// The pristine content captured for `handle`, if any.
    pub fn original_of(&self, handle: NodeId) -> Option<&SnapshotEntry> {
        self.entries.get(&handle)
    }
}
