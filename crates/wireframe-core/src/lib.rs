#![warn(missing_docs)]
//! Wireframe Core - Headless In-Page Modification Kernel
//!
//! # Overview
//!
//! `wireframe-core` is a headless kernel for page wireframing: it replaces real text and images
//! with placeholder content, tracks each replacement as an undoable edit, and can restore the
//! page to its pristine state. It does not render anything and does not talk to a browser; the
//! host mirrors the elements it cares about into an arena-backed [`PageModel`] and drives the
//! kernel over a command channel.
//!
//! # Core Features
//!
//! - **Mode-Scoped Substitution**: text, image, and externally-fed "AI" editing modes
//! - **Exactly-Once Snapshots**: pristine content captured on first modification, restored on reset
//! - **Bounded Undo/Redo**: linear history with redo-branch truncation and a fixed capacity
//! - **Activation State Machine**: pointer interaction gated on every event, not just transitions
//! - **Per-Page Persistence**: the activation flag survives reloads, history deliberately does not
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Session & Command Execution                │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Mode Classifier & Placeholder Generation   │  ← Substitution Policy
//! ├─────────────────────────────────────────────┤
//! │  Snapshot Store & History Stack             │  ← Reversibility
//! ├─────────────────────────────────────────────┤
//! │  Page Model (arena of tracked nodes)        │  ← Element Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use wireframe_core::{Command, MemoryActivationStore, Mode, PageModel, PageNode, WireframeSession};
//!
//! let mut page = PageModel::new();
//! let headline = page.insert(PageNode::text("h1", "Spring Sale"));
//! let photo = page.insert(PageNode::image("hero.jpg").with_rendered_size(800, 400));
//!
//! let mut session = WireframeSession::new(page);
//! session.initialize(&MemoryActivationStore::new(), "https://example.com/");
//!
//! // Enter edit mode (starts in text mode) and click the headline.
//! session.execute(Command::Toggle { enabled: true }).unwrap();
//! session.execute(Command::Select { handle: headline }).unwrap();
//! assert_ne!(session.page().node(headline).unwrap().text_content(), "Spring Sale");
//!
//! // Switch to image mode and click the photo.
//! session.execute(Command::SetMode { mode: Mode::Image }).unwrap();
//! session.execute(Command::Select { handle: photo }).unwrap();
//!
//! // Everything is reversible.
//! session.execute(Command::Reset).unwrap();
//! assert_eq!(session.page().node(headline).unwrap().text_content(), "Spring Sale");
//! ```
//!
//! # Module Description
//!
//! - [`page`] - arena-backed page model and stable element handles
//! - [`classify`] - editing modes and element eligibility
//! - [`snapshot`] - exactly-once pristine content capture and restoration
//! - [`history`] - bounded linear undo/redo log
//! - [`placeholder`] - per-tag placeholder pools and image placeholder synthesis
//! - [`session`] - the per-page context: activation state machine and modification engine
//! - [`commands`] - command channel types
//! - [`persist`] - per-page activation persistence
//!
//! # Concurrency Model
//!
//! Single-threaded and event-driven. Every command executes synchronously to completion inside
//! one event; there is no shared mutable state across page instances and no locking anywhere.

pub mod classify;
pub mod commands;
pub mod history;
pub mod page;
pub mod persist;
pub mod placeholder;
pub mod session;
pub mod snapshot;

pub use classify::{Eligibility, Mode, ParseModeError, TEXT_TAGS, classify};
pub use commands::{Command, CommandError, CommandResult};
pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryStack, ModificationRecord};
pub use page::{ContentKind, Markers, NodeId, PageModel, PageNode};
pub use persist::{ActivationRecord, ActivationStore, MemoryActivationStore, StoreError};
pub use placeholder::{PlaceholderConfig, PlaceholderGenerator, placeholder_image};
pub use session::{Activation, SessionConfig, SessionStatus, WireframeSession};
pub use snapshot::{SnapshotEntry, SnapshotStore};
