//! Per-page wireframe session: activation state machine, modification engine, command execution.
//!
//! One [`WireframeSession`] owns everything a single page view needs: the page model, the
//! activation state, the snapshot store, the history stack, and the placeholder generator. It
//! is injected explicitly into whatever routes commands; there are no ambient globals, and its
//! lifetime equals the page's lifetime.
//!
//! # Initialization phase
//!
//! The persisted activation flag loads asynchronously on real pages, so the session makes that
//! an explicit phase: [`initialize`](WireframeSession::initialize) must complete before
//! [`execute`](WireframeSession::execute) accepts anything. Commands delivered earlier are
//! dropped deterministically and logged, never replayed against a half-built context.
//!
//! # Concurrency model
//!
//! Single-threaded and event-driven: every command runs synchronously to completion, so no
//! operation ever observes another's partial mutation. The only asynchronous boundary is the
//! persistence channel, which never interleaves with a page mutation in progress.

use crate::classify::{Eligibility, Mode, classify};
use crate::commands::{Command, CommandError, CommandResult};
use crate::history::{DEFAULT_HISTORY_CAPACITY, HistoryStack, ModificationRecord};
use crate::page::{ContentKind, NodeId, PageModel};
use crate::persist::{ActivationRecord, ActivationStore};
use crate::placeholder::{PlaceholderConfig, PlaceholderGenerator, placeholder_image};
use crate::snapshot::SnapshotStore;

/// Activation state of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Edit mode is off; pointer interaction is a no-op.
    Inactive,
    /// Edit mode is on with the given editing mode.
    Active(Mode),
}

/// Tunables for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for the placeholder candidate RNG.
    pub seed: u64,
    /// Maximum retained history records.
    pub history_capacity: usize,
    /// Length-bucket thresholds for placeholder text.
    pub placeholder: PlaceholderConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            placeholder: PlaceholderConfig::default(),
        }
    }
}

/// Read-only snapshot of session state for hosts (badge counts, button enablement, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    /// Whether edit mode is on.
    pub active: bool,
    /// Active editing mode, `None` while inactive.
    pub mode: Option<Mode>,
    /// Currently selected element, if any.
    pub selected: Option<NodeId>,
    /// An undo would apply something.
    pub can_undo: bool,
    /// A redo would apply something.
    pub can_redo: bool,
    /// Currently applied history entries.
    pub undo_depth: usize,
    /// Undone entries available for redo.
    pub redo_depth: usize,
    /// Attached elements bearing the modified marker.
    pub modified_elements: usize,
    /// Attached elements waiting for external content.
    pub pending_elements: usize,
    /// Elements with a captured pristine snapshot.
    pub snapshot_count: usize,
    /// State version, incremented on every state-changing command.
    pub version: u64,
}

/// The per-page modification kernel.
///
/// # Example
///
/// ```rust
/// use wireframe_core::{Command, MemoryActivationStore, PageModel, PageNode, WireframeSession};
///
/// let mut page = PageModel::new();
/// let headline = page.insert(PageNode::text("h1", "Launch day"));
///
/// let mut session = WireframeSession::new(page);
/// session.initialize(&MemoryActivationStore::new(), "https://example.com/");
///
/// session.execute(Command::Toggle { enabled: true }).unwrap();
/// session.execute(Command::Select { handle: headline }).unwrap();
/// assert!(session.status().can_undo);
///
/// session.execute(Command::Undo).unwrap();
/// assert_eq!(
///     session.page().node(headline).unwrap().text_content(),
///     "Launch day"
/// );
/// ```
#[derive(Debug)]
pub struct WireframeSession {
    page: PageModel,
    activation: Activation,
    selected: Option<NodeId>,
    snapshots: SnapshotStore,
    history: HistoryStack,
    placeholders: PlaceholderGenerator,
    version: u64,
    initialized: bool,
}

impl WireframeSession {
    /// Create a session over a page model with default configuration.
    pub fn new(page: PageModel) -> Self {
        Self::with_config(page, SessionConfig::default())
    }

    /// Create a session with explicit tunables.
    pub fn with_config(page: PageModel, config: SessionConfig) -> Self {
        Self {
            page,
            activation: Activation::Inactive,
            selected: None,
            snapshots: SnapshotStore::new(),
            history: HistoryStack::with_capacity(config.history_capacity),
            placeholders: PlaceholderGenerator::with_config(config.seed, config.placeholder),
            version: 0,
            initialized: false,
        }
    }

    /// Complete the initialization phase by restoring the persisted activation flag.
    ///
    /// Must be called exactly once, before any command is accepted. A channel failure degrades
    /// to the default inactive state; the session still becomes ready. History and snapshots
    /// always start empty, they are never restored across page loads.
    pub fn initialize(&mut self, store: &dyn ActivationStore, page_key: &str) {
        if self.initialized {
            tracing::warn!(page_key, "session already initialized; ignoring");
            return;
        }
        match store.load(page_key) {
            Ok(Some(record)) if record.active => {
                self.activation = Activation::Active(record.mode);
                if record.mode == Mode::Ai {
                    self.mark_pending_targets();
                }
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(page_key, error = %err, "activation load failed; starting inactive");
            }
        }
        self.initialized = true;
    }

    /// Persist the current activation flag for this page.
    ///
    /// Returns `false` on channel failure (logged; session state is unaffected either way).
    pub fn persist_activation(&self, store: &mut dyn ActivationStore, page_key: &str) -> bool {
        let record = ActivationRecord {
            active: self.is_active(),
            mode: self.mode().unwrap_or(Mode::Text),
        };
        match store.save(page_key, &record) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(page_key, error = %err, "activation save failed");
                false
            }
        }
    }

    /// Execute one command synchronously to completion.
    ///
    /// Commands arriving before [`initialize`](Self::initialize) are dropped with
    /// [`CommandError::NotInitialized`]. Every accepted command either changes state or is a
    /// well-defined no-op; partial updates are impossible.
    pub fn execute(&mut self, command: Command) -> Result<CommandResult, CommandError> {
        if !self.initialized {
            tracing::warn!(?command, "dropping command delivered before initialization");
            return Err(CommandError::NotInitialized);
        }
        let result = match command {
            Command::Toggle { enabled } => self.toggle(enabled),
            Command::SetMode { mode } => self.set_mode(mode),
            Command::Select { handle } => self.select(handle),
            Command::ApplyExternalContent { content, .. } => self.apply_external_content(&content),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Reset => self.reset(),
        };
        Ok(result)
    }

    /// Whether edit mode is on.
    pub fn is_active(&self) -> bool {
        matches!(self.activation, Activation::Active(_))
    }

    /// Active editing mode, `None` while inactive.
    pub fn mode(&self) -> Option<Mode> {
        match self.activation {
            Activation::Inactive => None,
            Activation::Active(mode) => Some(mode),
        }
    }

    /// Current activation state.
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Currently selected element, if any.
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Borrow the page model.
    pub fn page(&self) -> &PageModel {
        &self.page
    }

    /// Mutably borrow the page model (for hosts mirroring live page changes, e.g. detachment).
    pub fn page_mut(&mut self) -> &mut PageModel {
        &mut self.page
    }

    /// Read-only history access.
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// Read-only snapshot store access.
    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    /// Snapshot the session state for host display.
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            active: self.is_active(),
            mode: self.mode(),
            selected: self.selected,
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            undo_depth: self.history.undo_depth(),
            redo_depth: self.history.redo_depth(),
            modified_elements: self.page.count_marked(|m| m.modified),
            pending_elements: self.page.count_marked(|m| m.pending),
            snapshot_count: self.snapshots.len(),
            version: self.version,
        }
    }

    fn toggle(&mut self, enabled: bool) -> CommandResult {
        match (enabled, self.activation) {
            (true, Activation::Inactive) => {
                self.activation = Activation::Active(Mode::Text);
                self.bump();
                CommandResult::Success
            }
            (false, Activation::Active(_)) => {
                // Selection is cleared on deactivation; modifications stay in place.
                self.clear_selection();
                self.activation = Activation::Inactive;
                self.bump();
                CommandResult::Success
            }
            _ => CommandResult::Ignored,
        }
    }

    fn set_mode(&mut self, mode: Mode) -> CommandResult {
        let Activation::Active(current) = self.activation else {
            // SetMode is only valid while active.
            return CommandResult::Ignored;
        };
        self.activation = Activation::Active(mode);
        // Entering AI mode marks every text-eligible element pending. Markers from an earlier
        // AI phase are kept on other transitions: outstanding requests stay fillable no matter
        // how the mode changes before the content arrives.
        let marked = if mode == Mode::Ai {
            self.mark_pending_targets()
        } else {
            0
        };
        if current != mode || marked > 0 {
            self.bump();
            CommandResult::Success
        } else {
            CommandResult::Ignored
        }
    }

    fn select(&mut self, id: NodeId) -> CommandResult {
        // Activation is re-checked on every pointer event, not just at transitions: a click may
        // race a toggle command and arrive after deactivation.
        let Activation::Active(mode) = self.activation else {
            return CommandResult::Ignored;
        };
        let Some(node) = self.page.node(id) else {
            return CommandResult::Ignored;
        };
        let eligibility = classify(node, mode);

        self.clear_selection();
        self.selected = Some(id);
        self.page.set_selected(id, true);
        self.bump();

        match (mode, eligibility) {
            (_, Eligibility::Ineligible) => CommandResult::Success,
            (Mode::Ai, Eligibility::Eligible(_)) => {
                self.page.set_pending(id, true);
                CommandResult::Success
            }
            (_, Eligibility::Eligible(kind)) => {
                if self.apply(id, kind) {
                    CommandResult::Applied { records: 1 }
                } else {
                    CommandResult::Success
                }
            }
        }
    }

    /// One atomic modification: capture, substitute, mark, record.
    ///
    /// The pristine value is captured before the element is touched, and the history push is
    /// last, so a failure at any step leaves no partial update behind.
    fn apply(&mut self, id: NodeId, kind: ContentKind) -> bool {
        let Some(current) = self.page.content_of(id, kind) else {
            return false;
        };
        let (tag, size) = {
            let Some(node) = self.page.node(id) else {
                return false;
            };
            (node.tag().to_string(), node.rendered_size())
        };
        self.snapshots.capture_once(id, current.clone(), kind);
        let replacement = match kind {
            ContentKind::Text => self.placeholders.text_for(&tag, &current),
            ContentKind::Image => placeholder_image(size),
        };
        self.page.write_content(id, kind, &replacement);
        self.page.set_modified(id, true);
        self.history
            .push(ModificationRecord::new(id, kind, current, replacement));
        true
    }

    fn apply_external_content(&mut self, content: &str) -> CommandResult {
        // Fills whatever is pending right now, however long ago (and under whatever mode) the
        // markers were created.
        let mut records = 0;
        for id in self.page.pending_ids() {
            let Some(current) = self.page.content_of(id, ContentKind::Text) else {
                continue;
            };
            self.snapshots
                .capture_once(id, current.clone(), ContentKind::Text);
            self.page.write_content(id, ContentKind::Text, content);
            self.page.set_pending(id, false);
            self.page.set_modified(id, true);
            self.history
                .push(ModificationRecord::new(id, ContentKind::Text, current, content));
            records += 1;
        }
        if records > 0 {
            self.bump();
            CommandResult::Applied { records }
        } else {
            CommandResult::Ignored
        }
    }

    fn undo(&mut self) -> CommandResult {
        if self.history.undo(&mut self.page) {
            self.bump();
            CommandResult::Success
        } else {
            CommandResult::Ignored
        }
    }

    fn redo(&mut self) -> CommandResult {
        if self.history.redo(&mut self.page) {
            self.bump();
            CommandResult::Success
        } else {
            CommandResult::Ignored
        }
    }

    fn reset(&mut self) -> CommandResult {
        let changed = !self.snapshots.is_empty()
            || !self.history.is_empty()
            || self.selected.is_some()
            || self.page.count_marked(|m| m.pending) > 0;

        self.snapshots.restore_all(&mut self.page);
        self.history.clear();
        self.clear_selection();
        for id in self.page.pending_ids() {
            self.page.set_pending(id, false);
        }

        if changed {
            self.bump();
            CommandResult::Success
        } else {
            CommandResult::Ignored
        }
    }

    fn clear_selection(&mut self) {
        if let Some(prev) = self.selected.take() {
            self.page.set_selected(prev, false);
        }
    }

    fn mark_pending_targets(&mut self) -> usize {
        let targets: Vec<NodeId> = self
            .page
            .iter()
            .filter(|&(_, node)| {
                !node.markers().pending && classify(node, Mode::Ai).is_eligible()
            })
            .map(|(id, _)| id)
            .collect();
        for &id in &targets {
            self.page.set_pending(id, true);
        }
        targets.len()
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}
