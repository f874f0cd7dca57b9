//! Command channel types.
//!
//! Every inbound instruction is one discrete [`Command`]; the session processes each to
//! completion before the next is dequeued, so command handling never interleaves with a page
//! mutation already in progress.
//!
//! Export-style commands (serialize the page for download) belong to the host collaborator and
//! have no variant here.

use crate::classify::{Mode, ParseModeError};
use crate::page::NodeId;
use std::fmt;

/// One inbound command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Enter or leave edit mode. Entering always starts in [`Mode::Text`].
    Toggle {
        /// `true` to activate, `false` to deactivate.
        enabled: bool,
    },
    /// Switch the active editing mode. Valid only while active.
    SetMode {
        /// Mode to switch to.
        mode: Mode,
    },
    /// Pointer selection of one element (the user clicked it).
    Select {
        /// The element under the pointer.
        handle: NodeId,
    },
    /// Fill every currently-pending element with externally supplied content.
    ApplyExternalContent {
        /// The replacement text.
        content: String,
        /// Advisory label from the producer (e.g. `"headline"`); the kernel does not interpret it.
        content_type: Option<String>,
    },
    /// Revert the most recently applied modification.
    Undo,
    /// Re-apply the most recently undone modification.
    Redo,
    /// Restore every element to its pristine content and clear all history.
    Reset,
}

impl Command {
    /// Build a [`Command::SetMode`] from a channel mode string.
    ///
    /// Unknown mode names are rejected here so the session itself only ever sees valid modes.
    pub fn set_mode_from(mode: &str) -> Result<Self, CommandError> {
        let mode: Mode = mode.parse()?;
        Ok(Command::SetMode { mode })
    }
}

/// Command execution result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// The command changed session state.
    Success,
    /// The command was a valid no-op (inactive guard, empty history, nothing pending, ...).
    Ignored,
    /// The command created modification records.
    Applied {
        /// How many records were pushed onto the history stack.
        records: usize,
    },
}

impl CommandResult {
    /// `true` unless the command was ignored.
    pub fn changed_state(self) -> bool {
        !matches!(self, CommandResult::Ignored)
    }
}

/// Command error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A command arrived before the initialization phase completed; it was dropped.
    NotInitialized,
    /// A channel mode string did not name a known mode.
    UnknownMode(ParseModeError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::NotInitialized => {
                write!(f, "command dropped: session not initialized yet")
            }
            CommandError::UnknownMode(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ParseModeError> for CommandError {
    fn from(err: ParseModeError) -> Self {
        CommandError::UnknownMode(err)
    }
}
