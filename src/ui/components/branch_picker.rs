//! Branch picker: list the repository's branches and switch to one.
//!
//! State machine: `Loading -> Ready -> Checkout -> Done`. A failed checkout
//! goes back to `Ready` with the error kept for display, so the user can retry
//! or quit. Only one backend command is pending at a time; its id is kept and
//! any result carrying another id is ignored.

use super::branch_list::BranchList;
use crate::constants::{DEFAULT_LIST_HEIGHT, PICKER_LOADING};
use crate::ui::core::{Command, CommandId, Component, Message, Payload};
use crate::vcs::{Branch, VcsError};
use crossterm::event::KeyCode;
use log::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the branch listing.
    Loading,
    /// Branches shown; the user is choosing.
    Ready,
    /// A checkout of `branch` is in flight.
    Checkout { branch: Branch },
    /// The checkout succeeded.
    Done { branch: Branch },
}

pub struct BranchPicker {
    phase: Phase,
    list: BranchList,
    pending: Option<CommandId>,
    error: Option<String>,
    fatal: bool,
}

impl Default for BranchPicker {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_HEIGHT)
    }
}

impl BranchPicker {
    pub fn new(list_height: usize) -> Self {
        Self {
            phase: Phase::Loading,
            list: BranchList::new(list_height),
            pending: None,
            error: None,
            fatal: false,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn list(&self) -> &BranchList {
        &self.list
    }

    /// Error text from the last failed operation, shown above the list.
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done { .. })
    }

    /// The repository vanished (or never existed): nothing can be picked.
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// The branch that was successfully checked out.
    pub fn chosen(&self) -> Option<&Branch> {
        match &self.phase {
            Phase::Done { branch } => Some(branch),
            _ => None,
        }
    }

    pub fn pending_command(&self) -> Option<CommandId> {
        self.pending
    }

    fn start_checkout(&mut self) -> Command {
        if let Phase::Checkout { branch } = &self.phase {
            debug!("BranchPicker: checkout of '{}' still pending, ignoring enter", branch.short_name);
            return Command::None;
        }
        if self.phase != Phase::Ready {
            return Command::None;
        }

        let Some(branch) = self.list.selected().cloned() else {
            debug!("BranchPicker: enter with nothing highlighted");
            return Command::None;
        };

        let id = CommandId::next();
        info!("BranchPicker: switching to '{}' ({})", branch.short_name, id);
        self.pending = Some(id);
        self.error = None;
        self.phase = Phase::Checkout { branch: branch.clone() };
        Command::Checkout { id, branch }
    }

    fn handle_result(&mut self, id: CommandId, outcome: &Result<Payload, VcsError>) -> Command {
        if self.pending != Some(id) {
            debug!("BranchPicker: ignoring result for {} (not pending)", id);
            return Command::None;
        }
        self.pending = None;

        match (&self.phase, outcome) {
            (Phase::Loading, Ok(Payload::Branches(branches))) => {
                info!("BranchPicker: {} branches loaded", branches.len());
                self.list.set_items(branches.clone());
                self.phase = Phase::Ready;
            }
            (Phase::Loading, Err(e)) => {
                warn!("BranchPicker: listing branches failed: {}", e);
                self.fatal = e.is_fatal();
                self.error = Some(e.to_string());
                self.list.set_items(Vec::new());
                self.phase = Phase::Ready;
            }
            (Phase::Checkout { branch }, Ok(Payload::CheckedOut(_))) => {
                info!("BranchPicker: now on '{}'", branch.short_name);
                self.phase = Phase::Done { branch: branch.clone() };
            }
            (Phase::Checkout { branch }, Err(e)) => {
                warn!("BranchPicker: checkout of '{}' failed: {}", branch.short_name, e);
                self.fatal = e.is_fatal();
                self.error = Some(e.to_string());
                self.phase = Phase::Ready;
            }
            (phase, outcome) => {
                warn!("BranchPicker: unexpected result {:?} in phase {:?}", outcome, phase);
            }
        }
        Command::None
    }
}

impl Component for BranchPicker {
    fn init(&mut self) -> Command {
        let id = CommandId::next();
        self.phase = Phase::Loading;
        self.pending = Some(id);
        Command::ListBranches { id }
    }

    fn update(&mut self, msg: &Message) -> Command {
        match msg {
            Message::AsyncResult { id, outcome } => self.handle_result(*id, outcome),
            Message::Key(key) => {
                if self.phase == Phase::Loading || self.is_done() {
                    return Command::None;
                }
                if key.code == KeyCode::Enter && !self.list.is_filtering() {
                    return self.start_checkout();
                }
                self.list.handle_key(key);
                Command::None
            }
            Message::Resize(..) => self.list.update(msg),
            _ => Command::None,
        }
    }

    fn view(&self) -> String {
        let body = match &self.phase {
            Phase::Loading => format!("\n  {}", PICKER_LOADING),
            Phase::Ready => format!("\n{}", self.list.view()),
            Phase::Checkout { branch } => {
                format!("\n{}\n\n  Switching to {}...", self.list.view(), branch.short_name)
            }
            Phase::Done { branch } => format!("\n  Switched to branch '{}'", branch.short_name),
        };

        match &self.error {
            Some(error) => format!("Error: {}\n{}", error, body),
            None => body,
        }
    }

    fn captures_input(&self) -> bool {
        self.list.captures_input()
    }
}
