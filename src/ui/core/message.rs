use crate::vcs::{Branch, VcsError};
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_COMPONENT_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_COMMAND_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies a component instance that owns an animation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    pub fn next() -> Self {
        Self(NEXT_COMPONENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component#{}", self.0)
    }
}

/// Identifies one issued command so its result can be matched to the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(u64);

impl CommandId {
    pub fn next() -> Self {
        Self(NEXT_COMMAND_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command#{}", self.0)
    }
}

/// Successful result of a backend command.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Branches(Vec<Branch>),
    CheckedOut(Branch),
}

pub type Outcome = Result<Payload, VcsError>;

/// Every event that can enter the update loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick(DateTime<Local>),
    AnimationFrame { id: ComponentId, tag: u64 },
    AsyncResult { id: CommandId, outcome: Outcome },
    /// The receiving page just became the visible one.
    Activated,
    Quit,
}

impl Message {
    pub fn key(code: KeyCode) -> Self {
        Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub fn char(c: char) -> Self {
        Message::key(KeyCode::Char(c))
    }

    pub fn ctrl(c: char) -> Self {
        Message::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    /// Short tag used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Key(_) => "key",
            Message::Resize(..) => "resize",
            Message::Tick(_) => "tick",
            Message::AnimationFrame { .. } => "frame",
            Message::AsyncResult { .. } => "async-result",
            Message::Activated => "activated",
            Message::Quit => "quit",
        }
    }
}
