use super::message::{CommandId, ComponentId, Message};
use crate::vcs::Branch;
use std::time::Duration;

/// Deferred work requested by a component.
///
/// A component never executes its own commands. It returns them from
/// `init`/`update` and the scheduler runs them off the update loop, feeding
/// each one's single resulting message back in.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Command {
    #[default]
    None,
    /// Independent commands; results arrive in any order, nothing waits for all.
    Batch(Vec<Command>),
    /// Deliver a message right away.
    Emit(Message),
    /// Deliver `Message::Tick` once `after` has elapsed.
    Tick { after: Duration },
    /// Deliver `Message::AnimationFrame` once `after` has elapsed.
    Frame { id: ComponentId, tag: u64, after: Duration },
    ListBranches { id: CommandId },
    Checkout { id: CommandId, branch: Branch },
}

impl Command {
    pub fn none() -> Self {
        Command::None
    }

    pub fn quit() -> Self {
        Command::Emit(Message::Quit)
    }

    pub fn tick(after: Duration) -> Self {
        Command::Tick { after }
    }

    /// Combine commands, dropping empty ones.
    pub fn batch(commands: impl IntoIterator<Item = Command>) -> Self {
        let mut commands: Vec<Command> = commands.into_iter().filter(|c| !c.is_none()).collect();
        match commands.len() {
            0 => Command::None,
            1 => commands.remove(0),
            _ => Command::Batch(commands),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Command::None)
    }

    /// All leaf commands, with batches expanded recursively.
    pub fn flatten(self) -> Vec<Command> {
        match self {
            Command::None => Vec::new(),
            Command::Batch(commands) => commands.into_iter().flat_map(Command::flatten).collect(),
            other => vec![other],
        }
    }

    /// Short description used when logging scheduled work.
    pub fn describe(&self) -> String {
        match self {
            Command::None => "none".to_string(),
            Command::Batch(commands) => format!("batch of {}", commands.len()),
            Command::Emit(message) => format!("emit {}", message.kind()),
            Command::Tick { after } => format!("tick in {:?}", after),
            Command::Frame { id, tag, after } => format!("frame {} tag {} in {:?}", id, tag, after),
            Command::ListBranches { id } => format!("list branches ({})", id),
            Command::Checkout { id, branch } => format!("checkout {} ({})", branch.short_name, id),
        }
    }
}
