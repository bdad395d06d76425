use super::command::Command;
use super::message::Message;

/// A self-contained unit of UI state and behaviour.
///
/// `update` must only touch the component's own state and must not block;
/// anything slow is returned as a [`Command`]. `view` renders the current state
/// and never mutates it.
pub trait Component {
    fn init(&mut self) -> Command {
        Command::None
    }

    fn update(&mut self, msg: &Message) -> Command;

    fn view(&self) -> String;

    /// Whether the component is currently absorbing raw keystrokes (modal text entry).
    fn captures_input(&self) -> bool {
        false
    }

    // Optional lifecycle methods
    fn on_focus(&mut self) -> Command {
        Command::None
    }
    fn on_blur(&mut self) {}

    /// Process exit code to report once the program stops.
    fn exit_code(&self) -> i32 {
        0
    }
}
