use git_pick::ui::core::{Command, CommandId, Message};
use git_pick::vcs::Branch;
use std::time::Duration;

#[test]
fn test_batch_drops_empty_commands() {
    assert!(Command::batch([Command::None, Command::None]).is_none());
    assert_eq!(Command::batch([Command::None, Command::quit()]), Command::quit());
}

#[test]
fn test_batch_keeps_independent_commands() {
    let tick = Command::tick(Duration::from_millis(5));
    let batch = Command::batch([tick.clone(), Command::None, Command::quit()]);
    assert_eq!(batch, Command::Batch(vec![tick, Command::quit()]));
}

#[test]
fn test_flatten_expands_nested_batches() {
    let id = CommandId::next();
    let nested = Command::Batch(vec![
        Command::Batch(vec![Command::ListBranches { id }, Command::None]),
        Command::Emit(Message::Activated),
    ]);
    assert_eq!(
        nested.flatten(),
        vec![Command::ListBranches { id }, Command::Emit(Message::Activated)]
    );
}

#[test]
fn test_quit_is_an_emitted_message() {
    assert_eq!(Command::quit(), Command::Emit(Message::Quit));
    assert!(Command::default().is_none());
}

#[test]
fn test_describe_names_the_branch() {
    let command = Command::Checkout {
        id: CommandId::next(),
        branch: Branch::local("feature/x"),
    };
    assert!(command.describe().starts_with("checkout feature/x"));
}
