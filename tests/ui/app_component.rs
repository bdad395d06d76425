use crate::support::{branches, list_id};
use crossterm::event::KeyCode;
use git_pick::config::Config;
use git_pick::ui::components::Phase;
use git_pick::ui::core::{Command, Component, Message, Payload};
use git_pick::ui::{AppComponent, PageKind};
use git_pick::vcs::VcsError;

fn started() -> (AppComponent, git_pick::ui::core::CommandId) {
    let mut app = AppComponent::new(&Config::default());
    let id = list_id(app.init()).expect("init should list branches");
    (app, id)
}

fn is_quit(command: &Command) -> bool {
    command.clone().flatten().contains(&Command::quit())
}

#[test]
fn test_pages_cycle_with_star_and_hash() {
    let (mut app, _) = started();
    assert_eq!(app.active(), Some(PageKind::Picker));
    assert!(app.view().contains("[Branches]"));

    app.update(&Message::char('*'));
    assert_eq!(app.active(), Some(PageKind::Demo));
    app.update(&Message::char('*'));
    assert_eq!(app.active(), Some(PageKind::Graph));
    assert!(app.view().contains("10.00 ┤"));

    app.update(&Message::char('*'));
    assert_eq!(app.active(), Some(PageKind::Picker));
    app.update(&Message::char('#'));
    assert_eq!(app.active(), Some(PageKind::Graph));
}

#[test]
fn test_showing_demo_starts_its_animation() {
    let (mut app, _) = started();
    let command = app.update(&Message::char('*'));
    assert!(command.flatten().iter().any(|c| matches!(c, Command::Tick { .. })));
}

#[test]
fn test_results_reach_hidden_picker() {
    let (mut app, id) = started();
    app.update(&Message::char('*'));

    app.update(&Message::AsyncResult {
        id,
        outcome: Ok(Payload::Branches(branches(&["main", "dev"]))),
    });
    let picker = app.picker().unwrap();
    assert_eq!(picker.phase(), &Phase::Ready);
    assert_eq!(picker.list().items().len(), 2);
}

#[test]
fn test_keys_only_reach_visible_page() {
    let (mut app, id) = started();
    app.update(&Message::AsyncResult {
        id,
        outcome: Ok(Payload::Branches(branches(&["main", "dev"]))),
    });
    app.update(&Message::char('*'));

    app.update(&Message::char('j'));
    assert_eq!(app.picker().unwrap().list().cursor(), 0);
}

#[test]
fn test_q_is_typed_into_captured_input() {
    let (mut app, _) = started();
    app.update(&Message::char('*'));
    app.update(&Message::char('h'));
    assert!(app.captures_input());

    assert!(!is_quit(&app.update(&Message::char('q'))));
    assert_eq!(app.demo().unwrap().input().value(), "q");

    assert!(is_quit(&app.update(&Message::ctrl('c'))));
}

#[test]
fn test_q_quits_when_nothing_captures() {
    let (mut app, _) = started();
    assert!(is_quit(&app.update(&Message::char('q'))));
    assert_eq!(app.exit_code(), 0);
}

#[test]
fn test_switching_branch_quits() {
    let (mut app, id) = started();
    app.update(&Message::AsyncResult {
        id,
        outcome: Ok(Payload::Branches(branches(&["main"]))),
    });
    let Command::Checkout { id, branch } = app.update(&Message::key(KeyCode::Enter)) else {
        panic!("expected a checkout command");
    };

    let command = app.update(&Message::AsyncResult {
        id,
        outcome: Ok(Payload::CheckedOut(branch.clone())),
    });
    assert!(is_quit(&command));
    assert_eq!(app.chosen_branch(), Some(&branch));
    assert_eq!(app.exit_code(), 0);
}

#[test]
fn test_missing_repository_quits_with_failure() {
    let (mut app, id) = started();
    let command = app.update(&Message::AsyncResult {
        id,
        outcome: Err(VcsError::NotARepository),
    });
    assert!(is_quit(&command));
    assert_eq!(app.exit_code(), 1);

    // Only one quit is issued.
    assert!(!is_quit(&app.update(&Message::Resize(80, 24))));
}
