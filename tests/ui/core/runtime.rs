use crate::support::FakeVcs;
use crossterm::event::KeyCode;
use git_pick::config::Config;
use git_pick::ui::core::{Message, Program};
use git_pick::ui::AppComponent;
use git_pick::vcs::{Branch, VcsBackend, VcsError};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Notify;
use tokio::time::{sleep, timeout};

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 30)).unwrap()
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wait for the backend to be called, give its result time to reach the
/// inbox, then send `keys`.
async fn after(signal: Arc<Notify>, sender: &UnboundedSender<Message>, keys: Vec<Message>) {
    signal.notified().await;
    sleep(Duration::from_millis(50)).await;
    for key in keys {
        sender.send(key).unwrap();
    }
}

fn program(vcs: Arc<FakeVcs>) -> Program<AppComponent> {
    let backend: Arc<dyn VcsBackend> = vcs;
    Program::new(AppComponent::new(&Config::default()), backend)
}

#[tokio::test]
async fn test_pick_second_branch() {
    let vcs = Arc::new(FakeVcs::with_branches(&["main", "dev"]));
    let mut program = program(vcs.clone());
    let sender = program.sender();
    let mut terminal = terminal();

    let driver = after(
        vcs.listed.clone(),
        &sender,
        vec![Message::key(KeyCode::Down), Message::key(KeyCode::Enter)],
    );
    let (code, _) = tokio::join!(timeout(Duration::from_secs(5), program.run(&mut terminal)), driver);

    assert_eq!(code.unwrap().unwrap(), 0);
    assert_eq!(program.root().chosen_branch(), Some(&Branch::local("dev")));
    assert_eq!(vcs.checkouts(), vec!["dev".to_string()]);
    assert!(screen(&terminal).contains("Switched to branch 'dev'"));
}

#[tokio::test]
async fn test_checkout_conflict_keeps_picker_open() {
    let vcs = Arc::new(
        FakeVcs::with_branches(&["main", "dev"]).fail_checkout(VcsError::Checkout("conflict".to_string())),
    );
    let mut program = program(vcs.clone());
    let sender = program.sender();
    let mut terminal = terminal();

    let driver = async {
        after(vcs.listed.clone(), &sender, vec![Message::key(KeyCode::Enter)]).await;
        after(vcs.checked_out.clone(), &sender, vec![Message::char('q')]).await;
    };
    let (code, _) = tokio::join!(timeout(Duration::from_secs(5), program.run(&mut terminal)), driver);

    assert_eq!(code.unwrap().unwrap(), 0);
    assert!(program.root().chosen_branch().is_none());
    let picker = program.root().picker().unwrap();
    assert_eq!(picker.last_error(), Some("unable to checkout branch: conflict"));
    assert!(screen(&terminal).contains("Error: unable to checkout branch: conflict"));
}

#[tokio::test]
async fn test_missing_repository_exits_with_failure() {
    let vcs = Arc::new(FakeVcs::with_listing(Err(VcsError::NotARepository)));
    let mut program = program(vcs);
    let mut terminal = terminal();

    let code = timeout(Duration::from_secs(5), program.run(&mut terminal)).await;
    assert_eq!(code.unwrap().unwrap(), 1);
}

#[tokio::test]
async fn test_force_quit_stops_the_loop() {
    let vcs = Arc::new(FakeVcs::with_branches(&["main"]));
    let mut program = program(vcs.clone());
    let sender = program.sender();
    let mut terminal = terminal();

    let driver = after(vcs.listed.clone(), &sender, vec![Message::ctrl('c')]);
    let (code, _) = tokio::join!(timeout(Duration::from_secs(5), program.run(&mut terminal)), driver);

    assert_eq!(code.unwrap().unwrap(), 0);
    assert!(program.root().chosen_branch().is_none());
    assert!(vcs.checkouts().is_empty());
}
