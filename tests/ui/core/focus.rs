use crossterm::event::KeyCode;
use git_pick::ui::core::{CommandId, Direction, FocusRouter, Message, NavKeys, Payload, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Left,
    Middle,
    Right,
}

fn router() -> FocusRouter<Pane> {
    FocusRouter::new(
        vec![Pane::Left, Pane::Middle, Pane::Right],
        NavKeys::new(KeyCode::Char('h'), KeyCode::Char('l')).with_release(KeyCode::Esc),
    )
}

/// Feed messages through a router the way a parent does and return where
/// focus ends up.
fn apply(router: &mut FocusRouter<Pane>, messages: &[Message]) -> Option<Pane> {
    for message in messages {
        if let Route::Navigate(direction) = router.route(message, false) {
            router.navigate(direction);
        }
    }
    router.focused()
}

#[test]
fn test_focus_depends_only_on_keys() {
    let keys = vec![
        Message::char('l'),
        Message::char('l'),
        Message::char('x'),
        Message::char('h'),
        Message::char('l'),
        Message::char('l'),
    ];

    let mut interleaved = Vec::new();
    for key in &keys {
        interleaved.push(Message::AsyncResult {
            id: CommandId::next(),
            outcome: Ok(Payload::Branches(Vec::new())),
        });
        interleaved.push(key.clone());
        interleaved.push(Message::Resize(100, 40));
    }

    let only_keys = apply(&mut router(), &keys);
    let mixed = apply(&mut router(), &interleaved);
    assert_eq!(only_keys, mixed);
    // l, l, h, l, l from Left wraps around to Left.
    assert_eq!(only_keys, Some(Pane::Left));
}

#[test]
fn test_captured_child_keeps_navigation_keys() {
    let router = router();
    assert_eq!(router.route(&Message::char('l'), true), Route::Focused);
    assert_eq!(router.route(&Message::key(KeyCode::Esc), true), Route::Release);
    assert_eq!(router.route(&Message::char('l'), false), Route::Navigate(Direction::Next));
}

#[test]
fn test_keys_are_dropped_without_focus() {
    let mut router = router();
    router.clear();
    assert_eq!(router.route(&Message::char('x'), false), Route::Ignore);
    assert_eq!(router.route(&Message::Activated, false), Route::Ignore);
    assert_eq!(router.route(&Message::Resize(10, 10), false), Route::Broadcast);

    assert_eq!(router.navigate(Direction::Previous), Some(Pane::Right));
}
