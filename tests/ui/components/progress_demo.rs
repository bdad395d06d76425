use chrono::Local;
use crossterm::event::KeyCode;
use git_pick::config::DemoConfig;
use git_pick::ui::components::{DemoWidget, ProgressDemo, SpinnerKind};
use git_pick::ui::core::{Command, Component, Message};

fn has_tick(command: Command) -> bool {
    command.flatten().iter().any(|c| matches!(c, Command::Tick { .. }))
}

#[test]
fn test_name_entry_round_trip() {
    let mut demo = ProgressDemo::default();
    assert_eq!(demo.focused(), Some(DemoWidget::Progress));

    demo.update(&Message::char('l'));
    demo.update(&Message::char('l'));
    assert_eq!(demo.focused(), Some(DemoWidget::Input));
    assert!(demo.captures_input());

    // Navigation keys are typed while the input captures.
    for c in "hal".chars() {
        demo.update(&Message::char(c));
    }
    assert_eq!(demo.input().value(), "hal");

    demo.update(&Message::key(KeyCode::Enter));
    assert_eq!(demo.name(), "hal");
    assert_eq!(demo.focused(), Some(DemoWidget::Progress));
    assert!(!demo.captures_input());
    assert!(demo.view().contains("Hello hal"));
}

#[test]
fn test_escape_leaves_input_without_saving() {
    let mut demo = ProgressDemo::default();
    demo.update(&Message::char('h'));
    assert_eq!(demo.focused(), Some(DemoWidget::Input));

    demo.update(&Message::char('x'));
    demo.update(&Message::key(KeyCode::Esc));
    assert_eq!(demo.focused(), Some(DemoWidget::Progress));
    assert_eq!(demo.name(), "");
    assert!(!demo.input().is_focused());
}

#[test]
fn test_ticks_fill_progress_then_stop() {
    let config = DemoConfig {
        progress_interval_ms: 10,
        progress_step: 0.25,
    };
    let mut demo = ProgressDemo::new(&config);

    assert!(has_tick(demo.update(&Message::Activated)));
    assert_eq!(demo.progress().percent(), 0.0);

    for _ in 0..3 {
        assert!(has_tick(demo.update(&Message::Tick(Local::now()))));
    }
    assert_eq!(demo.progress().percent(), 0.75);

    assert!(!has_tick(demo.update(&Message::Tick(Local::now()))));
    assert_eq!(demo.progress().percent(), 1.0);
}

#[test]
fn test_reactivation_does_not_double_the_tick_chain() {
    let mut demo = ProgressDemo::default();
    assert!(has_tick(demo.update(&Message::Activated)));
    assert!(!has_tick(demo.update(&Message::Activated)));
}

#[test]
fn test_spinner_styles_cycle_both_ways() {
    let mut demo = ProgressDemo::default();
    let first = demo.spinner().id();

    demo.update(&Message::char('k'));
    assert_eq!(demo.spinner().kind(), SpinnerKind::Dot);
    assert_ne!(demo.spinner().id(), first);

    demo.update(&Message::char('j'));
    demo.update(&Message::char('j'));
    assert_eq!(demo.spinner().kind(), SpinnerKind::Monkey);
}

#[test]
fn test_resize_splits_width() {
    let mut demo = ProgressDemo::default();
    demo.update(&Message::Resize(80, 24));
    assert_eq!(demo.progress().width(), 38);
    assert_eq!(demo.input().width(), 38);
}
