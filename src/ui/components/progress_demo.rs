//! Widget demo: a progress bar, a spinner and a text input sharing focus,
//! plus a graph underneath.
//!
//! `h`/`l` move focus between the three widgets. Focusing the input captures
//! raw keys until `esc` or `enter` releases it; `enter` also stores the typed
//! name. `k`/`j` cycle spinner styles. When the page is shown, the progress
//! bar restarts and a one-second tick fills it a step at a time.

use super::graph::Graph;
use super::progress_bar::ProgressBar;
use super::spinner::{Spinner, SpinnerKind};
use super::text_input::TextInput;
use crate::config::DemoConfig;
use crate::constants::{DEMO_HELP, INPUT_PLACEHOLDER};
use crate::ui::core::{Command, Component, Direction, FocusRouter, Message, NavKeys, Route};
use crate::ui::style::{self, boxed, join_horizontal, join_vertical};
use crossterm::event::KeyCode;
use log::debug;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoWidget {
    Progress,
    Spinner,
    Input,
}

pub struct ProgressDemo {
    router: FocusRouter<DemoWidget>,
    progress: ProgressBar,
    spinner: Spinner,
    spinner_index: usize,
    input: TextInput,
    graph: Graph,
    name: String,
    tick_interval: Duration,
    step: f64,
    tick_pending: bool,
}

impl Default for ProgressDemo {
    fn default() -> Self {
        Self::new(&DemoConfig::default())
    }
}

impl ProgressDemo {
    pub fn new(config: &DemoConfig) -> Self {
        let keys = NavKeys::new(KeyCode::Char('h'), KeyCode::Char('l')).with_release(KeyCode::Esc);
        let mut demo = Self {
            router: FocusRouter::new(vec![DemoWidget::Progress, DemoWidget::Spinner, DemoWidget::Input], keys),
            progress: ProgressBar::new(),
            spinner: Spinner::new(SpinnerKind::Line),
            spinner_index: 0,
            input: TextInput::new().with_placeholder(INPUT_PLACEHOLDER),
            graph: Graph::new(),
            name: String::new(),
            tick_interval: Duration::from_millis(config.progress_interval_ms),
            step: config.progress_step,
            tick_pending: false,
        };
        demo.reset_spinner(0);
        demo
    }

    pub fn focused(&self) -> Option<DemoWidget> {
        self.router.focused()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn progress(&self) -> &ProgressBar {
        &self.progress
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    /// Replace the spinner with style `index` (wrapping). The new spinner has a
    /// new id, so frames for the old one are dropped.
    fn reset_spinner(&mut self, index: isize) -> Command {
        let (index, kind) = SpinnerKind::cycle(index);
        self.spinner_index = index;
        self.spinner = Spinner::new(kind);
        self.spinner.set_padding(1);
        self.spinner.tick()
    }

    fn set_focus(&mut self, target: DemoWidget) -> Command {
        let previous = self.router.focused();
        self.router.focus(target);
        self.after_focus_change(previous)
    }

    fn move_focus(&mut self, direction: Direction) -> Command {
        let previous = self.router.focused();
        self.router.navigate(direction);
        self.after_focus_change(previous)
    }

    fn after_focus_change(&mut self, previous: Option<DemoWidget>) -> Command {
        let current = self.router.focused();
        debug!("ProgressDemo: focus {:?} -> {:?}", previous, current);
        if previous == current {
            return Command::None;
        }
        if previous == Some(DemoWidget::Input) {
            self.input.on_blur();
        }
        if current == Some(DemoWidget::Input) {
            return self.input.on_focus();
        }
        Command::None
    }

    fn activate(&mut self) -> Command {
        let progress = self.progress.set_percent(0.0);
        let tick = self.request_tick();
        Command::batch([progress, tick, self.spinner.tick()])
    }

    fn request_tick(&mut self) -> Command {
        if self.tick_pending {
            return Command::None;
        }
        self.tick_pending = true;
        Command::tick(self.tick_interval)
    }

    fn handle_focused(&mut self, msg: &Message) -> Command {
        let Message::Key(key) = msg else {
            if matches!(msg, Message::Activated) {
                return self.activate();
            }
            return Command::None;
        };

        if self.router.is_focused(DemoWidget::Input) {
            if key.code == KeyCode::Enter {
                self.name = self.input.value();
                return self.set_focus(DemoWidget::Progress);
            }
            return self.input.update(msg);
        }

        match key.code {
            KeyCode::Char('k') => self.reset_spinner(self.spinner_index as isize + 1),
            KeyCode::Char('j') => self.reset_spinner(self.spinner_index as isize - 1),
            _ => Command::None,
        }
    }

    fn broadcast(&mut self, msg: &Message) -> Command {
        match msg {
            Message::Resize(width, _) => {
                let half = (*width / 2).saturating_sub(2);
                self.progress.set_width(half);
                self.input.set_width(half);
                Command::None
            }
            Message::Tick(_) => {
                self.tick_pending = false;
                let progress = self.progress.incr_percent(self.step);
                let tick = if self.progress.percent() < 1.0 {
                    self.request_tick()
                } else {
                    Command::None
                };
                Command::batch([progress, tick])
            }
            Message::AnimationFrame { .. } => Command::batch([self.progress.update(msg), self.spinner.update(msg)]),
            _ => Command::None,
        }
    }

    fn styled(&self, widget: DemoWidget, content: String) -> String {
        boxed(&content, style::theme().border(self.router.is_focused(widget)))
    }
}

impl Component for ProgressDemo {
    fn update(&mut self, msg: &Message) -> Command {
        match self.router.route(msg, self.captures_input()) {
            Route::Navigate(direction) => self.move_focus(direction),
            Route::Release => self.set_focus(DemoWidget::Progress),
            Route::Focused => self.handle_focused(msg),
            Route::Broadcast => self.broadcast(msg),
            Route::Ignore => Command::None,
        }
    }

    fn view(&self) -> String {
        let row1 = join_horizontal(&[
            self.styled(DemoWidget::Progress, self.progress.view()),
            self.styled(DemoWidget::Spinner, self.spinner.view()),
        ]);

        let hello = if self.name.is_empty() {
            String::new()
        } else {
            format!("\n Hello {}", self.name)
        };
        let row2 = join_horizontal(&[self.styled(DemoWidget::Input, self.input.view()), hello]);

        format!(
            "{}\n\n{}\n\n  {}",
            join_vertical(&[row1, row2]),
            self.graph.view(),
            DEMO_HELP
        )
    }

    fn captures_input(&self) -> bool {
        self.router.is_focused(DemoWidget::Input) && self.input.captures_input()
    }
}
