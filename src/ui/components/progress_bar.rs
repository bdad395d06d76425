//! Progress bar that eases toward its target percentage.

use crate::constants::{DEFAULT_PROGRESS_WIDTH, PROGRESS_FPS};
use crate::ui::core::{Command, ComponentId, Component, Message};
use std::time::Duration;

const EASING: f64 = 0.3;
const SETTLE: f64 = 0.001;
const PERCENT_WIDTH: usize = 5;

pub struct ProgressBar {
    id: ComponentId,
    tag: u64,
    target: f64,
    shown: f64,
    width: u16,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBar {
    pub fn new() -> Self {
        Self {
            id: ComponentId::next(),
            tag: 0,
            target: 0.0,
            shown: 0.0,
            width: DEFAULT_PROGRESS_WIDTH,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Target value in `0.0..=1.0`.
    pub fn percent(&self) -> f64 {
        self.target
    }

    /// Value currently drawn.
    pub fn shown_percent(&self) -> f64 {
        self.shown
    }

    pub fn is_animating(&self) -> bool {
        (self.target - self.shown).abs() > f64::EPSILON
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Set a new target and start a fresh animation chain toward it.
    pub fn set_percent(&mut self, percent: f64) -> Command {
        self.target = percent.clamp(0.0, 1.0);
        self.tag += 1;
        self.next_frame()
    }

    pub fn incr_percent(&mut self, delta: f64) -> Command {
        self.set_percent(self.target + delta)
    }

    fn next_frame(&self) -> Command {
        Command::Frame {
            id: self.id,
            tag: self.tag,
            after: Duration::from_millis(1000 / PROGRESS_FPS),
        }
    }
}

impl Component for ProgressBar {
    fn update(&mut self, msg: &Message) -> Command {
        match msg {
            Message::AnimationFrame { id, tag } if *id == self.id && *tag == self.tag => {
                self.shown += (self.target - self.shown) * EASING;
                if (self.target - self.shown).abs() < SETTLE {
                    self.shown = self.target;
                    return Command::None;
                }
                self.tag += 1;
                self.next_frame()
            }
            _ => Command::None,
        }
    }

    fn view(&self) -> String {
        let bar_width = (self.width as usize).saturating_sub(PERCENT_WIDTH).max(1);
        let filled = ((self.shown * bar_width as f64).round() as usize).min(bar_width);
        format!(
            "{}{} {:>3.0}%",
            "█".repeat(filled),
            "░".repeat(bar_width - filled),
            self.shown * 100.0
        )
    }
}
