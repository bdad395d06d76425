//! Animated spinner.
//!
//! Each spinner owns a [`ComponentId`] and a frame tag. A frame message only
//! advances the spinner when both match, after which the tag moves on and the
//! next frame is requested. Stale chains (an older spinner, or a duplicate
//! `tick`) therefore die out on their own.

use crate::ui::core::{Command, ComponentId, Component, Message};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerKind {
    Line,
    Dot,
    MiniDot,
    Jump,
    Pulse,
    Points,
    Globe,
    Moon,
    Monkey,
}

impl SpinnerKind {
    pub const ALL: [SpinnerKind; 9] = [
        SpinnerKind::Line,
        SpinnerKind::Dot,
        SpinnerKind::MiniDot,
        SpinnerKind::Jump,
        SpinnerKind::Pulse,
        SpinnerKind::Points,
        SpinnerKind::Globe,
        SpinnerKind::Moon,
        SpinnerKind::Monkey,
    ];

    pub fn frames(&self) -> &'static [&'static str] {
        match self {
            SpinnerKind::Line => &["|", "/", "-", "\\"],
            SpinnerKind::Dot => &["⣾ ", "⣽ ", "⣻ ", "⢿ ", "⡿ ", "⣟ ", "⣯ ", "⣷ "],
            SpinnerKind::MiniDot => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            SpinnerKind::Jump => &["⢄", "⢂", "⢁", "⡁", "⡈", "⡐", "⡠"],
            SpinnerKind::Pulse => &["█", "▓", "▒", "░"],
            SpinnerKind::Points => &["∙∙∙", "●∙∙", "∙●∙", "∙∙●"],
            SpinnerKind::Globe => &["🌍", "🌎", "🌏"],
            SpinnerKind::Moon => &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"],
            SpinnerKind::Monkey => &["🙈", "🙉", "🙊"],
        }
    }

    /// Time between frames.
    pub fn interval(&self) -> Duration {
        let fps = match self {
            SpinnerKind::Line | SpinnerKind::Dot | SpinnerKind::Jump => 10,
            SpinnerKind::MiniDot => 12,
            SpinnerKind::Pulse | SpinnerKind::Moon => 8,
            SpinnerKind::Points => 7,
            SpinnerKind::Globe => 4,
            SpinnerKind::Monkey => 3,
        };
        Duration::from_millis(1000 / fps)
    }

    /// Kind at `index`, wrapping in both directions.
    pub fn cycle(index: isize) -> (usize, SpinnerKind) {
        let len = Self::ALL.len() as isize;
        let index = index.rem_euclid(len) as usize;
        (index, Self::ALL[index])
    }
}

pub struct Spinner {
    id: ComponentId,
    kind: SpinnerKind,
    frame: usize,
    tag: u64,
    padding: usize,
}

impl Spinner {
    pub fn new(kind: SpinnerKind) -> Self {
        Self {
            id: ComponentId::next(),
            kind,
            frame: 0,
            tag: 0,
            padding: 0,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn kind(&self) -> SpinnerKind {
        self.kind
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Horizontal padding on both sides of the frame.
    pub fn set_padding(&mut self, padding: usize) {
        self.padding = padding;
    }

    /// Request the next frame for the current tag.
    pub fn tick(&self) -> Command {
        Command::Frame {
            id: self.id,
            tag: self.tag,
            after: self.kind.interval(),
        }
    }
}

impl Component for Spinner {
    fn init(&mut self) -> Command {
        self.tick()
    }

    fn update(&mut self, msg: &Message) -> Command {
        match msg {
            Message::AnimationFrame { id, tag } if *id == self.id && *tag == self.tag => {
                self.frame = (self.frame + 1) % self.kind.frames().len();
                self.tag += 1;
                self.tick()
            }
            _ => Command::None,
        }
    }

    fn view(&self) -> String {
        let pad = " ".repeat(self.padding);
        format!("{}{}{}", pad, self.kind.frames()[self.frame], pad)
    }
}
