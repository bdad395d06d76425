//! Single-line text input.

use crate::constants::DEFAULT_INPUT_WIDTH;
use crate::ui::core::keys::printable;
use crate::ui::core::{Command, Component, Message};
use crossterm::event::{KeyCode, KeyModifiers};
use unicode_width::UnicodeWidthChar;

pub struct TextInput {
    value: Vec<char>,
    /// Cursor position as a char index into `value`.
    position: usize,
    focused: bool,
    placeholder: String,
    prompt: String,
    width: u16,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            value: Vec::new(),
            position: 0,
            focused: false,
            placeholder: String::new(),
            prompt: "> ".to_string(),
            width: DEFAULT_INPUT_WIDTH,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().collect();
        self.position = self.value.len();
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.position = 0;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    fn insert(&mut self, c: char) {
        self.value.insert(self.position, c);
        self.position += 1;
    }

    /// Delete from the cursor back to the previous word boundary.
    fn delete_word_backward(&mut self) {
        let mut start = self.position;
        while start > 0 && self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        self.value.drain(start..self.position);
        self.position = start;
    }

    /// The slice of the value that fits in `width` columns around the cursor.
    fn window(&self) -> (usize, usize) {
        if self.width == 0 {
            return (0, self.value.len());
        }
        let limit = self.width as usize;
        let mut start = 0;
        let mut used: usize = self.value[..self.position].iter().map(|c| c.width().unwrap_or(0)).sum();
        while used >= limit && start < self.position {
            used -= self.value[start].width().unwrap_or(0);
            start += 1;
        }
        let mut end = self.position;
        let mut total = used;
        while end < self.value.len() {
            let w = self.value[end].width().unwrap_or(0);
            if total + w >= limit {
                break;
            }
            total += w;
            end += 1;
        }
        (start, end)
    }
}

impl Component for TextInput {
    fn update(&mut self, msg: &Message) -> Command {
        let Message::Key(key) = msg else {
            return Command::None;
        };
        if !self.focused {
            return Command::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Backspace if self.position > 0 => {
                self.position -= 1;
                self.value.remove(self.position);
            }
            KeyCode::Delete if self.position < self.value.len() => {
                self.value.remove(self.position);
            }
            KeyCode::Left if self.position > 0 => self.position -= 1,
            KeyCode::Right if self.position < self.value.len() => self.position += 1,
            KeyCode::Home => self.position = 0,
            KeyCode::End => self.position = self.value.len(),
            KeyCode::Char('a') if ctrl => self.position = 0,
            KeyCode::Char('e') if ctrl => self.position = self.value.len(),
            KeyCode::Char('u') if ctrl => {
                self.value.drain(..self.position);
                self.position = 0;
            }
            KeyCode::Char('k') if ctrl => self.value.truncate(self.position),
            KeyCode::Char('w') if ctrl => self.delete_word_backward(),
            _ => {
                if let Some(c) = printable(key) {
                    self.insert(c);
                }
            }
        }
        Command::None
    }

    fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            let cursor = if self.focused { "█" } else { "" };
            return format!("{}{}{}", self.prompt, cursor, self.placeholder);
        }

        let (start, end) = self.window();
        let mut out = self.prompt.clone();
        for (i, c) in self.value[start..end].iter().enumerate() {
            if self.focused && start + i == self.position {
                out.push('█');
            }
            out.push(*c);
        }
        if self.focused && self.position >= end {
            out.push('█');
        }
        out
    }

    fn captures_input(&self) -> bool {
        self.focused
    }

    fn on_focus(&mut self) -> Command {
        self.focused = true;
        Command::None
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
