//! Paginated, filterable list of branches.
//!
//! The list mirrors the backend's order verbatim; filtering only hides rows.
//! Filtering is a case-insensitive substring match on the short name. While
//! the filter is being typed the list captures raw keys.

use super::selection::Selection;
use crate::constants::{
    DEFAULT_LIST_HEIGHT, DEFAULT_LIST_WIDTH, PICKER_EMPTY, PICKER_FILTER_HELP, PICKER_HELP, PICKER_NO_MATCHES,
    PICKER_TITLE,
};
use crate::ui::core::keys::printable;
use crate::ui::core::{Command, Component, Message};
use crate::ui::style;
use crate::vcs::Branch;
use crossterm::event::{KeyCode, KeyEvent};

pub struct BranchList {
    items: Vec<Branch>,
    /// Indices into `items` that pass the filter, in original order.
    visible: Vec<usize>,
    /// Index into `visible`.
    cursor: usize,
    filter: String,
    filtering: bool,
    marked: Selection,
    height: usize,
    width: u16,
    title: String,
}

impl Default for BranchList {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_HEIGHT)
    }
}

impl BranchList {
    pub fn new(height: usize) -> Self {
        Self {
            items: Vec::new(),
            visible: Vec::new(),
            cursor: 0,
            filter: String::new(),
            filtering: false,
            marked: Selection::new(),
            height: height.max(1),
            width: DEFAULT_LIST_WIDTH,
            title: PICKER_TITLE.to_string(),
        }
    }

    /// Replace the items. Marks are dropped; the current filter is reapplied.
    pub fn set_items(&mut self, items: Vec<Branch>) {
        self.items = items;
        self.marked.clear();
        self.refilter();
    }

    pub fn items(&self) -> &[Branch] {
        &self.items
    }

    pub fn visible_items(&self) -> Vec<&Branch> {
        self.visible.iter().filter_map(|&i| self.items.get(i)).collect()
    }

    /// The highlighted branch, if any row is visible.
    pub fn selected(&self) -> Option<&Branch> {
        self.visible.get(self.cursor).and_then(|&i| self.items.get(i))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
        self.refilter();
    }

    pub fn marked(&self) -> &Selection {
        &self.marked
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    fn refilter(&mut self) {
        let needle = self.filter.to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, b)| needle.is_empty() || b.short_name.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
        self.cursor = 0;
    }

    fn move_by(&mut self, delta: isize) {
        if self.visible.is_empty() {
            self.cursor = 0;
            return;
        }
        let last = self.visible.len() as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
    }

    fn page_count(&self) -> usize {
        self.visible.len().div_ceil(self.height).max(1)
    }

    fn page(&self) -> usize {
        self.cursor / self.height
    }

    /// Handle a key. Returns false when the key means nothing to the list.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.filtering {
            return self.handle_filter_key(key);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_by(1),
            KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
            KeyCode::End | KeyCode::Char('G') => self.move_by(isize::MAX / 2),
            KeyCode::Left | KeyCode::PageUp => self.move_by(-(self.height as isize)),
            KeyCode::Right | KeyCode::PageDown => self.move_by(self.height as isize),
            KeyCode::Char('/') => self.filtering = true,
            KeyCode::Char(' ') => {
                if let Some(&index) = self.visible.get(self.cursor) {
                    self.marked.toggle(index);
                }
            }
            KeyCode::Esc if !self.filter.is_empty() => self.set_filter(""),
            _ => return false,
        }
        true
    }

    fn handle_filter_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Tab => self.filtering = false,
            KeyCode::Esc => {
                self.filtering = false;
                self.set_filter("");
            }
            KeyCode::Backspace => {
                self.filter.pop();
                self.refilter();
            }
            KeyCode::Up => self.move_by(-1),
            KeyCode::Down => self.move_by(1),
            _ => match printable(key) {
                Some(c) => {
                    self.filter.push(c);
                    self.refilter();
                }
                None => return false,
            },
        }
        true
    }

    fn status_line(&self) -> String {
        let total = self.items.len();
        let shown = self.visible.len();
        let noun = if shown == 1 { "item" } else { "items" };
        if shown == total {
            format!("{} {}", shown, noun)
        } else {
            format!("{} {} • {} filtered", shown, noun, total - shown)
        }
    }
}

impl Component for BranchList {
    fn update(&mut self, msg: &Message) -> Command {
        match msg {
            Message::Key(key) => {
                self.handle_key(key);
            }
            Message::Resize(width, _) => self.set_width(*width),
            _ => {}
        }
        Command::None
    }

    fn view(&self) -> String {
        let prefix = style::theme().selected_prefix;
        let mut lines = vec![format!("  {}", self.title)];

        if self.filtering {
            lines.push(format!("  Filter: {}█", self.filter));
        } else if !self.filter.is_empty() {
            lines.push(format!("  Filter: \"{}\"", self.filter));
        } else {
            lines.push(String::new());
        }

        lines.push(format!("    {}", self.status_line()));
        lines.push(String::new());

        if self.visible.is_empty() {
            let empty = if self.items.is_empty() { PICKER_EMPTY } else { PICKER_NO_MATCHES };
            lines.push(format!("    {}", empty));
        } else {
            let start = self.page() * self.height;
            let end = (start + self.height).min(self.visible.len());
            for row in start..end {
                let branch = &self.items[self.visible[row]];
                let mark = if self.marked.contains(self.visible[row]) { " ✓" } else { "" };
                let text = format!("{}. {}{}", row + 1, branch.short_name, mark);
                if row == self.cursor {
                    lines.push(format!("  {}{}", prefix, text));
                } else {
                    lines.push(format!("    {}", text));
                }
            }
        }

        let pages = self.page_count();
        if pages > 1 {
            let dots: String = (0..pages).map(|p| if p == self.page() { '•' } else { '○' }).collect();
            lines.push(String::new());
            lines.push(format!("    {}", dots));
        }

        lines.push(String::new());
        let help = if self.filtering { PICKER_FILTER_HELP } else { PICKER_HELP };
        lines.push(format!("    {}", help));

        let width = self.width as usize;
        lines.iter().map(|line| style::truncate(line, width)).collect::<Vec<_>>().join("\n")
    }

    fn captures_input(&self) -> bool {
        self.filtering
    }
}
