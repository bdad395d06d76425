//! Rendering helpers shared by all components.
//!
//! The [`Theme`] is process-wide and read-only: it is installed once at
//! startup with [`init_theme`] and every view reads it through [`theme`].
//! Layout helpers work on plain multi-line strings so that views stay simple
//! `String`s the runtime can draw as a single frame.

use once_cell::sync::OnceCell;
use ratatui::style::{Color, Style};
use ratatui::symbols::border;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

static THEME: OnceCell<Theme> = OnceCell::new();

/// A border made of spaces: keeps unfocused widgets aligned with focused ones.
pub const HIDDEN: border::Set = border::Set {
    top_left: " ",
    top_right: " ",
    bottom_left: " ",
    bottom_right: " ",
    vertical_left: " ",
    vertical_right: " ",
    horizontal_top: " ",
    horizontal_bottom: " ",
};

#[derive(Debug, Clone)]
pub struct Theme {
    pub foreground: Color,
    pub focused_border: border::Set,
    pub blurred_border: border::Set,
    pub selected_prefix: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: Color::Reset,
            focused_border: border::PLAIN,
            blurred_border: HIDDEN,
            selected_prefix: "> ",
        }
    }
}

impl Theme {
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    /// Border set for a widget, depending on whether it holds focus.
    pub fn border(&self, focused: bool) -> &border::Set {
        if focused {
            &self.focused_border
        } else {
            &self.blurred_border
        }
    }
}

/// Look up a border set by its configuration name.
pub fn border_by_name(name: &str) -> Option<border::Set> {
    match name {
        "plain" => Some(border::PLAIN),
        "rounded" => Some(border::ROUNDED),
        "double" => Some(border::DOUBLE),
        "thick" => Some(border::THICK),
        "hidden" => Some(HIDDEN),
        _ => None,
    }
}

/// Install the theme. Only the first call has an effect.
pub fn init_theme(theme: Theme) -> bool {
    THEME.set(theme).is_ok()
}

/// The installed theme, or the default one if none was installed.
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

/// Display width of the widest line.
pub fn block_width(block: &str) -> usize {
    block.lines().map(UnicodeWidthStr::width).max().unwrap_or(0)
}

fn pad_to(line: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(line);
    let mut out = line.to_string();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(w)));
    out
}

/// Surround `content` with a border.
pub fn boxed(content: &str, set: &border::Set) -> String {
    let inner = block_width(content);
    let mut lines = Vec::new();
    lines.push(format!(
        "{}{}{}",
        set.top_left,
        set.horizontal_top.repeat(inner),
        set.top_right
    ));
    let body: Vec<&str> = if content.is_empty() { vec![""] } else { content.lines().collect() };
    for line in body {
        lines.push(format!("{}{}{}", set.vertical_left, pad_to(line, inner), set.vertical_right));
    }
    lines.push(format!(
        "{}{}{}",
        set.bottom_left,
        set.horizontal_bottom.repeat(inner),
        set.bottom_right
    ));
    lines.join("\n")
}

/// Place blocks side by side, aligned to the top.
pub fn join_horizontal(blocks: &[String]) -> String {
    let height = blocks.iter().map(|b| b.lines().count()).max().unwrap_or(0);
    let widths: Vec<usize> = blocks.iter().map(|b| block_width(b)).collect();

    let mut rows = Vec::with_capacity(height);
    for row in 0..height {
        let mut line = String::new();
        for (block, width) in blocks.iter().zip(&widths) {
            line.push_str(&pad_to(block.lines().nth(row).unwrap_or(""), *width));
        }
        rows.push(line.trim_end().to_string());
    }
    rows.join("\n")
}

/// Cut `line` to at most `width` columns, ending in `…` when anything was cut.
pub fn truncate(line: &str, width: usize) -> String {
    if UnicodeWidthStr::width(line) <= width {
        return line.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Stack blocks on top of each other.
pub fn join_vertical(blocks: &[String]) -> String {
    blocks.join("\n")
}
