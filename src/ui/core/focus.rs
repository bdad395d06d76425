//! Focus tracking and message routing for composite components.
//!
//! A composite owns one [`FocusRouter`] over the identifiers of its children.
//! For every incoming message it asks the router for a [`Route`] and acts on
//! it: navigation keys move focus and are swallowed, other keys go to the
//! focused child only, and window/timer/async traffic is broadcast to every
//! child. Routing itself is pure; focus only changes through [`FocusRouter::navigate`]
//! or [`FocusRouter::focus`], so the resulting focus is a fold of the
//! navigation keys alone.

use super::message::Message;
use crossterm::event::KeyCode;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Delivery decision for a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Focus-navigation key: move focus, deliver to nobody.
    Navigate(Direction),
    /// The captured child gives up its modal key binding.
    Release,
    /// Deliver to the focused child only.
    Focused,
    /// Deliver to every live child.
    Broadcast,
    /// Deliver to nobody.
    Ignore,
}

/// Keys the router intercepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavKeys {
    pub previous: KeyCode,
    pub next: KeyCode,
    /// Ends modal capture, if the composite supports it.
    pub release: Option<KeyCode>,
}

impl NavKeys {
    pub fn new(previous: KeyCode, next: KeyCode) -> Self {
        Self {
            previous,
            next,
            release: None,
        }
    }

    pub fn with_release(mut self, release: KeyCode) -> Self {
        self.release = Some(release);
        self
    }
}

#[derive(Debug, Clone)]
pub struct FocusRouter<T> {
    targets: Vec<T>,
    focused: Option<usize>,
    keys: NavKeys,
}

impl<T: Copy + PartialEq + Debug> FocusRouter<T> {
    /// Create a router with focus on the first target (if any).
    pub fn new(targets: Vec<T>, keys: NavKeys) -> Self {
        let focused = if targets.is_empty() { None } else { Some(0) };
        Self { targets, focused, keys }
    }

    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    pub fn keys(&self) -> NavKeys {
        self.keys
    }

    pub fn focused(&self) -> Option<T> {
        self.focused.and_then(|i| self.targets.get(i).copied())
    }

    pub fn is_focused(&self, target: T) -> bool {
        self.focused() == Some(target)
    }

    /// Give focus to `target`. Returns false if it is not one of the targets.
    pub fn focus(&mut self, target: T) -> bool {
        match self.targets.iter().position(|t| *t == target) {
            Some(index) => {
                self.focused = Some(index);
                true
            }
            None => false,
        }
    }

    /// Drop focus entirely; only global keys are handled afterwards.
    pub fn clear(&mut self) {
        self.focused = None;
    }

    /// Move focus one step, wrapping around. Returns the newly focused target.
    pub fn navigate(&mut self, direction: Direction) -> Option<T> {
        let len = self.targets.len();
        if len == 0 {
            return None;
        }

        let next = match (self.focused, direction) {
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => len - 1,
            (Some(i), Direction::Next) => (i + 1) % len,
            (Some(i), Direction::Previous) => (i + len - 1) % len,
        };
        self.focused = Some(next);
        self.focused()
    }

    /// Decide who receives `msg`. `captured` is true while the focused child
    /// holds a modal key binding.
    pub fn route(&self, msg: &Message, captured: bool) -> Route {
        match msg {
            Message::Key(key) => {
                if self.focused.is_none() {
                    return Route::Ignore;
                }
                if captured {
                    if self.keys.release == Some(key.code) {
                        Route::Release
                    } else {
                        Route::Focused
                    }
                } else if key.code == self.keys.previous {
                    Route::Navigate(Direction::Previous)
                } else if key.code == self.keys.next {
                    Route::Navigate(Direction::Next)
                } else {
                    Route::Focused
                }
            }
            Message::Resize(..) | Message::Tick(_) | Message::AnimationFrame { .. } | Message::AsyncResult { .. } => {
                Route::Broadcast
            }
            Message::Activated => {
                if self.focused.is_some() {
                    Route::Focused
                } else {
                    Route::Ignore
                }
            }
            Message::Quit => Route::Ignore,
        }
    }
}
