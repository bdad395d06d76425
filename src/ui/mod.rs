//! UI module for git-pick
//!
//! This module holds the component runtime, the components built on it and
//! the terminal setup that drives them.

pub mod app_component;
pub mod components;
pub mod core;
pub mod renderer;
pub mod style;

pub use app_component::{AppComponent, Page, PageKind};
pub use renderer::{run_app, AppOutcome};
