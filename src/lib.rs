//! git-pick - an interactive terminal branch switcher
//!
//! This library provides a small Elm-style component runtime for the
//! terminal and the screens built on it: a branch picker that lists and
//! checks out git branches, and a widget demo page.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`logger`] - File logging setup
//! * [`ui`] - Component runtime, components and terminal handling
//! * [`vcs`] - Version-control backends

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface
pub mod ui;

/// Branch listing and checkout
pub mod vcs;
