//! Constants used throughout the application
//!
//! This module centralizes user-visible text and default values to improve
//! maintainability and consistency.

// Branch picker
pub const PICKER_TITLE: &str = "Which branch would you like to switch to?";
pub const PICKER_LOADING: &str = "⟳ Loading branches...";
pub const PICKER_EMPTY: &str = "No branches.";
pub const PICKER_NO_MATCHES: &str = "No matches.";
pub const PICKER_HELP: &str = "↑/k up • ↓/j down • / filter • space mark • enter switch • q quit";
pub const PICKER_FILTER_HELP: &str = "enter apply filter • esc clear filter";

// Demo
pub const INPUT_PLACEHOLDER: &str = "Your name please";
pub const DEMO_HELP: &str = "h/l focus • j/k spinner • esc leave input • q quit";

// Root
pub const APP_HELP: &str = "*/# switch view • ctrl+c quit";

// Layout defaults
pub const DEFAULT_LIST_HEIGHT: usize = 14;
pub const MIN_LIST_HEIGHT: usize = 3;
pub const MAX_LIST_HEIGHT: usize = 200;
pub const DEFAULT_LIST_WIDTH: u16 = 20;
pub const DEFAULT_PROGRESS_WIDTH: u16 = 40;
pub const DEFAULT_INPUT_WIDTH: u16 = 20;

// Animation defaults
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_PROGRESS_STEP: f64 = 0.25;
pub const PROGRESS_FPS: u64 = 60;

// Files
pub const APP_NAME: &str = "git-pick";
pub const LOCAL_CONFIG_FILE: &str = "git-pick.toml";
pub const LOG_FILE_NAME: &str = "git-pick.log";
