//! Reusable UI components

pub mod selection;

// Branch picking
pub mod branch_list;
pub mod branch_picker;

// Widget demo
pub mod graph;
pub mod progress_bar;
pub mod progress_demo;
pub mod spinner;
pub mod text_input;

// Component exports
pub use branch_list::BranchList;
pub use branch_picker::{BranchPicker, Phase};
pub use graph::Graph;
pub use progress_bar::ProgressBar;
pub use progress_demo::{DemoWidget, ProgressDemo};
pub use selection::Selection;
pub use spinner::{Spinner, SpinnerKind};
pub use text_input::TextInput;
