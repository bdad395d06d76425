mod support;

#[path = "core/command.rs"]
mod command;

#[path = "core/focus.rs"]
mod focus;

#[path = "core/scheduler.rs"]
mod scheduler;

#[path = "core/runtime.rs"]
mod runtime;

#[path = "components/branch_picker.rs"]
mod branch_picker;

#[path = "components/progress_demo.rs"]
mod progress_demo;

mod app_component;
