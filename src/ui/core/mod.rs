//! Core runtime for git-pick's user interface.
//!
//! This module contains the composition skeleton every screen is built on:
//! the message and command contracts, the component trait, focus routing,
//! the command scheduler and the runtime loop that ties them together.
//!
//! # Module Components
//!
//! - [`message`] - Messages delivered into the update loop
//! - [`command`] - Descriptions of deferred work returned by components
//! - [`component`] - Base component trait (init / update / view)
//! - [`focus`] - Focus tracking and per-message delivery decisions
//! - [`scheduler`] - Executes commands as background tasks
//! - [`event_handler`] - Terminal input pump
//! - [`runtime`] - The single-threaded update loop
//! - [`keys`] - Key naming helpers
//!
//! # Architecture
//!
//! 1. External events (keys, resizes) and finished commands all become a
//!    [`Message`] on one channel
//! 2. The [`Program`] pulls one message at a time and hands it to the root
//!    [`Component`], which routes it to children via a [`FocusRouter`]
//! 3. `update` returns a [`Command`]; the [`Scheduler`] runs it off the loop
//! 4. Each finished command produces exactly one new message
//! 5. The root's `view` is redrawn after every dispatch

pub mod command;
pub mod component;
pub mod event_handler;
pub mod focus;
pub mod keys;
pub mod message;
pub mod runtime;
pub mod scheduler;

// Re-export core types for easier access from other modules
pub use command::Command;
pub use component::Component;
pub use event_handler::EventHandler;
pub use focus::{Direction, FocusRouter, NavKeys, Route};
pub use message::{CommandId, ComponentId, Message, Outcome, Payload};
pub use runtime::Program;
pub use scheduler::{Scheduler, TaskId};
