//! Version-control abstraction layer.
//!
//! The UI never talks to git directly. It describes the work it wants done
//! (list branches, check one out) as commands, and the scheduler executes them
//! against a [`VcsBackend`]. This module defines that interface along with the
//! branch representation and the error taxonomy shared by all backends.

use async_trait::async_trait;
use std::path::PathBuf;

pub mod git;

pub use git::GitCli;

/// Common error types for version-control operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VcsError {
    #[error("not a git repository (or any of the parent directories)")]
    NotARepository,

    #[error("backend error: {0}")]
    Backend(String),

    #[error("unable to checkout branch: {0}")]
    Checkout(String),
}

impl VcsError {
    /// Whether the error means there is nothing to operate on at all.
    pub fn is_fatal(&self) -> bool {
        matches!(self, VcsError::NotARepository)
    }
}

/// A local branch as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Branch {
    /// Full reference name, e.g. `refs/heads/feature/x`.
    pub full_name: String,
    /// Short name, e.g. `feature/x`. Used for display and filtering.
    pub short_name: String,
}

impl Branch {
    pub fn new(full_name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            short_name: short_name.into(),
        }
    }

    /// Build a branch from its short name, deriving the `refs/heads/` reference.
    pub fn local(short_name: impl Into<String>) -> Self {
        let short_name = short_name.into();
        Self {
            full_name: format!("refs/heads/{}", short_name),
            short_name,
        }
    }

    /// The name handed to a checkout: the short name when known.
    pub fn checkout_name(&self) -> &str {
        if self.short_name.is_empty() {
            &self.full_name
        } else {
            &self.short_name
        }
    }
}

/// Backend trait that every version-control implementation must satisfy.
///
/// Implementations are shared between concurrently running commands, so they
/// must be `Send + Sync`. Mutating operations are never issued concurrently by
/// the UI (the branch picker gates checkout while one is pending).
#[async_trait]
pub trait VcsBackend: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Locate the repository the process is running in.
    async fn repository_root(&self) -> Result<PathBuf, VcsError>;

    /// List local branches in the backend's native order.
    async fn list_branches(&self) -> Result<Vec<Branch>, VcsError>;

    /// Switch the working tree to `branch`.
    async fn checkout(&self, branch: &Branch) -> Result<(), VcsError>;
}
