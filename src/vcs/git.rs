//! `git` command-line implementation of [`VcsBackend`].

use super::{Branch, VcsBackend, VcsError};
use async_trait::async_trait;
use log::{debug, info};
use std::path::PathBuf;
use tokio::process::Command;

const BRANCH_FORMAT: &str = "--format=%(refname)%09%(refname:short)";

/// Runs the `git` executable and parses its line-oriented output.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    workdir: Option<PathBuf>,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git executable (name on `PATH` or absolute path).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            workdir: None,
        }
    }

    /// Run every command inside `dir` instead of the process working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    async fn run(&self, args: &[&str]) -> Result<String, GitFailure> {
        let mut command = Command::new(&self.program);
        command.args(args).kill_on_drop(true);
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }

        debug!("git: running {} {}", self.program, args.join(" "));
        let output = command
            .output()
            .await
            .map_err(|e| GitFailure::Spawn(format!("failed to run {}: {}", self.program, e)))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let mut text = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if text.is_empty() {
                text = String::from_utf8_lossy(&output.stdout).trim().to_string();
            }
            if text.is_empty() {
                text = format!("{} exited with {}", self.program, output.status);
            }
            Err(GitFailure::Exit(text))
        }
    }
}

/// Raw failure of a git invocation before it is classified per operation.
#[derive(Debug)]
enum GitFailure {
    Spawn(String),
    Exit(String),
}

impl GitFailure {
    fn into_vcs_error(self, wrap: fn(String) -> VcsError) -> VcsError {
        match self {
            GitFailure::Spawn(message) => VcsError::Backend(message),
            GitFailure::Exit(message) => classify_failure(&message, wrap),
        }
    }
}

/// Map git's error output onto the shared taxonomy.
pub fn classify_failure(stderr: &str, wrap: fn(String) -> VcsError) -> VcsError {
    if stderr.to_lowercase().contains("not a git repository") {
        VcsError::NotARepository
    } else {
        wrap(stderr.trim().to_string())
    }
}

/// Parse `git for-each-ref --format=%(refname)%09%(refname:short)` output.
///
/// Order is preserved exactly as git printed it. Lines without a tab are taken
/// as a bare short name.
pub fn parse_branch_listing(output: &str) -> Vec<Branch> {
    output
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once('\t') {
            Some((full, short)) => Branch::new(full.trim(), short.trim()),
            None => Branch::local(line.trim()),
        })
        .collect()
}

#[async_trait]
impl VcsBackend for GitCli {
    fn name(&self) -> &str {
        "git"
    }

    async fn repository_root(&self) -> Result<PathBuf, VcsError> {
        let out = self
            .run(&["rev-parse", "--show-toplevel"])
            .await
            .map_err(|e| e.into_vcs_error(VcsError::Backend))?;
        let root = PathBuf::from(out.trim());
        info!("git: repository root {}", root.display());
        Ok(root)
    }

    async fn list_branches(&self) -> Result<Vec<Branch>, VcsError> {
        let out = self
            .run(&["for-each-ref", BRANCH_FORMAT, "refs/heads"])
            .await
            .map_err(|e| e.into_vcs_error(VcsError::Backend))?;
        let branches = parse_branch_listing(&out);
        info!("git: listed {} branches", branches.len());
        Ok(branches)
    }

    async fn checkout(&self, branch: &Branch) -> Result<(), VcsError> {
        self.run(&["checkout", branch.checkout_name()])
            .await
            .map_err(|e| e.into_vcs_error(VcsError::Checkout))?;
        info!("git: checked out {}", branch.checkout_name());
        Ok(())
    }
}
