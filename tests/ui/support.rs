use async_trait::async_trait;
use git_pick::ui::core::{Command, CommandId};
use git_pick::vcs::{Branch, VcsBackend, VcsError};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// In-memory backend with scripted results.
pub struct FakeVcs {
    branches: Mutex<Result<Vec<Branch>, VcsError>>,
    checkout_result: Mutex<Result<(), VcsError>>,
    checkouts: Mutex<Vec<String>>,
    panic_on_list: bool,
    hang_checkout: bool,
    pub listed: Arc<Notify>,
    pub checked_out: Arc<Notify>,
    pub checkout_started: Arc<Notify>,
    /// Set once a hanging checkout future has been dropped.
    pub checkout_dropped: Arc<AtomicBool>,
}

/// Raises its flag when dropped.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl FakeVcs {
    pub fn with_branches(names: &[&str]) -> Self {
        Self::with_listing(Ok(names.iter().map(|n| Branch::local(*n)).collect()))
    }

    pub fn with_listing(listing: Result<Vec<Branch>, VcsError>) -> Self {
        Self {
            branches: Mutex::new(listing),
            checkout_result: Mutex::new(Ok(())),
            checkouts: Mutex::new(Vec::new()),
            panic_on_list: false,
            hang_checkout: false,
            listed: Arc::new(Notify::new()),
            checked_out: Arc::new(Notify::new()),
            checkout_started: Arc::new(Notify::new()),
            checkout_dropped: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn panicking() -> Self {
        Self {
            panic_on_list: true,
            ..Self::with_branches(&[])
        }
    }

    /// Checkouts never finish; they only end by being dropped.
    pub fn hanging_checkout(mut self) -> Self {
        self.hang_checkout = true;
        self
    }

    pub fn fail_checkout(self, error: VcsError) -> Self {
        *self.checkout_result.lock().unwrap() = Err(error);
        self
    }

    pub fn checkouts(&self) -> Vec<String> {
        self.checkouts.lock().unwrap().clone()
    }
}

#[async_trait]
impl VcsBackend for FakeVcs {
    fn name(&self) -> &str {
        "fake"
    }

    async fn repository_root(&self) -> Result<PathBuf, VcsError> {
        Ok(PathBuf::from("/repo"))
    }

    async fn list_branches(&self) -> Result<Vec<Branch>, VcsError> {
        if self.panic_on_list {
            panic!("backend blew up");
        }
        let result = self.branches.lock().unwrap().clone();
        self.listed.notify_one();
        result
    }

    async fn checkout(&self, branch: &Branch) -> Result<(), VcsError> {
        self.checkouts.lock().unwrap().push(branch.short_name.clone());
        if self.hang_checkout {
            let _flag = DropFlag(self.checkout_dropped.clone());
            self.checkout_started.notify_one();
            std::future::pending::<()>().await;
        }
        let result = self.checkout_result.lock().unwrap().clone();
        self.checked_out.notify_one();
        result
    }
}

pub fn branches(names: &[&str]) -> Vec<Branch> {
    names.iter().map(|n| Branch::local(*n)).collect()
}

/// Id of the branch listing requested somewhere inside `command`.
pub fn list_id(command: Command) -> Option<CommandId> {
    command.flatten().into_iter().find_map(|c| match c {
        Command::ListBranches { id } => Some(id),
        _ => None,
    })
}
