use super::command::Command;
use super::message::{CommandId, Message, Outcome, Payload};
use crate::vcs::{VcsBackend, VcsError};
use chrono::Local;
use log::{debug, warn};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    /// The nested task running a backend call, if any.
    pub backend_call: Option<AbortHandle>,
    pub description: String,
    pub started_at: Instant,
}

impl BackgroundTask {
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Abort the task and any backend call it is waiting on. Dropping the
    /// backend future also kills a running `git` child.
    pub fn abort(&self) {
        self.handle.abort();
        if let Some(call) = &self.backend_call {
            call.abort();
        }
    }
}

/// Executes commands off the update loop.
///
/// Every leaf command becomes one tokio task that sends at most one message
/// into the single inbox drained by the runtime loop. Nothing here shares
/// mutable state with components.
pub struct Scheduler {
    backend: Arc<dyn VcsBackend>,
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    sender: mpsc::UnboundedSender<Message>,
}

impl Scheduler {
    pub fn new(backend: Arc<dyn VcsBackend>) -> (Self, mpsc::UnboundedReceiver<Message>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                backend,
                tasks: HashMap::new(),
                next_task_id: 1,
                sender: tx,
            },
            rx,
        )
    }

    /// Another producer for the loop's inbox (terminal input, initial resize).
    pub fn sender(&self) -> mpsc::UnboundedSender<Message> {
        self.sender.clone()
    }

    /// Start executing `command`. Never blocks.
    pub fn schedule(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Batch(commands) => {
                for command in commands {
                    self.schedule(command);
                }
            }
            Command::Emit(message) => {
                debug!("Scheduler: emitting {}", message.kind());
                let _ = self.sender.send(message);
            }
            Command::Tick { after } => {
                self.spawn(format!("tick in {:?}", after), async move {
                    tokio::time::sleep(after).await;
                    Some(Message::Tick(Local::now()))
                });
            }
            Command::Frame { id, tag, after } => {
                self.spawn(format!("frame {} tag {}", id, tag), async move {
                    tokio::time::sleep(after).await;
                    Some(Message::AnimationFrame { id, tag })
                });
            }
            Command::ListBranches { id } => {
                let backend = self.backend.clone();
                self.spawn_backend(id, "List branches".to_string(), async move {
                    backend.list_branches().await.map(Payload::Branches)
                });
            }
            Command::Checkout { id, branch } => {
                let backend = self.backend.clone();
                let description = format!("Checkout {}", branch.short_name);
                self.spawn_backend(id, description, async move {
                    let result = backend.checkout(&branch).await;
                    result.map(|_| Payload::CheckedOut(branch))
                });
            }
        }
    }

    /// Run a backend call in its own task so that a panic inside the backend
    /// still produces an `Err` outcome for `id`.
    fn spawn_backend<F>(&mut self, id: CommandId, description: String, work: F) -> TaskId
    where
        F: Future<Output = Outcome> + Send + 'static,
    {
        let call = tokio::spawn(work);
        let call_abort = call.abort_handle();
        let label = description.clone();
        let task_id = self.spawn(description, async move {
            let outcome = match call.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!("Scheduler: '{}' aborted: {}", label, e);
                    Err(VcsError::Backend(format!("{} aborted: {}", label, e)))
                }
            };
            Some(Message::AsyncResult { id, outcome })
        });
        if let Some(task) = self.tasks.get_mut(&task_id) {
            task.backend_call = Some(call_abort);
        }
        task_id
    }

    fn spawn<F>(&mut self, description: String, work: F) -> TaskId
    where
        F: Future<Output = Option<Message>> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let sender = self.sender.clone();
        let handle = tokio::spawn(async move {
            if let Some(message) = work.await {
                // The loop may already be gone; the message is simply dropped then.
                let _ = sender.send(message);
            }
        });

        debug!("Scheduler: started task {} ({})", task_id, description);
        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                backend_call: None,
                description,
                started_at: Instant::now(),
            },
        );
        task_id
    }

    /// Forget tasks that have finished. Their messages were already sent.
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                debug!("Scheduler: task {} ({}) done after {:?}", task.id, task.description, task.elapsed());
            }
        }

        finished
    }

    /// Number of tasks that have not been reaped yet.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Abort everything still running, backend calls included. There is no
    /// cooperative cancellation; aborted tasks just never deliver.
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}
