use super::component::Component;
use super::message::Message;
use super::scheduler::Scheduler;
use crate::ui::style;
use crate::vcs::VcsBackend;
use anyhow::Context;
use log::{debug, info};
use ratatui::{backend::Backend, widgets::Paragraph, Terminal};
use std::sync::Arc;
use tokio::sync::mpsc;

/// The single authority over the state tree.
///
/// Owns the root component, drives `init` once, then handles one message at a
/// time: update, schedule the returned command, redraw. Commands run
/// concurrently in the scheduler and only ever come back as messages, so
/// component state is never touched from two places at once.
pub struct Program<C: Component> {
    root: C,
    scheduler: Scheduler,
    inbox: mpsc::UnboundedReceiver<Message>,
}

impl<C: Component> Program<C> {
    pub fn new(root: C, backend: Arc<dyn VcsBackend>) -> Self {
        let (scheduler, inbox) = Scheduler::new(backend);
        Self { root, scheduler, inbox }
    }

    /// A producer for the inbox, for terminal input and other outside events.
    pub fn sender(&self) -> mpsc::UnboundedSender<Message> {
        self.scheduler.sender()
    }

    pub fn root(&self) -> &C {
        &self.root
    }

    /// Number of commands still in flight.
    pub fn pending_commands(&self) -> usize {
        self.scheduler.task_count()
    }

    /// Run until a `Quit` message arrives. Returns the root's exit code.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<i32> {
        info!("Program: starting");
        let command = self.root.init();
        self.scheduler.schedule(command);
        self.draw(terminal)?;

        while let Some(message) = self.inbox.recv().await {
            if matches!(message, Message::Quit) {
                info!("Program: quit received");
                break;
            }

            debug!("Program: dispatching {}", message.kind());
            let command = self.root.update(&message);
            if !command.is_none() {
                debug!("Program: scheduling {}", command.describe());
            }
            self.scheduler.schedule(command);
            self.scheduler.cleanup_finished_tasks();
            self.draw(terminal)?;
        }

        let abandoned = self.scheduler.task_count();
        if abandoned > 0 {
            debug!("Program: discarding {} in-flight commands", abandoned);
        }
        self.scheduler.cancel_all_tasks();

        let code = self.root.exit_code();
        info!("Program: exiting with code {}", code);
        Ok(code)
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let view = self.root.view();
        let base = style::theme().base_style();
        terminal
            .draw(|f| {
                let area = f.area();
                f.render_widget(Paragraph::new(view).style(base), area);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }
}
