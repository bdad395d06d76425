use super::message::Message;
use crossterm::event::{poll, Event, KeyEventKind};
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

/// Pumps terminal events into the runtime loop's inbox.
///
/// Reading the terminal blocks, so it runs on the blocking pool and polls with
/// a short timeout to notice shutdown.
pub struct EventHandler {
    poll_interval: Duration,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_poll_interval(Duration::from_millis(50))
    }

    pub fn with_poll_interval(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            shutdown: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Start forwarding terminal events to `sender`.
    pub fn start(&mut self, sender: mpsc::UnboundedSender<Message>) {
        if self.handle.is_some() {
            return;
        }

        let shutdown = self.shutdown.clone();
        let poll_interval = self.poll_interval;
        self.handle = Some(tokio::task::spawn_blocking(move || {
            while !shutdown.load(Ordering::Relaxed) {
                match poll(poll_interval) {
                    Ok(false) => continue,
                    Ok(true) => {}
                    Err(e) => {
                        warn!("EventHandler: poll failed: {}", e);
                        break;
                    }
                }

                let event = match crossterm::event::read() {
                    Ok(event) => event,
                    Err(e) => {
                        warn!("EventHandler: read failed: {}", e);
                        break;
                    }
                };

                if let Some(message) = translate(event) {
                    if sender.send(message).is_err() {
                        break;
                    }
                }
            }
            debug!("EventHandler: input pump stopped");
        }));
    }

    /// Ask the pump to stop and wait for it.
    pub async fn stop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a raw terminal event into a loop message. Key releases and events the
/// loop has no use for are dropped.
pub fn translate(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(Message::Key(key)),
        Event::Resize(w, h) => Some(Message::Resize(w, h)),
        _ => None,
    }
}
