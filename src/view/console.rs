//! View adapter that writes updates to stdout as JSON lines.

use super::{FormView, ViewUpdate};
use crate::events::FormEvent;
use std::io::Write;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Line-oriented view for the command-line driver.
///
/// A scheduled close is fed back into the event loop as a
/// [`FormEvent::Close`] once the delay elapses.
pub struct ConsoleView {
    events: UnboundedSender<FormEvent>,
}

impl ConsoleView {
    pub fn new(events: UnboundedSender<FormEvent>) -> Self {
        Self { events }
    }
}

impl FormView for ConsoleView {
    fn apply(&self, update: ViewUpdate) {
        let line = match serde_json::to_string(&update) {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to encode view update: {}", e);
                return;
            }
        };

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            tracing::error!("Failed to write view update: {}", e);
        }
    }

    fn schedule_close(&self, delay: Duration) {
        self.apply(ViewUpdate::ScheduleClose {
            delay_ms: delay.as_millis() as u64,
        });

        let events = self.events.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the driver already exited.
            let _ = events.send(FormEvent::Close);
        });
    }
}
