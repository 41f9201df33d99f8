//! Session countdown timer.
//!
//! A [`Timer`] owns a spawned task that emits one [`AppEvent::Tick`] per
//! period. Dropping the timer aborts the task, so a session can never leave
//! an orphaned tick stream behind.

use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use uuid::Uuid;

use crate::app::AppEvent;

/// Interval between two ticks of a running session.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Identifies the session a tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Running tick source for one session.
pub struct Timer {
    session: SessionId,
    handle: JoinHandle<()>,
}

impl Timer {
    /// Spawn a tick task. The first tick fires one `period` after the call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(period: Duration, events: mpsc::UnboundedSender<AppEvent>) -> Self {
        let session = SessionId::new();
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if events.send(AppEvent::Tick(session)).is_err() {
                    break;
                }
            }
        });

        Self { session, handle }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop emitting ticks. Equivalent to dropping the timer.
    pub fn stop(self) {}
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
