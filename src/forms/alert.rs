//! Transient alert banner with a single cancellable hide timer.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// How long a banner stays visible before auto-hiding.
pub const HIDE_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertColor {
    #[default]
    Success,
    Danger,
}

/// Snapshot of the banner for rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Alert {
    pub open: bool,
    pub color: AlertColor,
    pub text: String,
}

/// Owns the banner state and its hide timer.
///
/// Showing a new banner first aborts any pending hide task, so a burst of
/// results arriving inside the hide window cannot race the timer: at most
/// one hide is ever scheduled.
#[derive(Debug)]
pub struct AlertBanner {
    state: Arc<Mutex<Alert>>,
    hide_timer: Option<JoinHandle<()>>,
    delay: Duration,
}

impl AlertBanner {
    pub fn new() -> Self {
        Self::with_delay(HIDE_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(Alert::default())),
            hide_timer: None,
            delay,
        }
    }

    pub fn snapshot(&self) -> Alert {
        self.state.lock().clone()
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().open
    }

    /// Show the banner and (re)arm the hide timer.
    pub fn show(&mut self, color: AlertColor, text: impl Into<String>) {
        if let Some(timer) = self.hide_timer.take() {
            timer.abort();
        }
        *self.state.lock() = Alert {
            open: true,
            color,
            text: text.into(),
        };
        let state = self.state.clone();
        let delay = self.delay;
        self.hide_timer = Some(tokio::spawn(async move {
            sleep(delay).await;
            *state.lock() = Alert::default();
        }));
    }
}

impl Default for AlertBanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AlertBanner {
    fn drop(&mut self) {
        if let Some(timer) = self.hide_timer.take() {
            timer.abort();
        }
    }
}
