//! Completion signalling

use tracing::info;

pub const COMPLETION_TITLE: &str = "Time is up!";
pub const COMPLETION_MESSAGE: &str = "Your exercise timer has ended.";

/// Device-facing side of timer completion (haptics and a modal alert)
pub trait CompletionNotifier: Send + Sync {
    fn vibrate(&self);

    fn alert(&self, title: &str, message: &str);
}

/// Notifier that only writes to the log, for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl CompletionNotifier for LogNotifier {
    fn vibrate(&self) {
        info!("Vibrate");
    }

    fn alert(&self, title: &str, message: &str) {
        info!("{} {}", title, message);
    }
}
