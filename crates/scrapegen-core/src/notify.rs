//! User-facing notifications (title, description, variant).

use std::sync::Mutex;

pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_DESCRIPTION: &str = "Web scraper file generated successfully.";
pub const ERROR_TITLE: &str = "Error";
/// Shown when the failure is not one of the pipeline's own error types.
pub const FALLBACK_ERROR_DESCRIPTION: &str = "Failed to generate web scraper file";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn success() -> Self {
        Self {
            title: SUCCESS_TITLE.to_string(),
            description: SUCCESS_DESCRIPTION.to_string(),
            variant: Variant::Default,
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }
}

/// Fire-and-forget sink for notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Keeps every notification in memory (tests, embedding).
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(notification);
        }
    }
}
