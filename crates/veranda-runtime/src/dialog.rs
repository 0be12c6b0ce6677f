//! Blocking dialogs
//!
//! Stand-in for `alert`: messages queue in order and tests drain them.
//! A production surface would replace this with inline feedback.

/// Queue of blocking messages shown to the user.
#[derive(Debug, Default)]
pub struct DialogQueue {
    messages: Vec<String>,
}

impl DialogQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface a blocking message.
    pub fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(target: "veranda::dialog", %message, "alert");
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Most recent message, if any.
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(|s| s.as_str())
    }

    /// All queued messages, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Take every queued message, clearing the queue.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_order() {
        let mut dialogs = DialogQueue::new();
        dialogs.alert("first");
        dialogs.alert("second");

        assert_eq!(dialogs.len(), 2);
        assert_eq!(dialogs.last(), Some("second"));
        assert_eq!(dialogs.drain(), vec!["first", "second"]);
        assert!(dialogs.is_empty());
    }
}
