/// Result of dispatching one event.
///
/// `message_id` is `None` when no notification was warranted. A failed send
/// is always an error, never a `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationOutcome {
    pub message_id: Option<String>,
}

impl NotificationOutcome {
    pub fn sent(message_id: impl Into<String>) -> Self {
        Self {
            message_id: Some(message_id.into()),
        }
    }

    pub fn skipped() -> Self {
        Self::default()
    }

    pub fn is_sent(&self) -> bool {
        self.message_id.is_some()
    }
}

impl From<Option<String>> for NotificationOutcome {
    fn from(message_id: Option<String>) -> Self {
        Self { message_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_has_no_message_id() {
        assert!(!NotificationOutcome::skipped().is_sent());
        assert_eq!(NotificationOutcome::from(None), NotificationOutcome::skipped());
    }

    #[test]
    fn sent_carries_message_id() {
        let outcome = NotificationOutcome::from(Some("xxxx".to_string()));
        assert_eq!(outcome, NotificationOutcome::sent("xxxx"));
        assert!(outcome.is_sent());
    }
}
