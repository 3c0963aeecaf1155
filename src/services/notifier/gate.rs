use std::sync::Arc;

use crate::services::notifier::Notifier;
use crate::services::poller::PollState;

/// Sends messages to the configured chat, suppressing repeats of the last
/// status message.
pub struct NotificationGate {
    notifier: Arc<dyn Notifier>,
    chat_id: String,
}

impl NotificationGate {
    pub fn new(notifier: Arc<dyn Notifier>, chat_id: String) -> Self {
        Self { notifier, chat_id }
    }

    /// Dispatch `message` unless it equals the last one delivered.
    ///
    /// `state.last_message` only moves on a successful send, so a failed
    /// delivery is attempted again the next time the message comes up.
    pub async fn notify_if_changed(&self, message: &str, state: &mut PollState) -> bool {
        if state.last_message.as_deref() == Some(message) {
            tracing::debug!("Status unchanged, notification suppressed");
            return false;
        }

        if self.notify(message).await {
            state.last_message = Some(message.to_string());
            true
        } else {
            false
        }
    }

    /// Best-effort delivery that never fails the caller.
    pub async fn notify(&self, message: &str) -> bool {
        match self.notifier.send(&self.chat_id, message).await {
            Ok(()) => {
                tracing::debug!("Message \"{}\" sent", message);
                true
            }
            Err(e) => {
                tracing::error!("Message not sent: {}", e);
                false
            }
        }
    }
}
