use tokio::sync::mpsc::Sender;

use crate::{Notification, NotificationContent, ToolCall};

/// Something that can push [`Notification`]s to an optional channel.
#[allow(async_fn_in_trait)]
pub trait NotificationHandler {
    fn get_outgoing_channel(&self) -> &Option<Sender<Notification>>;
    fn get_channel_name(&self) -> &String;

    /// Send a notification with the given content.
    ///
    /// Returns `true` if it was delivered, `false` when there is no channel
    /// or the receiver is gone.
    async fn notify(&self, content: NotificationContent) -> bool {
        let Some(channel) = self.get_outgoing_channel() else {
            return false;
        };

        match channel
            .send(Notification::new(self.get_channel_name().clone(), content))
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Failed sending notification");
                false
            }
        }
    }

    async fn notify_tool_request(&self, tool_call: ToolCall) -> bool {
        self.notify(NotificationContent::ToolCallRequest(tool_call)).await
    }
    async fn notify_tool_success(&self, tool_result: String) -> bool {
        self.notify(NotificationContent::ToolCallSuccessResult(tool_result)).await
    }
    async fn notify_tool_error(&self, error_message: String) -> bool {
        self.notify(NotificationContent::ToolCallErrorResult(error_message)).await
    }
}
