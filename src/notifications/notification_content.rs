use serde::{Deserialize, Serialize};

use crate::ToolCall;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NotificationContent {
    ToolCallRequest(ToolCall),
    ToolCallSuccessResult(String),
    ToolCallErrorResult(String),
}
