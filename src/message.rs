use serde::{Deserialize, Serialize};

use crate::ToolCall;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// A chat message as exchanged with the host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl Message {
    pub fn new(role: Role, content: String) -> Self {
        Self { role, content: Some(content), tool_calls: None, tool_call_id: None }
    }

    pub fn system<T: Into<String>>(content: T) -> Self { Self::new(Role::System, content.into()) }
    pub fn user<T: Into<String>>(content: T) -> Self { Self::new(Role::User, content.into()) }
    pub fn assistant<T: Into<String>>(content: T) -> Self { Self::new(Role::Assistant, content.into()) }
    pub fn tool<T, S>(content: T, tool_call_id: S) -> Self where T: Into<String>, S: Into<String> {
        Self { role: Role::Tool, content: Some(content.into()), tool_calls: None, tool_call_id: Some(tool_call_id.into()) }
    }
}
