use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::NotificationContent;

/// An event emitted by an agent while it runs tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    /// Name of the emitting agent.
    pub agent: String,
    pub content: NotificationContent,
    pub timestamp_millis: i64,
}

impl Notification {
    pub fn new(agent: String, content: NotificationContent) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            agent,
            content,
            timestamp_millis: Utc::now().timestamp_millis(),
        }
    }
}
