use serde::{Deserialize, Serialize};

/// Agent identity and prompt settings handed to the host.
///
/// Every field is optional; importing a config into an
/// [`AgentBuilder`](super::AgentBuilder) only overwrites the fields that are
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Name the host uses to identify the agent.
    pub name: Option<String>,
    /// Model identifier passed to the host's LLM provider.
    pub model: Option<String>,
    /// Short summary of what the agent does.
    pub description: Option<String>,
    /// Instruction text that steers the model's replies.
    pub instruction: Option<String>,
}

impl AgentConfig {
    /// Parse a config from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
