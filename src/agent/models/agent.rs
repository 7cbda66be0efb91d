use core::fmt;

use serde_json::Value;
use tokio::sync::mpsc::Sender;
use tracing::instrument;

use crate::agent::models::configs::AgentConfig;
use crate::agent::models::error::AgentError;
use crate::agent::util;
use crate::{Message, Notification, NotificationHandler, Tool, ToolCall, ToolExecutionError};

/// An agent definition: identity, prompt settings and the tools a host may
/// run on the model's behalf.
///
/// The agent does not talk to a model itself. A host reads
/// [`tool_definitions`](Agent::tool_definitions), forwards them to its
/// model, and hands the resulting [`ToolCall`]s back to
/// [`call_tools`](Agent::call_tools).
#[derive(Clone)]
pub struct Agent {
    /// Human-readable name of the agent.
    pub name: String,
    /// Model identifier for the host's LLM provider.
    pub model: String,
    /// What the agent is for.
    pub description: String,
    /// Instruction text seeded as the system prompt.
    pub instruction: String,
    /// Registered tools, in registration order.
    pub tools: Vec<Tool>,
    /// Notification channel for tool lifecycle events.
    pub notification_channel: Option<Sender<Notification>>,
}

impl Agent {
    pub(crate) fn new(
        name: String,
        model: String,
        description: String,
        instruction: String,
        tools: Vec<Tool>,
        notification_channel: Option<Sender<Notification>>,
    ) -> Self {
        Self {
            name,
            model,
            description,
            instruction,
            tools,
            notification_channel,
        }
    }

    /// Find a tool reference by name, if it exists.
    pub fn get_tool_ref_by_name<T>(&self, name: T) -> Option<&Tool>
    where
        T: AsRef<str>,
    {
        let name = name.as_ref();
        self.tools.iter().find(|tool| tool.name() == name)
    }

    /// Names of all registered tools.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(Tool::name).collect()
    }

    /// Tool definitions as a JSON array, ready to pass to a model.
    pub fn tool_definitions(&self) -> Result<Value, AgentError> {
        Ok(serde_json::to_value(&self.tools)?)
    }

    /// The instruction as the opening system message.
    pub fn system_message(&self) -> Message {
        Message::system(self.instruction.clone())
    }

    /// Run one tool call.
    ///
    /// # Errors
    /// [`ToolExecutionError::ToolNotFound`] when no tool has the requested
    /// name, otherwise whatever the tool's executor returns.
    #[instrument(level = "debug", skip(self, call), fields(agent_name = %self.name, tool = %call.function.name))]
    pub async fn call_tool(&self, call: &ToolCall) -> Result<String, AgentError> {
        let Some(tool) = self.get_tool_ref_by_name(&call.function.name) else {
            return Err(ToolExecutionError::ToolNotFound(call.function.name.clone()).into());
        };
        Ok(tool.execute(call.function.arguments.clone()).await?)
    }

    /// Run a batch of tool calls, one tool [`Message`] per call.
    ///
    /// Failures are reported in the message content rather than returned.
    #[instrument(level = "debug", skip(self, tool_calls), fields(agent_name = %self.name))]
    pub async fn call_tools(&self, tool_calls: &[ToolCall]) -> Vec<Message> {
        util::call_tools(self, tool_calls).await
    }

    /// Export the identity and prompt settings.
    pub fn export_config(&self) -> AgentConfig {
        AgentConfig {
            name: Some(self.name.clone()),
            model: Some(self.model.clone()),
            description: Some(self.description.clone()),
            instruction: Some(self.instruction.clone()),
        }
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("description", &self.description)
            .field("instruction", &self.instruction)
            .field("tools", &self.tool_names())
            .field("notification_channel", &self.notification_channel.is_some())
            .finish()
    }
}

impl NotificationHandler for Agent {
    fn get_outgoing_channel(&self) -> &Option<Sender<Notification>> {
        &self.notification_channel
    }

    fn get_channel_name(&self) -> &String {
        &self.name
    }
}
