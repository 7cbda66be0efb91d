use std::collections::HashSet;

use tokio::sync::mpsc;

use crate::{
    agent::models::{configs::AgentConfig, error::AgentBuildError},
    Agent, Notification, Tool,
};

/// A builder for [`Agent`].
///
/// Model is required; everything else has defaults.
///
/// ```
/// use weather_time_agent::{get_weather_tool, AgentBuilder};
///
/// let agent = AgentBuilder::default()
///     .set_name("weather_agent")
///     .set_model("gemini-2.0-flash")
///     .set_instruction("You answer questions about the weather.")
///     .add_tool(get_weather_tool().unwrap())
///     .build()
///     .unwrap();
/// assert!(agent.get_tool_ref_by_name("get_weather").is_some());
/// ```
#[derive(Debug, Default)]
pub struct AgentBuilder {
    /// Name used for logging and notifications
    name: Option<String>,
    /// Model identifier passed to the host's LLM provider
    model: Option<String>,
    description: Option<String>,
    /// Seeded as the system prompt
    instruction: Option<String>,
    /// Local tools the host may call
    tools: Vec<Tool>,
    /// Optional mpsc sender for notifications
    notification_channel: Option<mpsc::Sender<Notification>>,
}

impl AgentBuilder {
    /// Apply the fields present in `conf`, keeping everything else.
    pub fn import_config(mut self, conf: AgentConfig) -> Self {
        if let Some(name) = conf.name {
            self = self.set_name(name);
        }
        if let Some(model) = conf.model {
            self = self.set_model(model);
        }
        if let Some(description) = conf.description {
            self = self.set_description(description);
        }
        if let Some(instruction) = conf.instruction {
            self = self.set_instruction(instruction);
        }
        self
    }

    /// Set the name of the agent (used in logging)
    pub fn set_name<T>(mut self, name: T) -> Self where T: Into<String> {
        self.name = Some(name.into());
        self
    }

    /// Set the model to use. (Required)
    pub fn set_model<T>(mut self, model: T) -> Self where T: Into<String> {
        self.model = Some(model.into());
        self
    }

    pub fn set_description<T>(mut self, description: T) -> Self where T: Into<String> {
        self.description = Some(description.into());
        self
    }

    pub fn set_instruction<T>(mut self, instruction: T) -> Self where T: Into<String> {
        self.instruction = Some(instruction.into());
        self
    }

    /// Register a tool the model may call.
    pub fn add_tool(mut self, tool: Tool) -> Self {
        self.tools.push(tool);
        self
    }

    /// Send tool notifications to `channel`.
    pub fn set_notification_channel(mut self, channel: mpsc::Sender<Notification>) -> Self {
        self.notification_channel = Some(channel);
        self
    }

    /// Build the agent together with a fresh notification receiver.
    pub fn build_with_notification(
        self,
    ) -> Result<(Agent, mpsc::Receiver<Notification>), AgentBuildError> {
        let (sender, receiver) = mpsc::channel::<Notification>(100);
        let agent = self.set_notification_channel(sender).build()?;
        Ok((agent, receiver))
    }

    /// Build the [`Agent`].
    ///
    /// # Errors
    /// [`AgentBuildError::ModelNotSet`] without a model,
    /// [`AgentBuildError::DuplicateTool`] when two tools share a name.
    pub fn build(self) -> Result<Agent, AgentBuildError> {
        let model = self.model.ok_or(AgentBuildError::ModelNotSet)?;
        let name = self.name.unwrap_or_else(|| "agent".into());

        let mut seen = HashSet::new();
        for tool in &self.tools {
            if !seen.insert(tool.name()) {
                return Err(AgentBuildError::DuplicateTool(tool.name().to_string()));
            }
        }

        tracing::debug!(agent = %name, %model, tools = self.tools.len(), "agent built");

        Ok(Agent::new(
            name,
            model,
            self.description.unwrap_or_default(),
            self.instruction.unwrap_or_default(),
            self.tools,
            self.notification_channel,
        ))
    }
}
