use crate::{get_current_time_tool, get_weather_tool, AgentBuildError, AgentBuilder, Agent};

pub const ROOT_AGENT_NAME: &str = "weather_time_agent";
pub const ROOT_AGENT_MODEL: &str = "gemini-2.0-flash";
pub const ROOT_AGENT_DESCRIPTION: &str = "Agent to answer questions about the time and weather in a city.";
pub const ROOT_AGENT_INSTRUCTION: &str =
    "You are a helpful agent who can answer user questions about the time and weather in a city.";

/// Builder preloaded with the weather/time agent's settings and both tools.
///
/// Use this to tweak the agent (another model, a notification channel)
/// before building it.
pub fn root_agent_builder() -> Result<AgentBuilder, AgentBuildError> {
    Ok(AgentBuilder::default()
        .set_name(ROOT_AGENT_NAME)
        .set_model(ROOT_AGENT_MODEL)
        .set_description(ROOT_AGENT_DESCRIPTION)
        .set_instruction(ROOT_AGENT_INSTRUCTION)
        .add_tool(get_weather_tool()?)
        .add_tool(get_current_time_tool()?))
}

/// The weather/time agent with its default settings.
pub fn root_agent() -> Result<Agent, AgentBuildError> {
    root_agent_builder()?.build()
}
