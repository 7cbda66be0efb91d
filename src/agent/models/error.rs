use crate::{ToolBuilderError, ToolExecutionError};

/// Errors that can occur while running an [`Agent`](super::Agent).
#[derive(Debug)]
pub enum AgentError {
    /// Errors that occur during agent construction.
    AgentBuild(AgentBuildError),
    /// A tool could not be found or failed.
    Tool(ToolExecutionError),
    /// Failure when encoding agent data as JSON.
    Serialization(serde_json::Error),
}

impl std::fmt::Display for AgentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentError::AgentBuild(e) => write!(f, "Agent Build Error: {e}"),
            AgentError::Tool(e) => write!(f, "Tool error: {e}"),
            AgentError::Serialization(e) => write!(f, "Serialize error: {e}"),
        }
    }
}

impl std::error::Error for AgentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AgentError::AgentBuild(e) => Some(e),
            AgentError::Tool(e) => Some(e),
            AgentError::Serialization(e) => Some(e),
        }
    }
}

impl From<AgentBuildError> for AgentError {
    fn from(err: AgentBuildError) -> Self {
        AgentError::AgentBuild(err)
    }
}

impl From<ToolExecutionError> for AgentError {
    fn from(err: ToolExecutionError) -> Self {
        AgentError::Tool(err)
    }
}

impl From<serde_json::Error> for AgentError {
    fn from(err: serde_json::Error) -> Self {
        AgentError::Serialization(err)
    }
}


/// Errors that can occur while building an [`Agent`](super::Agent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentBuildError {
    /// Required model was not set on the builder.
    ModelNotSet,
    /// Two registered tools share a name.
    DuplicateTool(String),
    /// A tool definition could not be built.
    Tool(ToolBuilderError),
}

impl std::fmt::Display for AgentBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentBuildError::ModelNotSet => write!(f, "Model not set."),
            AgentBuildError::DuplicateTool(name) => write!(f, "Tool '{name}' registered more than once."),
            AgentBuildError::Tool(e) => write!(f, "Tool build error: {e}"),
        }
    }
}

impl std::error::Error for AgentBuildError {}

impl From<ToolBuilderError> for AgentBuildError {
    fn from(err: ToolBuilderError) -> Self {
        AgentBuildError::Tool(err)
    }
}
