use crate::lookup::EnvironmentError;

/// Errors that can occur while executing a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolExecutionError {
    /// The arguments could not be parsed or were invalid.
    ArgumentParsingError(String),
    /// The tool failed while running.
    ExecutionFailed(String),
    /// No tool with this name is registered.
    ToolNotFound(String),
}

impl std::fmt::Display for ToolExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolExecutionError::ArgumentParsingError(s) => write!(f, "Tool argument parsing error: {s}"),
            ToolExecutionError::ExecutionFailed(s) => write!(f, "Tool execution failed: {s}"),
            ToolExecutionError::ToolNotFound(s) => write!(f, "Tool not found: {s}"),
        }
    }
}

impl std::error::Error for ToolExecutionError {}

impl From<EnvironmentError> for ToolExecutionError {
    fn from(err: EnvironmentError) -> Self {
        ToolExecutionError::ExecutionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for ToolExecutionError {
    fn from(err: serde_json::Error) -> Self {
        ToolExecutionError::ExecutionFailed(format!("could not encode result: {err}"))
    }
}
