use std::{collections::BTreeMap, fmt, future::Future, pin::Pin, sync::Arc};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ToolExecutionError;

/// Kind of tool exposed to the model. Only functions exist.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    #[default]
    Function,
}

/// Signature for an asynchronous tool executor.
///
/// Takes the model's JSON arguments and produces the text handed back to
/// the model, or a [`ToolExecutionError`].
pub type AsyncToolFn = Arc<
    dyn Fn(Value) -> Pin<Box<dyn Future<Output = Result<String, ToolExecutionError>> + Send>>
        + Send
        + Sync,
>;

/// A function the model can call, together with the code that runs it.
///
/// Serializes to the definition the host passes to the model; the executor
/// is never serialized.
#[derive(Serialize, Clone)]
pub struct Tool {
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    pub function: Function,
    #[serde(skip)]
    pub executor: AsyncToolFn,
}

impl fmt::Debug for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tool")
            .field("tool_type", &self.tool_type)
            .field("function", &self.function)
            .field("executor", &"<async_fn>")
            .finish()
    }
}

impl Tool {
    /// Run the tool with the given arguments.
    pub async fn execute(&self, args: Value) -> Result<String, ToolExecutionError> {
        (self.executor)(args).await
    }

    /// Name of the tool, as the model refers to it.
    pub fn name(&self) -> &str {
        &self.function.name
    }
}

/// Name, description and arguments of a callable function.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub description: String,
    pub parameters: FunctionParameters,
}

/// Arguments of a function, as a JSON-schema-like object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FunctionParameters {
    #[serde(rename = "type")]
    pub param_type: String,
    pub properties: BTreeMap<String, Property>,
    pub required: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Property {
    #[serde(rename = "type")]
    pub property_type: String,
    pub description: String,
}

/// A tool invocation requested by the model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToolCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Some hosts omit the type, so it defaults to [`ToolType::Function`].
    #[serde(rename = "type", default, skip_serializing_if = "is_function")]
    pub tool_type: ToolType,
    pub function: ToolCallFunction,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_function(tool_type: &ToolType) -> bool {
    *tool_type == ToolType::Function
}

impl ToolCall {
    pub fn new<T>(name: T, arguments: Value) -> Self where T: Into<String> {
        Self {
            id: None,
            tool_type: ToolType::Function,
            function: ToolCallFunction {
                name: name.into(),
                arguments,
            },
        }
    }

    pub fn with_id<T>(mut self, id: T) -> Self where T: Into<String> {
        self.id = Some(id.into());
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToolCallFunction {
    pub name: String,
    pub arguments: Value,
}
