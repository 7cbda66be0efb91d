use std::collections::BTreeMap;

use super::tool::{AsyncToolFn, Function, FunctionParameters, Property, Tool, ToolType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolBuilderError {
    MissingFunctionName,
    MissingFunctionDescription,
    MissingExecutor,
    /// A required property was never declared with a type and description.
    UndeclaredRequiredProperty(String),
}

impl std::fmt::Display for ToolBuilderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolBuilderError::MissingFunctionName => write!(f, "Function name is required."),
            ToolBuilderError::MissingFunctionDescription => write!(f, "Function description is required."),
            ToolBuilderError::MissingExecutor => write!(f, "Executor function is required for the tool."),
            ToolBuilderError::UndeclaredRequiredProperty(name) => {
                write!(f, "Required property '{name}' was never declared.")
            }
        }
    }
}

impl std::error::Error for ToolBuilderError {}

/// Builder for [`Tool`].
///
/// ```
/// use std::sync::Arc;
/// use weather_time_agent::{AsyncToolFn, ToolBuilder};
///
/// let echo: AsyncToolFn = Arc::new(|args| Box::pin(async move { Ok(args.to_string()) }));
/// let tool = ToolBuilder::new()
///     .function_name("echo")
///     .function_description("Echoes its arguments")
///     .add_required_property("text", "string", "Text to echo")
///     .executor(echo)
///     .build()
///     .unwrap();
/// assert_eq!(tool.name(), "echo");
/// ```
#[derive(Default)]
pub struct ToolBuilder {
    tool_type: ToolType,
    function_name: Option<String>,
    function_description: Option<String>,
    function_properties: BTreeMap<String, Property>,
    function_required: Vec<String>,
    executor: Option<AsyncToolFn>,
}

impl std::fmt::Debug for ToolBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolBuilder")
            .field("tool_type", &self.tool_type)
            .field("function_name", &self.function_name)
            .field("function_description", &self.function_description)
            .field("function_properties", &self.function_properties)
            .field("function_required", &self.function_required)
            .field("executor", &self.executor.as_ref().map(|_| "<async_fn>"))
            .finish()
    }
}

impl ToolBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name of the function. (Required)
    pub fn function_name<T>(mut self, name: T) -> Self where T: Into<String> {
        self.function_name = Some(name.into());
        self
    }

    /// Sets the description the model reads to decide when to call the tool. (Required)
    pub fn function_description<T>(mut self, description: T) -> Self where T: Into<String> {
        self.function_description = Some(description.into());
        self
    }

    /// Declares an optional property.
    ///
    /// `property_type` is a JSON schema type such as `"string"` or `"number"`.
    pub fn add_property(
        mut self,
        name: impl Into<String>,
        property_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.function_properties.insert(
            name.into(),
            Property {
                property_type: property_type.into(),
                description: description.into(),
            },
        );
        self
    }

    /// Declares a property and marks it as required.
    pub fn add_required_property(
        self,
        name: impl Into<String>,
        property_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        self.add_property(name.clone(), property_type, description)
            .require_property(name)
    }

    /// Marks an already declared property as required.
    pub fn require_property(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.function_required.contains(&name) {
            self.function_required.push(name);
        }
        self
    }

    /// Sets the executor that runs the tool. (Required)
    pub fn executor(mut self, exec: AsyncToolFn) -> Self {
        self.executor = Some(exec);
        self
    }

    /// Consumes the builder and creates the [`Tool`].
    ///
    /// # Errors
    /// Returns a [`ToolBuilderError`] if a required field is missing or a
    /// required property was not declared.
    pub fn build(self) -> Result<Tool, ToolBuilderError> {
        let name = self.function_name.ok_or(ToolBuilderError::MissingFunctionName)?;
        let description = self
            .function_description
            .ok_or(ToolBuilderError::MissingFunctionDescription)?;
        let executor = self.executor.ok_or(ToolBuilderError::MissingExecutor)?;

        if let Some(missing) = self
            .function_required
            .iter()
            .find(|r| !self.function_properties.contains_key(*r))
        {
            return Err(ToolBuilderError::UndeclaredRequiredProperty(missing.clone()));
        }

        Ok(Tool {
            tool_type: self.tool_type,
            function: Function {
                name,
                description,
                parameters: FunctionParameters {
                    param_type: "object".to_string(),
                    properties: self.function_properties,
                    required: self.function_required,
                },
            },
            executor,
        })
    }
}
