mod errors;
mod tool;
mod tool_builder;
mod weather_time;

pub use errors::ToolExecutionError;
pub use tool::*;
pub use tool_builder::*;
pub use weather_time::*;
