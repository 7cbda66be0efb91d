//! The two lookups, wrapped as tools the model can call.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::lookup::{self, Clock, LookupResult, SystemClock};

use super::{AsyncToolFn, Tool, ToolBuilder, ToolBuilderError, ToolExecutionError};

pub const GET_WEATHER: &str = "get_weather";
pub const GET_CURRENT_TIME: &str = "get_current_time";

#[derive(Debug, Deserialize)]
struct CityArgs {
    city: String,
}

fn parse_city(args: Value) -> Result<String, ToolExecutionError> {
    serde_json::from_value::<CityArgs>(args)
        .map(|a| a.city)
        .map_err(|e| ToolExecutionError::ArgumentParsingError(e.to_string()))
}

fn encode(result: &LookupResult) -> Result<String, ToolExecutionError> {
    Ok(result.to_json()?)
}

/// `get_weather`: canned weather report for a city.
pub fn get_weather_tool() -> Result<Tool, ToolBuilderError> {
    let exec: AsyncToolFn = Arc::new(|args: Value| {
        Box::pin(async move {
            let city = parse_city(args)?;
            encode(&lookup::lookup_weather(&city))
        })
    });

    ToolBuilder::new()
        .function_name(GET_WEATHER)
        .function_description("Retrieves the current weather report for a specified city.")
        .add_required_property("city", "string", "The name of the city for which to retrieve the weather report.")
        .executor(exec)
        .build()
}

/// `get_current_time`: current local time in a city, from the system clock.
pub fn get_current_time_tool() -> Result<Tool, ToolBuilderError> {
    get_current_time_tool_with_clock(Arc::new(SystemClock))
}

/// `get_current_time` reading the current instant from `clock`.
pub fn get_current_time_tool_with_clock(clock: Arc<dyn Clock>) -> Result<Tool, ToolBuilderError> {
    let exec: AsyncToolFn = Arc::new(move |args: Value| {
        let clock = Arc::clone(&clock);
        Box::pin(async move {
            let city = parse_city(args)?;
            let result = lookup::lookup_time_with_clock(&city, clock.as_ref())?;
            encode(&result)
        })
    });

    ToolBuilder::new()
        .function_name(GET_CURRENT_TIME)
        .function_description("Returns the current time in a specified city.")
        .add_required_property("city", "string", "The name of the city for which to retrieve the current time.")
        .executor(exec)
        .build()
}
