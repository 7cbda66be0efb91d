use std::error::Error;

use clap::{Parser, Subcommand};
use serde_json::Value;
use weather_time_agent::{
    init_default_tracing, lookup_time, lookup_weather, root_agent_builder, LookupResult, ToolCall,
};

/// Ask the weather/time agent's tools directly.
#[derive(Debug, Parser)]
#[command(name = "weather-time-agent", version, about)]
struct Cli {
    /// Model identifier reported for the agent.
    #[arg(long, global = true, env = "WEATHER_TIME_AGENT_MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the agent's tool definitions as JSON.
    Tools,
    /// Look up the weather in a city.
    Weather { city: String },
    /// Look up the current time in a city.
    Time { city: String },
    /// Dispatch a raw tool call, e.g. `call get_weather '{"city":"New York"}'`.
    Call { tool: String, args: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_default_tracing();
    let cli = Cli::parse();

    let mut builder = root_agent_builder()?;
    if let Some(model) = cli.model {
        builder = builder.set_model(model);
    }
    let agent = builder.build()?;
    tracing::debug!(?agent, "agent ready");

    match cli.command {
        Command::Tools => {
            println!("{}", serde_json::to_string_pretty(&agent.tool_definitions()?)?);
        }
        Command::Weather { city } => print_result(&lookup_weather(&city))?,
        Command::Time { city } => print_result(&lookup_time(&city)?)?,
        Command::Call { tool, args } => {
            let args: Value = serde_json::from_str(&args)?;
            let output = agent.call_tool(&ToolCall::new(tool, args)).await?;
            println!("{output}");
        }
    }

    Ok(())
}

fn print_result(result: &LookupResult) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}
