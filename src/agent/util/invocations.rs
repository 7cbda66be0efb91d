use crate::{Agent, AgentError, Message, NotificationHandler, ToolCall};

/// Execute a batch of tool calls and return their messages.
///
/// For each [`ToolCall`]:
/// - looks up the tool in the agent's registry,
/// - runs it with the call's arguments,
/// - emits request and success/error notifications,
/// - produces a tool [`Message`] keyed by the call id (or the function
///   name when the call has no id).
///
/// Lookup and execution failures become the message content, so the
/// output always holds one message per call, in order.
pub async fn call_tools(agent: &Agent, tool_calls: &[ToolCall]) -> Vec<Message> {
    let mut results = Vec::with_capacity(tool_calls.len());

    for call in tool_calls {
        tracing::info!(
            target: "tool",
            tool = %call.function.name,
            id   = ?call.id,
            args = %call.function.arguments,
            "executing tool call",
        );

        let call_id = call.id.clone().unwrap_or_else(|| call.function.name.clone());
        agent.notify_tool_request(call.clone()).await;

        match agent.call_tool(call).await {
            Ok(output) => {
                agent.notify_tool_success(output.clone()).await;
                results.push(Message::tool(output, call_id));
            }
            Err(e) => {
                let msg = match e {
                    AgentError::Tool(tool_error) => tool_error.to_string(),
                    other => other.to_string(),
                };
                tracing::error!(target: "tool", tool = %call.function.name, error = %msg, "tool call failed");
                agent.notify_tool_error(msg.clone()).await;
                results.push(Message::tool(msg, call_id));
            }
        }
    }

    results
}
