use crate::domain::Envelope;
use crate::domain::envelope::failure;
use serde_json::{Value, json};

pub const TOPICS: [&str; 3] = ["mcp_inspector", "server_commands", "troubleshooting"];

#[derive(Debug, Clone, PartialEq)]
pub enum HelpResponse {
    All(Value),
    Topic { topic: String, content: Value },
    UnknownTopic { topic: String },
}

fn topic_content(topic: &str) -> Option<Value> {
    let content = match topic {
        "mcp_inspector" => json!({
            "description": "MCP Inspector is a tool for testing and debugging MCP servers",
            "basic_usage": "npx @modelcontextprotocol/inspector --cli <server_command> --method <method>",
            "common_methods": [
                "tools/list - List all available tools",
                "resources/list - List all available resources",
                "prompts/list - List all available prompts",
                "tools/call/<tool_name> - Call a specific tool",
                "resources/read/<resource_uri> - Read a specific resource",
                "prompts/get/<prompt_name> - Get a specific prompt",
            ],
        }),
        "server_commands" => json!({
            "description": "Examples of server commands to inspect",
            "examples": [
                "python server.py",
                "node server.js",
                "uv run python server.py",
                "npm start",
            ],
        }),
        "troubleshooting" => json!({
            "common_issues": [
                "Server not starting - Check server command and dependencies",
                "Connection timeout - Increase timeout or check server startup time",
                "Invalid method - Verify method name and server capabilities",
            ],
        }),
        _ => return None,
    };
    Some(content)
}

/// Built-in usage notes; `topic` is matched case-insensitively.
pub fn help(topic: Option<&str>) -> HelpResponse {
    let Some(topic) = topic.filter(|value| !value.trim().is_empty()) else {
        let all = TOPICS
            .iter()
            .filter_map(|name| topic_content(name).map(|content| (name.to_string(), content)))
            .collect::<serde_json::Map<_, _>>();
        return HelpResponse::All(Value::Object(all));
    };

    match topic_content(&topic.to_lowercase()) {
        Some(content) => HelpResponse::Topic {
            topic: topic.to_string(),
            content,
        },
        None => HelpResponse::UnknownTopic {
            topic: topic.to_string(),
        },
    }
}

impl Envelope for HelpResponse {
    fn to_envelope(&self) -> Value {
        match self {
            HelpResponse::All(content) => json!({ "success": true, "content": content }),
            HelpResponse::Topic { topic, content } => json!({
                "success": true,
                "topic": topic,
                "content": content,
            }),
            HelpResponse::UnknownTopic { topic } => {
                let mut envelope = failure(format!("Help topic '{topic}' not found"));
                envelope["available_topics"] = json!(TOPICS);
                envelope
            }
        }
    }
}
