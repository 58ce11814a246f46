use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("server command must not be empty")]
    EmptyCommand,
}

/// An MCP server process identified by its launch command.
///
/// `command` reaches the inspector as a single argument; `args` is split on
/// whitespace and appended after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    args: Option<String>,
}

impl Target {
    pub fn new(
        command: impl Into<String>,
        args: Option<impl Into<String>>,
    ) -> Result<Self, TargetError> {
        let command = command.into();
        if command.trim().is_empty() {
            return Err(TargetError::EmptyCommand);
        }
        let args = args.map(Into::into).filter(|value| !value.trim().is_empty());
        Ok(Self { command, args })
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> Option<&str> {
        self.args.as_deref()
    }

    pub fn server_args(&self) -> Vec<String> {
        self.args
            .as_deref()
            .map(|raw| raw.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// Inspector method requested for one invocation.
///
/// Parameterised variants embed their identifier into the method path as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    ToolsList,
    ResourcesList,
    PromptsList,
    /// Sent as `resources/templates/list`, the name the inspector documents, not `resource_templates/list`.
    ResourceTemplatesList,
    CallTool(String),
    ReadResource(String),
    GetPrompt(String),
}

impl Method {
    pub fn as_path(&self) -> String {
        match self {
            Method::ToolsList => "tools/list".to_string(),
            Method::ResourcesList => "resources/list".to_string(),
            Method::PromptsList => "prompts/list".to_string(),
            Method::ResourceTemplatesList => "resources/templates/list".to_string(),
            Method::CallTool(name) => format!("tools/call/{name}"),
            Method::ReadResource(uri) => format!("resources/read/{uri}"),
            Method::GetPrompt(name) => format!("prompts/get/{name}"),
        }
    }

    /// Field of a listing response that holds the discovered items.
    pub fn listing_field(&self) -> Option<&'static str> {
        match self {
            Method::ToolsList => Some("tools"),
            Method::ResourcesList => Some("resources"),
            Method::PromptsList => Some("prompts"),
            Method::ResourceTemplatesList => Some("resourceTemplates"),
            _ => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_path())
    }
}
