//! Templated guidance text for humans and agents driving an inspection.

pub mod prompts;
pub mod resources;

use crate::domain::Envelope;
use crate::domain::envelope::failure;
use serde_json::{Value, json};
use std::collections::HashMap;

pub const PROMPT_NAMES: [&str; 4] = [
    "workflow_guide",
    "testing_strategy",
    "troubleshooting_guide",
    "best_practices",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuidanceText {
    Rendered { name: String, text: String },
    UnknownPrompt { name: String },
    UnknownDocument { name: String },
}

impl GuidanceText {
    pub fn text(&self) -> Option<&str> {
        match self {
            GuidanceText::Rendered { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Renders a prompt by name; missing parameters take each prompt's defaults.
pub fn render_prompt(name: &str, params: &HashMap<String, String>) -> GuidanceText {
    let get = |key: &str, default: &'static str| -> String {
        params
            .get(key)
            .map(String::as_str)
            .unwrap_or(default)
            .to_string()
    };
    let text = match name {
        "workflow_guide" => prompts::workflow_guide(
            &get("server_type", "unknown"),
            &get("testing_scope", "comprehensive"),
            &get("experience_level", "intermediate"),
        ),
        "testing_strategy" => prompts::testing_strategy(
            &get("server_complexity", "medium"),
            &get("time_constraint", "normal"),
            &get("focus_area", "functionality"),
        ),
        "troubleshooting_guide" => prompts::troubleshooting_guide(
            &get("error_type", "connection"),
            &get("server_environment", "development"),
            &get("urgency_level", "normal"),
        ),
        "best_practices" => prompts::best_practices(
            &get("use_case", "general"),
            &get("team_size", "small"),
            &get("automation_level", "medium"),
        ),
        _ => {
            return GuidanceText::UnknownPrompt {
                name: name.to_string(),
            };
        }
    };
    GuidanceText::Rendered {
        name: name.to_string(),
        text,
    }
}

pub fn read_document(name: &str) -> GuidanceText {
    match resources::document(name) {
        Some(text) => GuidanceText::Rendered {
            name: name.to_string(),
            text: text.to_string(),
        },
        None => GuidanceText::UnknownDocument {
            name: name.to_string(),
        },
    }
}

impl Envelope for GuidanceText {
    fn to_envelope(&self) -> Value {
        match self {
            GuidanceText::Rendered { name, text } => json!({
                "success": true,
                "name": name,
                "text": text,
            }),
            GuidanceText::UnknownPrompt { name } => {
                let mut envelope = failure(format!("Unknown guidance prompt '{name}'"));
                envelope["available"] = json!(PROMPT_NAMES);
                envelope
            }
            GuidanceText::UnknownDocument { name } => {
                let mut envelope = failure(format!("Unknown document '{name}'"));
                envelope["available"] = json!(resources::document_names());
                envelope
            }
        }
    }
}
