// Guidance prompts and reference documents.

use inspectkit_core::Envelope;
use inspectkit_core::guidance::{self, PROMPT_NAMES, prompts, resources};
use serde_json::json;
use std::collections::HashMap;

#[test]
fn every_prompt_renders_with_defaults() {
    for name in PROMPT_NAMES {
        let rendered = guidance::render_prompt(name, &HashMap::new());
        let text = rendered.text().unwrap_or_else(|| panic!("{name} did not render"));
        assert!(!text.trim().is_empty());
        assert_eq!(rendered.to_envelope()["success"], json!(true));
    }
}

#[test]
fn workflow_guide_reflects_server_type() {
    let text = prompts::workflow_guide("python", "basic", "beginner");
    assert!(text.contains("python"));
    assert!(text.contains("inspectkit inspect"));
}

#[test]
fn unknown_choices_fall_back_instead_of_failing() {
    let params = HashMap::from([
        ("use_case".to_string(), "underwater".to_string()),
        ("team_size".to_string(), "galactic".to_string()),
    ]);
    let rendered = guidance::render_prompt("best_practices", &params);
    assert!(rendered.text().is_some());
}

#[test]
fn documents_are_looked_up_case_insensitively() {
    assert_eq!(
        resources::document("Usage_Examples"),
        Some(resources::USAGE_EXAMPLES)
    );
    assert!(resources::document("missing").is_none());
    assert_eq!(resources::document_names().len(), 5);
}
