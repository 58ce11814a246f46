//! Guidance prompts rendered from small lookup tables.
//!
//! Unknown parameter values never fail; each table names its fallback row.

type Table = &'static [(&'static str, &'static str)];

fn pick(table: Table, key: &str, fallback: &str) -> &'static str {
    let key = key.trim().to_lowercase();
    table
        .iter()
        .find(|(name, _)| *name == key)
        .or_else(|| table.iter().find(|(name, _)| *name == fallback))
        .map(|(_, value)| *value)
        .unwrap_or_default()
}

fn bullets(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

const SERVER_COMMANDS: Table = &[
    ("python", "python server.py"),
    ("nodejs", "node server.js"),
    ("custom", "<see the project documentation for the startup command>"),
    ("unknown", "<identify the server type and startup method first>"),
];

const STRATEGIES: Table = &[
    ("basic/beginner", "Focus on connectivity and basic tool testing"),
    ("basic/intermediate", "Standard verification with error handling checks"),
    ("basic/expert", "Quick validation with automated reporting"),
    ("comprehensive/beginner", "Step-by-step guided testing with detailed explanations"),
    ("comprehensive/intermediate", "Full capability testing with performance monitoring"),
    ("comprehensive/expert", "Advanced testing with custom validation scripts"),
    ("default", "Standard comprehensive testing approach"),
];

/// Step-by-step inspection workflow for one kind of server.
pub fn workflow_guide(server_type: &str, testing_scope: &str, experience_level: &str) -> String {
    let server_command = pick(SERVER_COMMANDS, server_type, "unknown");
    let strategy_key = format!(
        "{}/{}",
        testing_scope.trim().to_lowercase(),
        experience_level.trim().to_lowercase()
    );
    let strategy = pick(STRATEGIES, &strategy_key, "default");

    let mut recommendations = vec![
        "Establish a regular testing schedule",
        "Monitor performance metrics",
        "Implement automated health checks",
    ];
    match server_type.trim().to_lowercase().as_str() {
        "python" => recommendations.push("Ensure the virtual environment is activated"),
        "nodejs" => recommendations.push("Verify Node.js version compatibility"),
        _ => {}
    }
    if testing_scope.trim().eq_ignore_ascii_case("comprehensive") {
        recommendations.push("Run the inspection in continuous integration");
        recommendations.push("Add load testing before production rollout");
    }

    format!(
        r#"# MCP Server Inspection Workflow

## Configuration
- Server type: {server_type}
- Testing scope: {testing_scope}
- Experience level: {experience_level}
- Strategy: {strategy}

## Phase 1: Environment
1. Confirm the inspector is reachable: `inspectkit help-topic mcp_inspector`
2. Raise verbosity while investigating: `inspectkit --log-level DEBUG ...`

## Phase 2: Connectivity
```bash
inspectkit inspect "{server_command}" --timeout 30
```
A `success: false` envelope with a timeout error usually means the server
takes too long to start; retry with a larger `--timeout`.

## Phase 3: Capability discovery
```bash
inspectkit test "{server_command}" --timeout 60
```
`summary.overall_status` is `healthy` only when the tool, resource and
prompt listings all succeed.

## Phase 4: Deep testing
```bash
inspectkit call-tool "{server_command}" <tool_name> --arguments '{{}}'
inspectkit read-resource "{server_command}" <resource_uri>
inspectkit get-prompt "{server_command}" <prompt_name>
```

## Phase 5: Recommendations
{recommendations}
"#,
        recommendations = bullets(&recommendations),
    )
}

const COMPLEXITY: Table = &[
    ("simple", "Single-responsibility server; verify core functionality completely"),
    ("medium", "Multi-module server; balance coverage against effort"),
    ("complex", "Highly integrated server; test dependencies in depth"),
    ("enterprise", "Enterprise server; full quality assurance and compliance checks"),
];

const TIME_IMPACT: Table = &[
    ("urgent", "Critical paths first; surface blocking issues quickly"),
    ("normal", "Standard process balancing speed and coverage"),
    ("thorough", "Deep testing with detailed analysis and documentation"),
];

const FOCUS: Table = &[
    ("functionality", "Verify tools, resources and prompts end to end"),
    ("performance", "Measure response times and resource usage under load"),
    ("security", "Exercise input validation, permissions and data handling"),
    ("reliability", "Probe error recovery and boundary conditions"),
];

const SPECIALIZED_COMMANDS: Table = &[
    ("functionality", "read-resource, get-prompt, templates"),
    ("performance", "test (repeated, timed), --log-level DEBUG"),
    ("security", "call-tool with malformed and oversized arguments"),
    ("reliability", "batch over restarted instances, long-running test loops"),
];

/// Test plan sized to server complexity, time budget and focus.
pub fn testing_strategy(complexity: &str, time_constraint: &str, focus_area: &str) -> String {
    let core_commands = if matches!(
        complexity.trim().to_lowercase().as_str(),
        "complex" | "enterprise"
    ) {
        "every inspectkit subcommand, including batch and save-config"
    } else {
        "inspect, test, call-tool"
    };

    format!(
        r#"# MCP Server Testing Strategy

## Assessment
- Complexity ({complexity}): {complexity_note}
- Time constraint ({time_constraint}): {time_note}
- Focus ({focus_area}): {focus_note}

## Tooling
- Core: {core_commands}
- Specialized: {specialized}
- Support: help-topic, inspect-config

## Execution
1. Baseline: `inspectkit test <command>` and record the summary.
2. Focus pass: run the specialized commands above against every capability.
3. Regression: save the target with `inspectkit save-config` and re-run
   `inspectkit inspect-config` after each change.

## Exit criteria
- Overall status is `healthy`
- Every listed tool has been called at least once
- No invocation hit its timeout
"#,
        complexity_note = pick(COMPLEXITY, complexity, "medium"),
        time_note = pick(TIME_IMPACT, time_constraint, "normal"),
        focus_note = pick(FOCUS, focus_area, "functionality"),
        specialized = pick(SPECIALIZED_COMMANDS, focus_area, "functionality"),
    )
}

const RESPONSE_STRATEGY: Table = &[
    ("low", "Standard handling, aim for a thorough fix"),
    ("normal", "Balance speed and quality"),
    ("high", "Respond quickly, restore service first"),
    ("critical", "Emergency handling, act immediately"),
];

const SYMPTOMS: Table = &[
    ("connection", "Cannot connect; connection refused or handshake failure"),
    ("timeout", "Slow responses; operations time out"),
    ("tool_error", "Tool calls fail or reject their arguments"),
    ("resource_error", "Resources unreadable or in an unexpected format"),
    ("config_error", "Server fails to start or rejects its configuration"),
];

const CAUSES: Table = &[
    ("connection", "Server not started or crashed; wrong command or missing dependencies"),
    ("timeout", "Slow server startup, overload or a blocked handler"),
    ("tool_error", "Tool defect, malformed arguments or missing permissions"),
    ("resource_error", "Wrong URI, permissions or unsupported format"),
    ("config_error", "Syntax error, missing parameter or unset environment variable"),
];

const FIX_STEPS: Table = &[
    (
        "connection",
        "Run the server command by hand and confirm it starts, then `inspectkit inspect <command>`.",
    ),
    (
        "timeout",
        "Re-run with `--timeout 120`; if it passes, profile server startup.",
    ),
    (
        "tool_error",
        "Call the tool with minimal arguments: `inspectkit call-tool <command> <tool> --arguments '{}'`.",
    ),
    (
        "resource_error",
        "List resources with `inspectkit inspect` and read one known URI with `inspectkit read-resource`.",
    ),
    (
        "config_error",
        "Validate the server's configuration file and environment before starting it again.",
    ),
];

const ENVIRONMENT: Table = &[
    ("development", "Experimental fixes are acceptable; restarts are cheap"),
    ("testing", "Protect test data; re-run the suite after the fix"),
    ("production", "Availability first; every change needs a rollback plan"),
];

const ESCALATION: Table = &[
    ("low", "Contact the technical lead if the problem persists"),
    ("normal", "Escalate to a senior engineer after 30 minutes"),
    ("high", "Escalate to an expert after 15 minutes"),
    ("critical", "Start the emergency response process after 5 minutes"),
];

/// Diagnosis and repair steps for one class of failure.
pub fn troubleshooting_guide(error_type: &str, environment: &str, urgency: &str) -> String {
    let rollback = if environment.trim().eq_ignore_ascii_case("production") {
        "Switch to a standby server, roll back to the last stable release, notify users"
    } else {
        "Restore the previous configuration and restart into a known-good state"
    };

    format!(
        r#"# MCP Server Troubleshooting

## Situation
- Error type: {error_type}
- Environment: {environment} ({environment_note})
- Urgency: {urgency} ({response})

## Symptoms
{symptoms}

## Likely causes
{causes}

## Diagnosis
1. `inspectkit --log-level DEBUG inspect <command>` and read `stderr` in the envelope.
2. Compare `exit_code` against the server's own documentation.
3. `inspectkit test <command>` to see which capability listings fail.

## Fix
{fix}

## Rollback
{rollback}

## Escalation
{escalation}
"#,
        environment_note = pick(ENVIRONMENT, environment, "development"),
        response = pick(RESPONSE_STRATEGY, urgency, "normal"),
        symptoms = pick(SYMPTOMS, error_type, "connection"),
        causes = pick(CAUSES, error_type, "connection"),
        fix = pick(FIX_STEPS, error_type, "connection"),
        escalation = pick(ESCALATION, urgency, "normal"),
    )
}

const TEAM: Table = &[
    ("individual", "Independent developer; favour personal automation"),
    ("small", "Small team; focus on shared conventions"),
    ("medium", "Medium team; standardise process and roles"),
    ("large", "Large team; governance at scale"),
];

const USE_CASE: Table = &[
    ("general", "Balance functionality and usability"),
    ("ci_cd", "Automation and reliability of the pipeline"),
    ("development", "Fast feedback while building the server"),
    ("production", "Stability and monitoring"),
    ("research", "Flexibility and extensibility"),
];

const AUTOMATION: Table = &[
    ("manual", "Run inspections by hand and keep checklists of results"),
    ("medium", "Automate routine inspections in CI and generate reports"),
    ("high", "Fully automated inspection, alerting and recovery"),
];

const METRICS: Table = &[
    ("general", "Test execution time, issue discovery rate, time to fix"),
    ("ci_cd", "Build success rate, deployment frequency, change failure rate"),
    ("production", "Availability, response time, error rate"),
    ("development", "Feedback time, code quality"),
];

/// Operating practices for teams that inspect MCP servers routinely.
pub fn best_practices(use_case: &str, team_size: &str, automation_level: &str) -> String {
    let ci_example = if use_case.trim().eq_ignore_ascii_case("ci_cd") {
        r#"
```bash
inspectkit test "python server.py" --timeout 120 || exit 1
inspectkit batch "$(cat servers.json)" --timeout 60 || exit 1
```
"#
    } else {
        ""
    };

    format!(
        r#"# MCP Server Best Practices

## Context
- Use case ({use_case}): {use_case_note}
- Team ({team_size}): {team_note}
- Automation ({automation_level}): {automation_note}

## Practices
- Save every server under test with `inspectkit save-config` and keep the
  directory in version control.
- Run `inspectkit test` before every release; treat `issues_detected` as a
  failed gate.
- Use `inspectkit batch` to compare several servers with the same settings.
- Record timeouts separately from process failures; only timeouts are worth
  an automatic retry with a larger bound.
{ci_example}
## Metrics
{metrics}
"#,
        use_case_note = pick(USE_CASE, use_case, "general"),
        team_note = pick(TEAM, team_size, "small"),
        automation_note = pick(AUTOMATION, automation_level, "medium"),
        metrics = pick(METRICS, use_case, "general"),
    )
}
