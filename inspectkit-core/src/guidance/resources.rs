//! Static reference documents about the inspector.

pub const DOCUMENTATION: &str = r#"# MCP Inspector

The MCP Inspector is the reference tool for testing and debugging Model
Context Protocol servers. inspectkit drives its command-line mode.

## Command line
```bash
npx @modelcontextprotocol/inspector --cli <server_command> --method <method>
```

## Methods
1. `tools/list` - list available tools
2. `tools/call/<name>` - call one tool (`--arguments '<json>'`)
3. `resources/list` - list available resources
4. `resources/read/<uri>` - read one resource
5. `resources/templates/list` - list resource templates
6. `prompts/list` - list available prompts
7. `prompts/get/<name>` - render one prompt (`--arguments '<json>'`)

## Common issues
- Connection problems: run the server command by hand first
- Timeouts: servers started through `npx` or `uv` may need 60s or more
- Tool failures: check the argument blob against the tool's input schema
"#;

pub const REPOSITORY: &str = r#"# MCP Inspector Repository

- URL: https://github.com/modelcontextprotocol/inspector
- License: MIT
- Runtime: Node.js

## Installation
```bash
npm install -g @modelcontextprotocol/inspector
# or run on demand
npx @modelcontextprotocol/inspector
```

Pointing inspectkit at a global install avoids the `npx` startup cost:

```toml
# config/inspectkit.toml
program = "mcp-inspector"
program_args = []
```
"#;

pub const USAGE_EXAMPLES: &str = r#"# inspectkit Usage Examples

```bash
# Discover capabilities
inspectkit inspect "python server.py"

# Call a tool
inspectkit call-tool "python server.py" calculate --arguments '{"expression": "2+2"}'

# Read a resource
inspectkit read-resource "python server.py" "file:///data/report.txt"

# Render a prompt
inspectkit get-prompt "python server.py" summarize --arguments '{"length": "short"}'

# Health check across tools, resources and prompts
inspectkit test "python server.py" --timeout 60

# Several servers in one run
inspectkit batch '[{"command": "python a.py"}, {"command": "node b.js", "args": "--port 9000"}]'

# Save once, inspect many times
inspectkit save-config "python server.py" weather --args "--units metric"
inspectkit inspect-config inspector_configs/weather.json

# Serve JSON-RPC on stdio for agents
inspectkit serve
```
"#;

pub const CONFIG_TEMPLATES: &str = r#"# Configuration Templates

## Settings (`config/inspectkit.toml`)
```toml
program = "npx"
program_args = ["@modelcontextprotocol/inspector"]
default_timeout_secs = 30
comprehensive_timeout_secs = 60
config_dir = "inspector_configs"
log_level = "INFO"
```

## Saved target (`inspector_configs/<name>.json`)
```json
{
  "name": "weather",
  "server_command": "python server.py",
  "server_args": "--units metric",
  "created_at": "inspector_configs/weather.json"
}
```

## Batch input
```json
[
  {"command": "python server.py"},
  {"command": "node server.js", "args": "--port 9000"}
]
```
"#;

pub const BEST_PRACTICES: &str = r#"# Inspection Best Practices

- Inspect during development, not only before release.
- Keep one saved configuration per server and review changes to it.
- Start with `inspectkit test`; drill into single calls only where the
  summary shows a problem.
- Give slow-starting servers a larger timeout instead of retrying blindly.
- Always check `success` in an envelope before reading any other field.
"#;

pub const DOCUMENTS: [(&str, &str); 5] = [
    ("documentation", DOCUMENTATION),
    ("repository", REPOSITORY),
    ("usage_examples", USAGE_EXAMPLES),
    ("config_templates", CONFIG_TEMPLATES),
    ("best_practices", BEST_PRACTICES),
];

pub fn document(name: &str) -> Option<&'static str> {
    let name = name.trim().to_lowercase();
    DOCUMENTS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, body)| *body)
}

pub fn document_names() -> Vec<&'static str> {
    DOCUMENTS.iter().map(|(key, _)| *key).collect()
}
