use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "inspectkit",
    version,
    about = "Inspect and exercise MCP servers through the MCP Inspector CLI"
)]
pub struct Cli {
    /// Settings file (defaults to config/inspectkit.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// DEBUG, INFO, WARNING or ERROR
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Command that launches the MCP server
    pub server_command: String,
    /// Extra arguments for the server command
    #[arg(long, allow_hyphen_values = true)]
    pub args: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the server's capabilities
    Inspect {
        #[command(flatten)]
        target: TargetArgs,
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Call one tool
    CallTool {
        #[command(flatten)]
        target: TargetArgs,
        tool_name: String,
        /// JSON argument blob for the tool
        #[arg(long)]
        arguments: Option<String>,
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Read one resource
    ReadResource {
        #[command(flatten)]
        target: TargetArgs,
        resource_uri: String,
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Render one prompt
    GetPrompt {
        #[command(flatten)]
        target: TargetArgs,
        prompt_name: String,
        /// JSON argument blob for the prompt
        #[arg(long)]
        arguments: Option<String>,
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// List resource templates
    Templates {
        #[command(flatten)]
        target: TargetArgs,
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Probe tools, resources and prompts and summarize server health
    Test {
        #[command(flatten)]
        target: TargetArgs,
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Inspect several servers given as a JSON array (or @file)
    Batch {
        server_configs: String,
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Save a named server configuration
    SaveConfig {
        #[command(flatten)]
        target: TargetArgs,
        config_name: String,
    },
    /// Inspect the server named by a saved configuration file
    InspectConfig {
        config_path: PathBuf,
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Show built-in help topics
    HelpTopic { topic: Option<String> },
    /// Render a guidance prompt
    Guide {
        name: String,
        /// Prompt parameter as KEY=VALUE; repeatable
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
    /// Print a reference document
    Doc { name: String },
    /// Serve line-delimited JSON-RPC on stdin/stdout
    Serve,
}
