//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lakehouse control-plane CLI
#[derive(Parser, Debug)]
#[command(name = "lakehouse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Service root URL (overrides config and environment)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Bearer token (overrides config and environment)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the endpoint table
    Endpoints,

    /// Call one endpoint and print the response
    Call {
        /// Endpoint name (see `endpoints`)
        endpoint: String,

        /// Parameter as key=value (repeatable; value parsed as JSON when possible)
        #[arg(short, long = "param", value_parser = parse_key_val)]
        params: Vec<(String, serde_json::Value)>,

        /// JSON request body
        #[arg(long)]
        body: Option<String>,
    },

    /// Page through a list endpoint and print every item
    List {
        /// List endpoint name
        endpoint: String,

        /// Filter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_key_val)]
        params: Vec<(String, serde_json::Value)>,

        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<usize>,
    },

    /// List all ingestion jobs
    Jobs {
        /// Only jobs with this status
        #[arg(long)]
        status: Option<String>,

        /// Page size
        #[arg(long)]
        limit: Option<u32>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one value per line)
    Json,
    /// Indented JSON
    Pretty,
}

/// Parse `key=value`; the value is read as JSON and falls back to a string
pub fn parse_key_val(s: &str) -> Result<(String, serde_json::Value), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=value: no '=' found in '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid KEY=value: empty key in '{s}'"));
    }
    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test_case("status=running", "status", json!("running") ; "plain string")]
    #[test_case("limit=50", "limit", json!(50) ; "number")]
    #[test_case("force=true", "force", json!(true) ; "bool")]
    #[test_case("status=[\"a\",\"b\"]", "status", json!(["a", "b"]) ; "array")]
    #[test_case("name=a=b", "name", json!("a=b") ; "equals in value")]
    #[test_case("id=", "id", json!("") ; "empty value")]
    fn test_parse_key_val(input: &str, key: &str, value: serde_json::Value) {
        assert_eq!(parse_key_val(input).unwrap(), (key.to_string(), value));
    }

    #[test_case("novalue" ; "missing equals")]
    #[test_case("=x" ; "empty key")]
    fn test_parse_key_val_errors(input: &str) {
        assert!(parse_key_val(input).is_err());
    }

    #[test]
    fn test_parse_list_command() {
        let cli = Cli::try_parse_from([
            "lakehouse",
            "--url",
            "http://h:1",
            "list",
            "list_engines",
            "-p",
            "state=running",
            "--max-pages",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.url.as_deref(), Some("http://h:1"));
        match cli.command {
            Commands::List {
                endpoint,
                params,
                max_pages,
            } => {
                assert_eq!(endpoint, "list_engines");
                assert_eq!(params, vec![("state".to_string(), json!("running"))]);
                assert_eq!(max_pages, Some(2));
            }
            other => panic!("Expected List, got {other:?}"),
        }
    }
}
