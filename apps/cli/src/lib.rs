//! agentframe CLI application: scripted demos, a chat REPL, and one-shot
//! tool calls against agents built from a TOML config.

pub use {
    cmd::{Cli, Command},
    config::{AgentConfig, Config},
};

use anyhow::{Context, Result};
use serde_json::Value;

pub mod cmd;
pub mod config;
pub mod demo;
pub mod repl;

/// Parse a `key=value` tool parameter.
///
/// The value is read as JSON when it parses, otherwise as a plain string,
/// so `a=10` is a number and `text=hello world` is a string.
pub fn parse_param(arg: &str) -> Result<(String, Value)> {
    let (key, raw) = arg
        .split_once('=')
        .with_context(|| format!("parameter '{arg}' is not in key=value form"))?;
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("parameter '{arg}' has an empty key");
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()));
    Ok((key.to_owned(), value))
}

/// Render a tool result for the terminal, leaving strings unquoted.
pub fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
