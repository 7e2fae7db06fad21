//! CLI configuration stored at `~/.config/agentframe/config.toml`.

use agentframe::Agent;
use agents::{AnyResponder, CONVERSATIONAL_MEMORY, Kind};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bundled tools registered on the agent.
    pub tools: Vec<String>,
    /// The agent to build.
    pub agent: AgentConfig,
}

/// Agent section of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Agent name.
    pub name: String,
    /// Agent description.
    pub description: String,
    /// Responder driving the agent.
    pub kind: Kind,
    /// Maximum number of messages kept in memory (unbounded when absent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_memory: Option<NonZeroUsize>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "agentframe".into(),
            description: "An agent with memory and tools".into(),
            kind: Kind::default(),
            max_memory: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tools: tools::all().iter().map(|t| t.name().to_owned()).collect(),
            agent: AgentConfig::default(),
        }
    }
}

impl AgentConfig {
    /// Override the kind and memory bound with command-line values, keeping
    /// the configured ones where a value is absent.
    pub fn apply(&mut self, kind: Option<Kind>, max_memory: Option<NonZeroUsize>) {
        if let Some(kind) = kind {
            self.kind = kind;
        }
        if max_memory.is_some() {
            self.max_memory = max_memory;
        }
    }
}

impl Config {
    /// Load the configuration, returning defaults if the file is missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    /// Save the configuration, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("configuration saved to {}", path.display());
        Ok(())
    }

    /// Default path: `~/.config/agentframe/config.toml`.
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("agentframe")
            .join("config.toml")
    }

    /// Build the configured agent.
    ///
    /// Fails if any configured tool is not a bundled one.
    pub fn build(&self) -> Result<Agent<AnyResponder>> {
        let unknown: Vec<&str> = self
            .tools
            .iter()
            .map(String::as_str)
            .filter(|name| tools::by_name(name).is_none())
            .collect();
        if !unknown.is_empty() {
            anyhow::bail!("unknown tools in config: {}", unknown.join(", "));
        }

        let capacity = match (self.agent.max_memory, self.agent.kind) {
            (Some(capacity), _) => Some(capacity),
            (None, Kind::Conversational) => Some(CONVERSATIONAL_MEMORY),
            (None, _) => None,
        };

        let mut agent = Agent::with_responder(&self.agent.name, self.agent.kind.responder())
            .with_description(&self.agent.description);
        if let Some(capacity) = capacity {
            agent = agent.max_memory(capacity);
        }
        for tool in tools::all() {
            if self.tools.iter().any(|name| name == tool.name()) {
                agent.add_boxed(tool);
            }
        }
        Ok(agent)
    }
}
