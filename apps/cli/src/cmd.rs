//! CLI argument parsing and subcommand handlers.

use crate::{config::Config, demo, parse_param, repl};
use agentframe::Params;
use agents::Kind;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::{
    io::{self, Write},
    num::NonZeroUsize,
    path::PathBuf,
};
use tracing_subscriber::{EnvFilter, fmt};

/// agentframe: agents with memory and tools.
#[derive(Parser, Debug)]
#[command(name = "agentframe", version, about)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Config file override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (use -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every scripted demonstration.
    Demo,
    /// Run the short quick start walkthrough.
    Quickstart,
    /// Start an interactive chat REPL.
    Chat {
        /// Responder driving the agent.
        #[arg(long)]
        kind: Option<Kind>,
        /// Maximum number of messages kept in memory.
        #[arg(long)]
        max_memory: Option<NonZeroUsize>,
    },
    /// Invoke one tool and print the result.
    Call {
        /// Tool name.
        tool: String,
        /// Parameters as key=value pairs.
        params: Vec<String>,
    },
    /// Show the configured agent.
    Info,
    /// Write the default configuration file.
    Generate,
}

impl Cli {
    /// Initialize the tracing subscriber from `RUST_LOG` or the verbosity.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let directive = match self.verbose {
                0 => "warn",
                1 => "agentframe=debug",
                2 => "agentframe=trace",
                _ => "trace",
            };
            EnvFilter::new(directive)
        });

        fmt()
            .without_time()
            .with_env_filter(filter)
            .with_target(self.verbose != 0)
            .with_writer(io::stderr)
            .init();
    }

    /// Path of the config file in use.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::path)
    }

    /// Dispatch the subcommand.
    pub fn run(self) -> Result<()> {
        let path = self.config_path();
        let mut out = io::stdout().lock();

        match self.command {
            Command::Demo => demo::run_all(&mut out),
            Command::Quickstart => demo::quickstart(&mut out),
            Command::Chat { kind, max_memory } => {
                let mut config = Config::load(&path)?;
                config.agent.apply(kind, max_memory);
                let mut agent = config.build()?;
                repl::run(&mut agent, io::stdin().lock(), &mut out)
            }
            Command::Call { tool, params } => {
                let params = params
                    .iter()
                    .map(|p| parse_param(p))
                    .collect::<Result<Params>>()?;
                let mut agent = Config::load(&path)?.build()?;
                repl::call(&mut agent, &tool, params, &mut out)
            }
            Command::Info => {
                let agent = Config::load(&path)?.build()?;
                repl::info(&agent, &mut out)
            }
            Command::Generate => {
                Config::default().save(&path)?;
                writeln!(out, "Configuration written to {}", path.display())?;
                Ok(())
            }
        }
    }
}
