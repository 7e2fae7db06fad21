//! Interactive chat and one-shot tool calls.

use crate::{display, parse_param};
use agentframe::{Agent, Params, Responder};
use anyhow::Result;
use std::io::{BufRead, Write};

const HELP: &str = "Commands: /history, /info, /clear, /call <tool> key=value..., exit";

/// Run a chat session, reading one input per line until `exit`, `quit` or
/// end of input.
pub fn run<R: Responder>(
    agent: &mut Agent<R>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "Chatting with {agent}. {HELP}")?;
    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(args) = strip_command(line, "/call") {
            call_command(agent, args, out)?;
            continue;
        }

        match line {
            "exit" | "quit" => break,
            "/history" => {
                for message in agent.history() {
                    writeln!(out, "{message}")?;
                }
            }
            "/info" => info(agent, out)?,
            "/clear" => {
                agent.clear_history();
                writeln!(out, "History cleared.")?;
            }
            _ if line.starts_with('/') => writeln!(out, "Unknown command. {HELP}")?,
            _ => {
                let response = agent.process(line);
                writeln!(out, "{response}")?;
            }
        }
    }
    let messages = agent.memory().len();
    tracing::debug!(agent = agent.name(), messages, "chat ended");
    Ok(())
}

/// Run `/call <tool> key=value...`, printing tool errors instead of
/// returning them.
fn call_command<R: Responder>(
    agent: &mut Agent<R>,
    args: &str,
    out: &mut impl Write,
) -> Result<()> {
    let mut args = args.split_whitespace();
    let Some(tool) = args.next() else {
        writeln!(out, "Usage: /call <tool> key=value...")?;
        return Ok(());
    };
    let params = match args.map(parse_param).collect::<Result<Params>>() {
        Ok(params) => params,
        Err(e) => {
            writeln!(out, "Error: {e}")?;
            return Ok(());
        }
    };
    match agent.use_tool(tool, params) {
        Ok(result) => writeln!(out, "{}", display(&result))?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    Ok(())
}

/// The arguments of `line` if it is exactly `command`, optionally followed
/// by whitespace and arguments.
fn strip_command<'a>(line: &'a str, command: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(command)?;
    (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest)
}

/// Invoke one tool, then print its result and the agent's history as JSON.
pub fn call<R: Responder>(
    agent: &mut Agent<R>,
    tool: &str,
    params: Params,
    out: &mut impl Write,
) -> Result<()> {
    let result = agent.use_tool(tool, params)?;
    writeln!(out, "{}", display(&result))?;

    let history: Vec<_> = agent.history().iter().map(|m| m.to_value()).collect();
    writeln!(out, "{}", serde_json::to_string_pretty(&history)?)?;
    Ok(())
}

/// Print the agent's info as pretty JSON.
pub fn info<R: Responder>(agent: &Agent<R>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(&agent.info())?)?;
    Ok(())
}
