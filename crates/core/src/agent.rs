//! Agents.
//!
//! An [`Agent`] owns a [`Memory`] and a registry of [`Tool`]s. Input goes
//! through [`Agent::process`], which records the user turn, asks the
//! agent's [`Responder`] for a reply, and records that reply.

use crate::{Error, Memory, Message, Params, Result, Tool, ToolInfo, tool::FnTool};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, num::NonZeroUsize};

/// Computes an agent's reply to one input.
///
/// The agent records the user and agent messages around the call, so a
/// responder only decides what to say.
pub trait Responder {
    /// Produce the reply for `input`.
    fn respond(&mut self, ctx: &Context<'_>, input: &str) -> String;
}

impl<F> Responder for F
where
    F: FnMut(&Context<'_>, &str) -> String,
{
    fn respond(&mut self, ctx: &Context<'_>, input: &str) -> String {
        self(ctx, input)
    }
}

/// The default responder: a name-qualified echo.
#[derive(Debug, Clone, Copy, Default)]
pub struct Echo;

impl Responder for Echo {
    fn respond(&mut self, ctx: &Context<'_>, input: &str) -> String {
        format!("{} received: {input}", ctx.name())
    }
}

/// Read-only view of an agent handed to its responder.
pub struct Context<'a> {
    name: &'a str,
    description: &'a str,
    tools: &'a [Box<dyn Tool>],
    memory: &'a Memory,
}

impl<'a> Context<'a> {
    /// The agent's name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The agent's description.
    pub fn description(&self) -> &'a str {
        self.description
    }

    /// Whether a tool with this name is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name() == name)
    }

    /// Number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Registered tool names in registration order.
    pub fn tool_names(&self) -> Vec<&'a str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// The agent's memory, already holding the current user message.
    pub fn memory(&self) -> &'a Memory {
        self.memory
    }
}

/// Snapshot of an agent for display.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AgentInfo {
    /// Agent name.
    pub name: String,
    /// Agent description.
    pub description: String,
    /// Info of every registered tool, in registration order.
    pub tools: Vec<ToolInfo>,
    /// Number of messages currently in memory.
    pub memory_size: usize,
}

/// An agent: memory, tools and a response strategy.
pub struct Agent<R = Echo> {
    name: String,
    description: String,
    memory: Memory,
    tools: Vec<Box<dyn Tool>>,
    responder: R,
}

impl Agent {
    /// Create an echoing agent with the given name and unbounded memory.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_responder(name, Echo)
    }
}

impl<R: Responder> Agent<R> {
    /// Create an agent driven by `responder`.
    pub fn with_responder(name: impl Into<String>, responder: R) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            memory: Memory::unbounded(),
            tools: Vec::new(),
            responder,
        }
    }

    /// Replace the responder, keeping name, description, memory and tools.
    pub fn swap_responder<S: Responder>(self, responder: S) -> Agent<S> {
        Agent {
            name: self.name,
            description: self.description,
            memory: self.memory,
            tools: self.tools,
            responder,
        }
    }

    /// Replace the responder with a closure.
    pub fn respond_with<F>(self, f: F) -> Agent<F>
    where
        F: FnMut(&Context<'_>, &str) -> String,
    {
        self.swap_responder(f)
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Bound the memory to `capacity` messages, keeping the most recent
    /// ones already stored.
    pub fn max_memory(mut self, capacity: NonZeroUsize) -> Self {
        self.memory.set_capacity(Some(capacity));
        self
    }

    /// Use the given memory.
    pub fn with_memory(mut self, memory: Memory) -> Self {
        self.memory = memory;
        self
    }

    /// Add a tool.
    pub fn with_tool(mut self, tool: impl Tool + 'static) -> Self {
        self.add_tool(tool);
        self
    }

    /// The agent's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The agent's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The agent's memory.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// The agent's responder.
    pub fn responder(&self) -> &R {
        &self.responder
    }

    /// Register a tool, replacing any tool with the same name in place.
    pub fn add_tool(&mut self, tool: impl Tool + 'static) {
        self.add_boxed(Box::new(tool));
    }

    /// Register an already boxed tool.
    pub fn add_boxed(&mut self, tool: Box<dyn Tool>) {
        tracing::debug!(agent = %self.name, tool = tool.name(), "registering tool");
        match self.tools.iter_mut().find(|t| t.name() == tool.name()) {
            Some(existing) => *existing = tool,
            None => self.tools.push(tool),
        }
    }

    /// Register a closure as a tool.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) where
        F: Fn(&Params) -> Result<Value> + Send + Sync + 'static,
    {
        self.add_tool(FnTool::new(name, description, handler));
    }

    /// Remove a tool. Returns whether it was registered.
    pub fn remove_tool(&mut self, name: &str) -> bool {
        let Some(idx) = self.tools.iter().position(|t| t.name() == name) else {
            return false;
        };
        self.tools.remove(idx);
        tracing::debug!(agent = %self.name, tool = name, "removed tool");
        true
    }

    /// Registered tool names in registration order.
    pub fn tools(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Whether a tool with this name is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tool(name).is_some()
    }

    /// Look up a registered tool.
    pub fn tool(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.iter().find(|t| t.name() == name).map(|t| &**t)
    }

    /// Invoke a registered tool and log the call in memory.
    ///
    /// A successful call appends one [`Role::Tool`](crate::Role::Tool)
    /// message carrying `tool`, `params` and `result` metadata. A failed
    /// call returns the tool's error and leaves memory untouched.
    pub fn use_tool(&mut self, name: &str, params: Params) -> Result<Value> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| Error::NotFound(name.to_owned()))?;

        let result = match tool.execute(&params) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(agent = %self.name, tool = name, error = %e, "tool call failed");
                return Err(e);
            }
        };

        tracing::debug!(agent = %self.name, tool = name, "tool call succeeded");
        let message = Message::tool(format!("Used tool '{name}': {}", render(&result)))
            .with_meta("tool", name)
            .with_meta("params", Value::Object(params))
            .with_meta("result", result.clone());
        self.memory.add(message);
        Ok(result)
    }

    /// Store a message as-is.
    pub fn receive_message(&mut self, message: Message) {
        self.memory.add(message);
    }

    /// Handle one user input and return the reply.
    ///
    /// Always appends exactly two messages: the user input, then the reply.
    pub fn process(&mut self, input: &str) -> String {
        self.memory.add(Message::user(input));

        let ctx = Context {
            name: &self.name,
            description: &self.description,
            tools: &self.tools,
            memory: &self.memory,
        };
        let response = self.responder.respond(&ctx, input);
        tracing::debug!(agent = %self.name, input, response = %response, "processed input");

        self.memory.add(Message::agent(response.clone()));
        response
    }

    /// Every message in memory, oldest first.
    pub fn history(&self) -> Vec<Message> {
        self.memory.all()
    }

    /// Forget the conversation.
    pub fn clear_history(&mut self) {
        self.memory.clear();
    }

    /// Snapshot of the agent.
    pub fn info(&self) -> AgentInfo {
        AgentInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            tools: self.tools.iter().map(|t| t.info()).collect(),
            memory_size: self.memory.len(),
        }
    }
}

impl<R> fmt::Display for Agent<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Agent({})", self.name)
    }
}

impl<R> fmt::Debug for Agent<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tools: Vec<&str> = self.tools.iter().map(|t| t.name()).collect();
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("memory", &self.memory)
            .field("tools", &tools)
            .finish_non_exhaustive()
    }
}

/// Render a tool result for a log line, leaving strings unquoted.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
