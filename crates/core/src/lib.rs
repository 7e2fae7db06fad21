//! Core abstractions for agentframe
//!
//! An [`Agent`] owns a bounded [`Memory`] of [`Message`]s and a registry of
//! named [`Tool`]s. Text goes in through [`Agent::process`], which brackets
//! the pluggable [`Responder`] between a user and an agent message.
//!
//! # Example
//!
//! ```rust
//! use agentframe_core::{Agent, Role};
//! use serde_json::{Map, json};
//!
//! let mut agent = Agent::new("bot").with_description("An example agent");
//! agent.register("shout", "Uppercases text", |params| {
//!     let text = agentframe_core::param_str(params, "text")?;
//!     Ok(json!(text.to_uppercase()))
//! });
//!
//! let reply = agent.process("hello");
//! assert_eq!(reply, "bot received: hello");
//!
//! let mut params = Map::new();
//! params.insert("text".into(), json!("hi"));
//! assert_eq!(agent.use_tool("shout", params).unwrap(), json!("HI"));
//! assert_eq!(agent.history().last().unwrap().role(), Role::Tool);
//! ```

pub use {
    agent::{Agent, AgentInfo, Context, Echo, Responder},
    error::{Error, Result},
    memory::Memory,
    message::{Message, Metadata, Role},
    tool::{FnTool, Params, Tool, ToolInfo, param_f64, param_number, param_str},
};

mod agent;
mod error;
mod memory;
mod message;
mod tool;
