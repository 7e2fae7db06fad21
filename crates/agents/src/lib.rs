//! Example responders and the agents built from them.
//!
//! Each responder only decides what to say; the [`Agent`] it drives still
//! records the user and agent turns.

pub use {assistant::Assistant, conversational::Conversational, simple::Simple};

use agentframe::{Agent, Context, Echo, Responder};
use serde::{Deserialize, Serialize};
use std::{fmt, num::NonZeroUsize, str::FromStr};

mod assistant;
mod conversational;
mod simple;

/// Memory capacity of [`conversational_agent`].
pub const CONVERSATIONAL_MEMORY: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// A greeter agent named `SimpleAgent`.
pub fn simple_agent() -> Agent<Simple> {
    Agent::with_responder("SimpleAgent", Simple)
        .with_description("A basic agent that responds to user messages")
}

/// A tool-aware assistant named `AssistantAgent`.
pub fn assistant_agent() -> Agent<Assistant> {
    Agent::with_responder("AssistantAgent", Assistant)
        .with_description("An intelligent assistant that can use tools to accomplish tasks")
}

/// A turn-counting agent named `ConversationalAgent` that keeps the last
/// ten messages.
pub fn conversational_agent() -> Agent<Conversational> {
    Agent::with_responder("ConversationalAgent", Conversational::default())
        .with_description("An agent that remembers conversation history")
        .max_memory(CONVERSATIONAL_MEMORY)
}

/// Which responder drives an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Name-qualified echo.
    #[default]
    Echo,
    /// [`Simple`] greeter.
    Simple,
    /// [`Assistant`] keyword router.
    Assistant,
    /// [`Conversational`] turn counter.
    Conversational,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 4] = [Kind::Echo, Kind::Simple, Kind::Assistant, Kind::Conversational];

    /// The lowercase tag of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Echo => "echo",
            Kind::Simple => "simple",
            Kind::Assistant => "assistant",
            Kind::Conversational => "conversational",
        }
    }

    /// Build the responder for this kind.
    pub fn responder(&self) -> AnyResponder {
        match self {
            Kind::Echo => AnyResponder::Echo(Echo),
            Kind::Simple => AnyResponder::Simple(Simple),
            Kind::Assistant => AnyResponder::Assistant(Assistant),
            Kind::Conversational => AnyResponder::Conversational(Conversational::default()),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown agent kind '{s}'"))
    }
}

/// A responder chosen at runtime.
#[derive(Debug, Clone)]
pub enum AnyResponder {
    /// See [`Echo`].
    Echo(Echo),
    /// See [`Simple`].
    Simple(Simple),
    /// See [`Assistant`].
    Assistant(Assistant),
    /// See [`Conversational`].
    Conversational(Conversational),
}

impl Responder for AnyResponder {
    fn respond(&mut self, ctx: &Context<'_>, input: &str) -> String {
        match self {
            AnyResponder::Echo(r) => r.respond(ctx, input),
            AnyResponder::Simple(r) => r.respond(ctx, input),
            AnyResponder::Assistant(r) => r.respond(ctx, input),
            AnyResponder::Conversational(r) => r.respond(ctx, input),
        }
    }
}
