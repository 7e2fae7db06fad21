//! Friendly greeter.

use agentframe::{Context, Responder};

/// Replies with a greeting that quotes the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simple;

impl Responder for Simple {
    fn respond(&mut self, _ctx: &Context<'_>, input: &str) -> String {
        format!("Hello! You said: '{input}'. How can I help you?")
    }
}
