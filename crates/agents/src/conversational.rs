//! Turn-counting conversational agent.

use agentframe::{Context, Responder};

/// Greets on the first turn and numbers every later one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Conversational {
    turns: usize,
}

impl Conversational {
    /// Number of inputs handled so far.
    pub fn turns(&self) -> usize {
        self.turns
    }
}

impl Responder for Conversational {
    fn respond(&mut self, ctx: &Context<'_>, input: &str) -> String {
        self.turns += 1;
        tracing::trace!(agent = ctx.name(), turn = self.turns, "conversation turn");
        if self.turns == 1 {
            format!("Nice to meet you! You said: '{input}'")
        } else {
            format!("Thanks for message #{}. You said: '{input}'", self.turns)
        }
    }
}
