//! Keyword-routing assistant.

use agentframe::{Context, Responder};

const CALCULATE: &[&str] = &["calculate", "add", "multiply"];
const SEARCH: &[&str] = &["search", "find"];

/// Points the user at the right tool based on keywords in the input.
///
/// Calculation keywords are checked before search keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assistant;

impl Responder for Assistant {
    fn respond(&mut self, ctx: &Context<'_>, input: &str) -> String {
        let input = input.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|w| input.contains(w));

        if mentions(CALCULATE) {
            if ctx.has_tool("calculator") {
                "I can help with calculations! Use the calculator tool to perform operations."
                    .into()
            } else {
                "I would help with calculations, but I don't have a calculator tool.".into()
            }
        } else if mentions(SEARCH) {
            if ctx.has_tool("search") {
                "I can help search for information! Use the search tool to find what you need."
                    .into()
            } else {
                "I would help with searching, but I don't have a search tool.".into()
            }
        } else {
            format!(
                "I'm an assistant agent with {} tools available. How can I assist you?",
                ctx.tool_count()
            )
        }
    }
}
