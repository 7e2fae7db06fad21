//! Ready-made tools for agentframe agents.
//!
//! - [`CalculatorTool`]: `add`, `subtract`, `multiply`, `divide` on `a` and `b`.
//! - [`TextProcessorTool`]: `uppercase`, `lowercase`, `reverse`, `word_count`
//!   on `text`.
//! - [`SearchTool`]: keyword lookup of `query` in a small knowledge base.

pub use {calculator::CalculatorTool, search::SearchTool, text::TextProcessorTool};

use agentframe::Tool;

mod calculator;
mod search;
mod text;

/// One instance of every bundled tool.
pub fn all() -> Vec<Box<dyn Tool>> {
    vec![
        Box::new(CalculatorTool),
        Box::new(TextProcessorTool),
        Box::new(SearchTool::default()),
    ]
}

/// Look up a bundled tool by name.
pub fn by_name(name: &str) -> Option<Box<dyn Tool>> {
    all().into_iter().find(|t| t.name() == name)
}
