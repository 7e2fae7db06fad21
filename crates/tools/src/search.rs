//! Keyword search over a small in-memory knowledge base.

use agentframe::{Params, Result, Tool, param_str};
use serde_json::Value;

const KNOWLEDGE: &[(&str, &str)] = &[
    ("python", "Python is a high-level programming language."),
    (
        "agent",
        "An agent is an autonomous entity that can perceive and act.",
    ),
    ("framework", "A framework is a reusable software structure."),
];

/// Mock search backed by ordered `(keyword, answer)` pairs.
///
/// The first keyword contained in the lowercased query wins.
#[derive(Debug, Clone)]
pub struct SearchTool {
    entries: Vec<(String, String)>,
}

impl SearchTool {
    /// Create a search tool over custom entries.
    pub fn with_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
        }
    }

    /// Answer a query.
    pub fn lookup(&self, query: &str) -> String {
        let query_lower = query.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| query_lower.contains(key.as_str()))
            .map(|(_, answer)| answer.clone())
            .unwrap_or_else(|| format!("No information found for: {query}"))
    }
}

impl Default for SearchTool {
    fn default() -> Self {
        Self::with_entries(KNOWLEDGE.iter().map(|&(k, v)| (k.to_owned(), v.to_owned())))
    }
}

impl Tool for SearchTool {
    fn name(&self) -> &str {
        "search"
    }

    fn description(&self) -> &str {
        "Searches for information (mock implementation)"
    }

    fn execute(&self, params: &Params) -> Result<Value> {
        let query = param_str(params, "query")?;
        let answer = self.lookup(query);
        tracing::trace!(query, answer = %answer, "search");
        Ok(Value::from(answer))
    }
}
