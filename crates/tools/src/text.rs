//! Text transformations.

use agentframe::{Error, Params, Result, Tool, param_str};
use serde_json::Value;

/// Case changes, reversal and word counting.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextProcessorTool;

impl Tool for TextProcessorTool {
    fn name(&self) -> &str {
        "text_processor"
    }

    fn description(&self) -> &str {
        "Performs text processing operations (uppercase, lowercase, reverse, word_count)"
    }

    fn execute(&self, params: &Params) -> Result<Value> {
        let operation = param_str(params, "operation")?;
        let text = param_str(params, "text")?;

        match operation {
            "uppercase" => Ok(Value::from(text.to_uppercase())),
            "lowercase" => Ok(Value::from(text.to_lowercase())),
            "reverse" => Ok(Value::from(text.chars().rev().collect::<String>())),
            "word_count" => Ok(Value::from(text.split_whitespace().count())),
            other => Err(Error::invalid(format!("Unsupported operation: {other}"))),
        }
    }
}
