//! Tool abstractions
//!
//! A [`Tool`] is a named capability an [`Agent`](crate::Agent) can invoke
//! with a JSON object of named parameters.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::{fmt, sync::Arc};

/// Named parameters passed to a tool.
pub type Params = Map<String, Value>;

/// A type-erased tool handler.
type Handler = Arc<dyn Fn(&Params) -> Result<Value> + Send + Sync>;

/// A named capability with a single entry point.
///
/// Every tool defines its own parameter contract and failure conditions;
/// there is no default [`execute`](Tool::execute).
pub trait Tool: Send + Sync {
    /// Unique name within an agent's registry.
    fn name(&self) -> &str;

    /// What the tool does.
    fn description(&self) -> &str;

    /// Run the tool.
    fn execute(&self, params: &Params) -> Result<Value>;

    /// Snapshot of the tool's identity.
    fn info(&self) -> ToolInfo {
        ToolInfo {
            name: self.name().to_owned(),
            description: self.description().to_owned(),
        }
    }
}

/// Name and description of a tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ToolInfo {
    /// The name of the tool
    pub name: String,

    /// The description of the tool
    pub description: String,
}

impl fmt::Display for ToolInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tool({})", self.name)
    }
}

/// A tool backed by a closure.
#[derive(Clone)]
pub struct FnTool {
    name: String,
    description: String,
    handler: Handler,
}

impl FnTool {
    /// Create a tool from a name, description and handler.
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Params) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            handler: Arc::new(handler),
        }
    }
}

impl Tool for FnTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn execute(&self, params: &Params) -> Result<Value> {
        (self.handler)(params)
    }
}

impl fmt::Debug for FnTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Read a required string parameter.
pub fn param_str<'p>(params: &'p Params, key: &str) -> Result<&'p str> {
    match params.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(Error::invalid(format!(
            "parameter '{key}' must be a string, got {other}"
        ))),
        None => Err(Error::invalid(format!("missing parameter '{key}'"))),
    }
}

/// Read a required numeric parameter, keeping its integer/float form.
pub fn param_number<'p>(params: &'p Params, key: &str) -> Result<&'p Number> {
    match params.get(key) {
        Some(Value::Number(n)) => Ok(n),
        Some(other) => Err(Error::invalid(format!(
            "parameter '{key}' must be a number, got {other}"
        ))),
        None => Err(Error::invalid(format!("missing parameter '{key}'"))),
    }
}

/// Read a required numeric parameter as `f64`.
pub fn param_f64(params: &Params, key: &str) -> Result<f64> {
    param_number(params, key)?
        .as_f64()
        .ok_or_else(|| Error::invalid(format!("parameter '{key}' is not representable as f64")))
}
