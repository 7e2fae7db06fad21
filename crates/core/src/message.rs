//! Conversation messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Free-form message metadata.
pub type Metadata = Map<String, Value>;

/// One turn of a conversation.
///
/// Messages are immutable once built: fields are only readable, and
/// metadata can only be attached through the consuming builders.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Message {
    /// The role of the sender
    role: Role,

    /// The content of the message
    content: String,

    /// Metadata attached at construction
    #[serde(default)]
    metadata: Metadata,

    /// Creation time
    timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a new message stamped with the current time
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            metadata: Metadata::new(),
            timestamp: Utc::now(),
        }
    }

    /// Create a new system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a new agent message
    pub fn agent(content: impl Into<String>) -> Self {
        Self::new(Role::Agent, content)
    }

    /// Create a new tool message
    pub fn tool(content: impl Into<String>) -> Self {
        Self::new(Role::Tool, content)
    }

    /// Replace the metadata
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Attach a single metadata entry
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The role of the sender
    pub fn role(&self) -> Role {
        self.role
    }

    /// The content of the message
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The metadata of the message
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// When the message was created
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The structured form of the message.
    ///
    /// `{"role", "content", "metadata", "timestamp"}` with the role as its
    /// string tag and the timestamp in RFC 3339.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("role".into(), Value::from(self.role.as_str()));
        map.insert("content".into(), Value::from(self.content.as_str()));
        map.insert("metadata".into(), Value::Object(self.metadata.clone()));
        map.insert("timestamp".into(), Value::from(self.timestamp.to_rfc3339()));
        Value::Object(map)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.role, self.content)
    }
}

/// The role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The system role
    System,
    /// The user role
    User,
    /// The agent role
    Agent,
    /// The tool role
    Tool,
}

impl Role {
    /// The string tag of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Agent => "agent",
            Role::Tool => "tool",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
