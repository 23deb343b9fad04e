//! Queue trigger domain model
//!
//! A queue-trigger invocation carries one message and the table entities
//! bound alongside it. The invocation prints a transcript and forwards the
//! message to the output binding unchanged.

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

/// A queue message, kept exactly as read from the input binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueMessage(String);

impl QueueMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for QueueMessage {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl std::fmt::Display for QueueMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One record from the table binding
///
/// Keys keep the order they had in the source document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TableEntity(Map<String, JsonValue>);

impl TableEntity {
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }
}

impl std::fmt::Display for TableEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(&self.0).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}

/// Parses the table binding document
///
/// The document must be a JSON array whose elements are all objects.
pub fn parse_entities(document: &str) -> Result<Vec<TableEntity>, serde_json::Error> {
    serde_json::from_str(document)
}

/// A single queue-trigger invocation
#[derive(Debug, Clone, PartialEq)]
pub struct QueueInvocation {
    pub message: QueueMessage,
    pub entities: Vec<TableEntity>,
}

impl QueueInvocation {
    pub fn new(message: QueueMessage, entities: Vec<TableEntity>) -> Self {
        Self { message, entities }
    }

    /// Lines the sample prints to stdout, in order
    pub fn transcript(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entities.len() + 2);
        lines.push(format!(
            "Python script processed queue message '{}'",
            self.message
        ));
        lines.push(format!("Read {} Table entities", self.entities.len()));
        lines.extend(self.entities.iter().map(ToString::to_string));
        lines
    }

    /// Value written to the output binding
    pub fn output(&self) -> &str {
        self.message.as_str()
    }
}
