//! Board entity shapes.
//!
//! These structs define the YAML front-matter schema of the board file and
//! nothing else; all behavior lives in the mutation engine. Deserialization
//! is lenient: missing fields take their zero value, unknown keys are
//! ignored, and only type-level mismatches are rejected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The complete kanban state: a title plus ordered columns.
///
/// Column ids are unique within a board. The optional `rules` block is
/// carried through load/save untouched by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Rules>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// A named, ordered bucket of cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A titled, described unit of work, optionally carrying comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

/// A timestamped text note attached to a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Free-form working agreements attached to the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub always: Vec<Rule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub never: Vec<Rule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefer: Vec<Rule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<Rule>,
}

/// A single numbered rule line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: u32,
    pub rule: String,
}
