//! Domain types for the todo resource.
//!
//! # Design
//! `TodoPayload` is what arrives from a client: every field is an arbitrary
//! JSON value so that missing or wrong-typed fields reach the validator
//! instead of failing deserialization. `NewTodo` is only produced by
//! [`crate::validate()`], so anything handed to a store has passed the rules.

use std::fmt;

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::NotFound;

/// Identifier assigned by the store when a todo is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoId(ObjectId);

impl TodoId {
    pub fn generate() -> Self {
        TodoId(ObjectId::new())
    }

    /// Parse a 24-character hex identifier. Anything else is a malformed id
    /// and is reported as not found without reaching the store.
    pub fn parse(raw: &str) -> Result<Self, NotFound> {
        ObjectId::parse_str(raw)
            .map(TodoId)
            .map_err(|_| NotFound::MalformedId)
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for TodoId {
    fn from(oid: ObjectId) -> Self {
        TodoId(oid)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl Serialize for TodoId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TodoId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A persisted todo as returned by a store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Candidate todo exactly as the client sent it. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPayload {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub is_completed: Option<Value>,
}

/// The three mutable fields of a todo after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}
