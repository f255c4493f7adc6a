//! Domain core for the todo service.
//!
//! # Overview
//! Holds the todo model, the validator shared by create and update, the
//! error taxonomy, and the `TodoStore` seam that every handler talks to.
//! Nothing here knows about HTTP.
//!
//! # Design
//! - `validate` is a pure function from a loosely typed `TodoPayload` to a
//!   typed `NewTodo`; stores only accept `NewTodo`, so no unvalidated write
//!   can reach persistence.
//! - `NotFound` keeps "malformed id" and "no such record" apart; the HTTP
//!   layer collapses them into one response.
//! - `MemoryStore` implements the seam in-process for tests and local runs.

pub mod error;
pub mod memory;
pub mod model;
pub mod store;
pub mod validate;

pub use error::{NotFound, StoreError, ValidationError};
pub use memory::MemoryStore;
pub use model::{NewTodo, Todo, TodoId, TodoPayload};
pub use store::TodoStore;
pub use validate::validate;
