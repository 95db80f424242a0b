//! # Event Graph
//!
//! The per-event arena: all particles and vertices of one generated or
//! read event, addressed by id, immutable after construction.
//!
//! [`EventBuilder`] is the only way to obtain an [`EventGraph`]; it
//! enforces the referential and acyclicity invariants so that the query
//! layer can traverse without cycle guards.

pub mod builder;
pub mod graph;

pub use builder::EventBuilder;
pub use graph::EventGraph;
