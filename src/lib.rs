//! # hepquery — Event Graph Query Engine
//!
//! An in-memory query engine for Monte Carlo generator event records.
//! One physics event is a bipartite DAG of particles and decay vertices;
//! callers build composable boolean predicates over particle attributes
//! and run relation-scoped traversals (ancestors, descendants, parents,
//! children, production siblings) against the graph.
//!
//! ## Design Principles
//!
//! 1. **Arena graphs**: particles and vertices are indexed by id into
//!    per-event arrays — no pointer cycles, immutable after construction
//! 2. **Predicates are values**: an expression tree with no back-reference
//!    to any event, reusable across events
//! 3. **Validation at the boundary**: malformed graphs are rejected at
//!    construction time so traversal never needs cycle guards
//! 4. **Trait-first collaborators**: `EventSource`/`EventSink` are the
//!    contract between this engine and any generator or record format
//!
//! ## Quick Start
//!
//! ```rust
//! use hepquery::{Attr, Op, Predicate, Scalar};
//!
//! # fn example(event: &hepquery::EventGraph) -> hepquery::Result<()> {
//! // Stable non-neutrino final state
//! let stable = Predicate::compare(Attr::Status, Op::Eq, Scalar::Int(1))?
//!     .and(Predicate::is_false(Attr::HasEndVertex)?)
//!     .and(Predicate::compare(Attr::AbsPdgId, Op::Ne, Scalar::Int(12))?)
//!     .and(Predicate::compare(Attr::AbsPdgId, Op::Ne, Scalar::Int(14))?);
//!
//! for p in event.all(&stable) {
//!     println!("{} {:?}", p.pdg_id, p.momentum);
//! }
//!
//! // First W boson, then its stable descendants
//! let w = event.first(&Predicate::compare(Attr::AbsPdgId, Op::Eq, Scalar::Int(24))?)?;
//! for d in w.descendants(&stable) {
//!     println!("  -> {}", d.pdg_id);
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod event;
pub mod filter;
pub mod query;
pub mod source;
pub mod export;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    FourMomentum, Particle, ParticleId, ParticleRecord, Vertex, VertexId,
};

// ============================================================================
// Re-exports: Event graph
// ============================================================================

pub use event::{EventBuilder, EventGraph};

// ============================================================================
// Re-exports: Filters
// ============================================================================

pub use filter::{registry, Attr, AttrKind, AttrValue, Op, Predicate, Scalar};

// ============================================================================
// Re-exports: Queries
// ============================================================================

pub use query::{Relation, Scope, Selected};

// ============================================================================
// Re-exports: Collaborator contracts
// ============================================================================

pub use source::{EventSink, EventSource, EventStream, VecSource, WriteThrough};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Predicate referenced an attribute name the registry does not define.
    /// Raised at construction time, never during evaluation.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// Relation-kind name not in the registry.
    #[error("unknown relation kind: {0}")]
    UnknownRelation(String),

    /// Selection-scope name not in the registry.
    #[error("unknown selection scope: {0}")]
    UnknownScope(String),

    /// Comparison literal incompatible with the attribute's declared kind.
    #[error("type mismatch: attribute {attribute} is {expected}, literal is {got}")]
    TypeMismatch {
        attribute: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    /// Input collaborator supplied a graph violating the referential or
    /// acyclicity invariants. Raised before any query runs.
    #[error("malformed event graph: {0}")]
    MalformedGraph(String),

    /// FIRST/LAST query scope found zero matches. ALL on an empty match
    /// set is not an error — it returns an empty sequence.
    #[error("no particle matched the filter")]
    NoMatch,

    /// Failure reported by an external event source or sink.
    #[error("event source error: {0}")]
    Source(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
