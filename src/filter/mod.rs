//! # Particle Filters
//!
//! Typed attribute accessors, the immutable predicate expression tree,
//! and the declarative name registry.
//!
//! Pure values throughout — a [`Predicate`] holds no reference to any
//! event and may be reused (and shared across threads) freely.

pub mod attr;
pub mod expr;
pub mod registry;

pub use attr::{Attr, AttrKind, AttrValue};
pub use expr::{not, Op, Predicate, Scalar};
