//! # Queries
//!
//! Relation-scoped traversal over one event graph and the per-event
//! query façade (`all` / `first` / `last`, chainable [`Selected`]
//! handles, and the declarative scope-driven entry points).

pub mod facade;
pub mod traversal;

pub use facade::Selected;
pub use traversal::Relation;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How many matches a query returns, and which.
///
/// `All` is a set query — an empty result is valid. `First`/`Last` are
/// element queries — zero matches is [`Error::NoMatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    All,
    First,
    Last,
}

impl Scope {
    /// Stable registry identifier.
    pub fn name(self) -> &'static str {
        match self {
            Scope::All => "ALL",
            Scope::First => "FIRST",
            Scope::Last => "LAST",
        }
    }
}

impl std::str::FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::filter::registry::SCOPES
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| Error::UnknownScope(s.to_owned()))
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
