//! Declarative name registry.
//!
//! A fixed table of stable identifiers for every attribute, relation
//! kind, and selection scope, so host code can build predicates and
//! traversals from strings. The source populated a module namespace at
//! runtime from a `FILTERS` dict; this is the statically-typed rendition.

use crate::filter::Attr;
use crate::query::{Relation, Scope};
use crate::Result;

/// Every attribute accessor, in registry order.
pub const ATTRIBUTES: &[Attr] = &[
    Attr::Status,
    Attr::PdgId,
    Attr::AbsPdgId,
    Attr::HasEndVertex,
    Attr::HasProductionVertex,
    Attr::E,
    Attr::Px,
    Attr::Py,
    Attr::Pz,
    Attr::Pt,
    Attr::Eta,
    Attr::Phi,
    Attr::Mass,
];

/// Every relation kind.
pub const RELATIONS: &[Relation] = &[
    Relation::Ancestors,
    Relation::Descendants,
    Relation::Parents,
    Relation::Children,
    Relation::ProductionSiblings,
];

/// Every selection scope.
pub const SCOPES: &[Scope] = &[Scope::All, Scope::First, Scope::Last];

/// Look up an attribute by its stable name.
pub fn attribute(name: &str) -> Result<Attr> {
    name.parse()
}

/// Look up a relation kind by its stable name.
pub fn relation(name: &str) -> Result<Relation> {
    name.parse()
}

/// Look up a selection scope by its stable name.
pub fn scope(name: &str) -> Result<Scope> {
    name.parse()
}

/// All attribute names, for discovery at the host boundary.
pub fn attribute_names() -> impl Iterator<Item = &'static str> {
    ATTRIBUTES.iter().map(|a| a.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_attribute_lookup() {
        assert_eq!(attribute("ABS_PDG_ID").unwrap(), Attr::AbsPdgId);
        assert!(matches!(attribute("abs_pdg_id"), Err(Error::UnknownAttribute(_))));
    }

    #[test]
    fn test_relation_lookup() {
        assert_eq!(relation("PRODUCTION_SIBLINGS").unwrap(), Relation::ProductionSiblings);
        assert!(matches!(relation("COUSINS"), Err(Error::UnknownRelation(_))));
    }

    #[test]
    fn test_scope_lookup() {
        assert_eq!(scope("FIRST").unwrap(), Scope::First);
        assert!(matches!(scope("ANY"), Err(Error::UnknownScope(_))));
    }

    #[test]
    fn test_tables_are_complete_and_distinct() {
        let names: Vec<_> = attribute_names().collect();
        let mut dedup = names.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(names.len(), dedup.len());
        assert_eq!(RELATIONS.len(), 5);
        assert_eq!(SCOPES.len(), 3);
    }
}
