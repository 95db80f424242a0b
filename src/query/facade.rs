//! Per-event query façade.
//!
//! Two surfaces over the same traversal core:
//!
//! - a typed, chainable API — `event.first(&sel)?.descendants(&sel)` —
//!   where FIRST/LAST hand back a [`Selected`] particle that is a valid
//!   root for the next hop, and ALL hands back a plain sequence that is
//!   deliberately *not* a traversal root;
//! - a declarative API — `select(&sel, scope)` / `relation(root, kind,
//!   &sel, scope)` — returning flat [`ParticleRecord`] rows for hosts
//!   that drive queries from registry names.

use crate::event::EventGraph;
use crate::filter::Predicate;
use crate::model::{Particle, ParticleId, ParticleRecord};
use crate::{Error, Result};

use super::traversal::{self, Relation};
use super::Scope;

/// A single selected particle, borrowed from its event.
///
/// Result of a FIRST/LAST query; the valid root for a chained relation
/// traversal. Derefs to [`Particle`] for attribute access.
#[derive(Debug, Clone, Copy)]
pub struct Selected<'e> {
    graph: &'e EventGraph,
    particle: &'e Particle,
}

impl<'e> Selected<'e> {
    pub fn particle(&self) -> &'e Particle {
        self.particle
    }

    pub fn id(&self) -> ParticleId {
        self.particle.id
    }

    /// Flat result row for this particle.
    pub fn record(&self) -> ParticleRecord {
        ParticleRecord::from(self.particle)
    }

    pub fn parents(&self, filter: &Predicate) -> Vec<Selected<'e>> {
        self.relation(Relation::Parents, filter)
    }

    pub fn children(&self, filter: &Predicate) -> Vec<Selected<'e>> {
        self.relation(Relation::Children, filter)
    }

    pub fn production_siblings(&self, filter: &Predicate) -> Vec<Selected<'e>> {
        self.relation(Relation::ProductionSiblings, filter)
    }

    pub fn ancestors(&self, filter: &Predicate) -> Vec<Selected<'e>> {
        self.relation(Relation::Ancestors, filter)
    }

    pub fn descendants(&self, filter: &Predicate) -> Vec<Selected<'e>> {
        self.relation(Relation::Descendants, filter)
    }

    /// Relation traversal from this particle, filtered, in traversal order.
    pub fn relation(&self, kind: Relation, filter: &Predicate) -> Vec<Selected<'e>> {
        traversal::relation(self.graph, self.particle.id, kind, filter)
            .into_iter()
            .filter_map(|id| self.graph.particle(id))
            .map(|particle| Selected { graph: self.graph, particle })
            .collect()
    }
}

impl std::ops::Deref for Selected<'_> {
    type Target = Particle;

    fn deref(&self) -> &Particle {
        self.particle
    }
}

impl EventGraph {
    /// Every particle matching `filter`, in native enumeration order.
    /// An empty result is valid, not an error.
    pub fn all(&self, filter: &Predicate) -> Vec<Selected<'_>> {
        self.particles
            .iter()
            .filter(|p| filter.matches(p))
            .map(|particle| Selected { graph: self, particle })
            .collect()
    }

    /// The first particle matching `filter` in enumeration order.
    /// [`Error::NoMatch`] when nothing matches.
    pub fn first(&self, filter: &Predicate) -> Result<Selected<'_>> {
        self.particles
            .iter()
            .find(|p| filter.matches(p))
            .map(|particle| Selected { graph: self, particle })
            .ok_or(Error::NoMatch)
    }

    /// The last particle matching `filter` in enumeration order.
    /// [`Error::NoMatch`] when nothing matches.
    pub fn last(&self, filter: &Predicate) -> Result<Selected<'_>> {
        self.particles
            .iter()
            .rev()
            .find(|p| filter.matches(p))
            .map(|particle| Selected { graph: self, particle })
            .ok_or(Error::NoMatch)
    }

    /// Scope-driven selection over the whole event.
    ///
    /// ALL returns every match (possibly none); FIRST/LAST return exactly
    /// one row or [`Error::NoMatch`]. The asymmetry is deliberate: ALL is
    /// a set query, FIRST/LAST are element queries.
    pub fn select(&self, filter: &Predicate, scope: Scope) -> Result<Vec<ParticleRecord>> {
        match scope {
            Scope::All => Ok(self.all(filter).iter().map(Selected::record).collect()),
            Scope::First => Ok(vec![self.first(filter)?.record()]),
            Scope::Last => Ok(vec![self.last(filter)?.record()]),
        }
    }

    /// Scope-driven relation traversal from a previously selected root.
    pub fn relation(
        &self,
        root: ParticleId,
        kind: Relation,
        filter: &Predicate,
        scope: Scope,
    ) -> Result<Vec<ParticleRecord>> {
        let matched = traversal::relation(self, root, kind, filter);
        let records = |ids: &[ParticleId]| {
            ids.iter()
                .filter_map(|&id| self.particle(id))
                .map(ParticleRecord::from)
                .collect::<Vec<_>>()
        };
        match scope {
            Scope::All => Ok(records(&matched)),
            Scope::First => match matched.first() {
                Some(&id) => Ok(records(&[id])),
                None => Err(Error::NoMatch),
            },
            Scope::Last => match matched.last() {
                Some(&id) => Ok(records(&[id])),
                None => Err(Error::NoMatch),
            },
        }
    }
}
