//! Relation traversal over the event DAG.
//!
//! Five relation kinds, all computed relative to a root particle. The
//! filter is applied as a post-filter: the full relation set is walked
//! first, then filtered, so a caller's filter never truncates the walk.

use std::collections::VecDeque;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::event::EventGraph;
use crate::filter::Predicate;
use crate::model::{ParticleId, VertexId};
use crate::{Error, Result};

/// Relation of other particles to a root particle. A dispatch key —
/// no runtime state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    /// Transitive closure of [`Relation::Parents`], closest generation first.
    Ancestors,
    /// Transitive closure of [`Relation::Children`], closest generation first.
    Descendants,
    /// Incoming particles of the root's production vertex.
    Parents,
    /// Outgoing particles of the root's end vertex.
    Children,
    /// Outgoing particles of the root's production vertex, excluding the root.
    ProductionSiblings,
}

impl Relation {
    /// Stable registry identifier.
    pub fn name(self) -> &'static str {
        match self {
            Relation::Ancestors => "ANCESTORS",
            Relation::Descendants => "DESCENDANTS",
            Relation::Parents => "PARENTS",
            Relation::Children => "CHILDREN",
            Relation::ProductionSiblings => "PRODUCTION_SIBLINGS",
        }
    }
}

impl std::str::FromStr for Relation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::filter::registry::RELATIONS
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| Error::UnknownRelation(s.to_owned()))
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the ordered relation set of `root`, post-filtered by `filter`.
///
/// Returns an empty sequence — never an error — when the relation set is
/// structurally empty (beam particle asked for parents, final-state
/// particle asked for children) or the filter matches nothing. An
/// unknown root id also yields an empty sequence: the root cannot come
/// from anywhere but this graph's own selection results.
pub fn relation(
    graph: &EventGraph,
    root: ParticleId,
    kind: Relation,
    filter: &Predicate,
) -> Vec<ParticleId> {
    let full = match kind {
        Relation::Parents => graph
            .production_vertex(root)
            .map(|v| v.particles_in.to_vec())
            .unwrap_or_default(),
        Relation::Children => graph
            .end_vertex(root)
            .map(|v| v.particles_out.to_vec())
            .unwrap_or_default(),
        Relation::ProductionSiblings => graph
            .production_vertex(root)
            .map(|v| {
                v.particles_out
                    .iter()
                    .copied()
                    .filter(|&id| id != root)
                    .collect()
            })
            .unwrap_or_default(),
        Relation::Ancestors => closure(graph, root, Direction::Up),
        Relation::Descendants => closure(graph, root, Direction::Down),
    };

    trace!(root = %root, kind = %kind, size = full.len(), "relation set computed");

    full.into_iter()
        .filter(|&id| graph.particle(id).is_some_and(|p| filter.matches(p)))
        .collect()
}

#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
}

/// Breadth-first closure over the vertex graph: closest generation
/// first, de-duplicated by particle id. Terminates because the graph is
/// validated acyclic at construction.
fn closure(graph: &EventGraph, root: ParticleId, dir: Direction) -> Vec<ParticleId> {
    let Some(start) = start_vertex(graph, root, dir) else {
        return Vec::new();
    };

    let mut result = Vec::new();
    let mut seen_particles: HashSet<ParticleId> = HashSet::new();
    let mut seen_vertices: HashSet<VertexId> = HashSet::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    seen_vertices.insert(start);
    queue.push_back(start);

    while let Some(vid) = queue.pop_front() {
        let Some(vertex) = graph.vertex(vid) else { continue };
        let step = match dir {
            Direction::Up => &vertex.particles_in,
            Direction::Down => &vertex.particles_out,
        };
        for &pid in step {
            if seen_particles.insert(pid) {
                result.push(pid);
            }
            let next = match dir {
                Direction::Up => graph.particle(pid).and_then(|p| p.production_vertex),
                Direction::Down => graph.particle(pid).and_then(|p| p.end_vertex),
            };
            if let Some(next) = next {
                if seen_vertices.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }

    result
}

fn start_vertex(graph: &EventGraph, root: ParticleId, dir: Direction) -> Option<VertexId> {
    let p = graph.particle(root)?;
    match dir {
        Direction::Up => p.production_vertex,
        Direction::Down => p.end_vertex,
    }
}
