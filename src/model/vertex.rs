//! Decay/interaction vertex of the event graph.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ParticleId;

/// Opaque vertex identifier, unique within one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Particle lists stay inline for typical decay multiplicities.
pub type ParticleList = SmallVec<[ParticleId; 4]>;

/// A single interaction/decay point.
///
/// Invariant (enforced by [`crate::event::EventBuilder`]): every id in
/// `particles_out` names a particle whose production vertex is this
/// vertex, and every id in `particles_in` names a particle whose end
/// vertex is this vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    /// Incoming particles (parents), in record order.
    pub particles_in: ParticleList,
    /// Outgoing particles (children), in record order.
    pub particles_out: ParticleList,
}

impl Vertex {
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            particles_in: SmallVec::new(),
            particles_out: SmallVec::new(),
        }
    }

    pub fn with_incoming(mut self, ids: impl IntoIterator<Item = ParticleId>) -> Self {
        self.particles_in = ids.into_iter().collect();
        self
    }

    pub fn with_outgoing(mut self, ids: impl IntoIterator<Item = ParticleId>) -> Self {
        self.particles_out = ids.into_iter().collect();
        self
    }
}
