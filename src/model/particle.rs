//! Particle node of the event graph.

use serde::{Deserialize, Serialize};

use super::{FourMomentum, VertexId};

/// Opaque particle identifier, unique within one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticleId(pub u64);

impl std::fmt::Display for ParticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A particle in the event record.
///
/// A particle has at most one production vertex and at most one end
/// vertex; a particle with no end vertex is a final-state candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: ParticleId,
    /// PDG species code (signed; the sign distinguishes antiparticles).
    pub pdg_id: i32,
    /// Generator status code. Sign/magnitude convention is opaque here.
    pub status: i32,
    pub momentum: FourMomentum,
    pub production_vertex: Option<VertexId>,
    pub end_vertex: Option<VertexId>,
}

impl Particle {
    pub fn new(id: ParticleId, pdg_id: i32, status: i32) -> Self {
        Self {
            id,
            pdg_id,
            status,
            momentum: FourMomentum::default(),
            production_vertex: None,
            end_vertex: None,
        }
    }

    pub fn with_momentum(mut self, px: f64, py: f64, pz: f64, e: f64) -> Self {
        self.momentum = FourMomentum::new(px, py, pz, e);
        self
    }

    pub fn with_production_vertex(mut self, v: VertexId) -> Self {
        self.production_vertex = Some(v);
        self
    }

    pub fn with_end_vertex(mut self, v: VertexId) -> Self {
        self.end_vertex = Some(v);
        self
    }

    /// Absolute PDG code, computed on access.
    pub fn abs_pdg_id(&self) -> i32 {
        self.pdg_id.abs()
    }

    /// A particle that never decays in the recorded event is a
    /// final-state candidate.
    pub fn has_end_vertex(&self) -> bool {
        self.end_vertex.is_some()
    }

    pub fn has_production_vertex(&self) -> bool {
        self.production_vertex.is_some()
    }
}
