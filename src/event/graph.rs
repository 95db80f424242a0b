//! Arena-indexed event graph.

use hashbrown::HashMap;
use serde::Serialize;

use crate::model::{Particle, ParticleId, Vertex, VertexId};

/// One event's bipartite DAG of particles and vertices, plus its weights.
///
/// Immutable after construction (see [`super::EventBuilder`]). Particles
/// keep their native enumeration order — the order they were added, which
/// matches the external record's generation order.
#[derive(Debug, Clone, Serialize)]
pub struct EventGraph {
    pub(crate) particles: Vec<Particle>,
    pub(crate) vertices: Vec<Vertex>,
    #[serde(skip)]
    pub(crate) particle_index: HashMap<ParticleId, usize>,
    #[serde(skip)]
    pub(crate) vertex_index: HashMap<VertexId, usize>,
    /// Principal event weight, passed through from the generator.
    pub weight: f64,
    /// Additional named weights, in generator order.
    pub named_weights: Vec<(String, f64)>,
}

impl EventGraph {
    /// All particles in native enumeration order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// All vertices in record order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Look up a particle by id.
    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particle_index.get(&id).map(|&i| &self.particles[i])
    }

    /// Look up a vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertex_index.get(&id).map(|&i| &self.vertices[i])
    }

    /// The vertex where a particle was created, if any. `None` for beam
    /// particles.
    pub fn production_vertex(&self, id: ParticleId) -> Option<&Vertex> {
        self.particle(id)?.production_vertex.and_then(|v| self.vertex(v))
    }

    /// The vertex where a particle decays, if any. `None` for final-state
    /// particles.
    pub fn end_vertex(&self, id: ParticleId) -> Option<&Vertex> {
        self.particle(id)?.end_vertex.and_then(|v| self.vertex(v))
    }

    /// Weight labels in generator order.
    pub fn weight_labels(&self) -> impl Iterator<Item = &str> {
        self.named_weights.iter().map(|(name, _)| name.as_str())
    }

    /// Look up a named weight.
    pub fn named_weight(&self, name: &str) -> Option<f64> {
        self.named_weights
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, w)| w)
    }
}
