//! Event construction and invariant validation.

use hashbrown::HashMap;
use tracing::debug;

use crate::model::{Particle, Vertex, VertexId};
use crate::{Error, Result};

use super::EventGraph;

/// Builder for one [`EventGraph`].
///
/// `build()` validates the referential invariants and acyclicity before
/// handing out a graph; a graph that fails validation is rejected as
/// [`Error::MalformedGraph`] and no query ever sees it.
#[derive(Debug, Default)]
pub struct EventBuilder {
    particles: Vec<Particle>,
    vertices: Vec<Vertex>,
    weight: f64,
    named_weights: Vec<(String, f64)>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            weight: 1.0,
            ..Self::default()
        }
    }

    pub fn particle(mut self, p: Particle) -> Self {
        self.particles.push(p);
        self
    }

    pub fn vertex(mut self, v: Vertex) -> Self {
        self.vertices.push(v);
        self
    }

    /// Principal event weight. Defaults to 1.0.
    pub fn weight(mut self, w: f64) -> Self {
        self.weight = w;
        self
    }

    pub fn named_weight(mut self, name: impl Into<String>, w: f64) -> Self {
        self.named_weights.push((name.into(), w));
        self
    }

    /// Validate and freeze the event.
    pub fn build(self) -> Result<EventGraph> {
        let mut particle_index = HashMap::with_capacity(self.particles.len());
        for (i, p) in self.particles.iter().enumerate() {
            if particle_index.insert(p.id, i).is_some() {
                return Err(Error::MalformedGraph(format!("duplicate particle id {}", p.id)));
            }
        }

        let mut vertex_index = HashMap::with_capacity(self.vertices.len());
        for (i, v) in self.vertices.iter().enumerate() {
            if vertex_index.insert(v.id, i).is_some() {
                return Err(Error::MalformedGraph(format!("duplicate vertex id {}", v.id)));
            }
        }

        let graph = EventGraph {
            particles: self.particles,
            vertices: self.vertices,
            particle_index,
            vertex_index,
            weight: self.weight,
            named_weights: self.named_weights,
        };

        validate_references(&graph)?;
        validate_acyclic(&graph)?;

        debug!(
            particles = graph.particle_count(),
            vertices = graph.vertex_count(),
            weight = graph.weight,
            "event graph built"
        );

        Ok(graph)
    }
}

/// Referential consistency between Particle and Vertex records, checked
/// in both directions.
fn validate_references(graph: &EventGraph) -> Result<()> {
    for p in &graph.particles {
        if let Some(vid) = p.production_vertex {
            let v = graph.vertex(vid).ok_or_else(|| {
                Error::MalformedGraph(format!(
                    "particle {} references missing production vertex {vid}",
                    p.id
                ))
            })?;
            if !v.particles_out.contains(&p.id) {
                return Err(Error::MalformedGraph(format!(
                    "particle {} claims production vertex {vid}, but is not among its outgoing particles",
                    p.id
                )));
            }
        }
        if let Some(vid) = p.end_vertex {
            let v = graph.vertex(vid).ok_or_else(|| {
                Error::MalformedGraph(format!(
                    "particle {} references missing end vertex {vid}",
                    p.id
                ))
            })?;
            if !v.particles_in.contains(&p.id) {
                return Err(Error::MalformedGraph(format!(
                    "particle {} claims end vertex {vid}, but is not among its incoming particles",
                    p.id
                )));
            }
        }
    }

    for v in &graph.vertices {
        for &pid in &v.particles_out {
            let p = graph.particle(pid).ok_or_else(|| {
                Error::MalformedGraph(format!(
                    "vertex {} lists missing outgoing particle {pid}",
                    v.id
                ))
            })?;
            if p.production_vertex != Some(v.id) {
                return Err(Error::MalformedGraph(format!(
                    "vertex {} lists outgoing particle {pid}, whose production vertex is {:?}",
                    v.id, p.production_vertex
                )));
            }
        }
        for &pid in &v.particles_in {
            let p = graph.particle(pid).ok_or_else(|| {
                Error::MalformedGraph(format!(
                    "vertex {} lists missing incoming particle {pid}",
                    v.id
                ))
            })?;
            if p.end_vertex != Some(v.id) {
                return Err(Error::MalformedGraph(format!(
                    "vertex {} lists incoming particle {pid}, whose end vertex is {:?}",
                    v.id, p.end_vertex
                )));
            }
        }
    }

    Ok(())
}

/// Kahn's algorithm over the vertex-level graph. A particle produced at
/// vertex A and absorbed at vertex B contributes edge A → B; decay time
/// is monotonic, so any cycle means the record is corrupt.
fn validate_acyclic(graph: &EventGraph) -> Result<()> {
    let mut in_degree: HashMap<VertexId, usize> =
        graph.vertices.iter().map(|v| (v.id, 0)).collect();
    let mut edges: HashMap<VertexId, Vec<VertexId>> = HashMap::new();

    // Reference validation ran first, so both endpoints are known vertices.
    for p in &graph.particles {
        if let (Some(prod), Some(end)) = (p.production_vertex, p.end_vertex) {
            edges.entry(prod).or_default().push(end);
            if let Some(d) = in_degree.get_mut(&end) {
                *d += 1;
            }
        }
    }

    let mut ready: Vec<VertexId> = in_degree
        .iter()
        .filter(|&(_, &d)| d == 0)
        .map(|(&v, _)| v)
        .collect();
    let mut processed = 0usize;

    while let Some(v) = ready.pop() {
        processed += 1;
        if let Some(next) = edges.get(&v) {
            for &w in next {
                if let Some(d) = in_degree.get_mut(&w) {
                    *d -= 1;
                    if *d == 0 {
                        ready.push(w);
                    }
                }
            }
        }
    }

    if processed != graph.vertices.len() {
        return Err(Error::MalformedGraph(
            "cycle detected in the vertex graph".into(),
        ));
    }
    Ok(())
}
