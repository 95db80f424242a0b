//! Flat result rows returned by queries.

use serde::{Deserialize, Serialize};

use super::Particle;

/// One particle as a structured result row.
///
/// Field order and types are stable across calls so hosts can map rows
/// onto a fixed structured-array layout: doubles first (`e`, `px`, `py`,
/// `pz`), then integers (`pdg_id`, `status`), then the end-vertex flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleRecord {
    pub e: f64,
    pub px: f64,
    pub py: f64,
    pub pz: f64,
    pub pdg_id: i32,
    pub status: i32,
    pub has_end_vertex: bool,
}

impl From<&Particle> for ParticleRecord {
    fn from(p: &Particle) -> Self {
        Self {
            e: p.momentum.e,
            px: p.momentum.px,
            py: p.momentum.py,
            pz: p.momentum.pz,
            pdg_id: p.pdg_id,
            status: p.status,
            has_end_vertex: p.has_end_vertex(),
        }
    }
}
