//! # Event Record Model
//!
//! Clean DTOs for one generator event: particles, decay vertices, momenta,
//! and the flat result rows handed back to callers.
//!
//! Design rule: this module is pure data — no graph adjacency, no I/O,
//! no query logic. `Particle` and `Vertex` hold id references only; the
//! arena that resolves them lives in [`crate::event`].

pub mod momentum;
pub mod particle;
pub mod record;
pub mod vertex;

pub use momentum::FourMomentum;
pub use particle::{Particle, ParticleId};
pub use record::ParticleRecord;
pub use vertex::{Vertex, VertexId};
