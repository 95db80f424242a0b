//! Attribute accessors over a particle record.

use serde::{Deserialize, Serialize};

use crate::model::Particle;
use crate::{Error, Result};

/// A named particle attribute with a typed extractor.
///
/// Derived attributes (`AbsPdgId`, `HasEndVertex`, the kinematic
/// quantities) are computed on access, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attr {
    Status,
    PdgId,
    AbsPdgId,
    HasEndVertex,
    HasProductionVertex,
    E,
    Px,
    Py,
    Pz,
    Pt,
    Eta,
    Phi,
    Mass,
}

/// Declared kind of an attribute's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrKind {
    Int,
    Float,
    Bool,
}

impl AttrKind {
    pub fn name(self) -> &'static str {
        match self {
            AttrKind::Int => "INTEGER",
            AttrKind::Float => "FLOAT",
            AttrKind::Bool => "BOOLEAN",
        }
    }
}

/// A value extracted from a particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrValue {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Attr {
    /// Stable registry identifier.
    pub fn name(self) -> &'static str {
        match self {
            Attr::Status => "STATUS",
            Attr::PdgId => "PDG_ID",
            Attr::AbsPdgId => "ABS_PDG_ID",
            Attr::HasEndVertex => "HAS_END_VERTEX",
            Attr::HasProductionVertex => "HAS_PRODUCTION_VERTEX",
            Attr::E => "E",
            Attr::Px => "PX",
            Attr::Py => "PY",
            Attr::Pz => "PZ",
            Attr::Pt => "PT",
            Attr::Eta => "ETA",
            Attr::Phi => "PHI",
            Attr::Mass => "MASS",
        }
    }

    pub fn kind(self) -> AttrKind {
        match self {
            Attr::Status | Attr::PdgId | Attr::AbsPdgId => AttrKind::Int,
            Attr::HasEndVertex | Attr::HasProductionVertex => AttrKind::Bool,
            Attr::E | Attr::Px | Attr::Py | Attr::Pz
            | Attr::Pt | Attr::Eta | Attr::Phi | Attr::Mass => AttrKind::Float,
        }
    }

    /// Extract this attribute from a particle. Constant time.
    pub fn value(self, p: &Particle) -> AttrValue {
        match self {
            Attr::Status => AttrValue::Int(i64::from(p.status)),
            Attr::PdgId => AttrValue::Int(i64::from(p.pdg_id)),
            Attr::AbsPdgId => AttrValue::Int(i64::from(p.abs_pdg_id())),
            Attr::HasEndVertex => AttrValue::Bool(p.has_end_vertex()),
            Attr::HasProductionVertex => AttrValue::Bool(p.has_production_vertex()),
            Attr::E => AttrValue::Float(p.momentum.e),
            Attr::Px => AttrValue::Float(p.momentum.px),
            Attr::Py => AttrValue::Float(p.momentum.py),
            Attr::Pz => AttrValue::Float(p.momentum.pz),
            Attr::Pt => AttrValue::Float(p.momentum.pt()),
            Attr::Eta => AttrValue::Float(p.momentum.eta()),
            Attr::Phi => AttrValue::Float(p.momentum.phi()),
            Attr::Mass => AttrValue::Float(p.momentum.mass()),
        }
    }
}

impl std::str::FromStr for Attr {
    type Err = Error;

    /// Registry lookup. Fails with [`Error::UnknownAttribute`] at
    /// construction time — malformed predicates never reach evaluation.
    fn from_str(s: &str) -> Result<Self> {
        super::registry::ATTRIBUTES
            .iter()
            .copied()
            .find(|a| a.name() == s)
            .ok_or_else(|| Error::UnknownAttribute(s.to_owned()))
    }
}

impl std::fmt::Display for Attr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParticleId, VertexId};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stored_attributes() {
        let p = Particle::new(ParticleId(1), -24, 22).with_momentum(1.0, 2.0, 3.0, 9.0);
        assert_eq!(Attr::Status.value(&p), AttrValue::Int(22));
        assert_eq!(Attr::PdgId.value(&p), AttrValue::Int(-24));
        assert_eq!(Attr::Px.value(&p), AttrValue::Float(1.0));
        assert_eq!(Attr::E.value(&p), AttrValue::Float(9.0));
    }

    #[test]
    fn test_derived_attributes() {
        let p = Particle::new(ParticleId(1), -24, 22)
            .with_momentum(3.0, 4.0, 0.0, 9.0)
            .with_end_vertex(VertexId(5));
        assert_eq!(Attr::AbsPdgId.value(&p), AttrValue::Int(24));
        assert_eq!(Attr::HasEndVertex.value(&p), AttrValue::Bool(true));
        assert_eq!(Attr::HasProductionVertex.value(&p), AttrValue::Bool(false));
        assert_eq!(Attr::Pt.value(&p), AttrValue::Float(5.0));
    }

    #[test]
    fn test_name_round_trip() {
        for &attr in crate::filter::registry::ATTRIBUTES {
            assert_eq!(attr.name().parse::<Attr>().unwrap(), attr);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "CHARGE".parse::<Attr>().unwrap_err();
        assert!(matches!(err, Error::UnknownAttribute(name) if name == "CHARGE"));
    }
}
