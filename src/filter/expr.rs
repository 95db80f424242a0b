//! Predicate expression tree.
//!
//! Immutable tagged-variant expressions over particle attributes:
//! comparison leaves combined with AND / OR / NOT. The source language
//! exposed these via operator overloading on filter objects; here they
//! are explicit builder functions returning new values.

use serde::{Deserialize, Serialize};

use crate::model::Particle;
use crate::{Error, Result};

use super::{Attr, AttrKind, AttrValue};

/// Comparison operator of a predicate leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Op {
    fn apply(self, ord: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::*;
        match self {
            Op::Eq => ord == Equal,
            Op::Ne => ord != Equal,
            Op::Lt => ord == Less,
            Op::Le => ord != Greater,
            Op::Gt => ord == Greater,
            Op::Ge => ord != Less,
        }
    }
}

/// Comparison literal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    pub fn kind_name(self) -> &'static str {
        match self {
            Scalar::Int(_) => "INTEGER",
            Scalar::Float(_) => "FLOAT",
            Scalar::Bool(_) => "BOOLEAN",
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self { Scalar::Int(v) }
}
impl From<i32> for Scalar {
    fn from(v: i32) -> Self { Scalar::Int(i64::from(v)) }
}
impl From<f64> for Scalar {
    fn from(v: f64) -> Self { Scalar::Float(v) }
}
impl From<bool> for Scalar {
    fn from(v: bool) -> Self { Scalar::Bool(v) }
}

/// An immutable boolean expression over particle attributes.
///
/// Value object: no back-reference to any event graph, so one predicate
/// may be evaluated against particles from many events, repeatedly, with
/// identical results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// Matches every particle. The identity filter.
    True,
    Compare { attr: Attr, op: Op, value: Scalar },
    And(Box<Predicate>, Box<Predicate>),
    Or(Box<Predicate>, Box<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    /// The match-everything predicate, used when a caller supplies no filter.
    pub const ALWAYS_TRUE: Predicate = Predicate::True;

    /// Build a comparison leaf.
    ///
    /// Kind checking happens here, not at evaluation time: numeric
    /// attributes accept Int or Float literals (mixed comparisons are
    /// evaluated in the f64 domain); boolean attributes accept only Bool
    /// literals with `Eq`/`Ne`.
    pub fn compare(attr: Attr, op: Op, value: impl Into<Scalar>) -> Result<Self> {
        let value = value.into();
        match (attr.kind(), value) {
            (AttrKind::Int | AttrKind::Float, Scalar::Int(_) | Scalar::Float(_)) => {}
            (AttrKind::Bool, Scalar::Bool(_)) if matches!(op, Op::Eq | Op::Ne) => {}
            (kind, literal) => {
                return Err(Error::TypeMismatch {
                    attribute: attr.name(),
                    expected: kind.name(),
                    got: literal.kind_name(),
                });
            }
        }
        Ok(Predicate::Compare { attr, op, value })
    }

    /// Comparison leaf with a registry name, for declarative callers.
    pub fn compare_named(name: &str, op: Op, value: impl Into<Scalar>) -> Result<Self> {
        Self::compare(name.parse()?, op, value)
    }

    /// `attr == true` for a boolean attribute.
    pub fn is_true(attr: Attr) -> Result<Self> {
        Self::compare(attr, Op::Eq, true)
    }

    /// `attr == false` for a boolean attribute.
    pub fn is_false(attr: Attr) -> Result<Self> {
        Self::compare(attr, Op::Eq, false)
    }

    /// Conjunction. Pure: operands are consumed, a new expression returned.
    #[must_use]
    pub fn and(self, other: Predicate) -> Predicate {
        Predicate::And(Box::new(self), Box::new(other))
    }

    /// Disjunction.
    #[must_use]
    pub fn or(self, other: Predicate) -> Predicate {
        Predicate::Or(Box::new(self), Box::new(other))
    }

    /// Negation.
    #[must_use]
    pub fn negate(self) -> Predicate {
        Predicate::Not(Box::new(self))
    }

    /// Evaluate against one particle. Short-circuits AND/OR; constant
    /// time per node; no hidden state.
    pub fn matches(&self, p: &Particle) -> bool {
        match self {
            Predicate::True => true,
            Predicate::Compare { attr, op, value } => {
                compare_values(attr.value(p), *value).is_some_and(|ord| op.apply(ord))
            }
            Predicate::And(a, b) => a.matches(p) && b.matches(p),
            Predicate::Or(a, b) => a.matches(p) || b.matches(p),
            Predicate::Not(a) => !a.matches(p),
        }
    }
}

/// Free-standing negation, for call sites that read better prefix-style.
pub fn not(p: Predicate) -> Predicate {
    p.negate()
}

/// Compare an extracted attribute value against a literal.
///
/// Kinds were checked at construction, so the only cross-kind case left
/// is Int vs Float, widened to f64. `None` only for NaN comparisons,
/// which no operator matches.
fn compare_values(lhs: AttrValue, rhs: Scalar) -> Option<std::cmp::Ordering> {
    match (lhs, rhs) {
        (AttrValue::Int(a), Scalar::Int(b)) => Some(a.cmp(&b)),
        (AttrValue::Int(a), Scalar::Float(b)) => (a as f64).partial_cmp(&b),
        (AttrValue::Float(a), Scalar::Int(b)) => a.partial_cmp(&(b as f64)),
        (AttrValue::Float(a), Scalar::Float(b)) => a.partial_cmp(&b),
        (AttrValue::Bool(a), Scalar::Bool(b)) => Some(a.cmp(&b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParticleId, VertexId};
    use pretty_assertions::assert_eq;

    fn electron() -> Particle {
        Particle::new(ParticleId(2), -11, 1).with_momentum(1.0, 0.0, 5.0, 45.0)
    }

    fn w_boson() -> Particle {
        Particle::new(ParticleId(1), 24, 22)
            .with_momentum(0.0, 0.0, 10.0, 90.0)
            .with_end_vertex(VertexId(1))
    }

    #[test]
    fn test_compare_int() {
        let sel = Predicate::compare(Attr::Status, Op::Eq, 1).unwrap();
        assert!(sel.matches(&electron()));
        assert!(!sel.matches(&w_boson()));
    }

    #[test]
    fn test_abs_pdg_id() {
        let sel = Predicate::compare(Attr::AbsPdgId, Op::Eq, 11).unwrap();
        assert!(sel.matches(&electron()));
    }

    #[test]
    fn test_abs_pdg_id_negative_literal_matches_nothing() {
        // Legal predicate; the accessor's range is non-negative.
        let sel = Predicate::compare(Attr::AbsPdgId, Op::Eq, -11).unwrap();
        assert!(!sel.matches(&electron()));
        assert!(!sel.matches(&w_boson()));
    }

    #[test]
    fn test_mixed_int_float_comparison() {
        let sel = Predicate::compare(Attr::E, Op::Gt, 44).unwrap();
        assert!(sel.matches(&electron()));
        let sel = Predicate::compare(Attr::Status, Op::Lt, 1.5).unwrap();
        assert!(sel.matches(&electron()));
    }

    #[test]
    fn test_bool_attr_rejects_numeric_literal() {
        let err = Predicate::compare(Attr::HasEndVertex, Op::Eq, 1).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch { attribute: "HAS_END_VERTEX", expected: "BOOLEAN", got: "INTEGER" }
        ));
    }

    #[test]
    fn test_bool_attr_rejects_ordering_op() {
        let err = Predicate::compare(Attr::HasEndVertex, Op::Lt, true).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_numeric_attr_rejects_bool_literal() {
        let err = Predicate::compare(Attr::E, Op::Eq, true).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_combinators() {
        let stable = Predicate::compare(Attr::Status, Op::Eq, 1).unwrap();
        let no_decay = Predicate::is_false(Attr::HasEndVertex).unwrap();
        let sel = stable.clone().and(no_decay);
        assert!(sel.matches(&electron()));
        assert!(!sel.matches(&w_boson()));

        let either = stable.or(Predicate::compare(Attr::AbsPdgId, Op::Eq, 24).unwrap());
        assert!(either.matches(&electron()));
        assert!(either.matches(&w_boson()));

        assert!(!not(either).matches(&w_boson()));
    }

    #[test]
    fn test_always_true() {
        assert!(Predicate::ALWAYS_TRUE.matches(&electron()));
        assert!(Predicate::ALWAYS_TRUE.matches(&w_boson()));
    }

    #[test]
    fn test_compare_named() {
        let sel = Predicate::compare_named("PDG_ID", Op::Eq, -11).unwrap();
        assert!(sel.matches(&electron()));
        assert!(Predicate::compare_named("BOGUS", Op::Eq, 0).is_err());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let p = electron();
        let sel = Predicate::compare(Attr::Pt, Op::Gt, 0.5).unwrap();
        assert_eq!(sel.matches(&p), sel.matches(&p));
    }
}
