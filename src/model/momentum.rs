//! Four-momentum of a particle, with derived kinematics.

use serde::{Deserialize, Serialize};

/// A four-momentum (px, py, pz, E) in double precision.
///
/// Derived quantities (`pt`, `eta`, `phi`, `mass`) are computed on access,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FourMomentum {
    pub px: f64,
    pub py: f64,
    pub pz: f64,
    pub e: f64,
}

impl FourMomentum {
    pub fn new(px: f64, py: f64, pz: f64, e: f64) -> Self {
        Self { px, py, pz, e }
    }

    /// Transverse momentum.
    pub fn pt(&self) -> f64 {
        self.px.hypot(self.py)
    }

    /// Azimuthal angle in (-pi, pi]. Zero for a zero transverse vector.
    pub fn phi(&self) -> f64 {
        if self.px == 0.0 && self.py == 0.0 {
            0.0
        } else {
            self.py.atan2(self.px)
        }
    }

    /// Pseudorapidity. Signed infinity along the beam axis.
    pub fn eta(&self) -> f64 {
        let p = (self.px * self.px + self.py * self.py + self.pz * self.pz).sqrt();
        if p == self.pz.abs() {
            if self.pz >= 0.0 { f64::INFINITY } else { f64::NEG_INFINITY }
        } else {
            0.5 * ((p + self.pz) / (p - self.pz)).ln()
        }
    }

    /// Invariant mass. Clamped to zero when rounding drives E² − |p|²
    /// slightly negative.
    pub fn mass(&self) -> f64 {
        let m2 = self.e * self.e
            - (self.px * self.px + self.py * self.py + self.pz * self.pz);
        if m2 > 0.0 { m2.sqrt() } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pt_phi() {
        let p = FourMomentum::new(3.0, 4.0, 0.0, 5.0);
        assert_eq!(p.pt(), 5.0);
        assert!((p.phi() - (4.0f64).atan2(3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_phi_of_zero_pt() {
        let p = FourMomentum::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(p.phi(), 0.0);
    }

    #[test]
    fn test_eta_along_beam_axis() {
        let p = FourMomentum::new(0.0, 0.0, 5.0, 5.0);
        assert_eq!(p.eta(), f64::INFINITY);
        let p = FourMomentum::new(0.0, 0.0, -5.0, 5.0);
        assert_eq!(p.eta(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_mass() {
        // E=5, |p|=3 -> m=4
        let p = FourMomentum::new(3.0, 0.0, 0.0, 5.0);
        assert!((p.mass() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_mass_clamped_to_zero() {
        // Spacelike by rounding: must not NaN.
        let p = FourMomentum::new(1.0, 0.0, 0.0, 1.0 - 1e-15);
        assert_eq!(p.mass(), 0.0);
    }
}
