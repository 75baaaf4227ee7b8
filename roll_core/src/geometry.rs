//! Winding Geometry
//!
//! Models the material wound around a cylindrical core as an annulus:
//! outer winding radius `R`, core diameter `d`, caliper `t`, density `ρ`.
//! The forward formula gives the total linear length of material wound
//! out to radius `R`:
//!
//! ```text
//! length(R) = π · (R² + R·d) · t / ρ
//! ```
//!
//! The inverse solves the same quadratic for `R` given a target length.
//! Both are pure and exact inverses of one another absent rounding.
//!
//! Finished rods use [`RodModel`], which layers an empirical correction
//! factor on top of the ideal annulus to account for winding looseness.
//! Drum totals are always computed uncorrected; the asymmetry matches the
//! plant's established calculation sheet and must not be "fixed" here
//! without sign-off from the process owner.
//!
//! ## Example
//!
//! ```rust
//! use roll_core::geometry::WindingGeometry;
//! use roll_core::materials::{MaterialSpec, PaperGrade};
//!
//! let geo = WindingGeometry::new(821.0, &MaterialSpec::from_grade(PaperGrade::F100));
//! let length = geo.wound_length(529.0);
//! let radius = geo.radius_for_length(length).unwrap();
//! assert!((radius - 529.0).abs() < 1e-9);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{RollError, RollResult};
use crate::materials::MaterialSpec;

/// Ideal (uncorrected) annulus geometry for one core/material pairing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindingGeometry {
    /// Core tube diameter (mm)
    pub core_diameter_mm: f64,
    /// Winding density constant of the material
    pub density: f64,
    /// Effective caliper per wound layer (mm)
    pub thickness_mm: f64,
}

impl WindingGeometry {
    /// Build the geometry for a core and material
    pub fn new(core_diameter_mm: f64, material: &MaterialSpec) -> Self {
        WindingGeometry {
            core_diameter_mm,
            density: material.density,
            thickness_mm: material.thickness_mm,
        }
    }

    /// Total length of material wound out to `radius_mm` from the core.
    ///
    /// This is the physical quantity of material present; no correction
    /// factor is applied.
    pub fn wound_length(&self, radius_mm: f64) -> f64 {
        PI * (radius_mm * radius_mm + radius_mm * self.core_diameter_mm) * self.thickness_mm
            / self.density
    }

    /// Winding radius that holds exactly `length` of material.
    ///
    /// Inverse of [`wound_length`](Self::wound_length). Fails with
    /// `InvalidGeometry` when the quadratic has no real solution, which
    /// only happens for negative lengths large enough to outweigh the
    /// core term.
    pub fn radius_for_length(&self, length: f64) -> RollResult<f64> {
        let discriminant = length * 4.0 * self.density / (PI * self.thickness_mm)
            + self.core_diameter_mm * self.core_diameter_mm;
        if discriminant < 0.0 || !discriminant.is_finite() {
            return Err(RollError::invalid_geometry(
                "radius_for_length",
                format!("square-root argument {discriminant} is not a non-negative real"),
            ));
        }
        Ok((discriminant.sqrt() - self.core_diameter_mm) / 2.0)
    }

    /// Outer diameter of a roll wound to `radius_mm`
    pub fn outer_diameter(&self, radius_mm: f64) -> f64 {
        2.0 * radius_mm + self.core_diameter_mm
    }

    /// Winding radius of a roll with outer diameter `diameter_mm`
    pub fn winding_radius(&self, diameter_mm: f64) -> f64 {
        (diameter_mm - self.core_diameter_mm) / 2.0
    }
}

/// Per-rod length model: ideal annulus times an empirical correction
/// factor for practical winding looseness. Applies to finished rods
/// only, never to the source drum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RodModel {
    /// Ideal annulus geometry shared with the drum
    pub geometry: WindingGeometry,
    /// Empirical looseness multiplier (dimensionless, > 0)
    pub correction_factor: f64,
}

impl RodModel {
    /// Build a rod model on top of a winding geometry
    pub fn new(geometry: WindingGeometry, correction_factor: f64) -> Self {
        RodModel {
            geometry,
            correction_factor,
        }
    }

    /// Length of material in one rod of the given outer diameter,
    /// correction factor applied.
    pub fn rod_length(&self, outer_diameter_mm: f64) -> f64 {
        let radius = self.geometry.winding_radius(outer_diameter_mm);
        self.geometry.wound_length(radius) * self.correction_factor
    }

    /// Outer diameter of the rod that holds exactly `length` of
    /// material. Divides out the correction factor before inverting the
    /// annulus formula.
    pub fn diameter_for_length(&self, length: f64) -> RollResult<f64> {
        let ideal_length = length / self.correction_factor;
        let radius = self.geometry.radius_for_length(ideal_length)?;
        Ok(self.geometry.outer_diameter(radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::PaperGrade;

    fn geo_1f100() -> WindingGeometry {
        WindingGeometry::new(821.0, &MaterialSpec::from_grade(PaperGrade::F100))
    }

    fn rod_1f100() -> RodModel {
        RodModel::new(geo_1f100(), 1.52)
    }

    #[test]
    fn test_wound_length_reference_value() {
        // Pinned from one run of the reference formulas: 1F100 at R=529
        let length = geo_1f100().wound_length(529.0);
        assert!((length - 19874.2767).abs() < 1e-3, "got {length}");
    }

    #[test]
    fn test_inverse_law() {
        let geo = geo_1f100();
        for radius in [1.0, 50.0, 200.0, 529.0, 1500.0] {
            let length = geo.wound_length(radius);
            let back = geo.radius_for_length(length).unwrap();
            assert!(
                (back - radius).abs() / radius < 1e-9,
                "radius {radius} round-tripped to {back}"
            );
        }
    }

    #[test]
    fn test_rod_inverse_law() {
        let rod = rod_1f100();
        for diameter in [900.0, 1200.0, 1300.0, 1400.0] {
            let length = rod.rod_length(diameter);
            let back = rod.diameter_for_length(length).unwrap();
            assert!(
                (back - diameter).abs() < 1e-6,
                "diameter {diameter} round-tripped to {back}"
            );
        }
    }

    #[test]
    fn test_monotonicity() {
        let geo = geo_1f100();
        let rod = rod_1f100();
        let mut prev_wound = geo.wound_length(10.0);
        let mut prev_rod = rod.rod_length(850.0);
        for step in 1..=50 {
            let wound = geo.wound_length(10.0 + step as f64 * 30.0);
            let rod_len = rod.rod_length(850.0 + step as f64 * 12.0);
            assert!(wound > prev_wound);
            assert!(rod_len > prev_rod);
            prev_wound = wound;
            prev_rod = rod_len;
        }
    }

    #[test]
    fn test_correction_factor_asymmetry() {
        // rod_length is exactly the uncorrected annulus times the factor
        let geo = geo_1f100();
        let rod = rod_1f100();
        let diameter = 1300.0;
        let radius = geo.winding_radius(diameter);
        let ideal = geo.wound_length(radius);
        let corrected = rod.rod_length(diameter);
        assert!((corrected / ideal - 1.52).abs() < 1e-12);
    }

    #[test]
    fn test_reference_rod_lengths() {
        let rod = rod_1f100();
        assert!((rod.rod_length(1200.0) - 8100.1118).abs() < 1e-3);
        assert!((rod.rod_length(1400.0) - 13599.1765).abs() < 1e-3);
    }

    #[test]
    fn test_negative_sqrt_guarded() {
        let geo = geo_1f100();
        // A length negative enough to push the discriminant below zero
        let err = geo.radius_for_length(-1.0e9).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_diameter_radius_round_trip() {
        let geo = geo_1f100();
        let diameter = geo.outer_diameter(529.0);
        assert_eq!(diameter, 1879.0);
        assert_eq!(geo.winding_radius(diameter), 529.0);
    }
}
