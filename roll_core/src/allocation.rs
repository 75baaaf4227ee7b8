//! Rod Allocation Planner
//!
//! Decides how to split the material on one drum into sellable rods
//! whose outer diameters must fall inside a fixed range. Three tactics
//! are tried in strict order, first success wins:
//!
//! - **Equal diameters**: spread the full length evenly across the
//!   maximum count the minimum diameter allows.
//! - **Reduced count**: one fewer rod, when even spreading would land
//!   below the minimum diameter.
//! - **Mixed**: fill rods at the maximum diameter and plan the remainder
//!   as one final rod if it is large enough, otherwise report it as
//!   waste.
//!
//! "No rods fit" is a valid outcome (`rod_count == 0`), reported through
//! the result rather than an error.
//!
//! ## Example
//!
//! ```rust
//! use roll_core::allocation::{allocate, AllocationInput};
//! use roll_core::materials::{MaterialSpec, PaperGrade};
//!
//! let input = AllocationInput::new(
//!     "T-529",
//!     MaterialSpec::from_grade(PaperGrade::F100),
//!     529.0,
//! );
//! let result = allocate(&input).unwrap();
//! assert_eq!(result.rod_count, 2);
//! assert_eq!(result.diameters_mm, vec![1270, 1270]);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{RollError, RollResult};
use crate::geometry::{RodModel, WindingGeometry};
use crate::materials::MaterialSpec;

/// Planner constants, injected per call.
///
/// The defaults are the plant's current line setup: a 3-inch core
/// measured at 821 mm over its wrap, a looseness correction of 1.52, and
/// a sellable rod window of 1200–1400 mm. All of them are plain data so
/// future lines or trial bounds need no code change.
///
/// ## JSON Example
///
/// ```json
/// {
///   "core_diameter_mm": 821.0,
///   "correction_factor": 1.52,
///   "min_rod_diameter_mm": 1200.0,
///   "max_rod_diameter_mm": 1400.0,
///   "min_drum_radius_mm": 200.0,
///   "max_drum_radius_mm": 1500.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationConfig {
    /// Core tube diameter (mm), shared by drum and rods
    pub core_diameter_mm: f64,

    /// Empirical looseness multiplier for finished rods
    pub correction_factor: f64,

    /// Smallest sellable rod diameter (mm)
    pub min_rod_diameter_mm: f64,

    /// Largest sellable rod diameter (mm)
    pub max_rod_diameter_mm: f64,

    /// Smallest accepted drum winding radius (mm)
    pub min_drum_radius_mm: f64,

    /// Largest accepted drum winding radius (mm)
    pub max_drum_radius_mm: f64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        AllocationConfig {
            core_diameter_mm: 821.0,
            correction_factor: 1.52,
            min_rod_diameter_mm: 1200.0,
            max_rod_diameter_mm: 1400.0,
            min_drum_radius_mm: 200.0,
            max_drum_radius_mm: 1500.0,
        }
    }
}

impl AllocationConfig {
    /// Validate the configuration before any geometry runs
    pub fn validate(&self) -> RollResult<()> {
        let positive = [
            ("core_diameter_mm", self.core_diameter_mm),
            ("correction_factor", self.correction_factor),
            ("min_rod_diameter_mm", self.min_rod_diameter_mm),
            ("max_rod_diameter_mm", self.max_rod_diameter_mm),
            ("min_drum_radius_mm", self.min_drum_radius_mm),
            ("max_drum_radius_mm", self.max_drum_radius_mm),
        ];
        for (field, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(RollError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be positive and finite",
                ));
            }
        }
        if self.min_rod_diameter_mm >= self.max_rod_diameter_mm {
            return Err(RollError::invalid_input(
                "min_rod_diameter_mm",
                self.min_rod_diameter_mm.to_string(),
                "Minimum rod diameter must be below the maximum",
            ));
        }
        if self.min_rod_diameter_mm <= self.core_diameter_mm {
            return Err(RollError::invalid_input(
                "min_rod_diameter_mm",
                self.min_rod_diameter_mm.to_string(),
                "Minimum rod diameter must exceed the core diameter",
            ));
        }
        if self.min_drum_radius_mm > self.max_drum_radius_mm {
            return Err(RollError::invalid_input(
                "min_drum_radius_mm",
                self.min_drum_radius_mm.to_string(),
                "Minimum drum radius must not exceed the maximum",
            ));
        }
        Ok(())
    }
}

/// Input for one allocation run.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "T-529",
///   "material": { "code": "1F100", "density": 120.0, "thickness_mm": 1.063 },
///   "drum_radius_mm": 529.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationInput {
    /// User label for this drum (e.g., tambour number)
    pub label: String,

    /// Material grade properties
    pub material: MaterialSpec,

    /// Drum winding radius (mm), measured from the core outward
    pub drum_radius_mm: f64,

    /// Planner constants; defaults to the current line setup
    #[serde(default)]
    pub config: AllocationConfig,
}

impl AllocationInput {
    /// Build an input with the default line configuration
    pub fn new(label: impl Into<String>, material: MaterialSpec, drum_radius_mm: f64) -> Self {
        AllocationInput {
            label: label.into(),
            material,
            drum_radius_mm,
            config: AllocationConfig::default(),
        }
    }

    /// Validate material, configuration, and drum radius range
    pub fn validate(&self) -> RollResult<()> {
        self.material.validate()?;
        self.config.validate()?;
        if !self.drum_radius_mm.is_finite()
            || self.drum_radius_mm < self.config.min_drum_radius_mm
            || self.drum_radius_mm > self.config.max_drum_radius_mm
        {
            return Err(RollError::invalid_input(
                "drum_radius_mm",
                self.drum_radius_mm.to_string(),
                format!(
                    "Drum radius must be between {} and {} mm",
                    self.config.min_drum_radius_mm, self.config.max_drum_radius_mm
                ),
            ));
        }
        Ok(())
    }
}

/// Which tactic produced the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationStrategy {
    /// Even spread across the maximum feasible count
    EqualDiameters,
    /// Even spread across one fewer rod
    ReducedCount,
    /// Maximum-diameter rods plus an optional remainder rod
    Mixed,
    /// The drum cannot yield even one minimum-diameter rod
    Infeasible,
}

/// Snapshot result of one allocation run.
///
/// ## JSON Example
///
/// ```json
/// {
///   "rod_count": 2,
///   "diameters_mm": [1270, 1270],
///   "strategy": "EqualDiameters",
///   "total_length": 19874.28,
///   "waste_length": 0.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Number of rods to produce
    pub rod_count: usize,

    /// Planned outer diameters in production order (mm, rounded)
    pub diameters_mm: Vec<u32>,

    /// Tactic that produced this plan
    pub strategy: AllocationStrategy,

    /// Total material present on the drum (uncorrected length)
    pub total_length: f64,

    /// Material left unplanned: the sub-minimum remainder for mixed
    /// plans, the whole drum when no rod fits, zero otherwise
    pub waste_length: f64,
}

impl AllocationResult {
    fn infeasible(total_length: f64) -> Self {
        AllocationResult {
            rod_count: 0,
            diameters_mm: Vec::new(),
            strategy: AllocationStrategy::Infeasible,
            total_length,
            waste_length: total_length,
        }
    }

    fn equal(
        strategy: AllocationStrategy,
        count: usize,
        diameter_mm: u32,
        total_length: f64,
    ) -> Self {
        AllocationResult {
            rod_count: count,
            diameters_mm: vec![diameter_mm; count],
            strategy,
            total_length,
            waste_length: 0.0,
        }
    }

    /// Whether the plan yields at least one rod
    pub fn is_feasible(&self) -> bool {
        self.rod_count > 0
    }

    /// Human-readable summary of the plan.
    ///
    /// Presentation layers that need localization should format from
    /// `strategy` and `diameters_mm` instead.
    pub fn summary(&self) -> String {
        match self.strategy {
            AllocationStrategy::Infeasible => {
                "drum radius too small: no rods possible".to_string()
            }
            AllocationStrategy::EqualDiameters | AllocationStrategy::ReducedCount => format!(
                "make {} of diameter {} mm",
                rods_phrase(self.rod_count),
                self.diameters_mm[0]
            ),
            AllocationStrategy::Mixed => {
                let full_count = self
                    .diameters_mm
                    .iter()
                    .filter(|&&d| d == self.diameters_mm[0])
                    .count();
                let mut text = format!(
                    "make {} of diameter {} mm",
                    rods_phrase(full_count),
                    self.diameters_mm[0]
                );
                if full_count < self.rod_count {
                    text.push_str(&format!(
                        " and 1 rod of diameter {} mm",
                        self.diameters_mm[self.rod_count - 1]
                    ));
                }
                text
            }
        }
    }
}

fn rods_phrase(count: usize) -> String {
    if count == 1 {
        "1 rod".to_string()
    } else {
        format!("{count} rods")
    }
}

/// Plan how to split one drum into sellable rods.
///
/// Tactics are evaluated strictly in order (equal spread, reduced count,
/// mixed fill); no tactic re-enters an earlier one. The drum total is
/// the uncorrected wound length; per-rod conversions carry the
/// correction factor.
///
/// # Errors
///
/// * `InvalidInput` - material, configuration, or drum radius rejected
///   before any geometry runs
/// * `InvalidGeometry` - arithmetic would leave the real domain
pub fn allocate(input: &AllocationInput) -> RollResult<AllocationResult> {
    input.validate()?;
    let cfg = &input.config;
    let geometry = WindingGeometry::new(cfg.core_diameter_mm, &input.material);
    let rod = RodModel::new(geometry, cfg.correction_factor);

    // Physical quantity of material actually present, no correction.
    let total_length = geometry.wound_length(input.drum_radius_mm);

    let length_at_min = rod.rod_length(cfg.min_rod_diameter_mm);
    let count_at_min = (total_length / length_at_min).floor() as usize;
    if count_at_min == 0 {
        return Ok(AllocationResult::infeasible(total_length));
    }

    // Equal spread across the maximum feasible count.
    let diameter = rod.diameter_for_length(total_length / count_at_min as f64)?;
    if diameter >= cfg.min_rod_diameter_mm && diameter <= cfg.max_rod_diameter_mm {
        return Ok(AllocationResult::equal(
            AllocationStrategy::EqualDiameters,
            count_at_min,
            diameter.round() as u32,
            total_length,
        ));
    }

    // Spreading landed below the minimum: try one fewer rod.
    if diameter < cfg.min_rod_diameter_mm {
        if let Some(result) = strategy_reduced(&rod, cfg, total_length, count_at_min)? {
            return Ok(result);
        }
    }

    // Fill at the maximum diameter and handle the remainder.
    strategy_mixed(&rod, cfg, total_length)
}

/// Reduced-count tactic: one fewer rod, equal diameters.
///
/// Decrementing from a count of one leaves nothing to plan; that case is
/// an explicit infeasibility, not a division by zero.
fn strategy_reduced(
    rod: &RodModel,
    cfg: &AllocationConfig,
    total_length: f64,
    count_at_min: usize,
) -> RollResult<Option<AllocationResult>> {
    let reduced = count_at_min - 1;
    if reduced == 0 {
        return Ok(Some(AllocationResult::infeasible(total_length)));
    }
    let diameter = rod.diameter_for_length(total_length / reduced as f64)?;
    if diameter <= cfg.max_rod_diameter_mm {
        return Ok(Some(AllocationResult::equal(
            AllocationStrategy::ReducedCount,
            reduced,
            diameter.round() as u32,
            total_length,
        )));
    }
    Ok(None)
}

/// Mixed tactic: as many maximum-diameter rods as fit, then the
/// remainder as one final rod if it clears the minimum, otherwise waste.
fn strategy_mixed(
    rod: &RodModel,
    cfg: &AllocationConfig,
    total_length: f64,
) -> RollResult<AllocationResult> {
    let length_at_max = rod.rod_length(cfg.max_rod_diameter_mm);
    let count_at_max = (total_length / length_at_max).floor() as usize;

    let mut diameters_mm = vec![cfg.max_rod_diameter_mm.round() as u32; count_at_max];
    let remainder = total_length - count_at_max as f64 * length_at_max;
    let last_diameter = rod.diameter_for_length(remainder)?;

    let mut waste_length = 0.0;
    if last_diameter >= cfg.min_rod_diameter_mm {
        diameters_mm.push(last_diameter.round() as u32);
    } else {
        waste_length = remainder;
    }

    if diameters_mm.is_empty() {
        return Ok(AllocationResult::infeasible(total_length));
    }

    Ok(AllocationResult {
        rod_count: diameters_mm.len(),
        diameters_mm,
        strategy: AllocationStrategy::Mixed,
        total_length,
        waste_length,
    })
}
