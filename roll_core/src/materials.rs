//! Paper Grade Catalog
//!
//! Fixed catalog of fluting grades used on the winder, keyed by the
//! production P-code. Density and caliper are physical constants of a
//! grade; they never change after selection.
//!
//! The catalog is closed (six grades), so it lives as enum data rather
//! than an external table. Custom material properties can still be
//! supplied through [`MaterialSpec::custom`] for trials.

use serde::{Deserialize, Serialize};

use crate::errors::{RollError, RollResult};

/// Fluting grades by grammage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperGrade {
    /// Fluting 90 g/m²
    #[serde(rename = "1F090")]
    F090,
    /// Fluting 100 g/m²
    #[serde(rename = "1F100")]
    F100,
    /// Fluting 110 g/m²
    #[serde(rename = "1F110")]
    F110,
    /// Fluting 120 g/m²
    #[serde(rename = "1F120")]
    F120,
    /// Fluting 130 g/m²
    #[serde(rename = "1F130")]
    F130,
    /// Fluting 140 g/m²
    #[serde(rename = "1F140")]
    F140,
}

/// Physical properties of a paper grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeProperties {
    /// Basis weight (g/m²)
    pub grammage_gsm: f64,
    /// Winding density constant used by the annulus formulas
    pub density: f64,
    /// Effective caliper per wound layer (mm)
    pub thickness_mm: f64,
}

impl PaperGrade {
    /// All grades in catalog order, for UI selection
    pub const ALL: [PaperGrade; 6] = [
        PaperGrade::F090,
        PaperGrade::F100,
        PaperGrade::F110,
        PaperGrade::F120,
        PaperGrade::F130,
        PaperGrade::F140,
    ];

    /// Get the production P-code (e.g., "1F100")
    pub fn code(&self) -> &'static str {
        match self {
            PaperGrade::F090 => "1F090",
            PaperGrade::F100 => "1F100",
            PaperGrade::F110 => "1F110",
            PaperGrade::F120 => "1F120",
            PaperGrade::F130 => "1F130",
            PaperGrade::F140 => "1F140",
        }
    }

    /// Look up a grade by its P-code
    pub fn from_code(code: &str) -> RollResult<Self> {
        match code.trim().to_uppercase().as_str() {
            "1F090" => Ok(PaperGrade::F090),
            "1F100" => Ok(PaperGrade::F100),
            "1F110" => Ok(PaperGrade::F110),
            "1F120" => Ok(PaperGrade::F120),
            "1F130" => Ok(PaperGrade::F130),
            "1F140" => Ok(PaperGrade::F140),
            _ => Err(RollError::material_not_found(code)),
        }
    }

    /// Get the physical properties for this grade
    pub fn properties(&self) -> GradeProperties {
        match self {
            PaperGrade::F090 => GradeProperties {
                grammage_gsm: 90.0,
                density: 120.0,
                thickness_mm: 0.957,
            },
            PaperGrade::F100 => GradeProperties {
                grammage_gsm: 100.0,
                density: 120.0,
                thickness_mm: 1.063,
            },
            PaperGrade::F110 => GradeProperties {
                grammage_gsm: 110.0,
                density: 120.0,
                thickness_mm: 1.169,
            },
            PaperGrade::F120 => GradeProperties {
                grammage_gsm: 120.0,
                density: 120.0,
                thickness_mm: 1.276,
            },
            PaperGrade::F130 => GradeProperties {
                grammage_gsm: 130.0,
                density: 120.0,
                thickness_mm: 1.382,
            },
            PaperGrade::F140 => GradeProperties {
                grammage_gsm: 140.0,
                density: 120.0,
                thickness_mm: 1.488,
            },
        }
    }

    /// Get display name (family plus grammage)
    pub fn display_name(&self) -> String {
        format!("Fluting {:.0} g/m²", self.properties().grammage_gsm)
    }
}

impl std::fmt::Display for PaperGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Material selection for an allocation run.
///
/// Usually built from a catalog grade; [`MaterialSpec::custom`] allows
/// ad-hoc density/caliper pairs for grades not yet in the catalog.
///
/// ## JSON Example
///
/// ```json
/// {
///   "code": "1F100",
///   "density": 120.0,
///   "thickness_mm": 1.063
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Grade code, for labeling only
    pub code: String,

    /// Winding density constant
    pub density: f64,

    /// Effective caliper per wound layer (mm)
    pub thickness_mm: f64,
}

impl MaterialSpec {
    /// Build a spec from a catalog grade
    pub fn from_grade(grade: PaperGrade) -> Self {
        let props = grade.properties();
        MaterialSpec {
            code: grade.code().to_string(),
            density: props.density,
            thickness_mm: props.thickness_mm,
        }
    }

    /// Build a spec with custom properties
    pub fn custom(code: impl Into<String>, density: f64, thickness_mm: f64) -> Self {
        MaterialSpec {
            code: code.into(),
            density,
            thickness_mm,
        }
    }

    /// Validate physical constants before any geometry runs
    pub fn validate(&self) -> RollResult<()> {
        if !(self.density > 0.0) || !self.density.is_finite() {
            return Err(RollError::invalid_input(
                "density",
                self.density.to_string(),
                "Density must be positive and finite",
            ));
        }
        if !(self.thickness_mm > 0.0) || !self.thickness_mm.is_finite() {
            return Err(RollError::invalid_input(
                "thickness_mm",
                self.thickness_mm.to_string(),
                "Thickness must be positive and finite",
            ));
        }
        Ok(())
    }
}

impl From<PaperGrade> for MaterialSpec {
    fn from(grade: PaperGrade) -> Self {
        MaterialSpec::from_grade(grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_codes() {
        assert_eq!(PaperGrade::ALL.len(), 6);
        for grade in PaperGrade::ALL {
            assert_eq!(PaperGrade::from_code(grade.code()).unwrap(), grade);
        }
    }

    #[test]
    fn test_from_code_case_insensitive() {
        assert_eq!(PaperGrade::from_code("1f100").unwrap(), PaperGrade::F100);
        assert_eq!(PaperGrade::from_code(" 1F140 ").unwrap(), PaperGrade::F140);
    }

    #[test]
    fn test_from_code_unknown() {
        let err = PaperGrade::from_code("2X200").unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_catalog_properties() {
        let props = PaperGrade::F100.properties();
        assert_eq!(props.grammage_gsm, 100.0);
        assert_eq!(props.density, 120.0);
        assert_eq!(props.thickness_mm, 1.063);

        // Caliper grows with grammage across the catalog
        for pair in PaperGrade::ALL.windows(2) {
            assert!(pair[0].properties().thickness_mm < pair[1].properties().thickness_mm);
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(PaperGrade::F090.display_name(), "Fluting 90 g/m²");
        assert_eq!(PaperGrade::F090.to_string(), "1F090");
    }

    #[test]
    fn test_material_spec_from_grade() {
        let spec = MaterialSpec::from_grade(PaperGrade::F110);
        assert_eq!(spec.code, "1F110");
        assert_eq!(spec.thickness_mm, 1.169);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_material_spec_validation() {
        let spec = MaterialSpec::custom("TRIAL", -1.0, 1.0);
        assert_eq!(spec.validate().unwrap_err().error_code(), "INVALID_INPUT");

        let spec = MaterialSpec::custom("TRIAL", 120.0, 0.0);
        assert!(spec.validate().is_err());

        let spec = MaterialSpec::custom("TRIAL", f64::NAN, 1.0);
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_grade_serialization() {
        let json = serde_json::to_string(&PaperGrade::F120).unwrap();
        assert_eq!(json, "\"1F120\"");
        let parsed: PaperGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, PaperGrade::F120);
    }
}
