//! # roll_core - Paper Roll Allocation Engine
//!
//! `roll_core` converts between the amount of paper wound on a drum and
//! the diameter of the resulting roll, and uses that conversion to plan
//! how one drum is split into sellable rods whose diameters must fall
//! inside a fixed window. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Injected Constants**: Core diameter, correction factor, and rod
//!   bounds travel in the input, never as hidden literals
//!
//! ## Quick Start
//!
//! ```rust
//! use roll_core::{allocate, AllocationInput, MaterialSpec, PaperGrade};
//!
//! let input = AllocationInput::new(
//!     "T-529",
//!     MaterialSpec::from_grade(PaperGrade::F100),
//!     529.0,
//! );
//!
//! let result = allocate(&input).unwrap();
//! println!("{}", result.summary());
//! assert_eq!(result.diameters_mm, vec![1270, 1270]);
//! ```
//!
//! ## Modules
//!
//! - [`allocation`] - The three-tactic rod allocation planner
//! - [`geometry`] - Winding geometry (annulus length/diameter conversion)
//! - [`materials`] - Paper grade catalog
//! - [`errors`] - Structured error types

pub mod allocation;
pub mod errors;
pub mod geometry;
pub mod materials;

// Re-export commonly used types at crate root for convenience
pub use allocation::{
    allocate, AllocationConfig, AllocationInput, AllocationResult, AllocationStrategy,
};
pub use errors::{RollError, RollResult};
pub use geometry::{RodModel, WindingGeometry};
pub use materials::{GradeProperties, MaterialSpec, PaperGrade};
