//! # Section Property Equations
//!
//! All closed-form cross-section formulas live here, in one place, so they
//! can be checked against references without reading the engine.
//!
//! ## Modules
//!
//! - [`section`] - Formula functions (A, I, Z, S, r) per shape
//! - [`registry`] - Display metadata (LaTeX / plain text) for each shape's equations
//!
//! ## Conventions
//!
//! - **Units**: millimetres in, powers of millimetres out
//! - **x axis**: horizontal centroidal axis (bending about x uses the height)
//! - **y axis**: vertical centroidal axis (bending about y uses the width)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition
//! - AISC Steel Construction Manual, 15th Edition

pub mod registry;
pub mod section;

pub use registry::{equations_for, generate_equations_markdown, CodeReference, EquationMetadata, SectionProperty};
