//! # Section Calculations
//!
//! The calculation follows the same shape as every engine entry point in
//! this crate:
//!
//! - input: a [`ShapeKind`](crate::shapes::ShapeKind) plus a
//!   [`ParameterSet`](crate::parameters::ParameterSet) (JSON-serializable)
//! - output: a [`SectionResult`] (JSON-serializable)
//! - `compute(shape, params) -> SectionResult` - pure, never fails
//! - `try_compute(shape, params) -> CalcResult<SectionResult>` - same, with the rejection reason
//!
//! ## Available Calculations
//!
//! - [`section_properties`] - Area, centroid, I, Z, S and r for the seven standard shapes

pub mod section_properties;

pub use section_properties::{compute, try_compute, ResultField, SectionDimensions, SectionResult};
