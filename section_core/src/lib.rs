//! # section_core - Cross-Section Property Engine
//!
//! `section_core` computes the geometric properties of seven standard
//! beam/column cross-sections (area, centroid, second moments of area,
//! elastic and plastic section moduli, radii of gyration) from user-entered
//! dimensions, and keeps a session of saved results that can be exported
//! to CSV.
//!
//! ## Design Philosophy
//!
//! - **Never fails**: incomplete or inconsistent input yields the all-zero result
//! - **JSON-First**: shapes, parameters, results and errors implement Serialize
//! - **Rich Errors**: [`try_compute`] says why an input set was rejected
//! - **One formatter**: screen and CSV show identical 3-significant-figure values
//!
//! ## Quick Start
//!
//! ```rust
//! use section_core::{compute, format_value, ParameterSet, ShapeKind};
//!
//! let shape: ShapeKind = "circularHollow".parse().unwrap();
//! let params = ParameterSet::new().with("r_o", 50.0).with("r_i", 40.0);
//!
//! let result = compute(shape, &params);
//! assert_eq!(format_value(result.area_mm2), "2.83e+3");
//! ```
//!
//! ## Modules
//!
//! - [`shapes`] - Shape catalogue and parameter schemas
//! - [`parameters`] - Parameter sets and permissive number parsing
//! - [`calculations`] - The section property engine
//! - [`equations`] - Formula functions and display equations
//! - [`format`] - Value formatting for display and export
//! - [`session`] - Session state and saved results
//! - [`export`] - CSV export
//! - [`file_io`] - Atomic export writes
//! - [`units`] - Unit dimensions of result values
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod export;
pub mod file_io;
pub mod format;
pub mod parameters;
pub mod session;
pub mod shapes;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute, try_compute, ResultField, SectionResult};
pub use errors::{CalcError, CalcResult};
pub use export::CsvExport;
pub use format::format_value;
pub use parameters::ParameterSet;
pub use session::{SavedResult, Session, SessionSettings};
pub use shapes::ShapeKind;
