//! # Section Property Engine
//!
//! Computes the eleven geometric properties of a cross-section from its
//! shape and dimensions.
//!
//! ## Input Validation
//!
//! The engine never fails. It is driven from a live-edited form, so every
//! incomplete or inconsistent input set produces the all-zero
//! [`SectionResult::default`] instead of an error:
//!
//! - any required dimension missing, zero, negative, or not a finite number;
//! - a hollow section whose inner dimension is not strictly smaller than the
//!   outer one (`r_i < r_o`, `a_i < a_o`, `b_i < b_o` and `h_i < h_o`).
//!
//! The I section has no geometric check beyond positive dimensions; its
//! formulas are evaluated as entered.
//!
//! A dimension of exactly zero therefore reads the same as one that has not
//! been entered yet. [`try_compute`] reports which rule rejected the input.
//!
//! ## Centroid Convention
//!
//! `xc`/`yc` are measured from the section's extreme edge: half the outer
//! width/height, or the outer radius for circular sections.
//!
//! ## Example
//!
//! ```rust
//! use section_core::calculations::section_properties::compute;
//! use section_core::parameters::ParameterSet;
//! use section_core::shapes::ShapeKind;
//!
//! let params = ParameterSet::new().with("b", 50.0).with("h", 100.0);
//! let result = compute(ShapeKind::SolidRectangle, &params);
//! assert_eq!(result.area_mm2, 5000.0);
//!
//! // Incomplete input degrades to zero
//! let partial = ParameterSet::new().with("b", 50.0);
//! assert!(compute(ShapeKind::SolidRectangle, &partial).is_zero());
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::section::*;
use crate::errors::{CalcError, CalcResult};
use crate::parameters::ParameterSet;
use crate::shapes::ShapeKind;
use crate::units::UnitDimension;

// ============================================================================
// Result
// ============================================================================

/// Geometric properties of one cross-section. All lengths in mm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionResult {
    /// Cross-sectional area A (mm²)
    pub area_mm2: f64,
    /// Centroid x coordinate from the left edge (mm)
    pub centroid_x_mm: f64,
    /// Centroid y coordinate from the bottom edge (mm)
    pub centroid_y_mm: f64,
    /// Second moment of area about x, Ix (mm⁴)
    pub ix_mm4: f64,
    /// Second moment of area about y, Iy (mm⁴)
    pub iy_mm4: f64,
    /// Elastic section modulus about x, Zx (mm³)
    pub zx_mm3: f64,
    /// Elastic section modulus about y, Zy (mm³)
    pub zy_mm3: f64,
    /// Plastic section modulus about x, Sx (mm³)
    pub sx_mm3: f64,
    /// Plastic section modulus about y, Sy (mm³)
    pub sy_mm3: f64,
    /// Radius of gyration about x, rx (mm)
    pub rx_mm: f64,
    /// Radius of gyration about y, ry (mm)
    pub ry_mm: f64,
}

impl SectionResult {
    /// True for the all-zero default (incomplete or invalid input)
    pub fn is_zero(&self) -> bool {
        *self == SectionResult::default()
    }

    /// Value of one field
    pub fn get(&self, field: ResultField) -> f64 {
        match field {
            ResultField::Area => self.area_mm2,
            ResultField::CentroidX => self.centroid_x_mm,
            ResultField::CentroidY => self.centroid_y_mm,
            ResultField::Ix => self.ix_mm4,
            ResultField::Iy => self.iy_mm4,
            ResultField::Zx => self.zx_mm3,
            ResultField::Zy => self.zy_mm3,
            ResultField::Sx => self.sx_mm3,
            ResultField::Sy => self.sy_mm3,
            ResultField::Rx => self.rx_mm,
            ResultField::Ry => self.ry_mm,
        }
    }

    /// All eleven values in display/export order
    pub fn values(&self) -> [(ResultField, f64); 11] {
        ResultField::ALL.map(|field| (field, self.get(field)))
    }
}

/// Identifies one of the eleven result fields, for ordered rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultField {
    Area,
    CentroidX,
    CentroidY,
    Ix,
    Iy,
    Zx,
    Zy,
    Sx,
    Sy,
    Rx,
    Ry,
}

impl ResultField {
    /// Display and export order
    pub const ALL: [ResultField; 11] = [
        ResultField::Area,
        ResultField::CentroidX,
        ResultField::CentroidY,
        ResultField::Ix,
        ResultField::Iy,
        ResultField::Zx,
        ResultField::Zy,
        ResultField::Sx,
        ResultField::Sy,
        ResultField::Rx,
        ResultField::Ry,
    ];

    /// Short symbol (A, xc, Ix, ...)
    pub fn symbol(&self) -> &'static str {
        match self {
            ResultField::Area => "A",
            ResultField::CentroidX => "xc",
            ResultField::CentroidY => "yc",
            ResultField::Ix => "Ix",
            ResultField::Iy => "Iy",
            ResultField::Zx => "Zx",
            ResultField::Zy => "Zy",
            ResultField::Sx => "Sx",
            ResultField::Sy => "Sy",
            ResultField::Rx => "rx",
            ResultField::Ry => "ry",
        }
    }

    /// Long description for result tables
    pub fn description(&self) -> &'static str {
        match self {
            ResultField::Area => "Area",
            ResultField::CentroidX | ResultField::CentroidY => "Centroid",
            ResultField::Ix | ResultField::Iy => "Second Moment of Area",
            ResultField::Zx | ResultField::Zy => "Elastic Section Modulus",
            ResultField::Sx | ResultField::Sy => "Plastic Section Modulus",
            ResultField::Rx | ResultField::Ry => "Radius of Gyration",
        }
    }

    pub fn unit(&self) -> UnitDimension {
        match self {
            ResultField::Area => UnitDimension::Area,
            ResultField::Ix | ResultField::Iy => UnitDimension::SecondMoment,
            ResultField::Zx | ResultField::Zy | ResultField::Sx | ResultField::Sy => UnitDimension::SectionModulus,
            ResultField::CentroidX | ResultField::CentroidY | ResultField::Rx | ResultField::Ry => UnitDimension::Length,
        }
    }

    /// CSV column header, e.g. "Ix (mm⁴)"
    pub fn csv_header(&self) -> String {
        match self {
            ResultField::Area => format!("Area ({})", self.unit()),
            ResultField::CentroidX => format!("Centroid x ({})", self.unit()),
            ResultField::CentroidY => format!("Centroid y ({})", self.unit()),
            _ => format!("{} ({})", self.symbol(), self.unit()),
        }
    }
}

// ============================================================================
// Validated Dimensions
// ============================================================================

/// Validated dimensions of one section, one variant per shape.
///
/// Constructing a value through [`SectionDimensions::from_parameters`]
/// guarantees every dimension is finite and positive and the shape's
/// geometric constraints hold, so [`SectionDimensions::properties`] can
/// evaluate formulas without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "camelCase")]
pub enum SectionDimensions {
    SolidCircle { r: f64 },
    CircularHollow { r_o: f64, r_i: f64 },
    SolidSquare { a: f64 },
    SquareHollow { a_o: f64, a_i: f64 },
    SolidRectangle { b: f64, h: f64 },
    RectangleHollow { b_o: f64, h_o: f64, b_i: f64, h_i: f64 },
    ISection { b_f: f64, t_f: f64, t_w: f64, depth: f64, d_1: f64 },
}

impl SectionDimensions {
    /// Validate `params` against `shape`'s schema and geometry rules.
    pub fn from_parameters(shape: ShapeKind, params: &ParameterSet) -> CalcResult<Self> {
        let dim = |symbol: &str| required_dimension(params, symbol);

        let dims = match shape {
            ShapeKind::SolidCircle => SectionDimensions::SolidCircle { r: dim("r")? },
            ShapeKind::CircularHollow => SectionDimensions::CircularHollow {
                r_o: dim("r_o")?,
                r_i: dim("r_i")?,
            },
            ShapeKind::SolidSquare => SectionDimensions::SolidSquare { a: dim("a")? },
            ShapeKind::SquareHollow => SectionDimensions::SquareHollow {
                a_o: dim("a_o")?,
                a_i: dim("a_i")?,
            },
            ShapeKind::SolidRectangle => SectionDimensions::SolidRectangle {
                b: dim("b")?,
                h: dim("h")?,
            },
            ShapeKind::RectangleHollow => SectionDimensions::RectangleHollow {
                b_o: dim("b_o")?,
                h_o: dim("h_o")?,
                b_i: dim("b_i")?,
                h_i: dim("h_i")?,
            },
            ShapeKind::ISection => SectionDimensions::ISection {
                b_f: dim("b_f")?,
                t_f: dim("t_f")?,
                t_w: dim("t_w")?,
                depth: dim("D")?,
                d_1: dim("d_1")?,
            },
        };

        dims.check_geometry()?;
        Ok(dims)
    }

    /// Shape these dimensions describe
    pub fn shape(&self) -> ShapeKind {
        match self {
            SectionDimensions::SolidCircle { .. } => ShapeKind::SolidCircle,
            SectionDimensions::CircularHollow { .. } => ShapeKind::CircularHollow,
            SectionDimensions::SolidSquare { .. } => ShapeKind::SolidSquare,
            SectionDimensions::SquareHollow { .. } => ShapeKind::SquareHollow,
            SectionDimensions::SolidRectangle { .. } => ShapeKind::SolidRectangle,
            SectionDimensions::RectangleHollow { .. } => ShapeKind::RectangleHollow,
            SectionDimensions::ISection { .. } => ShapeKind::ISection,
        }
    }

    /// Inner boundary strictly inside the outer one. Solid shapes and the
    /// I section have nothing to check.
    fn check_geometry(&self) -> CalcResult<()> {
        if !self.shape().is_hollow() {
            return Ok(());
        }

        let shape = self.shape().display_name();
        match *self {
            SectionDimensions::CircularHollow { r_o, r_i } if r_i >= r_o => Err(CalcError::invalid_geometry(
                shape,
                format!("inner radius r_i ({}) must be smaller than outer radius r_o ({})", r_i, r_o),
            )),
            SectionDimensions::SquareHollow { a_o, a_i } if a_i >= a_o => Err(CalcError::invalid_geometry(
                shape,
                format!("inner width a_i ({}) must be smaller than outer width a_o ({})", a_i, a_o),
            )),
            SectionDimensions::RectangleHollow { b_o, b_i, .. } if b_i >= b_o => Err(CalcError::invalid_geometry(
                shape,
                format!("inner width b_i ({}) must be smaller than outer width b_o ({})", b_i, b_o),
            )),
            SectionDimensions::RectangleHollow { h_o, h_i, .. } if h_i >= h_o => Err(CalcError::invalid_geometry(
                shape,
                format!("inner height h_i ({}) must be smaller than outer height h_o ({})", h_i, h_o),
            )),
            _ => Ok(()),
        }
    }

    /// Evaluate the shape's closed-form formulas.
    pub fn properties(&self) -> SectionResult {
        match *self {
            SectionDimensions::SolidCircle { r } => {
                let i = circle_moment_of_inertia(r);
                let z = circle_section_modulus(r);
                let s = circle_plastic_modulus(r);
                let rg = circle_radius_of_gyration(r);
                SectionResult {
                    area_mm2: circle_area(r),
                    centroid_x_mm: r,
                    centroid_y_mm: r,
                    ix_mm4: i,
                    iy_mm4: i,
                    zx_mm3: z,
                    zy_mm3: z,
                    sx_mm3: s,
                    sy_mm3: s,
                    rx_mm: rg,
                    ry_mm: rg,
                }
            }
            SectionDimensions::CircularHollow { r_o, r_i } => {
                let i = annulus_moment_of_inertia(r_o, r_i);
                let z = elastic_modulus(i, r_o);
                let s = annulus_plastic_modulus(r_o, r_i);
                let rg = annulus_radius_of_gyration(r_o, r_i);
                SectionResult {
                    area_mm2: annulus_area(r_o, r_i),
                    centroid_x_mm: r_o,
                    centroid_y_mm: r_o,
                    ix_mm4: i,
                    iy_mm4: i,
                    zx_mm3: z,
                    zy_mm3: z,
                    sx_mm3: s,
                    sy_mm3: s,
                    rx_mm: rg,
                    ry_mm: rg,
                }
            }
            SectionDimensions::SolidSquare { a } => {
                let i = rectangular_moment_of_inertia(a, a);
                let z = rectangular_section_modulus(a, a);
                let s = rectangular_plastic_modulus(a, a);
                let rg = rectangular_radius_of_gyration(a);
                SectionResult {
                    area_mm2: rectangular_area(a, a),
                    centroid_x_mm: a / 2.0,
                    centroid_y_mm: a / 2.0,
                    ix_mm4: i,
                    iy_mm4: i,
                    zx_mm3: z,
                    zy_mm3: z,
                    sx_mm3: s,
                    sy_mm3: s,
                    rx_mm: rg,
                    ry_mm: rg,
                }
            }
            SectionDimensions::SquareHollow { a_o, a_i } => {
                let area = hollow_rectangular_area(a_o, a_o, a_i, a_i);
                let i = hollow_rectangular_moment_of_inertia(a_o, a_o, a_i, a_i);
                let z = elastic_modulus(i, a_o / 2.0);
                let s = hollow_rectangular_plastic_modulus(a_o, a_o, a_i, a_i);
                let rg = radius_of_gyration(i, area);
                SectionResult {
                    area_mm2: area,
                    centroid_x_mm: a_o / 2.0,
                    centroid_y_mm: a_o / 2.0,
                    ix_mm4: i,
                    iy_mm4: i,
                    zx_mm3: z,
                    zy_mm3: z,
                    sx_mm3: s,
                    sy_mm3: s,
                    rx_mm: rg,
                    ry_mm: rg,
                }
            }
            SectionDimensions::SolidRectangle { b, h } => SectionResult {
                area_mm2: rectangular_area(b, h),
                centroid_x_mm: b / 2.0,
                centroid_y_mm: h / 2.0,
                ix_mm4: rectangular_moment_of_inertia(b, h),
                iy_mm4: rectangular_moment_of_inertia(h, b),
                zx_mm3: rectangular_section_modulus(b, h),
                zy_mm3: rectangular_section_modulus(h, b),
                sx_mm3: rectangular_plastic_modulus(b, h),
                sy_mm3: rectangular_plastic_modulus(h, b),
                rx_mm: rectangular_radius_of_gyration(h),
                ry_mm: rectangular_radius_of_gyration(b),
            },
            SectionDimensions::RectangleHollow { b_o, h_o, b_i, h_i } => {
                let area = hollow_rectangular_area(b_o, h_o, b_i, h_i);
                let ix = hollow_rectangular_moment_of_inertia(b_o, h_o, b_i, h_i);
                let iy = hollow_rectangular_moment_of_inertia(h_o, b_o, h_i, b_i);
                SectionResult {
                    area_mm2: area,
                    centroid_x_mm: b_o / 2.0,
                    centroid_y_mm: h_o / 2.0,
                    ix_mm4: ix,
                    iy_mm4: iy,
                    zx_mm3: elastic_modulus(ix, h_o / 2.0),
                    zy_mm3: elastic_modulus(iy, b_o / 2.0),
                    sx_mm3: hollow_rectangular_plastic_modulus(b_o, h_o, b_i, h_i),
                    sy_mm3: hollow_rectangular_plastic_modulus(h_o, b_o, h_i, b_i),
                    rx_mm: radius_of_gyration(ix, area),
                    ry_mm: radius_of_gyration(iy, area),
                }
            }
            SectionDimensions::ISection { b_f, t_f, t_w, depth, d_1 } => {
                let area = i_section_area(b_f, t_f, t_w, d_1);
                let ix = i_section_moment_of_inertia_x(b_f, t_w, depth, d_1);
                let iy = i_section_moment_of_inertia_y(b_f, t_f, t_w, d_1);
                SectionResult {
                    area_mm2: area,
                    centroid_x_mm: b_f / 2.0,
                    centroid_y_mm: depth / 2.0,
                    ix_mm4: ix,
                    iy_mm4: iy,
                    zx_mm3: elastic_modulus(ix, depth / 2.0),
                    zy_mm3: elastic_modulus(iy, b_f / 2.0),
                    sx_mm3: i_section_plastic_modulus_x(b_f, t_f, t_w, depth, d_1),
                    sy_mm3: i_section_plastic_modulus_y(b_f, t_f, t_w, d_1),
                    rx_mm: radius_of_gyration(ix, area),
                    ry_mm: radius_of_gyration(iy, area),
                }
            }
        }
    }
}

/// Fetch one schema dimension and require it to be finite and positive.
fn required_dimension(params: &ParameterSet, symbol: &str) -> CalcResult<f64> {
    let value = params.get(symbol).ok_or_else(|| CalcError::missing_field(symbol))?;

    if !value.is_finite() {
        return Err(CalcError::invalid_input(symbol, value.to_string(), "must be a finite number"));
    }
    if value == 0.0 {
        // Indistinguishable from a field the user has not filled in yet
        return Err(CalcError::missing_field(symbol));
    }
    if value < 0.0 {
        return Err(CalcError::invalid_input(symbol, value.to_string(), "must be greater than zero"));
    }
    Ok(value)
}

// ============================================================================
// Engine Entry Points
// ============================================================================

/// Compute section properties, reporting why invalid input was rejected.
pub fn try_compute(shape: ShapeKind, params: &ParameterSet) -> CalcResult<SectionResult> {
    SectionDimensions::from_parameters(shape, params).map(|dims| dims.properties())
}

/// Compute section properties.
///
/// Missing, zero, non-finite or geometrically inconsistent input yields the
/// all-zero default result. Pure and deterministic.
pub fn compute(shape: ShapeKind, params: &ParameterSet) -> SectionResult {
    match try_compute(shape, params) {
        Ok(result) => result,
        Err(e) => {
            log::debug!("{} input incomplete or invalid, showing zeros: {}", shape.key(), e);
            SectionResult::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Relative comparison (values span many orders of magnitude)
    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= expected.abs() * 1e-4
    }

    fn params(pairs: &[(&str, f64)]) -> ParameterSet {
        pairs.iter().map(|&(k, v)| (k, v)).collect()
    }

    fn full_params(shape: ShapeKind) -> ParameterSet {
        match shape {
            ShapeKind::SolidCircle => params(&[("r", 10.0)]),
            ShapeKind::CircularHollow => params(&[("r_o", 50.0), ("r_i", 40.0)]),
            ShapeKind::SolidSquare => params(&[("a", 100.0)]),
            ShapeKind::SquareHollow => params(&[("a_o", 100.0), ("a_i", 80.0)]),
            ShapeKind::SolidRectangle => params(&[("b", 50.0), ("h", 100.0)]),
            ShapeKind::RectangleHollow => params(&[("b_o", 100.0), ("h_o", 200.0), ("b_i", 50.0), ("h_i", 100.0)]),
            ShapeKind::ISection => params(&[("b_f", 150.0), ("t_f", 10.0), ("t_w", 6.0), ("D", 300.0), ("d_1", 280.0)]),
        }
    }

    #[test]
    fn test_every_shape_computes_nonzero_with_full_input() {
        for shape in ShapeKind::ALL {
            let result = compute(shape, &full_params(shape));
            for (field, value) in result.values() {
                assert!(value > 0.0 && value.is_finite(), "{} {:?} = {}", shape.key(), field, value);
            }
        }
    }

    #[test]
    fn test_missing_parameter_gives_zero_for_every_shape() {
        for shape in ShapeKind::ALL {
            for spec in shape.schema() {
                let partial: ParameterSet = full_params(shape)
                    .iter()
                    .filter(|(symbol, _)| *symbol != spec.symbol)
                    .map(|(symbol, value)| (symbol.to_string(), value))
                    .collect();
                assert!(compute(shape, &partial).is_zero(), "{} without {}", shape.key(), spec.symbol);
                assert_eq!(
                    try_compute(shape, &partial).unwrap_err(),
                    CalcError::missing_field(spec.symbol)
                );
            }
        }
    }

    #[test]
    fn test_zero_parameter_gives_zero_for_every_shape() {
        for shape in ShapeKind::ALL {
            for spec in shape.schema() {
                let mut zeroed = full_params(shape);
                zeroed.insert(spec.symbol, 0.0);
                assert!(compute(shape, &zeroed).is_zero(), "{} with {} = 0", shape.key(), spec.symbol);
            }
        }
    }

    #[test]
    fn test_negative_and_non_finite_rejected() {
        let negative = params(&[("r", -10.0)]);
        assert!(compute(ShapeKind::SolidCircle, &negative).is_zero());
        assert_eq!(
            try_compute(ShapeKind::SolidCircle, &negative).unwrap_err().error_code(),
            "INVALID_INPUT"
        );

        for bad in [f64::NAN, f64::INFINITY] {
            assert!(compute(ShapeKind::SolidSquare, &params(&[("a", bad)])).is_zero());
        }
    }

    #[test]
    fn test_solid_circle_r10() {
        let r = compute(ShapeKind::SolidCircle, &params(&[("r", 10.0)]));
        assert!(close(r.area_mm2, 314.159));
        assert!(close(r.ix_mm4, 7853.98));
        assert_eq!(r.ix_mm4, r.iy_mm4);
        assert!(close(r.zx_mm3, 785.398));
        assert_eq!(r.zx_mm3, r.zy_mm3);
        assert!(close(r.sx_mm3, 1333.33));
        assert_eq!(r.sx_mm3, r.sy_mm3);
        assert_eq!(r.rx_mm, 5.0);
        assert_eq!(r.ry_mm, 5.0);
        // Centroid measured from the extreme edge
        assert_eq!(r.centroid_x_mm, 10.0);
        assert_eq!(r.centroid_y_mm, 10.0);
    }

    #[test]
    fn test_solid_square_a100() {
        let r = compute(ShapeKind::SolidSquare, &params(&[("a", 100.0)]));
        assert_eq!(r.area_mm2, 10_000.0);
        assert!(close(r.ix_mm4, 8_333_333.33));
        assert!(close(r.zx_mm3, 166_666.67));
        assert_eq!(r.sx_mm3, 250_000.0);
        assert_eq!(r.sy_mm3, 250_000.0);
        assert!(close(r.rx_mm, 28.8675));
        assert_eq!(r.centroid_x_mm, 50.0);
    }

    #[test]
    fn test_solid_rectangle_50x100() {
        let r = compute(ShapeKind::SolidRectangle, &params(&[("b", 50.0), ("h", 100.0)]));
        assert_eq!(r.area_mm2, 5000.0);
        assert!(close(r.ix_mm4, 4_166_666.67));
        assert!(close(r.iy_mm4, 1_041_666.67));
        assert!(close(r.zx_mm3, 83_333.33));
        assert!(close(r.zy_mm3, 41_666.67));
        assert_eq!(r.sx_mm3, 125_000.0);
        assert_eq!(r.sy_mm3, 62_500.0);
        assert!(close(r.rx_mm, 28.8675));
        assert!(close(r.ry_mm, 14.4338));
        assert_eq!((r.centroid_x_mm, r.centroid_y_mm), (25.0, 50.0));
    }

    #[test]
    fn test_circular_hollow() {
        let r = compute(ShapeKind::CircularHollow, &params(&[("r_o", 50.0), ("r_i", 40.0)]));
        let i = std::f64::consts::PI * (50f64.powi(4) - 40f64.powi(4)) / 4.0;
        assert!(close(r.area_mm2, std::f64::consts::PI * 900.0));
        assert_eq!(r.ix_mm4, i);
        assert_eq!(r.zx_mm3, i / 50.0);
        assert!(close(r.sx_mm3, 4.0 * (125_000.0 - 64_000.0) / 3.0));
        assert!(close(r.rx_mm, 0.5 * 4100f64.sqrt()));
        assert_eq!(r.centroid_x_mm, 50.0);
    }

    #[test]
    fn test_square_hollow() {
        let r = compute(ShapeKind::SquareHollow, &params(&[("a_o", 100.0), ("a_i", 80.0)]));
        assert_eq!(r.area_mm2, 3600.0);
        let i = (100f64.powi(4) - 80f64.powi(4)) / 12.0;
        assert!(close(r.ix_mm4, i));
        assert!(close(r.zx_mm3, i / 50.0));
        assert!(close(r.sx_mm3, (1_000_000.0 - 512_000.0) / 4.0));
        assert!(close(r.rx_mm, (i / 3600.0).sqrt()));
    }

    #[test]
    fn test_rectangle_hollow_valid_and_inverted() {
        let valid = params(&[("b_o", 100.0), ("h_o", 200.0), ("b_i", 50.0), ("h_i", 100.0)]);
        let r = compute(ShapeKind::RectangleHollow, &valid);
        assert!(!r.is_zero());
        assert_eq!(r.area_mm2, 15_000.0);
        let ix = (100.0 * 200f64.powi(3) - 50.0 * 100f64.powi(3)) / 12.0;
        let iy = (100f64.powi(3) * 200.0 - 50f64.powi(3) * 100.0) / 12.0;
        assert!(close(r.ix_mm4, ix));
        assert!(close(r.iy_mm4, iy));
        assert!(close(r.zx_mm3, ix / 100.0));
        assert!(close(r.zy_mm3, iy / 50.0));
        assert!(close(r.sx_mm3, (100.0 * 40_000.0 - 50.0 * 10_000.0) / 4.0));
        assert!(close(r.sy_mm3, (10_000.0 * 200.0 - 2_500.0 * 100.0) / 4.0));

        let mut inverted = valid.clone();
        inverted.insert("b_i", 150.0);
        assert!(compute(ShapeKind::RectangleHollow, &inverted).is_zero());
        assert_eq!(
            try_compute(ShapeKind::RectangleHollow, &inverted).unwrap_err().error_code(),
            "INVALID_GEOMETRY"
        );

        let mut too_tall = valid;
        too_tall.insert("h_i", 250.0);
        assert!(compute(ShapeKind::RectangleHollow, &too_tall).is_zero());
    }

    #[test]
    fn test_hollow_inner_equal_outer_defaults_without_nan() {
        let cases = [
            (ShapeKind::CircularHollow, params(&[("r_o", 50.0), ("r_i", 50.0)])),
            (ShapeKind::SquareHollow, params(&[("a_o", 80.0), ("a_i", 80.0)])),
            (ShapeKind::RectangleHollow, params(&[("b_o", 100.0), ("h_o", 200.0), ("b_i", 100.0), ("h_i", 100.0)])),
            (ShapeKind::RectangleHollow, params(&[("b_o", 100.0), ("h_o", 200.0), ("b_i", 50.0), ("h_i", 200.0)])),
        ];
        for (shape, p) in cases {
            let result = compute(shape, &p);
            assert!(result.is_zero(), "{}", shape.key());
            assert!(result.values().iter().all(|(_, v)| !v.is_nan()));
        }
    }

    #[test]
    fn test_i_section() {
        let p = params(&[("b_f", 150.0), ("t_f", 10.0), ("t_w", 6.0), ("D", 300.0), ("d_1", 280.0)]);
        let r = compute(ShapeKind::ISection, &p);
        let area = 2.0 * 10.0 * 150.0 + 6.0 * 280.0;
        let ix = (150.0 * 300f64.powi(3) - 150.0 * 280f64.powi(3) + 6.0 * 280f64.powi(3)) / 12.0;
        let iy = (2.0 * 10.0 * 150f64.powi(3) + 280.0 * 6f64.powi(3)) / 12.0;
        assert_eq!(r.area_mm2, area);
        assert!(close(r.ix_mm4, ix));
        assert!(close(r.iy_mm4, iy));
        assert!(close(r.zx_mm3, ix / 150.0));
        assert!(close(r.zy_mm3, iy / 75.0));
        assert!(close(r.sx_mm3, 150.0 * 10.0 * 290.0 + 6.0 * 280f64.powi(2) / 4.0));
        assert!(close(r.sy_mm3, 10.0 * 150f64.powi(2) / 2.0 + 280.0 * 36.0 / 4.0));
        assert!(close(r.rx_mm, (ix / area).sqrt()));
        assert_eq!((r.centroid_x_mm, r.centroid_y_mm), (75.0, 150.0));
    }

    #[test]
    fn test_i_section_clear_distance_equal_to_depth_still_computes() {
        let p = params(&[("b_f", 150.0), ("t_f", 10.0), ("t_w", 6.0), ("D", 300.0), ("d_1", 300.0)]);
        let r = try_compute(ShapeKind::ISection, &p).unwrap();
        assert_eq!(r.area_mm2, 2.0 * 10.0 * 150.0 + 6.0 * 300.0);
        assert!(close(r.ix_mm4, 6.0 * 300f64.powi(3) / 12.0));
        assert!(!r.is_zero());
    }

    #[test]
    fn test_extra_parameters_ignored() {
        let mut p = full_params(ShapeKind::SolidCircle);
        p.insert("a_o", 999.0);
        assert_eq!(
            compute(ShapeKind::SolidCircle, &p),
            compute(ShapeKind::SolidCircle, &full_params(ShapeKind::SolidCircle))
        );
    }

    #[test]
    fn test_deterministic() {
        for shape in ShapeKind::ALL {
            let p = full_params(shape);
            let first = compute(shape, &p);
            let second = compute(shape, &p);
            for ((_, a), (_, b)) in first.values().iter().zip(second.values().iter()) {
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }

    #[test]
    fn test_dimensions_report_shape() {
        for shape in ShapeKind::ALL {
            let dims = SectionDimensions::from_parameters(shape, &full_params(shape)).unwrap();
            assert_eq!(dims.shape(), shape);
        }
    }

    #[test]
    fn test_csv_headers() {
        let headers: Vec<_> = ResultField::ALL.iter().map(|f| f.csv_header()).collect();
        assert_eq!(
            headers.join(","),
            "Area (mm²),Centroid x (mm),Centroid y (mm),Ix (mm⁴),Iy (mm⁴),Zx (mm³),Zy (mm³),Sx (mm³),Sy (mm³),rx (mm),ry (mm)"
        );
    }

    #[test]
    fn test_result_serialization() {
        let r = compute(ShapeKind::SolidRectangle, &params(&[("b", 10.0), ("h", 20.0)]));
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"area_mm2\":200.0"));
        assert!(json.contains("\"sx_mm3\":1000.0"));
        let roundtrip: SectionResult = serde_json::from_str(&json).unwrap();
        for (field, value) in roundtrip.values() {
            assert!(close(value, r.get(field)), "{:?}", field);
        }
    }
}
