//! # Section Shapes
//!
//! The seven supported cross-section shapes and the ordered parameter schema
//! each one requires.
//!
//! Every shape has exactly one canonical key (`solidCircle`,
//! `circularHollow`, ...). The same key drives schema lookup, formula
//! dispatch, equation lookup and the CSV "Section Type" column, so there is
//! no second naming scheme to drift out of sync.
//!
//! ## Example
//!
//! ```rust
//! use section_core::shapes::ShapeKind;
//!
//! let shape: ShapeKind = "rectangleHollow".parse().unwrap();
//! let symbols: Vec<_> = shape.schema().iter().map(|p| p.symbol).collect();
//! assert_eq!(symbols, ["b_o", "h_o", "b_i", "h_i"]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Cross-section shape selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    #[default]
    SolidCircle,
    CircularHollow,
    SolidSquare,
    SquareHollow,
    SolidRectangle,
    RectangleHollow,
    ISection,
}

/// One named dimension in a shape's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    /// Symbol used as the parameter key (e.g. "r_o")
    pub symbol: &'static str,
    /// Short label (e.g. "Outer Radius")
    pub label: &'static str,
    /// One-line help text
    pub help: &'static str,
}

impl ParameterSpec {
    pub const fn new(symbol: &'static str, label: &'static str, help: &'static str) -> Self {
        Self { symbol, label, help }
    }
}

/// Ordered list of the dimensions a shape requires.
pub type ParameterSchema = &'static [ParameterSpec];

const SOLID_CIRCLE: ParameterSchema = &[ParameterSpec::new("r", "Radius", "Radius of the circle")];

const CIRCULAR_HOLLOW: ParameterSchema = &[
    ParameterSpec::new("r_o", "Outer Radius", "Outer radius of the hollow section"),
    ParameterSpec::new("r_i", "Inner Radius", "Inner radius of the hollow section"),
];

const SOLID_SQUARE: ParameterSchema = &[ParameterSpec::new("a", "Width", "Width of the square section")];

const SQUARE_HOLLOW: ParameterSchema = &[
    ParameterSpec::new("a_o", "Outer Width", "Outer width of the hollow section"),
    ParameterSpec::new("a_i", "Inner Width", "Inner width of the hollow section"),
];

const SOLID_RECTANGLE: ParameterSchema = &[
    ParameterSpec::new("b", "Width", "Width of the rectangle"),
    ParameterSpec::new("h", "Height", "Height of the rectangle"),
];

const RECTANGLE_HOLLOW: ParameterSchema = &[
    ParameterSpec::new("b_o", "Outer Width", "Outer width of the hollow section"),
    ParameterSpec::new("h_o", "Outer Height", "Outer height of the hollow section"),
    ParameterSpec::new("b_i", "Inner Width", "Inner width of the hollow section"),
    ParameterSpec::new("h_i", "Inner Height", "Inner height of the hollow section"),
];

const I_SECTION: ParameterSchema = &[
    ParameterSpec::new("b_f", "Flange Width", "Width of the flange"),
    ParameterSpec::new("t_f", "Flange Thickness", "Thickness of the flange"),
    ParameterSpec::new("t_w", "Web Thickness", "Thickness of the web"),
    ParameterSpec::new("D", "Overall Depth", "Overall depth of the section"),
    ParameterSpec::new("d_1", "Clear Distance", "Clear distance between flanges"),
];

impl ShapeKind {
    /// All shapes in selector order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::SolidCircle,
        ShapeKind::CircularHollow,
        ShapeKind::SolidSquare,
        ShapeKind::SquareHollow,
        ShapeKind::SolidRectangle,
        ShapeKind::RectangleHollow,
        ShapeKind::ISection,
    ];

    /// Canonical key (matches the serde representation)
    pub fn key(&self) -> &'static str {
        match self {
            ShapeKind::SolidCircle => "solidCircle",
            ShapeKind::CircularHollow => "circularHollow",
            ShapeKind::SolidSquare => "solidSquare",
            ShapeKind::SquareHollow => "squareHollow",
            ShapeKind::SolidRectangle => "solidRectangle",
            ShapeKind::RectangleHollow => "rectangleHollow",
            ShapeKind::ISection => "iSection",
        }
    }

    /// Human-readable name for selectors and reports
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::SolidCircle => "Solid Circle",
            ShapeKind::CircularHollow => "Circular Hollow Section",
            ShapeKind::SolidSquare => "Solid Square",
            ShapeKind::SquareHollow => "SHS with Sharp Edges",
            ShapeKind::SolidRectangle => "Solid Rectangle",
            ShapeKind::RectangleHollow => "RHS with Sharp Edges",
            ShapeKind::ISection => "I Section",
        }
    }

    /// Required parameters, in entry order
    pub fn schema(&self) -> ParameterSchema {
        match self {
            ShapeKind::SolidCircle => SOLID_CIRCLE,
            ShapeKind::CircularHollow => CIRCULAR_HOLLOW,
            ShapeKind::SolidSquare => SOLID_SQUARE,
            ShapeKind::SquareHollow => SQUARE_HOLLOW,
            ShapeKind::SolidRectangle => SOLID_RECTANGLE,
            ShapeKind::RectangleHollow => RECTANGLE_HOLLOW,
            ShapeKind::ISection => I_SECTION,
        }
    }

    /// Look up a parameter of this shape by symbol
    pub fn parameter(&self, symbol: &str) -> Option<&'static ParameterSpec> {
        self.schema().iter().find(|p| p.symbol == symbol)
    }

    /// True for shapes defined as an outer boundary minus an inner one
    pub fn is_hollow(&self) -> bool {
        matches!(
            self,
            ShapeKind::CircularHollow | ShapeKind::SquareHollow | ShapeKind::RectangleHollow
        )
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ShapeKind {
    type Err = CalcError;

    /// Accepts the canonical key in any case, kebab/snake spellings of it,
    /// and the legacy `circularHollowSection` alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        if normalized == "circularhollowsection" {
            return Ok(ShapeKind::CircularHollow);
        }

        ShapeKind::ALL
            .into_iter()
            .find(|shape| shape.key().to_lowercase() == normalized)
            .ok_or_else(|| CalcError::unknown_shape(s.trim()))
    }
}
