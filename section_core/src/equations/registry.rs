//! # Equation Registry
//!
//! Display metadata for the formulas behind every shape: a LaTeX string for
//! math rendering, a plain-text fallback, the code reference, and the
//! function in [`super::section`] that implements it.
//!
//! ## Usage
//!
//! ```rust
//! use section_core::equations::registry::{equations_for, SectionProperty};
//! use section_core::shapes::ShapeKind;
//!
//! let area = equations_for(ShapeKind::SolidCircle)
//!     .into_iter()
//!     .find(|eq| eq.property == SectionProperty::Area)
//!     .unwrap();
//! assert_eq!(area.formula_latex, r"A = \pi r^2");
//! ```

use serde::{Deserialize, Serialize};

use crate::shapes::ShapeKind;

// ============================================================================
// Code References
// ============================================================================

/// Reference to the source of a formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// Roark's Formulas for Stress and Strain
    Roarks { edition: u8, table: &'static str },
    /// AISC Steel Construction Manual
    AiscManual { edition: u8, part: u8 },
    /// Fundamental mechanics (direct integration, no table needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Roarks { edition, table } => {
                format!("Roark's {}ed, {}", edition, table)
            }
            CodeReference::AiscManual { edition, part } => {
                format!("AISC Manual {}th Ed., Part {}", edition, part)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }
}

const ROARKS_A1: CodeReference = CodeReference::Roarks { edition: 8, table: "Table A.1" };
const AISC_PART_17: CodeReference = CodeReference::AiscManual { edition: 15, part: 17 };

// ============================================================================
// Properties
// ============================================================================

/// The property families an equation can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionProperty {
    Area,
    SecondMoment,
    ElasticModulus,
    PlasticModulus,
    RadiusOfGyration,
}

impl SectionProperty {
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionProperty::Area => "Area",
            SectionProperty::SecondMoment => "Second Moment of Area",
            SectionProperty::ElasticModulus => "Elastic Section Modulus",
            SectionProperty::PlasticModulus => "Plastic Section Modulus",
            SectionProperty::RadiusOfGyration => "Radius of Gyration",
        }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// One displayable formula for one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquationMetadata {
    pub shape: ShapeKind,
    pub property: SectionProperty,
    /// LaTeX math (no surrounding delimiters)
    pub formula_latex: &'static str,
    /// Plain text for terminals and markdown
    pub formula_plain: &'static str,
    pub reference: CodeReference,
    /// Function in `equations/section.rs` implementing the formula
    pub source_function: &'static str,
}

fn eq(
    shape: ShapeKind,
    property: SectionProperty,
    formula_latex: &'static str,
    formula_plain: &'static str,
    reference: CodeReference,
    source_function: &'static str,
) -> EquationMetadata {
    EquationMetadata {
        shape,
        property,
        formula_latex,
        formula_plain,
        reference,
        source_function,
    }
}

/// Governing equations for `shape`, in display order
/// (area, second moment, elastic modulus, plastic modulus, radius of gyration).
pub fn equations_for(shape: ShapeKind) -> Vec<EquationMetadata> {
    use SectionProperty::*;

    match shape {
        ShapeKind::SolidCircle => vec![
            eq(shape, Area, r"A = \pi r^2", "A = πr²", ROARKS_A1, "circle_area"),
            eq(shape, SecondMoment, r"I_x = I_y = \pi r^4/4", "Ix = Iy = πr⁴/4", ROARKS_A1, "circle_moment_of_inertia"),
            eq(shape, ElasticModulus, r"Z_x = Z_y = \pi r^3/4", "Zx = Zy = πr³/4", ROARKS_A1, "circle_section_modulus"),
            eq(shape, PlasticModulus, r"S_x = S_y = 4r^3/3", "Sx = Sy = 4r³/3", AISC_PART_17, "circle_plastic_modulus"),
            eq(shape, RadiusOfGyration, r"r_x = r_y = r/2", "rx = ry = r/2", ROARKS_A1, "circle_radius_of_gyration"),
        ],
        ShapeKind::CircularHollow => vec![
            eq(shape, Area, r"A = \pi(r_o^2 - r_i^2)", "A = π(ro² − ri²)", ROARKS_A1, "annulus_area"),
            eq(shape, SecondMoment, r"I_x = I_y = \pi(r_o^4 - r_i^4)/4", "Ix = Iy = π(ro⁴ − ri⁴)/4", ROARKS_A1, "annulus_moment_of_inertia"),
            eq(shape, ElasticModulus, r"Z_x = Z_y = \pi(r_o^4 - r_i^4)/(4r_o)", "Zx = Zy = π(ro⁴ − ri⁴)/(4ro)", ROARKS_A1, "elastic_modulus"),
            eq(shape, PlasticModulus, r"S_x = S_y = 4(r_o^3 - r_i^3)/3", "Sx = Sy = 4(ro³ − ri³)/3", AISC_PART_17, "annulus_plastic_modulus"),
            eq(shape, RadiusOfGyration, r"r_x = r_y = \tfrac{1}{2}\sqrt{r_o^2 + r_i^2}", "rx = ry = ½√(ro² + ri²)", ROARKS_A1, "annulus_radius_of_gyration"),
        ],
        ShapeKind::SolidSquare => vec![
            eq(shape, Area, r"A = a^2", "A = a²", ROARKS_A1, "rectangular_area"),
            eq(shape, SecondMoment, r"I_x = I_y = a^4/12", "Ix = Iy = a⁴/12", ROARKS_A1, "rectangular_moment_of_inertia"),
            eq(shape, ElasticModulus, r"Z_x = Z_y = a^3/6", "Zx = Zy = a³/6", ROARKS_A1, "rectangular_section_modulus"),
            eq(shape, PlasticModulus, r"S_x = S_y = a^3/4", "Sx = Sy = a³/4", AISC_PART_17, "rectangular_plastic_modulus"),
            eq(shape, RadiusOfGyration, r"r_x = r_y = a/(2\sqrt{3})", "rx = ry = a/(2√3)", ROARKS_A1, "rectangular_radius_of_gyration"),
        ],
        ShapeKind::SquareHollow => vec![
            eq(shape, Area, r"A = a_o^2 - a_i^2", "A = ao² − ai²", ROARKS_A1, "hollow_rectangular_area"),
            eq(shape, SecondMoment, r"I_x = I_y = (a_o^4 - a_i^4)/12", "Ix = Iy = (ao⁴ − ai⁴)/12", ROARKS_A1, "hollow_rectangular_moment_of_inertia"),
            eq(shape, ElasticModulus, r"Z_x = Z_y = (a_o^4 - a_i^4)/(6a_o)", "Zx = Zy = (ao⁴ − ai⁴)/(6ao)", ROARKS_A1, "elastic_modulus"),
            eq(shape, PlasticModulus, r"S_x = S_y = (a_o^3 - a_i^3)/4", "Sx = Sy = (ao³ − ai³)/4", AISC_PART_17, "hollow_rectangular_plastic_modulus"),
            eq(shape, RadiusOfGyration, r"r_x = r_y = \sqrt{I_x/A}", "rx = ry = √(Ix/A)", CodeReference::Mechanics, "radius_of_gyration"),
        ],
        ShapeKind::SolidRectangle => vec![
            eq(shape, Area, r"A = bh", "A = bh", ROARKS_A1, "rectangular_area"),
            eq(shape, SecondMoment, r"I_x = bh^3/12,\quad I_y = b^3h/12", "Ix = bh³/12, Iy = b³h/12", ROARKS_A1, "rectangular_moment_of_inertia"),
            eq(shape, ElasticModulus, r"Z_x = bh^2/6,\quad Z_y = b^2h/6", "Zx = bh²/6, Zy = b²h/6", ROARKS_A1, "rectangular_section_modulus"),
            eq(shape, PlasticModulus, r"S_x = bh^2/4,\quad S_y = b^2h/4", "Sx = bh²/4, Sy = b²h/4", AISC_PART_17, "rectangular_plastic_modulus"),
            eq(shape, RadiusOfGyration, r"r_x = h/(2\sqrt{3}),\quad r_y = b/(2\sqrt{3})", "rx = h/(2√3), ry = b/(2√3)", ROARKS_A1, "rectangular_radius_of_gyration"),
        ],
        ShapeKind::RectangleHollow => vec![
            eq(shape, Area, r"A = b_oh_o - b_ih_i", "A = bo·ho − bi·hi", ROARKS_A1, "hollow_rectangular_area"),
            eq(shape, SecondMoment, r"I_x = (b_oh_o^3 - b_ih_i^3)/12,\quad I_y = (b_o^3h_o - b_i^3h_i)/12", "Ix = (bo·ho³ − bi·hi³)/12, Iy = (bo³·ho − bi³·hi)/12", ROARKS_A1, "hollow_rectangular_moment_of_inertia"),
            eq(shape, ElasticModulus, r"Z_x = (b_oh_o^3 - b_ih_i^3)/(6h_o),\quad Z_y = (b_o^3h_o - b_i^3h_i)/(6b_o)", "Zx = (bo·ho³ − bi·hi³)/(6ho), Zy = (bo³·ho − bi³·hi)/(6bo)", ROARKS_A1, "elastic_modulus"),
            eq(shape, PlasticModulus, r"S_x = (b_oh_o^2 - b_ih_i^2)/4,\quad S_y = (b_o^2h_o - b_i^2h_i)/4", "Sx = (bo·ho² − bi·hi²)/4, Sy = (bo²·ho − bi²·hi)/4", AISC_PART_17, "hollow_rectangular_plastic_modulus"),
            eq(shape, RadiusOfGyration, r"r_x = \sqrt{I_x/A},\quad r_y = \sqrt{I_y/A}", "rx = √(Ix/A), ry = √(Iy/A)", CodeReference::Mechanics, "radius_of_gyration"),
        ],
        ShapeKind::ISection => vec![
            eq(shape, Area, r"A = 2t_fb_f + t_wd_1", "A = 2·tf·bf + tw·d1", AISC_PART_17, "i_section_area"),
            eq(shape, SecondMoment, r"I_x = (b_fD^3 - b_fd_1^3 + t_wd_1^3)/12,\quad I_y = (2t_fb_f^3 + d_1t_w^3)/12", "Ix = (bf·D³ − bf·d1³ + tw·d1³)/12, Iy = (2·tf·bf³ + d1·tw³)/12", AISC_PART_17, "i_section_moment_of_inertia_x"),
            eq(shape, ElasticModulus, r"Z_x = (b_fD^3 - b_fd_1^3 + t_wd_1^3)/(6D),\quad Z_y = (2t_fb_f^3 + d_1t_w^3)/(6b_f)", "Zx = Ix/(D/2), Zy = Iy/(bf/2)", AISC_PART_17, "elastic_modulus"),
            eq(shape, PlasticModulus, r"S_x = b_ft_f(D-t_f) + t_wd_1^2/4,\quad S_y = t_fb_f^2/2 + d_1t_w^2/4", "Sx = bf·tf·(D − tf) + tw·d1²/4, Sy = tf·bf²/2 + d1·tw²/4", AISC_PART_17, "i_section_plastic_modulus_x"),
            eq(shape, RadiusOfGyration, r"r_x = \sqrt{I_x/A},\quad r_y = \sqrt{I_y/A}", "rx = √(Ix/A), ry = √(Iy/A)", CodeReference::Mechanics, "radius_of_gyration"),
        ],
    }
}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate a markdown reference of every shape's equations.
///
/// Used by `section_cli equations --markdown` to produce a document that can
/// be checked against the references by hand.
pub fn generate_equations_markdown() -> String {
    let mut md = String::new();

    md.push_str("# Section Property Equations\n\n");
    md.push_str("All dimensions in millimetres. Centroid coordinates are measured from the\n");
    md.push_str("section's extreme edge: half the outer dimension, or the outer radius for\n");
    md.push_str("circular sections.\n\n");

    for shape in ShapeKind::ALL {
        md.push_str(&format!("## {} (`{}`)\n\n", shape.display_name(), shape.key()));

        md.push_str("| Symbol | Parameter |\n|---|---|\n");
        for spec in shape.schema() {
            md.push_str(&format!("| `{}` | {} |\n", spec.symbol, spec.label));
        }
        md.push('\n');

        md.push_str("| Property | Formula | Reference |\n|---|---|---|\n");
        for equation in equations_for(shape) {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                equation.property.display_name(),
                equation.formula_plain,
                equation.reference.citation()
            ));
        }
        md.push('\n');
    }

    md
}
