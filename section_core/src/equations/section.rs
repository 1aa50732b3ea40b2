//! # Cross-Section Property Formulas
//!
//! Closed-form geometric properties of the supported cross-sections.
//! Each function evaluates one formula and nothing else; validation of the
//! inputs (positive, inner smaller than outer) happens before these are
//! called, in [`crate::calculations::section_properties`].
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Second moment of area about a centroidal axis
//! - `Z` = Elastic section modulus (I/c, c = distance to extreme fiber)
//! - `S` = Plastic section modulus
//! - `r` = Radius of gyration (√(I/A))
//! - `b` = Width (parallel to the bending axis), `h` = height
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1
//! - AISC Steel Construction Manual, Part 17: Properties of Geometric Sections

use std::f64::consts::PI;

/// 2√3, the divisor in r = d/(2√3) for rectangles
fn two_root_three() -> f64 {
    2.0 * 3.0_f64.sqrt()
}

// =============================================================================
// SOLID CIRCLE
// =============================================================================

/// Area of a solid circle
///
/// # Formula
/// A = πr²
///
/// # Example
/// ```rust
/// use section_core::equations::section::circle_area;
///
/// let a = circle_area(10.0);
/// assert!((a - 314.159).abs() < 0.001);
/// ```
#[inline]
pub fn circle_area(r: f64) -> f64 {
    PI * r * r
}

/// Second moment of area of a solid circle about a diameter
///
/// # Formula
/// I = πr⁴/4
#[inline]
pub fn circle_moment_of_inertia(r: f64) -> f64 {
    PI * r.powi(4) / 4.0
}

/// Elastic section modulus of a solid circle
///
/// # Formula
/// Z = I/r = πr³/4
#[inline]
pub fn circle_section_modulus(r: f64) -> f64 {
    PI * r.powi(3) / 4.0
}

/// Plastic section modulus of a solid circle
///
/// # Formula
/// S = 4r³/3
#[inline]
pub fn circle_plastic_modulus(r: f64) -> f64 {
    4.0 * r.powi(3) / 3.0
}

/// Radius of gyration of a solid circle
///
/// # Formula
/// r_g = √(I/A) = r/2
#[inline]
pub fn circle_radius_of_gyration(r: f64) -> f64 {
    r / 2.0
}

// =============================================================================
// CIRCULAR HOLLOW SECTION (ANNULUS)
// =============================================================================

/// Area of a circular hollow section
///
/// ```text
///        .-""-.
///      /  .--.  \
///     |  | r_i|  |  r_o
///      \  '--'  /
///        '-..-'
/// ```
///
/// # Formula
/// A = π(r_o² − r_i²)
#[inline]
pub fn annulus_area(r_o: f64, r_i: f64) -> f64 {
    PI * (r_o * r_o - r_i * r_i)
}

/// Second moment of area of a circular hollow section
///
/// # Formula
/// I = π(r_o⁴ − r_i⁴)/4
#[inline]
pub fn annulus_moment_of_inertia(r_o: f64, r_i: f64) -> f64 {
    PI * (r_o.powi(4) - r_i.powi(4)) / 4.0
}

/// Plastic section modulus of a circular hollow section
///
/// # Formula
/// S = 4(r_o³ − r_i³)/3
#[inline]
pub fn annulus_plastic_modulus(r_o: f64, r_i: f64) -> f64 {
    4.0 * (r_o.powi(3) - r_i.powi(3)) / 3.0
}

/// Radius of gyration of a circular hollow section
///
/// # Formula
/// r = ½√(r_o² + r_i²)
///
/// # Example
/// ```rust
/// use section_core::equations::section::annulus_radius_of_gyration;
///
/// // Degenerates to r/2 for a solid circle
/// assert_eq!(annulus_radius_of_gyration(10.0, 0.0), 5.0);
/// ```
#[inline]
pub fn annulus_radius_of_gyration(r_o: f64, r_i: f64) -> f64 {
    0.5 * (r_o * r_o + r_i * r_i).sqrt()
}

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// Solid rectangle; the solid square is the b = h case
// =============================================================================

/// Calculate cross-sectional area for rectangular section
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × h
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_area;
///
/// let area = rectangular_area(50.0, 100.0);
/// assert_eq!(area, 5000.0);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Second moment of area of a rectangle about the centroidal axis parallel to `b`
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← neutral axis at h/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula (x axis)
/// I_x = bh³/12
///
/// For the y axis swap the arguments: I_y = hb³/12.
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_moment_of_inertia;
///
/// let ix = rectangular_moment_of_inertia(50.0, 100.0);
/// assert!((ix - 4_166_666.667).abs() < 0.01);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Elastic section modulus of a rectangle
///
/// # Formula
/// Z = I/(h/2) = bh²/6
#[inline]
pub fn rectangular_section_modulus(b: f64, h: f64) -> f64 {
    b * h.powi(2) / 6.0
}

/// Plastic section modulus of a rectangle
///
/// Each half of the section has area bh/2 acting at h/4 from the neutral
/// axis, giving S = 2 × (bh/2) × (h/4).
///
/// # Formula
/// S = bh²/4
#[inline]
pub fn rectangular_plastic_modulus(b: f64, h: f64) -> f64 {
    b * h.powi(2) / 4.0
}

/// Radius of gyration of a rectangle about the axis parallel to the other side
///
/// # Formula
/// r = √(I/A) = h/(2√3) ≈ 0.289h
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_radius_of_gyration;
///
/// let r = rectangular_radius_of_gyration(100.0);
/// assert!((r - 28.868).abs() < 0.001);
/// ```
#[inline]
pub fn rectangular_radius_of_gyration(h: f64) -> f64 {
    h / two_root_three()
}

// =============================================================================
// HOLLOW RECTANGULAR SECTION (RHS / SHS, SHARP CORNERS)
// Outer rectangle minus a concentric inner rectangle
// =============================================================================

/// Area of a hollow rectangle
///
/// # Formula
/// A = b_o·h_o − b_i·h_i
#[inline]
pub fn hollow_rectangular_area(b_o: f64, h_o: f64, b_i: f64, h_i: f64) -> f64 {
    b_o * h_o - b_i * h_i
}

/// Second moment of area of a hollow rectangle about the axis parallel to `b`
///
/// # Formula
/// I_x = (b_o·h_o³ − b_i·h_i³)/12
///
/// Swap each pair for the y axis: I_y = (h_o·b_o³ − h_i·b_i³)/12.
#[inline]
pub fn hollow_rectangular_moment_of_inertia(b_o: f64, h_o: f64, b_i: f64, h_i: f64) -> f64 {
    (b_o * h_o.powi(3) - b_i * h_i.powi(3)) / 12.0
}

/// Plastic section modulus of a hollow rectangle
///
/// # Formula
/// S_x = (b_o·h_o² − b_i·h_i²)/4
#[inline]
pub fn hollow_rectangular_plastic_modulus(b_o: f64, h_o: f64, b_i: f64, h_i: f64) -> f64 {
    (b_o * h_o.powi(2) - b_i * h_i.powi(2)) / 4.0
}

// =============================================================================
// I SECTION (DOUBLY SYMMETRIC, SHARP CORNERS)
// =============================================================================

/// Area of an I section
///
/// ```text
///     ┌───────────────┐  ┬ t_f
///     └─────┐   ┌─────┘  ┴
///           │   │        ┬
///           │t_w│        │ d_1       D overall
///           │   │        ┴
///     ┌─────┘   └─────┐
///     └───────────────┘
///            b_f
/// ```
///
/// # Formula
/// A = 2·t_f·b_f + t_w·d_1
#[inline]
pub fn i_section_area(b_f: f64, t_f: f64, t_w: f64, d_1: f64) -> f64 {
    2.0 * t_f * b_f + t_w * d_1
}

/// Strong-axis second moment of area of an I section
///
/// # Formula
/// I_x = (b_f·D³ − b_f·d_1³ + t_w·d_1³)/12
#[inline]
pub fn i_section_moment_of_inertia_x(b_f: f64, t_w: f64, depth: f64, d_1: f64) -> f64 {
    (b_f * depth.powi(3) - b_f * d_1.powi(3) + t_w * d_1.powi(3)) / 12.0
}

/// Weak-axis second moment of area of an I section
///
/// # Formula
/// I_y = (2·t_f·b_f³ + d_1·t_w³)/12
#[inline]
pub fn i_section_moment_of_inertia_y(b_f: f64, t_f: f64, t_w: f64, d_1: f64) -> f64 {
    (2.0 * t_f * b_f.powi(3) + d_1 * t_w.powi(3)) / 12.0
}

/// Strong-axis plastic section modulus of an I section
///
/// # Formula
/// S_x = b_f·t_f·(D − t_f) + t_w·d_1²/4
#[inline]
pub fn i_section_plastic_modulus_x(b_f: f64, t_f: f64, t_w: f64, depth: f64, d_1: f64) -> f64 {
    b_f * t_f * (depth - t_f) + t_w * d_1.powi(2) / 4.0
}

/// Weak-axis plastic section modulus of an I section
///
/// # Formula
/// S_y = t_f·b_f²/2 + d_1·t_w²/4
#[inline]
pub fn i_section_plastic_modulus_y(b_f: f64, t_f: f64, t_w: f64, d_1: f64) -> f64 {
    t_f * b_f.powi(2) / 2.0 + d_1 * t_w.powi(2) / 4.0
}

// =============================================================================
// GENERAL
// =============================================================================

/// Radius of gyration from I and A
///
/// # Formula
/// r = √(I/A)
#[inline]
pub fn radius_of_gyration(i: f64, a: f64) -> f64 {
    (i / a).sqrt()
}

/// Elastic section modulus from I and the distance to the extreme fiber
///
/// # Formula
/// Z = I/c
#[inline]
pub fn elastic_modulus(i: f64, c: f64) -> f64 {
    i / c
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01 || (a - b).abs() / b.abs().max(1.0) < 1e-9
    }

    #[test]
    fn test_circle_r10() {
        assert!(approx_eq(circle_area(10.0), 314.159_265));
        assert!(approx_eq(circle_moment_of_inertia(10.0), 7853.981_634));
        assert!(approx_eq(circle_section_modulus(10.0), 785.398_163));
        assert!(approx_eq(circle_plastic_modulus(10.0), 1333.333_333));
    }

    #[test]
    fn test_circle_modulus_is_i_over_r() {
        let r = 37.5;
        let z = circle_section_modulus(r);
        let z_from_i = elastic_modulus(circle_moment_of_inertia(r), r);
        assert!(approx_eq(z, z_from_i), "Z = {}, I/r = {}", z, z_from_i);
    }

    #[test]
    fn test_annulus_with_zero_bore_matches_circle() {
        assert!(approx_eq(annulus_area(25.0, 0.0), circle_area(25.0)));
        assert!(approx_eq(annulus_moment_of_inertia(25.0, 0.0), circle_moment_of_inertia(25.0)));
        assert!(approx_eq(annulus_plastic_modulus(25.0, 0.0), circle_plastic_modulus(25.0)));
    }

    #[test]
    fn test_annulus_radius_of_gyration_consistent() {
        // r² = I/A = (r_o² + r_i²)/4 for an annulus
        let (r_o, r_i) = (100.0, 60.0);
        let r = annulus_radius_of_gyration(r_o, r_i);
        let r_from_ia = radius_of_gyration(annulus_moment_of_inertia(r_o, r_i), annulus_area(r_o, r_i));
        assert!(approx_eq(r, r_from_ia), "r = {}, √(I/A) = {}", r, r_from_ia);
    }

    #[test]
    fn test_rectangle_50x100() {
        assert_eq!(rectangular_area(50.0, 100.0), 5000.0);
        assert!(approx_eq(rectangular_moment_of_inertia(50.0, 100.0), 4_166_666.667));
        assert!(approx_eq(rectangular_moment_of_inertia(100.0, 50.0), 1_041_666.667));
        assert!(approx_eq(rectangular_section_modulus(50.0, 100.0), 83_333.333));
        assert!(approx_eq(rectangular_plastic_modulus(50.0, 100.0), 125_000.0));
    }

    #[test]
    fn test_rectangle_properties_consistency() {
        // I = A·r² for any rectangle
        let (b, h) = (90.0, 240.0);
        let i = rectangular_moment_of_inertia(b, h);
        let r = rectangular_radius_of_gyration(h);
        assert!(approx_eq(i, rectangular_area(b, h) * r * r));
    }

    #[test]
    fn test_hollow_rectangle_with_no_void_matches_solid() {
        let (b, h) = (100.0, 200.0);
        assert!(approx_eq(hollow_rectangular_area(b, h, 0.0, 0.0), rectangular_area(b, h)));
        assert!(approx_eq(
            hollow_rectangular_moment_of_inertia(b, h, 0.0, 0.0),
            rectangular_moment_of_inertia(b, h)
        ));
        assert!(approx_eq(
            hollow_rectangular_plastic_modulus(b, h, 0.0, 0.0),
            rectangular_plastic_modulus(b, h)
        ));
    }

    #[test]
    fn test_i_section_reduces_to_rectangle_when_web_fills_flange() {
        // t_w = b_f and D = d_1 + 2·t_f makes the I a plain b_f × D rectangle
        let (b_f, t_f, d_1) = (100.0, 20.0, 160.0);
        let depth = d_1 + 2.0 * t_f;
        assert!(approx_eq(i_section_area(b_f, t_f, b_f, d_1), rectangular_area(b_f, depth)));
        assert!(approx_eq(
            i_section_moment_of_inertia_x(b_f, b_f, depth, d_1),
            rectangular_moment_of_inertia(b_f, depth)
        ));
        assert!(approx_eq(
            i_section_moment_of_inertia_y(b_f, t_f, b_f, d_1),
            rectangular_moment_of_inertia(depth, b_f)
        ));
        assert!(approx_eq(
            i_section_plastic_modulus_x(b_f, t_f, b_f, depth, d_1),
            rectangular_plastic_modulus(b_f, depth)
        ));
        assert!(approx_eq(
            i_section_plastic_modulus_y(b_f, t_f, b_f, d_1),
            rectangular_plastic_modulus(depth, b_f)
        ));
    }
}
