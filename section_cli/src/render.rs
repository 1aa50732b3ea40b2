//! Plain-text rendering for terminal output.
//!
//! Every function returns a `String` so output can be tested without a
//! terminal. Numbers always go through [`format_value`].

use std::fmt::Write;

use section_core::calculations::{ResultField, SectionResult};
use section_core::equations::equations_for;
use section_core::export::parameters_cell;
use section_core::format::format_value;
use section_core::session::{SavedResult, Session};
use section_core::shapes::ShapeKind;

const RULE: &str = "═══════════════════════════════════════════════════";

/// Save time in the saved-results list
const SAVED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

fn banner(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  {}", title);
    let _ = writeln!(out, "{}", RULE);
}

/// Eleven-row results table.
pub fn result_table(shape: ShapeKind, result: &SectionResult) -> String {
    let mut out = String::new();
    banner(&mut out, &format!("SECTION PROPERTIES: {}", shape.display_name()));

    for (field, value) in result.values() {
        let _ = writeln!(
            out,
            "  {:<24} {:<3} = {:>10} {}",
            field.description(),
            field.symbol(),
            format_value(value),
            field.unit()
        );
    }
    out
}

/// Current shape with the text entered for each of its parameters.
pub fn session_inputs(session: &Session) -> String {
    let shape = session.shape();
    let mut out = String::new();
    let _ = writeln!(out, "Shape: {} ({})", shape.display_name(), shape.key());

    for spec in shape.schema() {
        let entered = session.input(spec.symbol).unwrap_or("-");
        let _ = writeln!(out, "  {:<4} {:<18} {}", spec.symbol, spec.label, entered);
    }
    out
}

/// Saved results, one line each, in save order.
///
/// Columns: A, Ix, Iy, Zx, Zy, save time, then the parameter cell, which
/// is left last because its width varies by shape.
pub fn saved_list(saved: &[SavedResult]) -> String {
    if saved.is_empty() {
        return "No saved results.\n".to_string();
    }

    const COLUMNS: [ResultField; 5] = [
        ResultField::Area,
        ResultField::Ix,
        ResultField::Iy,
        ResultField::Zx,
        ResultField::Zy,
    ];

    let mut out = String::new();
    let _ = write!(out, "{:>3}  {:<16}", "#", "Shape");
    for field in COLUMNS {
        let _ = write!(out, " {:>10}", format!("{} ({})", field.symbol(), field.unit()));
    }
    let _ = writeln!(out, "  {:<23}  {}", "Timestamp", "Parameters");

    for (index, entry) in saved.iter().enumerate() {
        let _ = write!(out, "{:>3}  {:<16}", index + 1, entry.shape.key());
        for field in COLUMNS {
            let _ = write!(out, " {:>10}", format_value(entry.result.get(field)));
        }
        let _ = writeln!(
            out,
            "  {:<23}  {}",
            entry.created.format(SAVED_AT_FORMAT).to_string(),
            parameters_cell(entry)
        );
    }
    out
}

/// Every shape with its key and parameter schema.
pub fn shapes_listing() -> String {
    let mut out = String::new();
    for shape in ShapeKind::ALL {
        let _ = writeln!(out, "{:<16} {}", shape.key(), shape.display_name());
        for spec in shape.schema() {
            let _ = writeln!(out, "    {:<4} {:<18} {}", spec.symbol, spec.label, spec.help);
        }
    }
    out
}

/// Governing equations for one shape, plain text.
pub fn equations_listing(shape: ShapeKind) -> String {
    let mut out = String::new();
    banner(&mut out, &format!("EQUATIONS: {}", shape.display_name()));

    for equation in equations_for(shape) {
        let _ = writeln!(out, "  {}", equation.property.display_name());
        let _ = writeln!(out, "      {}", equation.formula_plain);
        let _ = writeln!(out, "      [{}]", equation.reference.citation());
    }
    out
}
