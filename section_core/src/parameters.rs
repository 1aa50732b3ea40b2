//! # Parameter Sets
//!
//! A [`ParameterSet`] maps dimension symbols to numbers for one shape.
//! It is usually built from raw text as typed into an input field, so
//! parsing is permissive: surrounding whitespace is ignored, the longest
//! leading numeric prefix is used (`"12mm"` reads as 12), and anything that
//! does not start with a number reads as 0. A 0 is later treated the same
//! as a missing value by the engine.
//!
//! ## Example
//!
//! ```rust
//! use section_core::parameters::{parse_number, ParameterSet};
//!
//! assert_eq!(parse_number(" 12.5mm"), 12.5);
//! assert_eq!(parse_number("abc"), 0.0);
//!
//! let params = ParameterSet::new().with("b", 50.0).with("h", 100.0);
//! assert_eq!(params.get("h"), Some(100.0));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shapes::ShapeKind;

/// Symbol → value mapping for the dimensions of one section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: BTreeMap<String, f64>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, symbol: impl Into<String>, value: f64) -> Self {
        self.insert(symbol, value);
        self
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, symbol: impl Into<String>, value: f64) {
        self.values.insert(symbol.into(), value);
    }

    /// Value for a symbol, if present.
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.values.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Parse raw input text for the symbols `shape` requires.
    ///
    /// Symbols with no entry stay absent. Symbols outside the schema are
    /// ignored, so text left over from a previously selected shape never
    /// leaks into this set.
    pub fn from_inputs<'a, I>(shape: ShapeKind, inputs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut params = ParameterSet::new();
        for (symbol, text) in inputs {
            if shape.parameter(symbol).is_some() {
                params.insert(symbol, parse_number(text));
            }
        }
        params
    }

    /// Values for `shape`'s schema in schema order; absent symbols are skipped.
    pub fn in_schema_order(&self, shape: ShapeKind) -> Vec<(&'static str, f64)> {
        shape
            .schema()
            .iter()
            .filter_map(|spec| self.get(spec.symbol).map(|v| (spec.symbol, v)))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ParameterSet {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        let mut params = ParameterSet::new();
        for (symbol, value) in iter {
            params.insert(symbol, value);
        }
        params
    }
}

/// Parse user-entered text the way a browser number field is read:
/// longest leading decimal prefix, 0 when there is none.
pub fn parse_number(text: &str) -> f64 {
    leading_number(text).unwrap_or(0.0)
}

/// Longest prefix of `text` (after leading whitespace) that forms a decimal
/// literal: `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        // A bare "e" with no digits is not part of the number
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
