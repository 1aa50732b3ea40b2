//! # Unit Types
//!
//! All section dimensions are entered in millimetres, so every derived
//! property carries a power of millimetres. [`UnitDimension`] names the
//! kind of quantity and supplies the suffix used on screen and in CSV headers.
//!
//! ## Example
//!
//! ```rust
//! use section_core::units::UnitDimension;
//!
//! assert_eq!(UnitDimension::Length.suffix(), "mm");
//! assert_eq!(UnitDimension::SecondMoment.suffix(), "mm⁴");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Power of length carried by a section property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitDimension {
    /// mm (centroid, radius of gyration, input dimensions)
    Length,
    /// mm² (area)
    Area,
    /// mm³ (elastic and plastic section moduli)
    SectionModulus,
    /// mm⁴ (second moment of area)
    SecondMoment,
}

impl UnitDimension {
    /// Unit suffix with a superscript exponent
    pub fn suffix(&self) -> &'static str {
        match self {
            UnitDimension::Length => "mm",
            UnitDimension::Area => "mm²",
            UnitDimension::SectionModulus => "mm³",
            UnitDimension::SecondMoment => "mm⁴",
        }
    }
}

impl fmt::Display for UnitDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes() {
        assert_eq!(UnitDimension::Length.suffix(), "mm");
        assert_eq!(UnitDimension::Area.to_string(), "mm²");
        assert_eq!(UnitDimension::SectionModulus.to_string(), "mm³");
        assert_eq!(UnitDimension::SecondMoment.to_string(), "mm⁴");
    }
}
