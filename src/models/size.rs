//! CSS sizes: units, the (magnitude, unit) pair and the size string parser.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ComponentError;

/// Grammar accepted by [`parse_size`].
pub const SIZE_PATTERN: &str = r"^(-?\d+(\.\d+)?)(%|px|em|rem|ex|in|cm|mm|pt|pc)?$";

static SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(SIZE_PATTERN).expect("size pattern is a valid regex"));

/// Units a component size can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Pixels,
    Points,
    Picas,
    Em,
    Rem,
    Ex,
    Mm,
    Cm,
    Inch,
    Percentage,
}

impl Unit {
    /// All units, in symbol lookup order.
    pub const ALL: [Unit; 10] = [
        Unit::Pixels,
        Unit::Points,
        Unit::Picas,
        Unit::Em,
        Unit::Rem,
        Unit::Ex,
        Unit::Mm,
        Unit::Cm,
        Unit::Inch,
        Unit::Percentage,
    ];

    /// CSS symbol of the unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Pixels => "px",
            Unit::Points => "pt",
            Unit::Picas => "pc",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Ex => "ex",
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::Inch => "in",
            Unit::Percentage => "%",
        }
    }

    /// Resolve a symbol; `None` or an empty symbol means pixels.
    pub fn from_symbol(symbol: Option<&str>) -> Option<Unit> {
        match symbol {
            None | Some("") => Some(Unit::Pixels),
            Some(s) => Unit::ALL.iter().copied().find(|u| u.symbol() == s),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
}

/// A size along one axis. A negative magnitude means "undefined".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub magnitude: f32,
    pub unit: Unit,
}

impl Size {
    /// The undefined size: (-1, px).
    pub const UNDEFINED: Size = Size {
        magnitude: -1.0,
        unit: Unit::Pixels,
    };

    /// 100%.
    pub const FULL: Size = Size {
        magnitude: 100.0,
        unit: Unit::Percentage,
    };

    /// Create a size. Negative magnitudes collapse to [`Size::UNDEFINED`],
    /// and `-0` becomes `0`.
    pub fn new(magnitude: f32, unit: Unit) -> Self {
        if magnitude < 0.0 {
            Self::UNDEFINED
        } else if magnitude == 0.0 {
            Self {
                magnitude: 0.0,
                unit,
            }
        } else {
            Self { magnitude, unit }
        }
    }

    /// Pixel size shorthand.
    pub fn px(magnitude: f32) -> Self {
        Self::new(magnitude, Unit::Pixels)
    }

    /// Percentage size shorthand.
    pub fn percent(magnitude: f32) -> Self {
        Self::new(magnitude, Unit::Percentage)
    }

    pub fn is_defined(&self) -> bool {
        self.magnitude >= 0.0
    }

    pub fn is_relative(&self) -> bool {
        self.unit == Unit::Percentage
    }

    /// CSS text, e.g. `"100%"` or `"12.5em"`. `None` when undefined.
    pub fn to_css(&self) -> Option<String> {
        self.is_defined()
            .then(|| format!("{}{}", self.magnitude, self.unit.symbol()))
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

/// Parse a CSS size string.
///
/// Absent, empty or blank input yields [`Size::UNDEFINED`]. Negative
/// magnitudes yield [`Size::UNDEFINED`]. Anything not matching
/// [`SIZE_PATTERN`], or too large for an `f32`, is a
/// [`ComponentError::MalformedSize`].
pub fn parse_size(input: Option<&str>) -> Result<Size, ComponentError> {
    let Some(raw) = input else {
        return Ok(Size::UNDEFINED);
    };
    let s = raw.trim();
    if s.is_empty() {
        return Ok(Size::UNDEFINED);
    }

    let malformed = || ComponentError::MalformedSize {
        input: s.to_string(),
        pattern: SIZE_PATTERN,
    };

    let caps = SIZE_RE.captures(s).ok_or_else(malformed)?;
    let magnitude: f32 = caps[1].parse().map_err(|_| malformed())?;
    if !magnitude.is_finite() {
        return Err(malformed());
    }
    if magnitude < 0.0 {
        return Ok(Size::UNDEFINED);
    }
    let unit = Unit::from_symbol(caps.get(3).map(|m| m.as_str())).ok_or_else(malformed)?;

    Ok(Size::new(magnitude, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_absent_are_undefined() {
        assert_eq!(parse_size(None).unwrap(), Size::UNDEFINED);
        assert_eq!(parse_size(Some("")).unwrap(), Size::UNDEFINED);
        assert_eq!(parse_size(Some("   ")).unwrap(), Size::UNDEFINED);
    }

    #[test]
    fn test_percentage() {
        let size = parse_size(Some("100%")).unwrap();
        assert_eq!(size.magnitude, 100.0);
        assert_eq!(size.unit, Unit::Percentage);
    }

    #[test]
    fn test_every_symbol_resolves() {
        for unit in Unit::ALL {
            let text = format!("3{}", unit.symbol());
            assert_eq!(parse_size(Some(&text)).unwrap(), Size::new(3.0, unit));
        }
    }

    #[test]
    fn test_missing_unit_means_pixels() {
        assert_eq!(parse_size(Some(" 42 ")).unwrap(), Size::px(42.0));
        assert_eq!(parse_size(Some("12.5")).unwrap(), Size::px(12.5));
    }

    #[test]
    fn test_negative_normalizes_to_undefined() {
        assert_eq!(parse_size(Some("-1")).unwrap(), Size::UNDEFINED);
        assert_eq!(parse_size(Some("-20%")).unwrap(), Size::UNDEFINED);
        assert_eq!(Size::new(-3.0, Unit::Em), Size::UNDEFINED);
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let size = parse_size(Some("-0")).unwrap();
        assert!(size.is_defined());
        assert_eq!(size.to_css().as_deref(), Some("0px"));
        assert_eq!(
            parse_size(Some("-0.0%")).unwrap().to_css().as_deref(),
            Some("0%")
        );
    }

    #[test]
    fn test_malformed_inputs() {
        for bad in ["abc", "10 px", "10vw", "px", "1.", ".5em", "--1"] {
            let err = parse_size(Some(bad)).unwrap_err();
            match err {
                ComponentError::MalformedSize { input, pattern } => {
                    assert_eq!(input, bad.trim());
                    assert_eq!(pattern, SIZE_PATTERN);
                }
                other => panic!("unexpected error {:?}", other),
            }
        }
    }

    #[test]
    fn test_overflowing_magnitude_is_malformed() {
        let huge = format!("1{}px", "0".repeat(60));
        let err = parse_size(Some(&huge)).unwrap_err();
        assert!(matches!(err, ComponentError::MalformedSize { .. }));
        assert!(parse_size(Some("340282346638528859811704183484516925440.0")).is_ok());
    }

    #[test]
    fn test_css_rendering() {
        assert_eq!(Size::percent(100.0).to_css().as_deref(), Some("100%"));
        assert_eq!(Size::new(12.5, Unit::Em).to_css().as_deref(), Some("12.5em"));
        assert_eq!(Size::px(0.0).to_css().as_deref(), Some("0px"));
        assert_eq!(Size::UNDEFINED.to_css(), None);
    }
}
