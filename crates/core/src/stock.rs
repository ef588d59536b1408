//! Stock sheet definitions.
//!
//! A [`StockSheet`] is one entry of the catalog of boards that parts are cut
//! from. Its [`StockKey`] doubles as the material name a modeller assigns to
//! the parts that must come from that board.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which part dimension runs along the sheet's length axis.
///
/// Orientation belongs to the sheet (grain direction, decor), never to an
/// individual part. It is applied uniformly to every part cut from the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Part length follows the sheet length.
    #[default]
    #[cfg_attr(
        feature = "serde",
        serde(rename = "LONG", alias = "lengthwise", alias = "Lengthwise")
    )]
    Lengthwise,
    /// Part width follows the sheet length.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "CROSS", alias = "crosswise", alias = "Crosswise")
    )]
    Crosswise,
}

impl Orientation {
    /// Returns true for [`Orientation::Crosswise`].
    pub fn is_crosswise(self) -> bool {
        matches!(self, Self::Crosswise)
    }

    /// Maps part extents onto the sheet axes.
    ///
    /// Returns `(along_sheet_length, along_sheet_width)`.
    pub fn align<T>(self, part_length: T, part_width: T) -> (T, T) {
        match self {
            Self::Lengthwise => (part_length, part_width),
            Self::Crosswise => (part_width, part_length),
        }
    }

    /// Short tag used in preset files and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lengthwise => "LONG",
            Self::Crosswise => "CROSS",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" | "lengthwise" => Ok(Self::Lengthwise),
            "cross" | "crosswise" => Ok(Self::Crosswise),
            other => Err(Error::InvalidConfig(format!(
                "unknown orientation '{}' (expected LONG or CROSS)",
                other
            ))),
        }
    }
}

/// Truncates a dimension toward zero to whole millimetres.
pub fn whole_mm(value: f64) -> i64 {
    value.trunc() as i64
}

/// Identity key of a stock sheet: `{name}_{thickness}mm_{length}x{width}`.
///
/// Dimensions are truncated to whole millimetres, so two catalog entries that
/// differ only below 1 mm share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct StockKey(String);

impl StockKey {
    /// Wraps an existing key, e.g. a material name read from a model.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Builds the key for a sheet with the given name and dimensions.
    pub fn for_sheet(name: &str, length: f64, width: f64, thickness: f64) -> Self {
        Self(format!(
            "{}_{}mm_{}x{}",
            name,
            whole_mm(thickness),
            whole_mm(length),
            whole_mm(width)
        ))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if no stock was assigned.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for StockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for StockKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StockKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for StockKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A rectangular board in the stock catalog. All dimensions in millimetres.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StockSheet {
    /// Display name, also the first component of the [`StockKey`].
    pub name: String,

    /// Extent along the sheet's length axis.
    pub length: f64,

    /// Extent along the sheet's width axis.
    pub width: f64,

    /// Board thickness.
    pub thickness: f64,

    /// Free-text note carried into reports.
    #[cfg_attr(feature = "serde", serde(default))]
    pub comment: String,

    /// Orientation applied to every part cut from this sheet.
    #[cfg_attr(feature = "serde", serde(default))]
    pub orientation: Orientation,
}

impl Default for StockSheet {
    fn default() -> Self {
        Self {
            name: "Sheet".to_string(),
            length: 2800.0,
            width: 2070.0,
            thickness: 18.0,
            comment: String::new(),
            orientation: Orientation::Lengthwise,
        }
    }
}

impl StockSheet {
    /// Creates a lengthwise sheet with the given name and dimensions.
    pub fn new(name: impl Into<String>, length: f64, width: f64, thickness: f64) -> Self {
        Self {
            name: name.into(),
            length,
            width,
            thickness,
            comment: String::new(),
            orientation: Orientation::Lengthwise,
        }
    }

    /// Sets the orientation policy.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Returns the identity key parts must carry to be cut from this sheet.
    pub fn key(&self) -> StockKey {
        StockKey::for_sheet(&self.name, self.length, self.width, self.thickness)
    }

    /// Sheet area in mm².
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Format column used in reports, e.g. `2800 x 2070`.
    pub fn format_label(&self) -> String {
        format!("{} x {}", whole_mm(self.length), whole_mm(self.width))
    }

    /// Checks that the name is set and all dimensions are finite and positive.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidStock("sheet name must not be empty".into()));
        }
        for (label, value) in [
            ("length", self.length),
            ("width", self.width),
            ("thickness", self.thickness),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidStock(format!(
                    "'{}' {} must be positive, got {}",
                    self.name, label, value
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for StockSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}x{}x{}mm",
            self.name,
            whole_mm(self.length),
            whole_mm(self.width),
            whole_mm(self.thickness)
        )
    }
}

/// Finds a sheet by catalog index, exact name or stock key.
pub fn find_stock<'a>(catalog: &'a [StockSheet], selector: &str) -> Result<&'a StockSheet> {
    if let Ok(index) = selector.parse::<usize>() {
        if let Some(sheet) = catalog.get(index) {
            return Ok(sheet);
        }
    }
    catalog
        .iter()
        .find(|s| s.name == selector || s.key().as_str() == selector)
        .ok_or_else(|| Error::StockNotFound(selector.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_truncates_dimensions() {
        let sheet = StockSheet::new("Platte", 2800.9, 2070.2, 18.7);
        assert_eq!(sheet.key().as_str(), "Platte_18mm_2800x2070");
    }

    #[test]
    fn test_orientation_align() {
        assert_eq!(Orientation::Lengthwise.align(700.0, 500.0), (700.0, 500.0));
        assert_eq!(Orientation::Crosswise.align(700.0, 500.0), (500.0, 700.0));
        assert!(Orientation::Crosswise.is_crosswise());
        assert!(!Orientation::Lengthwise.is_crosswise());
    }

    #[test]
    fn test_orientation_from_str() {
        assert_eq!("LONG".parse::<Orientation>().unwrap(), Orientation::Lengthwise);
        assert_eq!("cross".parse::<Orientation>().unwrap(), Orientation::Crosswise);
        assert_eq!(
            " Crosswise ".parse::<Orientation>().unwrap(),
            Orientation::Crosswise
        );
        assert!("diagonal".parse::<Orientation>().is_err());
    }

    #[test]
    fn test_validate() {
        assert!(StockSheet::default().validate().is_ok());
        assert!(StockSheet::new("", 100.0, 100.0, 10.0).validate().is_err());
        assert!(StockSheet::new("A", 0.0, 100.0, 10.0).validate().is_err());
        assert!(StockSheet::new("A", 100.0, f64::NAN, 10.0).validate().is_err());
        assert!(StockSheet::new("A", 100.0, 100.0, -1.0).validate().is_err());
    }

    #[test]
    fn test_labels() {
        let sheet = StockSheet::new("MDF", 2800.0, 2070.0, 19.0);
        assert_eq!(sheet.format_label(), "2800 x 2070");
        assert_eq!(sheet.to_string(), "MDF: 2800x2070x19mm");
    }

    #[test]
    fn test_find_stock() {
        let catalog = vec![
            StockSheet::new("MDF", 2800.0, 2070.0, 19.0),
            StockSheet::new("Birch", 2500.0, 1250.0, 18.0),
        ];
        assert_eq!(find_stock(&catalog, "1").unwrap().name, "Birch");
        assert_eq!(find_stock(&catalog, "MDF").unwrap().name, "MDF");
        assert_eq!(
            find_stock(&catalog, "Birch_18mm_2500x1250").unwrap().name,
            "Birch"
        );
        assert_eq!(
            find_stock(&catalog, "Oak"),
            Err(Error::StockNotFound("Oak".into()))
        );
    }
}
