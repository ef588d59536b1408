//! Raw measured objects and grouped cutlist parts.

use crate::stock::{Orientation, StockKey};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounds a dimension to two decimals (hundredths of a millimetre).
///
/// Rounding works on the exact decimal expansion of `value` and resolves
/// ties to even, so `700.125` becomes `700.12` while `0.145` (stored just
/// below the tie) becomes `0.14`.
pub fn round_hundredths(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// One physical object as delivered by the part source (a modeller, a
/// spreadsheet import). Dimensions may come in any axis order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawPart {
    /// Object name.
    pub name: String,

    /// Measured extents in millimetres, any order.
    pub dimensions: [f64; 3],

    /// Material assigned to the object; empty if none.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stock_key: StockKey,

    /// Free-text note.
    #[cfg_attr(feature = "serde", serde(default))]
    pub comment: String,

    /// Orientation tag reported alongside the part.
    #[cfg_attr(feature = "serde", serde(default))]
    pub orientation: Orientation,

    /// Collection/group the object belongs to in the source model.
    #[cfg_attr(feature = "serde", serde(default))]
    pub collection: Option<String>,
}

impl RawPart {
    /// Creates a raw part with no stock assignment.
    pub fn new(name: impl Into<String>, dimensions: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            dimensions,
            stock_key: StockKey::default(),
            comment: String::new(),
            orientation: Orientation::default(),
            collection: None,
        }
    }

    /// Assigns the target stock.
    pub fn with_stock_key(mut self, key: impl Into<StockKey>) -> Self {
        self.stock_key = key.into();
        self
    }

    /// Sets the comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Sets the orientation tag.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the source collection name.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Dimensions sorted largest first and rounded to two decimals:
    /// `[length, width, thickness]`.
    pub fn sorted_dimensions(&self) -> [f64; 3] {
        let mut dims = self.dimensions;
        dims.sort_by(|a, b| b.total_cmp(a));
        dims.map(round_hundredths)
    }

    /// Construction helpers named "sketch" are excluded from cutlists by default.
    pub fn is_sketch(&self) -> bool {
        self.name.to_lowercase().contains("sketch")
    }
}

/// A cutlist line: identical objects merged with a summed quantity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Part {
    /// Name of the first object in the group.
    pub name: String,

    /// Largest extent (mm).
    pub length: f64,

    /// Middle extent (mm).
    pub width: f64,

    /// Smallest extent (mm).
    #[cfg_attr(feature = "serde", serde(default))]
    pub thickness: f64,

    /// Number of identical objects.
    pub quantity: usize,

    /// Stock the part must be cut from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stock_key: StockKey,

    /// Free-text note of the first object.
    #[cfg_attr(feature = "serde", serde(default))]
    pub comment: String,

    /// Reported orientation. Planning always uses the sheet's orientation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub orientation: Orientation,

    /// Source collection of the first object.
    #[cfg_attr(feature = "serde", serde(default))]
    pub collection: Option<String>,
}

impl Part {
    /// Creates a single part with the given footprint.
    pub fn new(name: impl Into<String>, length: f64, width: f64) -> Self {
        Self {
            name: name.into(),
            length,
            width,
            thickness: 0.0,
            quantity: 1,
            stock_key: StockKey::default(),
            comment: String::new(),
            orientation: Orientation::default(),
            collection: None,
        }
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the thickness.
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Assigns the target stock.
    pub fn with_stock_key(mut self, key: impl Into<StockKey>) -> Self {
        self.stock_key = key.into();
        self
    }

    /// Sets the comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Sets the reported orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Footprint area of one unit in mm².
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Checks that the footprint is positive and the quantity non-zero.
    pub fn validate(&self) -> Result<()> {
        for (label, value) in [("length", self.length), ("width", self.width)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidPart(format!(
                    "'{}' {} must be positive, got {}",
                    self.name, label, value
                )));
            }
        }
        if self.quantity == 0 {
            return Err(Error::InvalidPart(format!(
                "quantity for '{}' must be at least 1",
                self.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_dimensions() {
        let raw = RawPart::new("side", [18.0, 700.004, 499.996]);
        assert_eq!(raw.sorted_dimensions(), [700.0, 500.0, 18.0]);
    }

    #[test]
    fn test_round_hundredths_ties_to_even() {
        assert_eq!(round_hundredths(700.125), 700.12);
        assert_eq!(round_hundredths(0.375), 0.38);
        // 2.675 is stored as 2.67499999...
        assert_eq!(round_hundredths(2.675), 2.67);
        assert_eq!(round_hundredths(699.999), 700.0);
        assert_eq!(round_hundredths(18.0), 18.0);
    }

    #[test]
    fn test_is_sketch() {
        assert!(RawPart::new("Sketch.001", [1.0, 1.0, 1.0]).is_sketch());
        assert!(RawPart::new("door_SKETCH", [1.0, 1.0, 1.0]).is_sketch());
        assert!(!RawPart::new("door", [1.0, 1.0, 1.0]).is_sketch());
    }

    #[test]
    fn test_part_validation() {
        assert!(Part::new("ok", 700.0, 500.0).validate().is_ok());
        assert!(Part::new("flat", 700.0, 0.0).validate().is_err());
        assert!(Part::new("nan", f64::NAN, 10.0).validate().is_err());
        assert!(Part::new("none", 700.0, 500.0)
            .with_quantity(0)
            .validate()
            .is_err());
    }
}
