//! Result types for sheet count estimation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cutlist_core::{Diagnostic, StockKey, StockSheet};

use crate::kerf::Capacity;

/// Number of sheets of one stock type needed for the cutlist.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetRequirement {
    /// Position of the sheet in the catalog.
    pub stock_index: usize,

    /// The sheet definition.
    pub stock: StockSheet,

    /// Sheets to buy. Always at least 1.
    pub sheets: usize,
}

impl SheetRequirement {
    /// Identity key of the required stock.
    pub fn stock_key(&self) -> StockKey {
        self.stock.key()
    }

    /// Format column, e.g. `2800 x 2070`.
    pub fn format_label(&self) -> String {
        self.stock.format_label()
    }

    /// Total purchased area in mm².
    pub fn area(&self) -> f64 {
        self.stock.area() * self.sheets as f64
    }
}

/// Per-part contribution to a [`SheetRequirement`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartDemand {
    /// Part name.
    pub part: String,

    /// Position of the part in the input slice.
    pub part_index: usize,

    /// Position of the matched sheet in the catalog.
    pub stock_index: usize,

    /// Key of the matched sheet.
    pub stock_key: StockKey,

    /// Units requested.
    pub quantity: usize,

    /// Fit of one sheet for this part.
    pub capacity: Capacity,

    /// `ceil(quantity / capacity.per_sheet)`.
    pub sheets: usize,
}

/// Full output of [`crate::StockPlanner::plan`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StockPlan {
    /// One entry per stock type with a non-zero count, in catalog order.
    pub requirements: Vec<SheetRequirement>,

    /// Per-part breakdown, in catalog order then part order.
    pub demands: Vec<PartDemand>,

    /// Conditions that did not change the counts.
    pub diagnostics: Vec<Diagnostic>,

    /// Kerf the plan was computed with.
    pub kerf: f64,
}

impl StockPlan {
    /// Creates an empty plan.
    pub fn new(kerf: f64) -> Self {
        Self {
            requirements: Vec::new(),
            demands: Vec::new(),
            diagnostics: Vec::new(),
            kerf,
        }
    }

    /// Sum of sheets over all stock types.
    pub fn total_sheets(&self) -> usize {
        self.requirements.iter().map(|r| r.sheets).sum()
    }

    /// Looks up the requirement for a stock key.
    pub fn requirement_for(&self, key: &StockKey) -> Option<&SheetRequirement> {
        self.requirements.iter().find(|r| &r.stock_key() == key)
    }

    /// Returns true if every part found its stock.
    pub fn all_matched(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::UnmatchedStock { .. }))
    }

    /// Units left out because their stock key matched nothing.
    pub fn unmatched_quantity(&self) -> usize {
        self.diagnostics
            .iter()
            .map(|d| match d {
                Diagnostic::UnmatchedStock { quantity, .. } => *quantity,
                _ => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plan() {
        let plan = StockPlan::new(4.0);
        assert_eq!(plan.total_sheets(), 0);
        assert!(plan.all_matched());
        assert_eq!(plan.unmatched_quantity(), 0);
    }

    #[test]
    fn test_totals_and_lookup() {
        let mdf = StockSheet::new("MDF", 2800.0, 2070.0, 19.0);
        let birch = StockSheet::new("Birch", 2500.0, 1250.0, 18.0);
        let mut plan = StockPlan::new(4.0);
        plan.requirements.push(SheetRequirement {
            stock_index: 0,
            stock: mdf.clone(),
            sheets: 2,
        });
        plan.requirements.push(SheetRequirement {
            stock_index: 1,
            stock: birch,
            sheets: 3,
        });
        plan.diagnostics.push(Diagnostic::UnmatchedStock {
            part: "x".into(),
            stock_key: StockKey::default(),
            quantity: 4,
        });

        assert_eq!(plan.total_sheets(), 5);
        assert_eq!(plan.requirement_for(&mdf.key()).map(|r| r.sheets), Some(2));
        assert!(plan.requirement_for(&"Oak".into()).is_none());
        assert!(!plan.all_matched());
        assert_eq!(plan.unmatched_quantity(), 4);
        assert_eq!(plan.requirements[0].format_label(), "2800 x 2070");
        assert_eq!(plan.requirements[0].area(), 2.0 * 2800.0 * 2070.0);
    }
}
