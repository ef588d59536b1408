//! Non-fatal conditions observed while planning or nesting.

use std::fmt;

use crate::stock::StockKey;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A condition worth reporting that does not change the numeric output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Diagnostic {
    /// The part's stock key matches no catalog entry; it was left out of the plan.
    UnmatchedStock {
        /// Part name.
        part: String,
        /// The key that found no sheet.
        stock_key: StockKey,
        /// Units excluded.
        quantity: usize,
    },

    /// Not a single unit fits the sheet; capacity was clamped to one per sheet.
    CapacityClamped {
        /// Part name.
        part: String,
        /// Sheet the part targets.
        stock_key: StockKey,
    },

    /// A unit larger than the usable sheet area was drawn clipped on its own sheet.
    PlacementClipped {
        /// Part name.
        part: String,
        /// 1-based sheet index of the clipped placement.
        sheet_index: usize,
    },
}

impl Diagnostic {
    /// Emits the diagnostic at warn level.
    pub fn log(&self) {
        log::warn!("{}", self);
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedStock {
                part,
                stock_key,
                quantity,
            } => {
                if stock_key.is_empty() {
                    write!(f, "part '{}' (x{}) has no stock assigned", part, quantity)
                } else {
                    write!(
                        f,
                        "part '{}' (x{}) targets unknown stock '{}'",
                        part, quantity, stock_key
                    )
                }
            }
            Self::CapacityClamped { part, stock_key } => write!(
                f,
                "part '{}' does not fit on '{}'; counting one sheet per unit",
                part, stock_key
            ),
            Self::PlacementClipped { part, sheet_index } => write!(
                f,
                "part '{}' exceeds the usable area and is clipped on sheet {}",
                part, sheet_index
            ),
        }
    }
}
