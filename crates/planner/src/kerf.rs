//! Kerf-compensated fit arithmetic.
//!
//! A sheet of extent `S` holds `n` parts of extent `p` separated by `n - 1`
//! saw cuts of width `k` when `n * p + (n - 1) * k <= S`, i.e.
//! `n = floor((S + k) / (p + k))`. Rows and columns are counted
//! independently and multiplied.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cutlist_core::StockSheet;

/// Floored division with the exact-remainder semantics of floating-point
/// `//` in spreadsheet tooling.
///
/// The quotient is derived from `numerator - numerator % denominator`, so a
/// quotient that merely rounds up to an integer is not counted as a full fit.
pub fn floor_div(numerator: f64, denominator: f64) -> f64 {
    let rem = numerator % denominator;
    let mut div = (numerator - rem) / denominator;
    if rem != 0.0 && (denominator < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0;
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

/// Number of parts of `part_extent` fitting along `sheet_extent`.
pub fn fit_count(sheet_extent: f64, part_extent: f64, kerf: f64) -> usize {
    let count = floor_div(sheet_extent + kerf, part_extent + kerf);
    if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    }
}

/// How many units of one part shape fit on one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capacity {
    /// Units along the sheet length.
    pub cols: usize,
    /// Units along the sheet width.
    pub rows: usize,
    /// `max(1, cols * rows)`.
    pub per_sheet: usize,
}

impl Capacity {
    /// True when nothing fits and `per_sheet` was clamped to one.
    pub fn is_clamped(&self) -> bool {
        self.cols.saturating_mul(self.rows) == 0
    }

    /// Sheets needed for `quantity` units: `ceil(quantity / per_sheet)`.
    pub fn sheets_for(&self, quantity: usize) -> usize {
        quantity.div_ceil(self.per_sheet)
    }
}

/// Computes the capacity of `stock` for a part under the sheet's orientation.
///
/// A part larger than the sheet still yields `per_sheet == 1`, so every unit
/// is charged a whole sheet rather than failing.
pub fn capacity(stock: &StockSheet, part_length: f64, part_width: f64, kerf: f64) -> Capacity {
    let (along_length, along_width) = stock.orientation.align(part_length, part_width);
    let cols = fit_count(stock.length, along_length, kerf);
    let rows = fit_count(stock.width, along_width, kerf);
    Capacity {
        cols,
        rows,
        per_sheet: cols.saturating_mul(rows).max(1),
    }
}
