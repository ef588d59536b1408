//! Canvas geometry for nesting diagrams.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cutlist_core::{Error, Result, StockSheet};

/// Scaled canvas parameters for [`crate::NestingLayout`].
///
/// All values are in canvas units (pixels of the rendered diagram).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutConfig {
    /// Nominal frame width a sheet is scaled to fit.
    pub canvas_width: u32,

    /// Nominal frame height a sheet is scaled to fit.
    pub canvas_height: u32,

    /// Smallest frame width.
    pub min_width: u32,

    /// Smallest frame height.
    pub min_height: u32,

    /// Height of the label band at the top of each frame.
    pub header_height: u32,

    /// Gap between neighbouring parts and between rows.
    pub gutter: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 900,
            canvas_height: 600,
            min_width: 300,
            min_height: 200,
            header_height: 32,
            gutter: 6,
        }
    }
}

impl LayoutConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the nominal canvas size.
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Sets the minimum frame size.
    pub fn with_min_size(mut self, width: u32, height: u32) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    /// Sets the header band height.
    pub fn with_header_height(mut self, height: u32) -> Self {
        self.header_height = height;
        self
    }

    /// Sets the gutter between parts.
    pub fn with_gutter(mut self, gutter: u32) -> Self {
        self.gutter = gutter;
        self
    }

    /// Rejects zero-sized canvases and headers that leave no usable height.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(Error::InvalidConfig("canvas size must be non-zero".into()));
        }
        if self.min_width == 0 || self.min_height == 0 {
            return Err(Error::InvalidConfig("minimum frame size must be non-zero".into()));
        }
        if self.header_height >= self.min_height {
            return Err(Error::InvalidConfig(format!(
                "header height {} leaves no room in a {} high frame",
                self.header_height, self.min_height
            )));
        }
        Ok(())
    }

    /// Millimetres per canvas unit for `stock`.
    ///
    /// The larger of the two canvas ratios makes the sheet fit the nominal
    /// canvas; the minimum-size ratios cap it so small sheets are not drawn
    /// below the minimum frame.
    pub fn display_scale(&self, stock: &StockSheet) -> f64 {
        let fit = (stock.length / f64::from(self.canvas_width))
            .max(stock.width / f64::from(self.canvas_height));
        fit.min(stock.length / f64::from(self.min_width))
            .min(stock.width / f64::from(self.min_height))
    }

    /// Frame size `(width, height)` of one sheet at `scale`, never below the minimum.
    pub fn frame_size(&self, stock: &StockSheet, scale: f64) -> (u32, u32) {
        (
            to_canvas(stock.length, scale).max(self.min_width),
            to_canvas(stock.width, scale).max(self.min_height),
        )
    }
}

/// Converts millimetres to whole canvas units, truncating.
pub fn to_canvas(mm: f64, scale: f64) -> u32 {
    (mm / scale).trunc() as u32
}
