//! Nesting diagram output types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cutlist_core::{whole_mm, Diagnostic, StockSheet};

/// Axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Extent along the sheet length.
    pub width: u32,
    /// Extent along the sheet width.
    pub height: u32,
}

impl Rect {
    /// Creates a rectangle.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// True if the interiors of both rectangles overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Where one physical unit of a part lands in the diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementRecord {
    /// 1-based sheet number.
    pub sheet_index: usize,

    /// Part name.
    pub part: String,

    /// Position of the part in the input slice.
    pub part_index: usize,

    /// 0-based copy number within the part's quantity.
    pub unit: usize,

    /// Part length in whole millimetres.
    pub length_mm: i64,

    /// Part width in whole millimetres.
    pub width_mm: i64,

    /// Rectangle in the sheet's usable area (origin just below the header band).
    pub rect: Rect,

    /// True when the sheet is crosswise, so part length runs across the sheet.
    pub rotated: bool,

    /// True when the part exceeds the usable area and the rectangle was clamped.
    pub clipped: bool,
}

impl PlacementRecord {
    /// Caption drawn inside the rectangle, e.g. `door 700x500`.
    pub fn caption(&self) -> String {
        let mut caption = format!("{} {}x{}", self.part, self.length_mm, self.width_mm);
        if self.rotated {
            caption.push_str(" (crosswise)");
        }
        caption
    }
}

/// One sheet outline on the stacked canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetFrame {
    /// 1-based sheet number.
    pub index: usize,

    /// Top edge of the frame on the stacked canvas.
    pub canvas_top: u32,

    /// Header text, e.g. `Sheet 1 (2800x2070)`.
    pub label: String,
}

/// Complete nesting diagram for one stock type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NestingDiagram {
    /// The sheet that was laid out.
    pub stock: StockSheet,

    /// Millimetres per canvas unit.
    pub scale: f64,

    /// Frame width in canvas units.
    pub frame_width: u32,

    /// Frame height in canvas units, header band included.
    pub frame_height: u32,

    /// Height of the header band.
    pub header_height: u32,

    /// Sheet outlines, in order.
    pub sheets: Vec<SheetFrame>,

    /// Placements, in input order.
    pub placements: Vec<PlacementRecord>,

    /// Clipped placements and similar notes.
    pub diagnostics: Vec<Diagnostic>,
}

impl NestingDiagram {
    /// Creates an empty diagram.
    pub fn new(
        stock: StockSheet,
        scale: f64,
        frame_width: u32,
        frame_height: u32,
        header_height: u32,
    ) -> Self {
        Self {
            stock,
            scale,
            frame_width,
            frame_height,
            header_height,
            sheets: Vec::new(),
            placements: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Number of sheets drawn.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Height available to parts below the header band.
    pub fn usable_height(&self) -> u32 {
        self.frame_height.saturating_sub(self.header_height)
    }

    /// Top edge of sheet `index` (1-based) on the stacked canvas.
    ///
    /// Canvas coordinates saturate at `u32::MAX`.
    pub fn canvas_top(&self, index: usize) -> u32 {
        self.stacked(index.saturating_sub(1))
    }

    /// Height of the stacked canvas holding every sheet.
    pub fn canvas_height(&self) -> u32 {
        self.stacked(self.sheets.len())
    }

    fn stacked(&self, sheets: usize) -> u32 {
        let stride = self.frame_height.saturating_add(self.header_height);
        u32::try_from(sheets).map_or(u32::MAX, |n| stride.saturating_mul(n))
    }

    /// Maps a placement into stacked-canvas coordinates.
    pub fn canvas_rect(&self, placement: &PlacementRecord) -> Rect {
        Rect {
            y: placement
                .rect
                .y
                .saturating_add(self.canvas_top(placement.sheet_index))
                .saturating_add(self.header_height),
            ..placement.rect
        }
    }

    /// Placements on one sheet.
    pub fn placements_on(&self, sheet_index: usize) -> impl Iterator<Item = &PlacementRecord> {
        self.placements
            .iter()
            .filter(move |p| p.sheet_index == sheet_index)
    }

    /// Appends a new sheet outline and returns its index.
    pub(crate) fn push_sheet(&mut self) -> usize {
        let index = self.sheets.len() + 1;
        self.sheets.push(SheetFrame {
            index,
            canvas_top: self.canvas_top(index),
            label: format!(
                "Sheet {} ({}x{})",
                index,
                whole_mm(self.stock.length),
                whole_mm(self.stock.width)
            ),
        });
        index
    }
}
