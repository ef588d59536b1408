//! Row-packing layout of parts onto one stock type.

use cutlist_core::{whole_mm, Diagnostic, Part, Result, StockSheet};

use crate::config::{to_canvas, LayoutConfig};
use crate::diagram::{NestingDiagram, PlacementRecord, Rect};

/// States of the packing walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LayoutState {
    PlacingOnCurrentSheet,
    AdvancingRow,
    StartingNewSheet,
    Done,
}

/// One physical unit, already scaled and aligned to the sheet.
#[derive(Debug, Clone)]
struct Unit<'a> {
    part: &'a Part,
    part_index: usize,
    unit: usize,
    length_mm: i64,
    width_mm: i64,
    width: u32,
    height: u32,
}

#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    sheet: usize,
    x: u32,
    y: u32,
    row_height: u32,
    placed: usize,
}

/// Lays parts into rows across as many sheets of one stock type as needed.
///
/// Units are taken strictly in input order. A unit that does not fit the
/// remaining row wraps to a new row; a unit that does not fit below the last
/// row closes the sheet. There is no look-ahead for smaller units and no
/// rotation beyond the sheet's orientation, so the sheet count can exceed the
/// closed-form estimate of the planner.
#[derive(Debug, Clone, Default)]
pub struct NestingLayout {
    config: LayoutConfig,
}

impl NestingLayout {
    /// Creates a layout with the given canvas configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Creates a layout with the default 900 x 600 canvas.
    pub fn default_config() -> Self {
        Self::new(LayoutConfig::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Placements of every unit of `parts` on sheets of `stock`.
    pub fn lay_out(&self, stock: &StockSheet, parts: &[Part]) -> Result<Vec<PlacementRecord>> {
        Ok(self.diagram(stock, parts)?.placements)
    }

    /// Builds the full diagram: frames, placements and diagnostics.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration, the sheet or a part fails
    /// validation.
    pub fn diagram(&self, stock: &StockSheet, parts: &[Part]) -> Result<NestingDiagram> {
        self.config.validate()?;
        stock.validate()?;
        for part in parts {
            part.validate()?;
        }

        let scale = self.config.display_scale(stock);
        let (frame_width, frame_height) = self.config.frame_size(stock, scale);
        let mut diagram = NestingDiagram::new(
            stock.clone(),
            scale,
            frame_width,
            frame_height,
            self.config.header_height,
        );
        let usable_height = diagram.usable_height();
        let rotated = stock.orientation.is_crosswise();
        let gutter = self.config.gutter;

        let units = expand_units(stock, parts, scale);
        let mut cursor = Cursor::default();
        let mut next = 0;
        let mut state = LayoutState::StartingNewSheet;

        while state != LayoutState::Done {
            state = match state {
                LayoutState::StartingNewSheet => {
                    if next >= units.len() {
                        LayoutState::Done
                    } else {
                        cursor = Cursor {
                            sheet: diagram.push_sheet(),
                            ..Cursor::default()
                        };
                        LayoutState::PlacingOnCurrentSheet
                    }
                }
                LayoutState::AdvancingRow => {
                    cursor.x = 0;
                    cursor.y = cursor
                        .y
                        .saturating_add(cursor.row_height)
                        .saturating_add(gutter);
                    cursor.row_height = 0;
                    LayoutState::PlacingOnCurrentSheet
                }
                LayoutState::PlacingOnCurrentSheet => {
                    let Some(unit) = units.get(next) else {
                        break;
                    };

                    if unit.width > frame_width || unit.height > usable_height {
                        if cursor.placed > 0 {
                            LayoutState::StartingNewSheet
                        } else {
                            let rect = Rect::new(
                                0,
                                0,
                                unit.width.min(frame_width),
                                unit.height.min(usable_height),
                            );
                            diagram
                                .placements
                                .push(record(unit, cursor.sheet, rect, rotated, true));
                            diagram.diagnostics.push(Diagnostic::PlacementClipped {
                                part: unit.part.name.clone(),
                                sheet_index: cursor.sheet,
                            });
                            next += 1;
                            LayoutState::StartingNewSheet
                        }
                    } else if !fits(cursor.x, unit.width, frame_width) {
                        LayoutState::AdvancingRow
                    } else if !fits(cursor.y, unit.height, usable_height) {
                        LayoutState::StartingNewSheet
                    } else {
                        let rect = Rect::new(cursor.x, cursor.y, unit.width, unit.height);
                        diagram
                            .placements
                            .push(record(unit, cursor.sheet, rect, rotated, false));
                        cursor.x = cursor.x.saturating_add(unit.width).saturating_add(gutter);
                        cursor.row_height = cursor.row_height.max(unit.height);
                        cursor.placed += 1;
                        next += 1;
                        LayoutState::PlacingOnCurrentSheet
                    }
                }
                LayoutState::Done => LayoutState::Done,
            };
        }

        for diagnostic in &diagram.diagnostics {
            diagnostic.log();
        }
        log::debug!(
            "{}: {} unit(s) on {} sheet(s)",
            stock.key(),
            diagram.placements.len(),
            diagram.sheet_count()
        );

        Ok(diagram)
    }
}

/// Expands parts into one unit per quantity, in input order.
fn expand_units<'a>(stock: &StockSheet, parts: &'a [Part], scale: f64) -> Vec<Unit<'a>> {
    parts
        .iter()
        .enumerate()
        .flat_map(|(part_index, part)| {
            let length_mm = whole_mm(part.length);
            let width_mm = whole_mm(part.width);
            let (along_length, along_width) = stock.orientation.align(length_mm, width_mm);
            let width = to_canvas(along_length as f64, scale);
            let height = to_canvas(along_width as f64, scale);
            (0..part.quantity).map(move |unit| Unit {
                part,
                part_index,
                unit,
                length_mm,
                width_mm,
                width,
                height,
            })
        })
        .collect()
}

/// True if an extent starting at `start` ends within `limit`.
fn fits(start: u32, extent: u32, limit: u32) -> bool {
    start.checked_add(extent).is_some_and(|end| end <= limit)
}

fn record(
    unit: &Unit<'_>,
    sheet_index: usize,
    rect: Rect,
    rotated: bool,
    clipped: bool,
) -> PlacementRecord {
    PlacementRecord {
        sheet_index,
        part: unit.part.name.clone(),
        part_index: unit.part_index,
        unit: unit.unit,
        length_mm: unit.length_mm,
        width_mm: unit.width_mm,
        rect,
        rotated,
        clipped,
    }
}
