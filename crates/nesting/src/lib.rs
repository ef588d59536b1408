//! # Cutlist Nesting
//!
//! Row-packed nesting diagrams for one stock type.
//!
//! Parts are drawn as scaled rectangles, one per physical unit, filled left
//! to right into rows and rows top to bottom into sheets. Each sheet frame
//! carries a header band with its label; frames are stacked vertically on
//! one canvas.
//!
//! ## Quick Start
//!
//! ```rust
//! use cutlist_core::{Part, StockSheet};
//! use cutlist_nesting::NestingLayout;
//!
//! let sheet = StockSheet::new("Platte", 2800.0, 2070.0, 18.0);
//! let parts = vec![Part::new("door", 700.0, 500.0).with_quantity(4)];
//!
//! let diagram = NestingLayout::default_config().diagram(&sheet, &parts).unwrap();
//! assert_eq!(diagram.placements.len(), 4);
//! assert_eq!(diagram.sheet_count(), 1);
//! assert_eq!(diagram.sheets[0].label, "Sheet 1 (2800x2070)");
//! ```
//!
//! The diagram is a visual aid. It ignores kerf and never looks ahead for a
//! smaller part, so its sheet count may differ from the planner's estimate.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod diagram;
pub mod layout;

// Re-exports
pub use config::{to_canvas, LayoutConfig};
pub use diagram::{NestingDiagram, PlacementRecord, Rect, SheetFrame};
pub use layout::NestingLayout;
