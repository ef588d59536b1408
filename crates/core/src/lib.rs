//! # Cutlist Core
//!
//! Shared data model for the cutlist planning crates.
//!
//! ## Core Components
//!
//! - **Stock catalog**: [`StockSheet`], [`Orientation`], [`StockKey`]
//! - **Parts**: [`RawPart`] as measured, [`Part`] after grouping
//! - **Grouping**: [`group_parts`], [`group_parts_with`], [`unit_parts_with`],
//!   [`resolve_orientations`]
//! - **Diagnostics**: [`Diagnostic`] for non-fatal conditions
//! - **Errors**: [`Error`], [`Result`]
//!
//! ## Grouping
//!
//! ```rust
//! use cutlist_core::{group_parts, RawPart, StockSheet};
//!
//! let sheet = StockSheet::new("Platte", 2800.0, 2070.0, 18.0);
//! let raw = vec![
//!     RawPart::new("side_l", [700.001, 500.0, 18.0]).with_stock_key(sheet.key()),
//!     RawPart::new("side_r", [18.0, 500.0, 699.999]).with_stock_key(sheet.key()),
//! ];
//!
//! let parts = group_parts(&raw);
//! assert_eq!(parts.len(), 1);
//! assert_eq!(parts[0].quantity, 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod diagnostic;
pub mod error;
pub mod grouping;
pub mod part;
pub mod stock;

// Re-exports
pub use diagnostic::Diagnostic;
pub use error::{Error, Result};
pub use grouping::{
    group_parts, group_parts_with, resolve_orientations, unit_parts_with, GroupingOptions,
};
pub use part::{round_hundredths, Part, RawPart};
pub use stock::{find_stock, whole_mm, Orientation, StockKey, StockSheet};

/// Saw blade width lost per cut, in millimetres.
pub const DEFAULT_KERF: f64 = 4.0;
