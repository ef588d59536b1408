//! Sheet count estimation for rectangular cutlists.
//!
//! Given grouped parts and a stock catalog, computes how many sheets of each
//! stock type must be bought, charging a saw kerf for every cut.
//!
//! # Algorithm
//!
//! For every catalog sheet, in order:
//!
//! 1. **Match**: select parts whose stock key equals the sheet's key
//! 2. **Fit**: per part, `cols = floor((L + k) / (a + k))` and
//!    `rows = floor((W + k) / (b + k))`, where `(a, b)` is the part footprint
//!    aligned to the sheet's orientation
//! 3. **Clamp**: `capacity = max(1, cols * rows)`
//! 4. **Count**: `ceil(quantity / capacity)` sheets per part, summed per stock
//!
//! The estimate treats parts independently and never rotates them.
//!
//! ```rust
//! use cutlist_core::{Orientation, Part, StockSheet};
//! use cutlist_planner::StockPlanner;
//!
//! let sheet = StockSheet::new("Platte", 2800.0, 2070.0, 18.0)
//!     .with_orientation(Orientation::Crosswise);
//! let parts = vec![Part::new("door", 700.0, 500.0)
//!     .with_quantity(9)
//!     .with_stock_key(sheet.key())];
//!
//! let requirements = StockPlanner::default_config()
//!     .compute_requirements(&parts, &[sheet])
//!     .unwrap();
//! assert_eq!(requirements[0].sheets, 1);
//! ```

pub mod config;
pub mod kerf;
pub mod planner;
pub mod result;

pub use config::PlannerConfig;
pub use kerf::{capacity, fit_count, floor_div, Capacity};
pub use planner::StockPlanner;
pub use result::{PartDemand, SheetRequirement, StockPlan};
