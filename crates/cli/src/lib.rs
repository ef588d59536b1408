//! Command-line support for cutlist planning.
//!
//! This crate provides:
//! - Job files (JSON or TOML) holding measured parts and a stock catalog
//! - Stock catalog presets
//! - Report writers: JSON, two-section CSV and a stdout summary

mod job;
mod preset;
mod report;

pub use job::{Job, JobError};
pub use preset::{load_preset, save_preset, PresetError};
pub use report::{print_layout_summary, CutlistReport};
