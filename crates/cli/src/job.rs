//! Job files: the measured parts plus the stock catalog they are cut from.
//!
//! Jobs are read from JSON or TOML, chosen by file extension. The catalog is
//! either inline (`stock`) or loaded from a preset file (`preset`); when both
//! are given the preset sheets follow the inline ones.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use cutlist_core::{
    find_stock, group_parts_with, resolve_orientations, unit_parts_with, GroupingOptions, Part,
    RawPart, StockKey, StockSheet, DEFAULT_KERF,
};
use cutlist_nesting::{NestingDiagram, NestingLayout};
use cutlist_planner::PlannerConfig;

use crate::preset::{load_preset, PresetError};

/// Errors that can occur while loading a job.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("preset '{}': {}", .path.display(), .source)]
    PresetError {
        path: PathBuf,
        #[source]
        source: PresetError,
    },

    #[error("invalid job: {0}")]
    InvalidJob(String),
}

fn default_kerf() -> f64 {
    DEFAULT_KERF
}

/// A cutlist job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Inline stock catalog.
    #[serde(default)]
    pub stock: Vec<StockSheet>,

    /// Preset file holding the catalog, relative to the job file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<PathBuf>,

    /// Measured parts, one per object.
    #[serde(default)]
    pub parts: Vec<RawPart>,

    /// Saw kerf in millimetres.
    #[serde(default = "default_kerf")]
    pub kerf: f64,

    /// Keep objects whose name marks them as sketches.
    #[serde(default)]
    pub include_sketches: bool,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            stock: Vec::new(),
            preset: None,
            parts: Vec::new(),
            kerf: DEFAULT_KERF,
            include_sketches: false,
        }
    }
}

impl Job {
    /// Loads a job file and resolves its preset.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, JobError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let mut job = if is_toml {
            Self::from_toml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        job.load_preset(base)?;
        job.validate()?;
        log::info!(
            "loaded {} with {} part(s) and {} stock sheet(s)",
            path.display(),
            job.parts.len(),
            job.stock.len()
        );
        Ok(job)
    }

    /// Parses a job from JSON. The preset is not resolved.
    pub fn from_json_str(content: &str) -> Result<Self, JobError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parses a job from TOML. The preset is not resolved.
    pub fn from_toml_str(content: &str) -> Result<Self, JobError> {
        Ok(toml::from_str(content)?)
    }

    /// Appends the preset catalog, resolving a relative path against `base`.
    pub fn load_preset(&mut self, base: &Path) -> Result<(), JobError> {
        let Some(preset) = self.preset.as_ref() else {
            return Ok(());
        };
        let path = if preset.is_absolute() {
            preset.clone()
        } else {
            base.join(preset)
        };
        let catalog = load_preset(&path).map_err(|source| JobError::PresetError {
            path: path.clone(),
            source,
        })?;
        log::debug!("{}: {} preset sheet(s)", path.display(), catalog.len());
        self.stock.extend(catalog);
        Ok(())
    }

    /// Overrides the kerf.
    pub fn with_kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf;
        self
    }

    /// Overrides the sketch filter.
    pub fn with_sketches(mut self, include: bool) -> Self {
        self.include_sketches = include;
        self
    }

    /// Checks the kerf and every stock sheet.
    pub fn validate(&self) -> Result<(), JobError> {
        self.planner_config()
            .validate()
            .map_err(|e| JobError::InvalidJob(e.to_string()))?;
        for sheet in &self.stock {
            sheet
                .validate()
                .map_err(|e| JobError::InvalidJob(e.to_string()))?;
        }
        Ok(())
    }

    /// Planner configuration for this job.
    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig::new().with_kerf(self.kerf)
    }

    /// Grouping options for this job.
    pub fn grouping_options(&self) -> GroupingOptions {
        GroupingOptions::new().with_sketches(self.include_sketches)
    }

    /// Grouped cutlist with each part's orientation taken from its sheet.
    pub fn cutlist(&self) -> Vec<Part> {
        let grouped = group_parts_with(&self.parts, &self.grouping_options());
        resolve_orientations(&grouped, &self.stock)
    }

    /// Cutlist lines assigned to `key`.
    pub fn parts_for(&self, key: &StockKey) -> Vec<Part> {
        self.cutlist()
            .into_iter()
            .filter(|part| &part.stock_key == key)
            .collect()
    }

    /// Physical objects assigned to `key`, one part each, in job order.
    pub fn units_for(&self, key: &StockKey) -> Vec<Part> {
        unit_parts_with(&self.parts, &self.grouping_options())
            .into_iter()
            .filter(|part| &part.stock_key == key)
            .collect()
    }

    /// Nesting diagram for the sheet picked by `selector`.
    ///
    /// Returns `None` when the job has no stock sheets at all.
    pub fn nest(
        &self,
        selector: &str,
        layout: &NestingLayout,
    ) -> cutlist_core::Result<Option<NestingDiagram>> {
        if self.stock.is_empty() {
            log::warn!("job has no stock sheets, nothing to lay out");
            return Ok(None);
        }
        let sheet = find_stock(&self.stock, selector)?;
        let units = self.units_for(&sheet.key());
        if units.is_empty() {
            log::warn!("no parts are assigned to {}", sheet.key());
        }
        layout.diagram(sheet, &units).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutlist_core::Orientation;

    const JSON_JOB: &str = r#"{
        "stock": [
            {"name": "MDF", "length": 2800, "width": 2070, "thickness": 19},
            {"name": "Birch", "length": 2500, "width": 1250, "thickness": 18, "orientation": "CROSS"}
        ],
        "parts": [
            {"name": "side_l", "dimensions": [19, 700, 500], "stock_key": "MDF_19mm_2800x2070"},
            {"name": "side_r", "dimensions": [700, 500, 19], "stock_key": "MDF_19mm_2800x2070"},
            {"name": "shelf", "dimensions": [600, 300, 18], "stock_key": "Birch_18mm_2500x1250"},
            {"name": "Sketch.001", "dimensions": [100, 100, 1]}
        ]
    }"#;

    const TOML_JOB: &str = r#"
kerf = 3.0
include_sketches = true

[[stock]]
name = "MDF"
length = 2800.0
width = 2070.0
thickness = 19.0
orientation = "LONG"

[[parts]]
name = "door"
dimensions = [700.0, 500.0, 19.0]
stock_key = "MDF_19mm_2800x2070"
comment = "left"
collection = "kitchen"
"#;

    #[test]
    fn test_json_job() {
        let job = Job::from_json_str(JSON_JOB).unwrap();
        assert_eq!(job.kerf, DEFAULT_KERF);
        assert!(!job.include_sketches);
        assert_eq!(job.stock[1].orientation, Orientation::Crosswise);

        let cutlist = job.cutlist();
        assert_eq!(cutlist.len(), 2);
        assert_eq!(cutlist[0].quantity, 2);
        assert_eq!(cutlist[1].orientation, Orientation::Crosswise);

        let birch = job.parts_for(&job.stock[1].key());
        assert_eq!(birch.len(), 1);
        assert_eq!(birch[0].name, "shelf");
    }

    #[test]
    fn test_units_keep_job_order() {
        let job = Job::from_json_str(
            r#"{
            "stock": [{"name": "MDF", "length": 2800, "width": 2070, "thickness": 19}],
            "parts": [
                {"name": "a1", "dimensions": [700, 500, 19], "stock_key": "MDF_19mm_2800x2070"},
                {"name": "b", "dimensions": [600, 300, 19], "stock_key": "MDF_19mm_2800x2070"},
                {"name": "a2", "dimensions": [500, 700, 19], "stock_key": "MDF_19mm_2800x2070"}
            ]
        }"#,
        )
        .unwrap();

        let units = job.units_for(&job.stock[0].key());
        let names: Vec<&str> = units.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a1", "b", "a2"]);

        // 700 x 500 -> 202 x 144, 600 x 300 -> 173 x 86 at scale 3.45
        let diagram = job
            .nest("MDF", &NestingLayout::default_config())
            .unwrap()
            .unwrap();
        let placed: Vec<(&str, u32)> = diagram
            .placements
            .iter()
            .map(|p| (p.part.as_str(), p.rect.x))
            .collect();
        assert_eq!(placed, vec![("a1", 0), ("b", 208), ("a2", 387)]);
    }

    #[test]
    fn test_nest_without_stock() {
        let job = Job::from_json_str(
            r#"{"parts": [{"name": "door", "dimensions": [700, 500, 19]}]}"#,
        )
        .unwrap();
        let diagram = job.nest("0", &NestingLayout::default_config()).unwrap();
        assert!(diagram.is_none());

        let job = Job::from_json_str(JSON_JOB).unwrap();
        assert!(job.nest("Oak", &NestingLayout::default_config()).is_err());
    }

    #[test]
    fn test_toml_job() {
        let job = Job::from_toml_str(TOML_JOB).unwrap();
        assert_eq!(job.kerf, 3.0);
        assert!(job.include_sketches);
        assert_eq!(job.parts[0].collection.as_deref(), Some("kitchen"));
        assert_eq!(job.planner_config().kerf, 3.0);
        assert!(job.validate().is_ok());
    }

    #[test]
    fn test_sketch_override() {
        let job = Job::from_json_str(JSON_JOB).unwrap().with_sketches(true);
        assert_eq!(job.cutlist().len(), 3);
    }

    #[test]
    fn test_invalid_kerf() {
        let job = Job::default().with_kerf(-1.0);
        assert!(matches!(job.validate(), Err(JobError::InvalidJob(_))));
    }

    #[test]
    fn test_from_file_with_preset() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("sheets.json"),
            r#"[{"name": "Oak", "length": 2000, "width": 1000, "thickness": 22}]"#,
        )
        .unwrap();
        let job_path = dir.path().join("job.toml");
        fs::write(
            &job_path,
            format!("preset = \"sheets.json\"\n{}", TOML_JOB),
        )
        .unwrap();

        let job = Job::from_file(&job_path).unwrap();
        assert_eq!(job.stock.len(), 2);
        assert_eq!(job.stock[1].name, "Oak");
    }

    #[test]
    fn test_missing_preset() {
        let dir = tempfile::tempdir().unwrap();
        let job_path = dir.path().join("job.json");
        fs::write(&job_path, r#"{"preset": "nowhere.json"}"#).unwrap();
        assert!(matches!(
            Job::from_file(&job_path),
            Err(JobError::PresetError { .. })
        ));
    }
}
