//! Sheet count estimation.

use std::collections::HashSet;

use cutlist_core::{Diagnostic, Part, Result, StockKey, StockSheet};

use crate::config::PlannerConfig;
use crate::kerf::capacity;
use crate::result::{PartDemand, SheetRequirement, StockPlan};

/// Estimates how many sheets of each stock type a cutlist needs.
///
/// Every part is counted on its own: `ceil(quantity / capacity)` sheets, where
/// capacity is the kerf-compensated row × column fit under the sheet's
/// orientation. Different parts never share a sheet in the estimate, so the
/// count is an upper bound rather than an optimal packing.
#[derive(Debug, Clone, Default)]
pub struct StockPlanner {
    config: PlannerConfig,
}

impl StockPlanner {
    /// Creates a planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Creates a planner with the default 4 mm kerf.
    pub fn default_config() -> Self {
        Self::new(PlannerConfig::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Sheet counts per stock type, in catalog order, zero counts omitted.
    pub fn compute_requirements(
        &self,
        parts: &[Part],
        stock: &[StockSheet],
    ) -> Result<Vec<SheetRequirement>> {
        Ok(self.plan(parts, stock)?.requirements)
    }

    /// Computes requirements together with the per-part breakdown and
    /// diagnostics.
    ///
    /// # Errors
    ///
    /// Returns an error if the kerf, a sheet or a part fails validation.
    pub fn plan(&self, parts: &[Part], stock: &[StockSheet]) -> Result<StockPlan> {
        self.config.validate()?;
        for sheet in stock {
            sheet.validate()?;
        }
        for part in parts {
            part.validate()?;
        }

        let kerf = self.config.kerf;
        let mut plan = StockPlan::new(kerf);

        for (stock_index, sheet) in stock.iter().enumerate() {
            let key = sheet.key();
            let mut total = 0usize;

            for (part_index, part) in parts.iter().enumerate() {
                if part.stock_key != key {
                    continue;
                }

                let fit = capacity(sheet, part.length, part.width, kerf);
                if fit.is_clamped() {
                    plan.diagnostics.push(Diagnostic::CapacityClamped {
                        part: part.name.clone(),
                        stock_key: key.clone(),
                    });
                }

                let sheets = fit.sheets_for(part.quantity);
                total += sheets;
                plan.demands.push(PartDemand {
                    part: part.name.clone(),
                    part_index,
                    stock_index,
                    stock_key: key.clone(),
                    quantity: part.quantity,
                    capacity: fit,
                    sheets,
                });
            }

            log::debug!("{}: {} sheet(s) at kerf {}", key, total, kerf);

            if total > 0 {
                plan.requirements.push(SheetRequirement {
                    stock_index,
                    stock: sheet.clone(),
                    sheets: total,
                });
            }
        }

        let known: HashSet<StockKey> = stock.iter().map(StockSheet::key).collect();
        for part in parts.iter().filter(|p| !known.contains(&p.stock_key)) {
            plan.diagnostics.push(Diagnostic::UnmatchedStock {
                part: part.name.clone(),
                stock_key: part.stock_key.clone(),
                quantity: part.quantity,
            });
        }

        for diagnostic in &plan.diagnostics {
            diagnostic.log();
        }

        Ok(plan)
    }
}
