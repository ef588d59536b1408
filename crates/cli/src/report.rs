//! Cutlist reports: JSON, CSV and a stdout summary.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use cutlist_core::Part;
use cutlist_nesting::NestingDiagram;
use cutlist_planner::StockPlan;

/// Grouped cutlist together with its sheet plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutlistReport {
    /// Cutlist lines in grouping order.
    pub parts: Vec<Part>,
    /// Sheet demand per stock type.
    pub plan: StockPlan,
}

impl CutlistReport {
    /// Creates a report.
    pub fn new(parts: Vec<Part>, plan: StockPlan) -> Self {
        Self { parts, plan }
    }

    /// Saves the report to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Saves the report to a CSV file.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        self.write_csv(&mut file)?;
        file.flush()
    }

    /// Writes the sheet demand section followed by the cutlist section.
    pub fn write_csv<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "SHEETS")?;
        writeln!(out, "thickness,name,format,sheets")?;
        for req in &self.plan.requirements {
            writeln!(
                out,
                "{},{},{},{}",
                req.stock.thickness,
                csv_field(&req.stock.name),
                req.format_label(),
                req.sheets
            )?;
        }

        writeln!(out)?;
        writeln!(out, "CUTLIST")?;
        writeln!(
            out,
            "name,length,width,thickness,collection,stock,quantity,comment,orientation"
        )?;
        for part in &self.parts {
            writeln!(
                out,
                "{},{},{},{},{},{},{},{},{}",
                csv_field(&part.name),
                part.length,
                part.width,
                part.thickness,
                csv_field(part.collection.as_deref().unwrap_or_default()),
                csv_field(part.stock_key.as_str()),
                part.quantity,
                csv_field(&part.comment),
                part.orientation
            )?;
        }
        Ok(())
    }

    /// Prints a summary table to stdout.
    pub fn print_summary(&self) {
        println!("\n{:=<72}", "");
        println!("SHEET DEMAND (kerf {} mm)", self.plan.kerf);
        println!("{:=<72}", "");
        println!(
            "{:>10} {:<32} {:<16} {:>10}",
            "Thickness", "Stock", "Format", "Sheets"
        );
        println!("{:-<72}", "");
        for req in &self.plan.requirements {
            println!(
                "{:>10} {:<32} {:<16} {:>10}",
                req.stock.thickness,
                req.stock.name,
                req.format_label(),
                req.sheets
            );
        }
        println!("{:-<72}", "");
        println!("{:<60} {:>11}", "Total", self.plan.total_sheets());

        println!("\n{:<32} {:>9} {:>9} {:>6} {:>5}", "Part", "Length", "Width", "Thk", "Qty");
        println!("{:-<72}", "");
        for part in &self.parts {
            println!(
                "{:<32} {:>9} {:>9} {:>6} {:>5}",
                part.name, part.length, part.width, part.thickness, part.quantity
            );
        }

        if !self.plan.diagnostics.is_empty() {
            println!("\nWarnings:");
            for diagnostic in &self.plan.diagnostics {
                println!("  - {}", diagnostic);
            }
        }
        println!("{:=<72}\n", "");
    }
}

/// Prints sheet-by-sheet placement counts of a nesting diagram.
pub fn print_layout_summary(diagram: &NestingDiagram) {
    println!("\n{:=<60}", "");
    println!(
        "NESTING {} ({}, scale {:.3} mm/unit)",
        diagram.stock.key(),
        diagram.stock.orientation,
        diagram.scale
    );
    println!("{:=<60}", "");
    for sheet in &diagram.sheets {
        let count = diagram.placements_on(sheet.index).count();
        println!("  {:<40} {:>5} part(s)", sheet.label, count);
    }
    for diagnostic in &diagram.diagnostics {
        println!("  ! {}", diagnostic);
    }
    println!("{:=<60}\n", "");
}

/// Quotes a field if it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutlist_core::{group_parts, RawPart, StockSheet};
    use cutlist_planner::StockPlanner;

    fn report() -> CutlistReport {
        let mdf = StockSheet::new("MDF", 2800.0, 2070.0, 19.0);
        let raw = vec![
            RawPart::new("side", [700.0, 500.0, 19.0])
                .with_stock_key(mdf.key())
                .with_collection("carcass"),
            RawPart::new("side", [700.0, 500.0, 19.0]).with_stock_key(mdf.key()),
            RawPart::new("door, left", [720.0, 396.5, 19.0])
                .with_stock_key(mdf.key())
                .with_comment("grain \"up\""),
        ];
        let parts = group_parts(&raw);
        let plan = StockPlanner::default_config().plan(&parts, &[mdf]).unwrap();
        CutlistReport::new(parts, plan)
    }

    #[test]
    fn test_csv_sections() {
        let mut out = Vec::new();
        report().write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "SHEETS");
        // side: 12 per sheet -> 1, door: 15 per sheet -> 1
        assert_eq!(lines[2], "19,MDF,2800 x 2070,2");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "CUTLIST");
        assert_eq!(lines[6], "side,700,500,19,carcass,MDF_19mm_2800x2070,2,,LONG");
        assert_eq!(
            lines[7],
            "\"door, left\",720,396.5,19,,MDF_19mm_2800x2070,1,\"grain \"\"up\"\"\",LONG"
        );
    }

    #[test]
    fn test_save_json_and_csv() {
        let dir = tempfile::tempdir().unwrap();
        let report = report();
        report.save_json(dir.path().join("plan.json")).unwrap();
        report.save_csv(dir.path().join("plan.csv")).unwrap();

        let json = fs::read_to_string(dir.path().join("plan.json")).unwrap();
        let parsed: CutlistReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
        assert!(fs::read_to_string(dir.path().join("plan.csv"))
            .unwrap()
            .starts_with("SHEETS\n"));
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
