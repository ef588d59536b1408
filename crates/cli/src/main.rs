//! Cutlist CLI

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use cutlist_cli::{load_preset, print_layout_summary, save_preset, CutlistReport, Job};
use cutlist_nesting::NestingLayout;
use cutlist_planner::StockPlanner;

#[derive(Parser)]
#[command(name = "cutlist")]
#[command(about = "Sheet demand and nesting diagrams for panel cutlists")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate how many sheets of each stock type to buy
    Plan {
        /// Job file (JSON or TOML)
        job: PathBuf,

        /// Saw kerf in millimetres, overrides the job
        #[arg(short, long)]
        kerf: Option<f64>,

        /// Keep sketch objects
        #[arg(long)]
        include_sketches: bool,

        /// Output file for the report (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for the report (CSV)
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Lay out the parts of one stock type as a nesting diagram
    Nest {
        /// Job file (JSON or TOML)
        job: PathBuf,

        /// Stock sheet by catalog index, name or key
        #[arg(short, long)]
        stock: String,

        /// Keep sketch objects
        #[arg(long)]
        include_sketches: bool,

        /// Output file for the diagram (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the stock keys parts can be assigned to
    Keys {
        /// Job file (JSON or TOML)
        job: PathBuf,
    },

    /// Save or inspect stock catalog presets
    Preset {
        #[command(subcommand)]
        action: PresetCommand,
    },
}

#[derive(Subcommand)]
enum PresetCommand {
    /// Write the job's catalog to a preset file
    Save {
        /// Job file (JSON or TOML)
        job: PathBuf,

        /// Preset file to write
        preset: PathBuf,
    },

    /// Print the sheets in a preset file
    Show {
        /// Preset file to read
        preset: PathBuf,
    },
}

fn load_job(path: &Path) -> anyhow::Result<Job> {
    Job::from_file(path).with_context(|| format!("failed to load job {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            job,
            kerf,
            include_sketches,
            output,
            csv,
        } => {
            let mut job = load_job(&job)?;
            if let Some(kerf) = kerf {
                job = job.with_kerf(kerf);
            }
            if include_sketches {
                job = job.with_sketches(true);
            }
            job.validate()?;

            let parts = job.cutlist();
            let planner = StockPlanner::new(job.planner_config());
            let plan = planner.plan(&parts, &job.stock)?;
            let report = CutlistReport::new(parts, plan);

            report.print_summary();

            if let Some(path) = output {
                report.save_json(&path)?;
                println!("Report saved to: {}", path.display());
            }

            if let Some(path) = csv {
                report.save_csv(&path)?;
                println!("CSV saved to: {}", path.display());
            }
        }

        Commands::Nest {
            job,
            stock,
            include_sketches,
            output,
        } => {
            let mut job = load_job(&job)?;
            if include_sketches {
                job = job.with_sketches(true);
            }

            let Some(diagram) = job.nest(&stock, &NestingLayout::default_config())? else {
                println!("No stock sheets in job: 0 placements");
                if let Some(path) = output {
                    std::fs::write(&path, "[]")?;
                    println!("Diagram saved to: {}", path.display());
                }
                return Ok(());
            };
            print_layout_summary(&diagram);

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(&diagram)?;
                std::fs::write(&path, json)?;
                println!("Diagram saved to: {}", path.display());
            }
        }

        Commands::Keys { job } => {
            let job = load_job(&job)?;
            println!("Stock keys:");
            for (index, sheet) in job.stock.iter().enumerate() {
                println!("  [{}] {}", index, sheet.key());
            }
        }

        Commands::Preset { action } => match action {
            PresetCommand::Save { job, preset } => {
                let job = load_job(&job)?;
                save_preset(&preset, &job.stock)?;
                println!("Saved {} sheet(s) to: {}", job.stock.len(), preset.display());
            }
            PresetCommand::Show { preset } => {
                let catalog = load_preset(&preset)
                    .with_context(|| format!("failed to load preset {}", preset.display()))?;
                println!("{:<4} {:<40} {:<16} {:<6} Comment", "#", "Key", "Format", "Orient");
                println!("{:-<80}", "");
                for (index, sheet) in catalog.iter().enumerate() {
                    println!(
                        "{:<4} {:<40} {:<16} {:<6} {}",
                        index,
                        sheet.key(),
                        sheet.format_label(),
                        sheet.orientation,
                        sheet.comment
                    );
                }
            }
        },
    }

    Ok(())
}
