//! # Beam Optimizer CLI
//!
//! Runs the section search once over a material table and writes one result
//! table per section family.
//!
//! ```text
//! beam_cli materials.csv --out results --json
//! beam_cli --config run.json --step 0.002
//! ```
//!
//! Without a materials file the built-in demonstration table is used.
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beam_core::calculations::{optimize, OptimizationRun, SearchConfig};
use beam_core::errors::CalcResult;
use beam_core::file_io::save_run_json;
use beam_core::materials::{builtin_materials, load_materials_csv};
use beam_core::report::{run_summary, write_results_csv, BeamReport};
use beam_core::sections::SectionFamily;

#[derive(Parser, Debug)]
#[command(name = "beam_cli")]
#[command(version)]
#[command(about = "Find the lightest axially loaded beam section for each material")]
struct Args {
    /// Material table CSV (name, yield MPa, E GPa, elongation %, density t/m³, price $/kg, energy MJ/kg)
    materials: Option<PathBuf>,

    /// JSON search configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Axial load [N]
    #[arg(long)]
    load: Option<f64>,

    /// Beam length [m]
    #[arg(long)]
    length: Option<f64>,

    /// Largest section breadth [m]
    #[arg(long)]
    max_breadth: Option<f64>,

    /// Largest section height [m]
    #[arg(long)]
    max_height: Option<f64>,

    /// Grid step for every dimension [m]
    #[arg(long)]
    step: Option<f64>,

    /// Directory for the result tables
    #[arg(short, long, default_value = "results")]
    out: PathBuf,

    /// Also write a JSON run summary
    #[arg(long)]
    json: bool,
}

impl Args {
    fn search_config(&self) -> CalcResult<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::load_json(path)?,
            None => SearchConfig::default(),
        };

        if let Some(load) = self.load {
            config.load = load;
        }
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(max_breadth) = self.max_breadth {
            config.max_breadth = max_breadth;
        }
        if let Some(max_height) = self.max_height {
            config.max_height = max_height;
        }
        if let Some(step) = self.step {
            config.step = step;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beam_cli=info,beam_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> CalcResult<()> {
    let config = args.search_config()?;

    let materials = match &args.materials {
        Some(path) => load_materials_csv(path)?,
        None => {
            tracing::info!("No material table given, using built-in materials");
            builtin_materials()
        }
    };

    tracing::info!(
        "Searching {} material(s): load {} N, length {} m, envelope {} x {} m, step {} m",
        materials.len(),
        config.load,
        config.length,
        config.max_breadth,
        config.max_height,
        config.step
    );

    let run = optimize(&materials, &config)?;
    print_summary(&run);

    write_results_csv(&args.out, &run)?;

    if args.json {
        let path = args.out.join("run.json");
        save_run_json(&run_summary(&run), &path)?;
        tracing::info!("Wrote run summary to {}", path.display());
    }

    Ok(())
}

fn print_summary(run: &OptimizationRun) {
    println!("═══════════════════════════════════════");
    println!("  BEAM SECTION OPTIMIZATION");
    println!("═══════════════════════════════════════");

    for material_run in &run.materials {
        println!();
        println!("MATERIAL: {}", material_run.material.name);
        for family in SectionFamily::ALL {
            match material_run.best(family) {
                Some(beam) => {
                    let report = BeamReport::from_beam(beam, run.config.load);
                    println!(
                        "  {} {:<9} {:>8.1} mm²  ${:.2}  (governs: {})",
                        status_icon(true),
                        family.display_name(),
                        report.area.map_or(f64::NAN, |a| a.value()),
                        report.total_cost.unwrap_or(f64::NAN),
                        report.governing.map_or("-".to_string(), |g| g.to_string())
                    );
                }
                None => println!("  {} No suitable {}", status_icon(false), family.display_name()),
            }
        }
    }

    println!();
    println!("═══════════════════════════════════════");
    println!("  {} candidate sections evaluated", run.evaluated());
    println!("═══════════════════════════════════════");
}

fn status_icon(found: bool) -> &'static str {
    if found { "[OK]" } else { "[--]" }
}
