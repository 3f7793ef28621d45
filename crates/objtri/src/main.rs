//! objtri - prepare triangle-only OBJ test fixtures
//!
//! Usage:
//!   objtri                    Convert p2.obj, p3.obj, p4.obj next to the binary
//!   objtri --dir <DIR>        Same, but in DIR
//!   objtri cube torus         Convert cube.obj and torus.obj instead
//!
//! Every `<base>.obj` is written to `<base>_tri.obj` with texture/normal
//! references removed and quads split into triangles.
//!
//! Logging follows `RUST_LOG` (default `info`). Missing-file and skipped-face
//! warnings are always printed, even under `RUST_LOG=error`.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use objtri_core::{
    config::{default_config_path, load_config},
    program_dir, run_batch, BatchPlan, ConversionStats, ConvertOptions, DIAGNOSTICS_TARGET,
};

#[derive(Parser)]
#[command(name = "objtri")]
#[command(about = "Strip UV/normal indices from OBJ files and triangulate quads")]
#[command(
    after_help = "Logging follows RUST_LOG (default: info). Missing-file and skipped-face warnings are always shown."
)]
#[command(version)]
struct Cli {
    /// Base names to convert (defaults to p2 p3 p4, or the config file list)
    bases: Vec<String>,

    /// Directory holding the OBJ files (defaults to the program's directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Config file (defaults to objtri.toml in the base directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suffix appended to each base name for the output file
    #[arg(long)]
    suffix: Option<String>,

    /// Don't print per-file summaries
    #[arg(short, long)]
    quiet: bool,
}

fn print_summary(stats: &ConversionStats) {
    println!(
        "Converted: {} -> {}",
        stats.input.display(),
        stats.output.display()
    );
    println!("  Vertices: {}", stats.vertex_count);
    println!("  Faces: {}", stats.face_count);
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        .add_directive(
            format!("{DIAGNOSTICS_TARGET}=warn")
                .parse::<tracing_subscriber::filter::Directive>()
                .context("Invalid diagnostics log directive")?,
        );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    let base_dir = match cli.dir {
        Some(dir) => dir,
        None => program_dir().context("Failed to locate program directory")?,
    };

    let config_path = cli
        .config
        .unwrap_or_else(|| default_config_path(&base_dir));
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config: {}", config_path.display()))?;

    let mut plan = BatchPlan::from_config(&base_dir, &config);
    if !cli.bases.is_empty() {
        plan = plan.with_bases(cli.bases);
    }
    if let Some(suffix) = cli.suffix {
        plan = plan.with_output_suffix(suffix);
    }

    let options = ConvertOptions {
        header: config.header(),
    };

    let quiet = cli.quiet;
    run_batch(&plan, &options, |stats| {
        if !quiet {
            print_summary(stats);
        }
    })
    .with_context(|| format!("Batch conversion in {} failed", base_dir.display()))?;

    Ok(())
}
