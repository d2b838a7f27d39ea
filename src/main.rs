mod diagnostics;
mod error;
mod export;
mod reference;
mod render;
mod settings;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};
use tracing_subscriber::prelude::*;

use diagnostics::TracingDiagnostics;
use settings::Settings;

#[derive(Parser)]
#[command(name = "paperpile2vault", about = "Paperpile JSON export to Obsidian notes")]
struct Cli {
    /// Log file (appended to); overrides settings
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one Markdown note per reference into the output directory
    Convert {
        /// Paperpile JSON export
        input: PathBuf,
        /// Output directory (default: ./obsidian/paperpile_import)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Max references to convert (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Print rendered notes to stdout without writing files
    Preview {
        /// Paperpile JSON export
        input: PathBuf,
        /// Number of references to render
        #[arg(short = 'n', long, default_value = "1")]
        limit: usize,
    },
}

fn init_tracing(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {:?}", log_file))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let t0 = Instant::now();
    let cli = Cli::parse();

    let (output_dir, input, limit) = match &cli.command {
        Commands::Convert {
            input,
            output_dir,
            limit,
        } => (output_dir.clone(), input, *limit),
        Commands::Preview { input, limit } => (None, input, Some(*limit)),
    };
    let settings = Settings::load()?.with_overrides(output_dir, cli.log_file.clone());
    init_tracing(&settings.log_file)?;
    info!("Log file: {}", settings.log_file.display());
    info!("Reading {}", input.display());

    let mut values = match export::load_references(input) {
        Ok(values) => values,
        Err(e) => {
            let e = anyhow::Error::from(e);
            error!("{:#}", e);
            return Err(e);
        }
    };
    if let Some(n) = limit {
        values.truncate(n);
    }

    let diag = TracingDiagnostics;
    match cli.command {
        Commands::Convert { .. } => {
            let mut sink = export::DirSink::create(&settings.output_dir, &diag)?;
            info!("Processing {} references...", values.len());

            let pb = ProgressBar::new(values.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
                    .progress_chars("#>-"),
            );
            let stats = export::convert_all(values, &mut sink, &diag, &pb);
            pb.finish_and_clear();

            info!("Done.");
            stats.print();
        }
        Commands::Preview { .. } => {
            for (i, value) in values.into_iter().enumerate() {
                if let Some(doc) = export::render_value(value, i, &diag) {
                    println!("==> {} <==", doc.filename);
                    println!("{}", doc.content);
                }
            }
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
