// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! autocatalog: batch cataloguer for local assets
//!
//! Command-line front end: selects files, submits them as one batch and
//! streams progress until the batch completes.

use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use autocatalog::batch::{FileStatus, ProgressEvent};
use autocatalog::opener::{ExternalOpener, SystemOpener};
use autocatalog::picker::{self, PickerFilter};
use autocatalog::{logging, AppConfig, BatchScheduler, InferenceEngine, ItemResult, Result};

/// autocatalog CLI - infer catalog records for local asset files
#[derive(Parser, Debug)]
#[command(name = "autocatalog")]
#[command(author = "Jonathan D. A. Jewell <hyperpolymath>")]
#[command(version)]
#[command(about = "Batch cataloguer for local 3D assets, archives and images", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (JSON format)
    #[arg(short, long, default_value = "config.json", global = true)]
    config: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable trace logging (most verbose)
    #[arg(long, global = true)]
    trace: bool,

    /// Output format for results
    #[arg(long, global = true, default_value = "text", value_parser = ["text", "json", "jsonl"])]
    format: String,

    /// Suppress non-essential output (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Catalog a batch of files
    Process {
        /// Files or glob patterns
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Maximum concurrent inferences (overrides config)
        #[arg(short = 'j', long)]
        concurrency: Option<usize>,

        /// Do not filter by the catalog extension list
        #[arg(long)]
        all_files: bool,
    },

    /// Infer the catalog record of a single file
    Infer {
        /// File to inspect
        path: PathBuf,
    },

    /// Open a file with the system's default application
    Open {
        /// File to open
        path: PathBuf,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Generate default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config.json")]
        output: PathBuf,
    },

    /// Validate configuration file
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    logging::init(filter);

    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Commands::Process { patterns, concurrency, all_files } => {
            run_process(config, patterns, concurrency, all_files, &cli.format).await
        }
        Commands::Infer { path } => run_infer(config, &path, &cli.format).await,
        Commands::Open { path } => run_open(&path),
        Commands::Config { action } => run_config_command(config, action, &cli.config),
    }
}

/// Run one batch and stream its progress
async fn run_process(
    mut config: AppConfig,
    patterns: Vec<String>,
    concurrency: Option<usize>,
    all_files: bool,
    format: &str,
) -> Result<()> {
    if concurrency.is_some() {
        config.scheduler.max_concurrency = concurrency;
    }

    let filter = if all_files { PickerFilter::AllFiles } else { PickerFilter::Catalog };
    let selected = picker::expand_patterns(&patterns)?;
    let files = picker::filter_selection(selected, filter, &config.picker);

    let scheduler = BatchScheduler::from_config(&config);
    info!("Processing {} files with up to {} workers", files.len(), scheduler.max_concurrency());

    let mut events = scheduler.subscribe();
    let ack = scheduler.submit(files)?;
    debug!(batch = %ack.batch_id, "{}", ack.message);

    while let Some(event) = events.recv().await {
        if format == "jsonl" {
            println!("{}", serde_json::to_string(&event)?);
        }

        match event {
            ProgressEvent::FileProgress(progress) if format == "text" => {
                let time = Local::now().format("%H:%M:%S");
                let position = format!("[{}/{}]", progress.file_index + 1, progress.total_files);
                match progress.status {
                    FileStatus::Processing => {
                        debug!("{} {} started", position, progress.file_path);
                    }
                    FileStatus::Completed => {
                        if let Some(record) = &progress.data {
                            println!(
                                "{} {} {} -> {} ({})",
                                time, position, progress.file_path, record.title, record.category
                            );
                        }
                    }
                    FileStatus::Failed => {
                        eprintln!(
                            "{} {} {} failed: {}",
                            time,
                            position,
                            progress.file_path,
                            progress.error.as_deref().unwrap_or("unknown error")
                        );
                    }
                }
            }
            ProgressEvent::BatchComplete { batch_id, results } if batch_id == ack.batch_id => {
                print_results(&results, format)?;
                break;
            }
            _ => {}
        }
    }

    Ok(())
}

fn print_results(results: &[ItemResult], format: &str) -> Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(results)?),
        "text" => {
            let failed = results.iter().filter(|r| !r.success).count();
            println!("\nCatalogued {} files ({} failed)", results.len() - failed, failed);
        }
        _ => {}
    }
    Ok(())
}

/// Infer a single file
async fn run_infer(config: AppConfig, path: &Path, format: &str) -> Result<()> {
    let engine = InferenceEngine::new(&config);
    let record = engine.infer_file(path).await?;

    match format {
        "text" => {
            println!("Title:       {}", record.title);
            println!("Category:    {}", record.category);
            println!("Description: {}", record.description);
            println!("Image:       {}", record.image_url);
            println!("Download:    {}", record.download_url);
            if !record.warnings.is_empty() {
                println!("Warnings:    {:?}", record.warnings);
            }
        }
        "jsonl" => println!("{}", serde_json::to_string(&record)?),
        _ => println!("{}", serde_json::to_string_pretty(&record)?),
    }

    Ok(())
}

/// Open a file externally; the exit status reflects the outcome
fn run_open(path: &Path) -> Result<()> {
    if SystemOpener.open(path) {
        Ok(())
    } else {
        eprintln!("Could not open {}", path.display());
        std::process::exit(1);
    }
}

/// Run config commands
fn run_config_command(config: AppConfig, action: ConfigCommands, config_path: &Path) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }
        ConfigCommands::Generate { output } => {
            AppConfig::default().save(&output)?;
            println!("Generated config at {:?}", output);
        }
        ConfigCommands::Validate => {
            println!("Configuration at {:?} is valid", config_path);
            println!("  Max concurrency: {}", config.scheduler.effective_concurrency());
            println!("  Preview dir: {:?}", config.previews.resolve_dir());
            println!("  Catalog extensions: {}", config.picker.extensions.join(", "));
        }
    }

    Ok(())
}
