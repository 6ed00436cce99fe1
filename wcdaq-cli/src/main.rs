//!
//! This binary drives the wcdaq readout chain over simulated event files.
#![allow(
    clippy::uninlined_format_args,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::too_many_lines
)]

use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;

use wcdaq_algorithms::{
    DaqConfig, DaqParams, EventContext, EventOrchestrator, NDigitsConfig, SkiConfig,
};
use wcdaq_core::{DigitizerKind, OutputRecord, TriggerKind};
use wcdaq_io::{read_events, JsonRecordWriter, RecordSink};

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("I/O error: {0}")]
    WcdaqIo(#[from] wcdaq_io::Error),

    #[error("Core error: {0}")]
    Core(#[from] wcdaq_core::Error),

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Water-Cherenkov readout simulation.
#[derive(Parser)]
#[command(name = "wcdaq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Digitize and trigger a simulated events file
    Process {
        /// Input events file (JSON)
        input: PathBuf,

        /// Output records file path (JSON lines)
        #[arg(short, long)]
        output: PathBuf,

        /// Digitizer name
        #[arg(long, default_value = "SKI")]
        digitizer: String,

        /// Trigger name
        #[arg(long, default_value = "NDigits")]
        trigger: String,

        /// NDigits firing threshold
        #[arg(long, default_value = "25")]
        ndigits_threshold: usize,

        /// Trigger window width (ns)
        #[arg(long, default_value = "200.0")]
        trigger_window: f64,

        /// Digitizer charge integration window (ns)
        #[arg(long, default_value = "200.0")]
        integration_window: f64,

        /// Digit charge threshold (pe)
        #[arg(long, default_value = "0.25")]
        threshold_pe: f32,

        /// Worker threads (default: rayon's choice)
        #[arg(long)]
        threads: Option<usize>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show information about an events file
    Info {
        /// Input events file
        input: PathBuf,
    },

    /// List the registered digitizer and trigger names
    Algorithms,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            digitizer,
            trigger,
            ndigits_threshold,
            trigger_window,
            integration_window,
            threshold_pe,
            threads,
            verbose,
        } => {
            if let Some(threads) = threads {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build_global()?;
            }

            if verbose {
                eprintln!("Digitizer: {}", digitizer);
                eprintln!("Trigger: {}", trigger);
                eprintln!("NDigits threshold: {}", ndigits_threshold);
                eprintln!("Trigger window: {} ns", trigger_window);
            }

            let params = DaqParams {
                ski: SkiConfig::new()
                    .with_integration_window(integration_window)
                    .with_threshold_pe(threshold_pe),
                ndigits: NDigitsConfig::new()
                    .with_threshold(ndigits_threshold)
                    .with_width(trigger_window),
                ..DaqParams::default()
            };
            let config = DaqConfig::new()
                .with_digitizer(digitizer)
                .with_trigger(trigger)
                .with_params(params);

            // Validate the configuration before touching any event, so a
            // bad name aborts the run instead of failing mid-file.
            EventOrchestrator::new(config.clone()).begin_event()?;
            log::debug!("DAQ configuration validated");

            let start = Instant::now();
            let events = read_events(&input)?;
            let event_count = events.len();
            if verbose {
                eprintln!("Read {} events from {}", event_count, input.display());
            }

            // One orchestrator per worker: the lazy strategy slot stays
            // single-threaded and needs no locking.
            let records = events
                .into_par_iter()
                .enumerate()
                .map_init(
                    || EventOrchestrator::new(config.clone()),
                    |orchestrator, (index, event)| {
                        let ctx = EventContext {
                            event_index: index as u32,
                            vertex: event.vertex,
                            stopping_volume: event.stopping_volume,
                            track_count: event.track_count,
                            raw_hits: event.hits,
                            ..EventContext::default()
                        };
                        orchestrator.end_event(ctx)
                    },
                )
                .collect::<std::result::Result<Vec<OutputRecord>, _>>()?;

            let mut sink = JsonRecordWriter::create(&output)?;
            for record in &records {
                sink.write_record(record)?;
            }
            sink.flush()?;

            let elapsed = start.elapsed();
            let triggered = records.iter().filter(|r| !r.no_trigger_fired()).count();
            let windows: usize = records.iter().map(|r| r.windows.len()).sum();

            println!(
                "Processed {} events in {:.2}s",
                event_count,
                elapsed.as_secs_f64()
            );
            println!("Triggered events: {}", triggered);
            println!("Trigger windows: {}", windows);
            println!("Records written to: {}", output.display());
        }

        Commands::Info { input } => {
            let events = read_events(&input)?;
            let total_hits: usize = events.iter().map(|e| e.hits.len()).sum();
            let max_hits = events.iter().map(|e| e.hits.len()).max().unwrap_or(0);

            println!("File: {}", input.display());
            println!("Events: {}", events.len());
            println!("Total hits: {}", total_hits);
            println!("Largest event: {} hits", max_hits);
            if !events.is_empty() {
                println!(
                    "Mean hits/event: {:.1}",
                    total_hits as f64 / events.len() as f64
                );
            }
        }

        Commands::Algorithms => {
            println!("Digitizers:");
            for kind in DigitizerKind::MEMBERS {
                println!("  {}", kind.name());
            }
            println!("Triggers:");
            for kind in TriggerKind::MEMBERS {
                if kind == TriggerKind::Failure {
                    println!("  {} (outcome tag, not selectable)", kind.name());
                } else {
                    println!("  {}", kind.name());
                }
            }
        }
    }

    Ok(())
}
