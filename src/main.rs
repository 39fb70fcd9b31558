use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use clap::{Parser, Subcommand};

use cacheperf::config::SimulationConfig;
use cacheperf::io::open_trace;
use cacheperf::lru::LruKeyCache;
use cacheperf::simulator::{optimize_and_compare, sweep_capacities, Simulator};
use cacheperf::trace;

#[derive(Parser, Debug)]
#[command(about = String::from("Cache performance simulator"))]
struct Args {
    #[command(subcommand)]
    mode: Mode,

    /// Print wall-clock timing once the run completes
    #[arg(short, long)]
    performance: bool,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Replay a memory address trace through a direct-mapped cache
    ///
    /// When the configuration carries optimisation strategies, the same trace
    /// is also replayed through the derived cache and the two are compared
    Memory {
        /// JSON cache configuration
        config: String,
        /// Trace file, one decimal address per line
        trace: String,
    },
    /// Replay a page trace through an LRU cache
    Pages {
        /// Trace file, one key (URL) per line
        trace: String,

        #[arg(short, long)]
        capacity: usize,

        /// Additionally re-run the trace at each of these capacities
        #[arg(long, value_delimiter = ',')]
        sweep: Vec<usize>,
    },
}

fn main() -> Result<(), String> {
    let start = Instant::now();
    let args = Args::parse();
    match &args.mode {
        Mode::Memory { config, trace } => run_memory(config, trace)?,
        Mode::Pages {
            trace,
            capacity,
            sweep,
        } => run_pages(trace, *capacity, sweep)?,
    }
    if args.performance {
        let total = start.elapsed();
        println!(
            "Total execution time (includes parsing, configuration, and output): {}s",
            total.as_nanos() as f64 / 1e9
        );
    }
    Ok(())
}

fn run_memory(config_path: &str, trace_path: &str) -> Result<(), String> {
    let config_file = File::open(config_path)
        .map_err(|e| format!("Couldn't open the config file at path {config_path}: {e}"))?;
    let config: SimulationConfig = serde_json::from_reader(BufReader::new(config_file))
        .map_err(|e| format!("Couldn't parse the config file: {e}"))?;
    let addresses = trace::read_addresses(open_trace(trace_path)?)?;
    if config.strategies.is_empty() {
        let mut simulator = Simulator::new(config.cache).map_err(|e| e.to_string())?;
        let stats = simulator.run(&addresses);
        print_json(&stats)
    } else {
        let report = optimize_and_compare(config.cache, &config.strategies, &addresses)
            .map_err(|e| e.to_string())?;
        print_json(&report)
    }
}

fn run_pages(trace_path: &str, capacity: usize, sweep: &[usize]) -> Result<(), String> {
    let keys = trace::read_keys(open_trace(trace_path)?)?;
    if sweep.is_empty() {
        let mut cache = LruKeyCache::new(capacity).map_err(|e| e.to_string())?;
        for key in &keys {
            cache.access(key.clone());
        }
        print_json(&cache.stats())
    } else {
        let mut capacities = vec![capacity];
        capacities.extend_from_slice(sweep);
        let points = sweep_capacities(&keys, &capacities).map_err(|e| e.to_string())?;
        print_json(&points)
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    println!(
        "{}",
        serde_json::to_string_pretty(value)
            .map_err(|e| format!("Couldn't serialise the output: {e}"))?
    );
    Ok(())
}
