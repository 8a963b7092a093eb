//! Balance simulator CLI.
//!
//! Plays many autopilot runs to see how the difficulty curve holds up.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # 200 runs with the default tuning
//!   cargo run --bin simulate -- -n 50 -t 10000 # 50 runs, at most 10000 ticks each
//!   cargo run --bin simulate -- --seed 42      # Reproducible run
//!   cargo run --bin simulate -- --config       # Use ~/.skyward/config.json

use skyward::core::GameConfig;
use skyward::simulator::{run_simulation, SimConfig};
use skyward::utils::logging::init_stderr_logging;
use std::env;

fn main() {
    init_stderr_logging();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              SKYWARD BALANCE SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    println!(
        "  Speed:          {} -> {} (+{} every {} points)",
        config.game.base_speed,
        config.game.max_speed,
        config.game.speed_step,
        config.game.level_up_every
    );
    println!(
        "  Spawn Interval: {} -> {} ticks",
        config.game.base_spawn_interval, config.game.min_spawn_interval
    );
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write {}: {}", filename, e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(config.num_runs);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run =
                        args[i + 1].parse().unwrap_or(config.max_ticks_per_run);
                    i += 1;
                }
            }
            "--config" => {
                config.game = GameConfig::load();
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Skyward Balance Simulator\n");
    println!("Usage: simulate [OPTIONS]\n");
    println!("Options:");
    println!("  -n, --runs <N>     Number of runs (default: 200)");
    println!("  -s, --seed <N>     Random seed for reproducible results");
    println!("  -t, --ticks <N>    Tick limit per run (default: 36000)");
    println!("      --config       Use ~/.skyward/config.json instead of the defaults");
    println!("  -v, --verbose      Print every run");
    println!("      --json         Also write the report as JSON");
    println!("  -h, --help         Show this help message");
}
