//! Battle balance simulator CLI.
//!
//! Run Monte Carlo battle simulations to analyze campaign balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 1000 battles
//!   cargo run --bin simulate -- -n 100           # 100 battles
//!   cargo run --bin simulate -- --seed 42        # Reproducible run
//!   cargo run --bin simulate -- --config c.json  # Custom campaign
//!   cargo run --bin simulate -- --fixpoint       # Fixpoint chain rules

use gembattle::config::load_config;
use gembattle::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("=== GEMBATTLE BALANCE SIMULATOR ===");
    println!();
    println!("Configuration:");
    println!("  Battles:     {}", config.num_battles);
    println!("  Turn cap:    {}", config.max_turns_per_battle);
    println!(
        "  Chain rules: {}",
        if config.fixpoint_chains {
            "fixpoint"
        } else {
            "single pass"
        }
    );
    if let Some(seed) = config.seed {
        println!("  Seed:        {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--battles" => {
                if i + 1 < args.len() {
                    config.num_battles = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--turns" => {
                if i + 1 < args.len() {
                    config.max_turns_per_battle = args[i + 1].parse().unwrap_or(10_000);
                    i += 1;
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    config.campaign = Some(load_config(&args[i + 1]));
                    i += 1;
                }
            }
            "--fixpoint" => {
                config.fixpoint_chains = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            _ => {}
        }
        i += 1;
    }

    config
}
