//! Dice of Fate Headless Balance Simulator
//!
//! Plays whole games with an automatic player and reports how far they get.
//! Uses the same `Game` state machine as the terminal UI.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N        Games to play (default: 1000)
//!   --seed N        RNG seed; run i uses seed + i (default: random)
//!   --max-rolls N   Roll cap per game (default: 10000)
//!   --policy P      Loot policy: first, random, greedy (default: greedy)
//!   --json          Print the report as JSON
//!   --verbose       Per-run and per-exchange logging
//!   --quiet         Only the report

use fate::simulator::{run_simulation, SelectionPolicy, SimConfig};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn parse_value<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).map(|raw| raw.parse::<T>()) {
        Some(Ok(value)) => value,
        _ => {
            eprintln!("{flag} requires a valid value");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                config.num_runs = parse_value(&args, i, "--runs");
            }
            "--seed" => {
                i += 1;
                config.seed = Some(parse_value(&args, i, "--seed"));
            }
            "--max-rolls" => {
                i += 1;
                config.max_rolls_per_run = parse_value(&args, i, "--max-rolls");
            }
            "--policy" => {
                i += 1;
                config.policy = parse_value::<SelectionPolicy>(&args, i, "--policy");
            }
            "--json" => config.json = true,
            "--verbose" => config.verbosity = 2,
            "--quiet" => config.verbosity = 0,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn print_usage() {
    eprintln!(
        "Dice of Fate Headless Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N        Games to play (default: 1000)\n\
         \x20 --seed N        RNG seed; run i uses seed + i (default: random)\n\
         \x20 --max-rolls N   Roll cap per game (default: 10000)\n\
         \x20 --policy P      Loot policy: first, random, greedy (default: greedy)\n\
         \x20 --json          Print the report as JSON\n\
         \x20 --verbose       Per-run and per-exchange logging\n\
         \x20 --quiet         Only the report\n\
         \x20 --help, -h      Show this help"
    );
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "error",
        1 => "warn",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let config = parse_args();
    init_logging(config.verbosity);

    if config.verbosity > 0 && !config.json {
        eprintln!(
            "Dice of Fate Simulator: {} run(s), policy={}, seed={}",
            config.num_runs,
            config.policy,
            config
                .seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "random".to_string()),
        );
    }

    let report = run_simulation(&config);

    if config.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("failed to serialize report: {err}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", report.to_text());
    }
}
