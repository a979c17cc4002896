//! Balance simulator CLI.
//!
//! Runs seeded headless runs of the real run engine and reports how the
//! caster keeps up with enemy health growth.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 100 full runs
//!   cargo run --bin simulate -- -n 20 -d 120     # 20 two-minute runs
//!   cargo run --bin simulate -- --seed 42        # Reproducible run

use orb::build_info::version_line;
use orb::simulator::{run_simulation, SimConfig};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, show_curve) = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                ORB BALANCE SIMULATOR                          ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!("  {}", version_line());
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Duration:       {:.0}s", config.effective_duration());
    println!("  Tick:           {}s", config.tick_seconds);
    println!("  Orb:            {}", config.orb);
    println!("  Buy Upgrades:   {}", config.buy_upgrades);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    println!("{}", report.to_text());

    if show_curve {
        println!("{}", report.balance_curve_text());
    }

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write JSON report: {}", e);
                process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut show_curve = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-d" | "--duration" => {
                if i + 1 < args.len() {
                    if let Ok(seconds) = args[i + 1].parse::<f64>() {
                        config.duration_seconds = seconds;
                        i += 1;
                    }
                }
            }
            "--orb" => {
                if i + 1 < args.len() {
                    config.orb = args[i + 1].clone();
                    i += 1;
                }
            }
            "--no-upgrades" => {
                config.buy_upgrades = false;
            }
            "--curve" => {
                show_curve = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                config = SimConfig::quick_check();
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, show_curve)
}

fn print_help() {
    println!("Orb Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>       Number of runs (default: 100)");
    println!("    -s, --seed <S>       Random seed for reproducibility");
    println!("    -d, --duration <D>   Seconds per run, at most 600 (default: 600)");
    println!("    --orb <ID>           Passive item to equip (default: base)");
    println!("    --no-upgrades        Never spend silver");
    println!("    --curve              Show the per-minute balance table");
    println!("    -v, --verbose        Print every run");
    println!("    --json               Save JSON report");
    println!("    --quick              Quick check (10 two-minute runs)");
    println!("    -h, --help           Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                       # Default run");
    println!("    cargo run --bin simulate -- --orb fire --curve # Fire orb with curve");
    println!("    cargo run --bin simulate -- --seed 42 --json   # Reproducible, saved");
}
