//! Terminal driver for the gridlife engine: seed a grid, advance a
//! number of generations, and print each one.

use std::env;
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use gridlife::{EngineParams, GridController, SeedKind};

/// Run configuration (can be loaded from YAML, CLI flags override).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct Config {
    width: usize,
    height: usize,
    generations: u64,
    /// Milliseconds to sleep between printed generations.
    tick_ms: u64,
    seed_kind: SeedKind,
    engine: EngineParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
            generations: 20,
            tick_ms: 100,
            seed_kind: SeedKind::Random,
            engine: EngineParams::default(),
        }
    }
}

impl Config {
    fn from_yaml(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

fn parse_seed_kind(name: &str) -> SeedKind {
    match name {
        "random" => SeedKind::Random,
        "acorn" => SeedKind::Acorn,
        "pulsar" => SeedKind::Pulsar,
        "glider-gun" | "glider_gun" => SeedKind::GliderGun,
        "pentadecathlon" => SeedKind::Pentadecathlon,
        "exploder" => SeedKind::Exploder,
        other => {
            eprintln!("Unknown seed kind '{}', using random", other);
            SeedKind::Random
        }
    }
}

fn parse_args() -> Config {
    let mut config = Config::default();
    let argv: Vec<String> = env::args().collect();

    // First pass: config file, so flags can override its values.
    let mut i = 1;
    while i < argv.len() {
        if argv[i] == "--config" {
            i += 1;
            match Config::from_yaml(&argv[i]) {
                Ok(loaded) => config = loaded,
                Err(e) => {
                    eprintln!("Error loading config {}: {}", argv[i], e);
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--config" => i += 1,
            "--width" => {
                i += 1;
                config.width = argv[i].parse().expect("Invalid width");
            }
            "--height" => {
                i += 1;
                config.height = argv[i].parse().expect("Invalid height");
            }
            "--generations" => {
                i += 1;
                config.generations = argv[i].parse().expect("Invalid generations");
            }
            "--tick-ms" => {
                i += 1;
                config.tick_ms = argv[i].parse().expect("Invalid tick-ms");
            }
            "--seed" => {
                i += 1;
                config.engine.seed = argv[i].parse().expect("Invalid seed");
            }
            "--seed-kind" => {
                i += 1;
                config.seed_kind = parse_seed_kind(&argv[i]);
            }
            "--chunk-size" => {
                i += 1;
                config.engine.chunk_size = argv[i].parse().expect("Invalid chunk-size");
            }
            "--help" | "-h" => {
                println!("Usage: run_life [OPTIONS]");
                println!("  --config <file.yaml>   Load configuration from YAML");
                println!("  --width <n>            Grid width (default 25)");
                println!("  --height <n>           Grid height (default 25)");
                println!("  --generations <n>      Generations to advance (default 20)");
                println!("  --tick-ms <n>          Delay between generations (default 100)");
                println!("  --seed <n>             RNG seed for random seeding");
                println!("  --seed-kind <name>     random | acorn | pulsar | glider-gun |");
                println!("                         pentadecathlon | exploder");
                println!("  --chunk-size <n>       Cells per scheduler chunk (default 500)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}

fn main() {
    env_logger::init();
    let config = parse_args();

    println!("Game of Life");
    println!("============\n");
    println!("  Grid: {}x{}", config.width, config.height);
    println!("  Seed kind: {}", config.seed_kind.display_name());
    println!("  Generations: {}", config.generations);
    println!("  Chunk size: {}\n", config.engine.chunk_size);

    let mut controller = match GridController::with_params(config.width, config.height, config.engine)
    {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    controller.set_initial_state(config.seed_kind);
    println!("Generation 0");
    print!("{}", controller.grid());

    let tick = Duration::from_millis(config.tick_ms);
    let buffer_timeout = Duration::from_secs(10);

    for _ in 0..config.generations {
        if !controller.wait_idle(buffer_timeout) {
            eprintln!("Timed out waiting for the next generation buffer");
            std::process::exit(1);
        }
        controller.advance();

        println!("Generation {}", controller.generation_count());
        print!("{}", controller.grid());

        if controller.has_only_dead_cells() {
            println!("All cells dead; stopping early.");
            break;
        }
        thread::sleep(tick);
    }
}
