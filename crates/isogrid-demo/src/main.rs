use std::path::PathBuf;
use std::process;

use isogrid_demo::report::{self, RunReport};
use isogrid_demo::runner::ScenarioRunner;
use isogrid_demo::scenes;
use isogrid_presets::{defaults, loader};

fn print_usage() {
    eprintln!("Usage: placement-demo [OPTIONS]");
    eprintln!("  --preset <name>    Built-in grid preset (default: isometric)");
    eprintln!("  --config <path>    Load the grid from a RON file instead of a preset");
    eprintln!("  --output <path>    Save the run report as JSON");
    eprintln!("  --list-presets     Print the built-in preset names and exit");
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut preset = defaults::DEFAULT_PRESET.to_string();
    let mut config_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            flag @ ("--preset" | "--config" | "--output") => {
                i += 1;
                let Some(value) = args.get(i) else {
                    eprintln!("Missing value for {}", flag);
                    process::exit(1);
                };
                match flag {
                    "--preset" => preset = value.clone(),
                    "--config" => config_path = Some(PathBuf::from(value)),
                    _ => output_path = Some(PathBuf::from(value)),
                }
            }
            "--list-presets" => {
                for name in defaults::preset_names() {
                    println!("{}", name);
                }
                process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let (grid_name, loaded) = match &config_path {
        Some(path) => (
            path.display().to_string(),
            loader::load_grid_file(path),
        ),
        None => (preset.clone(), defaults::load_preset(&preset)),
    };
    let coords = match loaded {
        Ok(coords) => coords,
        Err(e) => {
            log::error!("Failed to load grid '{}': {}", grid_name, e);
            process::exit(1);
        }
    };

    let runner = ScenarioRunner::new(coords);
    let roundtrip_failures = runner.roundtrip_failures();
    if roundtrip_failures > 0 {
        log::warn!("{} cells failed the grid round trip", roundtrip_failures);
    }

    let results: Vec<_> = scenes::standard_scenes()
        .iter()
        .map(|scene| runner.run_scene(scene))
        .collect();

    println!("\n## Placement Results ({})\n", grid_name);
    println!("{}", report::format_markdown(&results));
    println!("Conflicts:\n{}", report::format_conflicts(&results));

    let run = RunReport {
        grid: grid_name,
        roundtrip_failures,
        results,
    };

    if let Some(ref path) = output_path {
        if let Err(e) = report::save_report(path, &run) {
            log::error!("Failed to save report to {}: {}", path.display(), e);
            process::exit(1);
        }
        log::info!("Saved report to {}", path.display());
    }

    let failed = run.failed_scenes();
    if !failed.is_empty() || roundtrip_failures > 0 {
        eprintln!(
            "ERROR: {} scenes did not match their expected conflicts: {}",
            failed.len(),
            failed.join(", ")
        );
        process::exit(1);
    }

    log::info!("All scenes match.");
}
