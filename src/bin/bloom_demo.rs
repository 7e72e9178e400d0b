use color_bloom::config::{self, RuntimeConfig};
use color_bloom::render::{save_png, write_json_file};
use color_bloom::{BloomEngine, BloomReport};
use std::env;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "bloom_demo".to_string());
    let config: RuntimeConfig = config::parse_cli(&program)?;

    let mut engine = BloomEngine::new(config.engine.to_params()).map_err(|e| e.to_string())?;
    let detailed = engine.generate_detailed().map_err(|e| e.to_string())?;
    let report = detailed.report();

    if config.output.format.includes_text() {
        print_text_summary(&report);
    }

    if config.output.format.includes_json() {
        if let Some(path) = &config.output.json_out {
            write_json_file(path, &report)?;
            println!("JSON report written to {}", path.display());
        } else {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            println!("{json}");
        }
    }

    if let Some(path) = &config.output.image_out {
        save_png(&detailed.outcome.canvas, path)?;
        println!("Image written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(report: &BloomReport) {
    let res = &report.result;
    println!("Bloom summary");
    println!("  canvas: {}x{}", res.width, res.height);
    println!(
        "  bits_per_channel: {} ({} colors)",
        res.bits_per_channel,
        res.width * res.height
    );
    println!("  seed: {} (first pixel at index {})", res.seed, res.seed_index);
    println!("  metric: {:?} / {:?}", res.metric, res.aggregation);
    println!("  steps: {}", res.steps);
    println!("  latency_ms: {:.3}", res.latency_ms);

    let trace = &report.trace;
    println!(
        "\nTimings (ms): palette={:.3} growth={:.3}",
        trace.palette_ms, trace.growth_ms
    );
    println!(
        "Frontier peak: {} cells; mean brightness: {:.1}",
        trace.peak_frontier, trace.mean_brightness
    );
}
