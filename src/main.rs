use color_bloom::{BloomEngine, BloomParams, DistanceMetric};

fn main() {
    // Demo stub: small color space, seeded run, summary on stdout
    let params = BloomParams {
        bits_per_channel: 3,
        seed: 1024,
        metric: DistanceMetric::Euclidean,
        ..Default::default()
    };

    let mut engine = match BloomEngine::new(params) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    match engine.generate() {
        Ok(outcome) => {
            let res = &outcome.result;
            println!(
                "{}x{} seed_index={} steps={} latency_ms={:.3}",
                res.width, res.height, res.seed_index, res.steps, res.latency_ms
            );
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
