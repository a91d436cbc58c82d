use std::time::Instant;

use life_engine::{BoardConfig, EngineError, GridEngine, Scheduler};

const DEFAULT_GENERATIONS: u64 = 20;

/// Headless driver: `life_engine [generations] [seed]`
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let generations = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_GENERATIONS);
    let seed = args.next().and_then(|arg| arg.parse().ok());

    if let Err(err) = run(generations, seed) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run(generations: u64, seed: Option<u64>) -> Result<(), EngineError> {
    let config = BoardConfig::default();
    let mut engine = match seed {
        Some(seed) => GridEngine::with_seed(config, seed)?,
        None => GridEngine::new(config)?,
    };
    engine.randomize();
    log::info!("seeded board, population {}", engine.population());

    let mut scheduler = Scheduler::default();
    scheduler.start();

    let mut last = Instant::now();
    while engine.generation() < generations {
        std::thread::sleep(scheduler.interval());
        let now = Instant::now();
        if scheduler.tick(&mut engine, now - last) {
            log::info!(
                "generation {:>4}: {} alive",
                engine.generation(),
                engine.population()
            );
        }
        last = now;
    }
    scheduler.stop();
    Ok(())
}
