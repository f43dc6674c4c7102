//! Runs both production strategies back to back through the same sampling loop.
//! can be run with `cargo run --example compare -- 1000000`

use std::error::Error;
use std::io;

use log::{info, warn};

use person_producer::bench::{run, Strategy, DEFAULT_COUNT};
use person_producer::memory::ProcessMemory;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let count = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_COUNT,
    };
    let mut sampler = ProcessMemory::new()?;

    // lazy first, so the eager pass cannot hand it already-grown pages
    for strategy in [Strategy::Lazy, Strategy::Eager] {
        let report = run(strategy, count, &mut sampler, &mut io::sink())?;
        warn!("{:?} took: {:.2?}", strategy, report.elapsed);
        warn!(
            "{:?} memory: {:.2} MB -> {:.2} MB",
            strategy, report.initial_mb, report.final_mb
        );
        info!("{:?} sampled {} of {} records", strategy, report.tally.sampled, report.tally.produced);
    }

    Ok(())
}
