use std::error::Error;
use std::io;

use clap::{ArgEnum, Parser};

use person_producer::bench::{run, Strategy, DEFAULT_COUNT};
use person_producer::memory::ProcessMemory;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// How the records are produced before being sampled
    #[clap(arg_enum, default_value = "eager")]
    pub(crate) strategy: StrategyArg,
    /// Number of records to produce
    #[clap(long, default_value_t = DEFAULT_COUNT)]
    pub(crate) count: u64,
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Eager,
    Lazy,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Eager => Strategy::Eager,
            StrategyArg::Lazy => Strategy::Lazy,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut sampler = ProcessMemory::new()?;
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.strategy.into(), cli.count, &mut sampler, &mut out)?;

    Ok(())
}
