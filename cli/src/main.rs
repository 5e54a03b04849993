mod commands;
mod terminal;

use commands::CommandLine;
use primip_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let args = CommandLine::parse_args();
    let cfg: Config = args.config();

    logging::init_logging(&cfg);
    print::initialize(&cfg);

    commands::primes::primes(&args, &cfg)
}
