pub mod primes;

use clap::Parser;
use primip_common::config::Config;

#[derive(Parser, Debug)]
#[command(name = "primip")]
#[command(about = "Find primes in a range of IP addresses.")]
#[command(version, allow_negative_numbers = true)]
pub struct CommandLine {
    /// The start of the IP range
    pub ip_range_start: String,

    /// The end of the IP range
    pub ip_range_end: String,

    /// The point in the IP range list where prime processing should start
    #[arg(short = 's', long, default_value_t = 0)]
    pub slice_start: i64,

    /// The point in the IP range list where prime processing should end
    #[arg(short = 'e', long)]
    pub slice_end: Option<i64>,

    /// Test addresses on all cores (output order is unchanged)
    #[arg(short = 'p', long)]
    pub parallel: bool,

    /// Silence logs and the progress spinner
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Never colour the output
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            verbose: self.verbose,
            no_color: self.no_color,
            parallel: self.parallel,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
