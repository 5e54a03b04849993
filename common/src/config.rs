#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Silences log output and the progress bar.
    pub quiet: bool,
    /// Raises the log level once per occurrence (warn, info, debug, trace).
    pub verbose: u8,
    /// Never colour the report, even on a terminal.
    pub no_color: bool,
    /// Runs primality checks on the rayon thread pool.
    ///
    /// Output order is unaffected.
    pub parallel: bool,
}
