#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Diagnostic verbosity, `0` keeps standard error quiet.
    pub verbose: u8,
    /// Buffers open ports until the scan completes and prints them ordered
    /// by address, then port.
    ///
    /// Does not change which ports are reported.
    pub sort: bool,
}
