//! Plain data row types written by output backends.

/// Timing and population for one executed epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochSummaryRow {
    pub epoch:          u64,
    pub elapsed_micros: u64,
    /// Size of the live set the epoch ran with.
    pub live_agents:    u64,
}

/// One sample of a named `OutputStore` series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRow<'a> {
    pub series: &'a str,
    pub epoch:  u64,
    pub value:  f64,
}
