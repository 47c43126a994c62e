//! Plain data row types written by output backends.

/// Summary statistics for one colony generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummaryRow {
    pub generation:       u32,
    pub routes_completed: u64,
    pub walks_failed:     u64,
    /// Shortest simplified route length of this generation; `None` (an
    /// empty CSV cell) when no walker completed.
    pub shortest_this_generation: Option<u64>,
    /// Best route length seen so far across the run.
    pub shortest_overall: Option<u64>,
}
