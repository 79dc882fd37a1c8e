use serde::Serialize;

/// Aggregated weekly counters derived from a classified record set.
///
/// `remaining` is always computed by subtraction, so
/// `served + missed + remaining == total` holds for every instance built
/// by the aggregator.
#[derive(Debug, Default, Clone, Serialize, PartialEq, Eq)]
pub struct WeekProgress {
    pub total: usize,
    pub served: usize,
    pub missed: usize,
    pub remaining: usize,
    /// Availed share in [0, 100], round-half-up; 0 for an empty set.
    pub percentage: u32,
}
