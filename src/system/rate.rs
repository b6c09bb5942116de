use std::fmt;

use super::counters::{CounterSource, CpuSnapshot, MemoryTotals};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricError {
    UnavailableMetric,
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricError::UnavailableMetric => write!(f, "memory metric unavailable"),
        }
    }
}

impl std::error::Error for MetricError {}

/// Turns successive cumulative CPU readings into a utilisation percentage.
///
/// Holds exactly one previous snapshot: every call to
/// [`RateEngine::compute_system_cpu_percent`] replaces it with the reading it
/// was given, so the rate always covers the interval since the last call.
#[derive(Debug, Default)]
pub struct RateEngine {
    previous: Option<CpuSnapshot>,
}

impl RateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the baseline without producing a rate.
    pub fn prime(&mut self, snapshot: CpuSnapshot) {
        self.previous = Some(snapshot);
    }

    pub fn previous(&self) -> Option<CpuSnapshot> {
        self.previous
    }

    pub fn compute_system_cpu_percent(&mut self, curr: CpuSnapshot) -> f32 {
        let percent = match self.previous {
            Some(prev) => cpu_percent_between(prev, curr),
            None => 0.0,
        };
        self.previous = Some(curr);
        percent
    }

    /// Stateless: reads fresh totals from the source on every call.
    pub fn compute_memory_percent<S: CounterSource>(
        &self,
        source: &mut S,
    ) -> Result<f32, MetricError> {
        let totals = source
            .read_memory()
            .map_err(|_| MetricError::UnavailableMetric)?;
        memory_percent(totals)
    }
}

pub fn cpu_percent_between(prev: CpuSnapshot, curr: CpuSnapshot) -> f32 {
    // A total that went backwards is a counter reset; treat it as no time elapsed.
    if curr.total_ticks <= prev.total_ticks {
        return 0.0;
    }
    let diff_total = curr.total_ticks - prev.total_ticks;
    let diff_idle = curr.idle_ticks.saturating_sub(prev.idle_ticks);
    let busy = diff_total.saturating_sub(diff_idle);
    (busy as f32 / diff_total as f32 * 100.0).clamp(0.0, 100.0)
}

pub fn memory_percent(totals: MemoryTotals) -> Result<f32, MetricError> {
    if totals.total_kb == 0 {
        return Err(MetricError::UnavailableMetric);
    }
    let used = totals.total_kb as f64
        - totals.free_kb as f64
        - totals.buffers_kb as f64
        - totals.cached_kb as f64;
    Ok(((used / totals.total_kb as f64) * 100.0).clamp(0.0, 100.0) as f32)
}
