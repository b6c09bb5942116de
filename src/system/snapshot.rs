use super::table::ProcessTableEntry;

/// Everything one cycle hands to the presenter.
#[derive(Debug, Clone, Default)]
pub struct SystemSnapshot {
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub rows: Vec<ProcessTableEntry>,
    /// Non-fatal problem noticed while sampling, shown until the next cycle.
    pub advisory: Option<String>,
}
