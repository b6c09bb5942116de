use color_eyre::Result;

/// Aggregate CPU ticks since boot, summed across all cores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuSnapshot {
    pub total_ticks: u64,
    pub idle_ticks: u64,
}

/// Instantaneous memory counters in kB, as the kernel reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryTotals {
    pub total_kb: u64,
    pub free_kb: u64,
    pub buffers_kb: u64,
    pub cached_kb: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSample {
    pub pid: i32,
    /// Raw kernel command name. Identity is the pid; the name is display data.
    pub name: String,
    /// utime + stime since the process started, not since the last sample.
    pub cpu_ticks_cumulative: u64,
    pub rss_kb: f32,
}

/// Read-only view of the kernel counters the monitor samples each cycle.
pub trait CounterSource {
    fn read_system_cpu(&mut self) -> Result<CpuSnapshot>;

    fn read_memory(&mut self) -> Result<MemoryTotals>;

    /// Failing here means the process listing itself is unreadable.
    fn list_process_ids(&mut self) -> Result<Vec<i32>>;

    /// `None` when the process is gone or its stat could not be read.
    fn read_process_sample(&mut self, pid: i32) -> Option<ProcessSample>;

    fn ticks_per_second(&self) -> u32;
}
