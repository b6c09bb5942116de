use color_eyre::Result;
use color_eyre::eyre::eyre;

use crate::system::counters::{CounterSource, CpuSnapshot, MemoryTotals, ProcessSample};

const UNSUPPORTED: &str = "ticktop samples kernel counters from /proc and only runs on Linux";

pub struct PlatformSource;

impl PlatformSource {
    pub fn open() -> Result<Self> {
        Err(eyre!(UNSUPPORTED))
    }
}

impl CounterSource for PlatformSource {
    fn read_system_cpu(&mut self) -> Result<CpuSnapshot> {
        Err(eyre!(UNSUPPORTED))
    }

    fn read_memory(&mut self) -> Result<MemoryTotals> {
        Err(eyre!(UNSUPPORTED))
    }

    fn list_process_ids(&mut self) -> Result<Vec<i32>> {
        Err(eyre!(UNSUPPORTED))
    }

    fn read_process_sample(&mut self, _pid: i32) -> Option<ProcessSample> {
        None
    }

    fn ticks_per_second(&self) -> u32 {
        100
    }
}
