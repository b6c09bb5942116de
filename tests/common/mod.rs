#![allow(dead_code)]

use std::collections::VecDeque;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use ticktop::system::counters::{CounterSource, CpuSnapshot, MemoryTotals, ProcessSample};

/// One cycle's worth of counters.
#[derive(Debug, Clone)]
pub struct Cycle {
    pub cpu: CpuSnapshot,
    pub memory: MemoryTotals,
    /// `None` makes the process listing fail for this cycle.
    pub processes: Option<Vec<ProcessSample>>,
    /// Listed, but gone by the time their stat is read.
    pub vanished: Vec<i32>,
}

impl Cycle {
    pub fn new(total: u64, idle: u64, processes: Vec<ProcessSample>) -> Self {
        Cycle {
            cpu: CpuSnapshot {
                total_ticks: total,
                idle_ticks: idle,
            },
            memory: MemoryTotals {
                total_kb: 8_000_000,
                free_kb: 2_000_000,
                buffers_kb: 500_000,
                cached_kb: 1_500_000,
            },
            processes: Some(processes),
            vanished: Vec::new(),
        }
    }

    pub fn listing_fails(mut self) -> Self {
        self.processes = None;
        self
    }

    pub fn with_vanished(mut self, pids: &[i32]) -> Self {
        self.vanished = pids.to_vec();
        self
    }

    pub fn with_memory(mut self, memory: MemoryTotals) -> Self {
        self.memory = memory;
        self
    }
}

/// Replays cycles in order; each system CPU read advances to the next one.
/// The last cycle repeats once the script runs out.
pub struct ScriptedSource {
    cycles: VecDeque<Cycle>,
    current: Option<Cycle>,
    ticks_per_second: u32,
}

impl ScriptedSource {
    pub fn new(cycles: Vec<Cycle>) -> Self {
        ScriptedSource {
            cycles: cycles.into(),
            current: None,
            ticks_per_second: 1,
        }
    }

    pub fn with_ticks_per_second(mut self, ticks: u32) -> Self {
        self.ticks_per_second = ticks;
        self
    }

    fn current(&self) -> Result<&Cycle> {
        self.current
            .as_ref()
            .ok_or_else(|| eyre!("no cycle has been read yet"))
    }
}

impl CounterSource for ScriptedSource {
    fn read_system_cpu(&mut self) -> Result<CpuSnapshot> {
        if let Some(next) = self.cycles.pop_front() {
            self.current = Some(next);
        }
        Ok(self.current()?.cpu)
    }

    fn read_memory(&mut self) -> Result<MemoryTotals> {
        Ok(self.current()?.memory)
    }

    fn list_process_ids(&mut self) -> Result<Vec<i32>> {
        let cycle = self.current()?;
        let processes = cycle
            .processes
            .as_ref()
            .ok_or_else(|| eyre!("process listing unreadable"))?;
        let mut pids: Vec<i32> = processes.iter().map(|p| p.pid).collect();
        pids.extend(cycle.vanished.iter().copied());
        Ok(pids)
    }

    fn read_process_sample(&mut self, pid: i32) -> Option<ProcessSample> {
        let cycle = self.current.as_ref()?;
        cycle
            .processes
            .as_ref()?
            .iter()
            .find(|p| p.pid == pid)
            .cloned()
    }

    fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }
}

pub fn proc(pid: i32, name: &str, ticks: u64) -> ProcessSample {
    ProcessSample {
        pid,
        name: name.to_string(),
        cpu_ticks_cumulative: ticks,
        rss_kb: 2048.0,
    }
}
