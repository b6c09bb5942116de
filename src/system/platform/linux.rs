use std::fs;

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use procfs::process::{Process, all_processes};

use crate::system::counters::{CounterSource, CpuSnapshot, MemoryTotals, ProcessSample};

pub struct PlatformSource {
    page_size_kb: f32,
    ticks_per_second: u32,
}

impl PlatformSource {
    pub fn open() -> Result<Self> {
        let ticks = procfs::ticks_per_second();
        let ticks_per_second =
            u32::try_from(ticks).map_err(|_| eyre!("implausible clock tick rate {ticks}"))?;
        Ok(PlatformSource {
            page_size_kb: procfs::page_size() as f32 / 1024.0,
            ticks_per_second,
        })
    }
}

impl CounterSource for PlatformSource {
    fn read_system_cpu(&mut self) -> Result<CpuSnapshot> {
        let contents = fs::read_to_string("/proc/stat").wrap_err("failed to read /proc/stat")?;
        let line = contents
            .lines()
            .next()
            .ok_or_else(|| eyre!("/proc/stat is empty"))?;
        parse_cpu_line(line).ok_or_else(|| eyre!("unrecognised cpu line in /proc/stat: {line}"))
    }

    fn read_memory(&mut self) -> Result<MemoryTotals> {
        let contents =
            fs::read_to_string("/proc/meminfo").wrap_err("failed to read /proc/meminfo")?;
        Ok(parse_meminfo(&contents))
    }

    fn list_process_ids(&mut self) -> Result<Vec<i32>> {
        let processes = all_processes().wrap_err("failed to list processes in /proc")?;
        // Entries that vanish while the directory is walked are just skipped.
        Ok(processes.flatten().map(|p| p.pid).collect())
    }

    fn read_process_sample(&mut self, pid: i32) -> Option<ProcessSample> {
        let stat = Process::new(pid).ok()?.stat().ok()?;
        Some(ProcessSample {
            pid,
            name: stat.comm,
            cpu_ticks_cumulative: stat.utime as u64 + stat.stime as u64,
            rss_kb: stat.rss as f32 * self.page_size_kb,
        })
    }

    fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }
}

/// Parse the aggregate `cpu` line of `/proc/stat`.
///
/// Idle includes iowait. Kernels that report fewer than eight columns have the
/// missing ones counted as zero.
pub fn parse_cpu_line(line: &str) -> Option<CpuSnapshot> {
    let mut fields = line.split_whitespace();
    if fields.next()? != "cpu" {
        return None;
    }
    // user nice system idle iowait irq softirq steal
    let values: Vec<u64> = fields
        .take(8)
        .map(|f| f.parse().ok())
        .collect::<Option<_>>()?;
    if values.len() < 4 {
        return None;
    }
    let field = |i: usize| values.get(i).copied().unwrap_or(0);
    Some(CpuSnapshot {
        total_ticks: values.iter().sum(),
        idle_ticks: field(3) + field(4),
    })
}

pub fn parse_meminfo(contents: &str) -> MemoryTotals {
    let mut totals = MemoryTotals::default();
    for line in contents.lines() {
        let mut parts = line.split_whitespace();
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        let Ok(kb) = value.parse::<u64>() else {
            continue;
        };
        match key {
            "MemTotal:" => totals.total_kb = kb,
            "MemFree:" => totals.free_kb = kb,
            "Buffers:" => totals.buffers_kb = kb,
            "Cached:" => totals.cached_kb = kb,
            _ => {}
        }
    }
    totals
}
