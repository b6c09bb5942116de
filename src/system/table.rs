use std::cmp::Ordering;
use std::collections::HashMap;

use color_eyre::Result;

use super::counters::{CounterSource, ProcessSample};

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessTableEntry {
    pub sample: ProcessSample,
    pub cpu_percent: f32,
}

impl ProcessTableEntry {
    pub fn pid(&self) -> i32 {
        self.sample.pid
    }
}

/// Last-known sample per pid, carried from one cycle to the next.
///
/// The map is rebuilt from scratch on every successful refresh, so a pid that
/// drops out of the listing leaves nothing behind.
#[derive(Debug, Default)]
pub struct ProcessTable {
    previous: HashMap<i32, ProcessTableEntry>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.previous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previous.is_empty()
    }

    pub fn get(&self, pid: i32) -> Option<&ProcessTableEntry> {
        self.previous.get(&pid)
    }

    /// Sample every listed process, derive its CPU share of the elapsed
    /// system ticks, and return the rows ranked for display.
    ///
    /// Only a failure to list processes is an error; in that case the
    /// previous table is left untouched.
    pub fn refresh<S: CounterSource>(
        &mut self,
        source: &mut S,
        system_tick_delta: u64,
        ticks_per_second: u32,
    ) -> Result<Vec<ProcessTableEntry>> {
        let pids = source.list_process_ids()?;
        let samples = pids
            .into_iter()
            .filter_map(|pid| source.read_process_sample(pid));
        Ok(self.apply(samples, system_tick_delta, ticks_per_second))
    }

    /// Match a cycle's samples against the previous table and replace it.
    pub fn apply<I>(
        &mut self,
        samples: I,
        system_tick_delta: u64,
        ticks_per_second: u32,
    ) -> Vec<ProcessTableEntry>
    where
        I: IntoIterator<Item = ProcessSample>,
    {
        let mut next = HashMap::with_capacity(self.previous.len());
        for sample in samples {
            let cpu_percent = match self.previous.get(&sample.pid) {
                Some(prev) if prev.sample.name == sample.name => process_cpu_percent(
                    prev.sample.cpu_ticks_cumulative,
                    sample.cpu_ticks_cumulative,
                    system_tick_delta,
                    ticks_per_second,
                ),
                // First sighting, or the pid now belongs to a different program.
                _ => 0.0,
            };
            next.insert(
                sample.pid,
                ProcessTableEntry {
                    sample,
                    cpu_percent,
                },
            );
        }
        self.previous = next;

        let mut rows: Vec<ProcessTableEntry> = self.previous.values().cloned().collect();
        rank_entries(&mut rows);
        rows
    }
}

pub fn process_cpu_percent(
    prev_ticks: u64,
    curr_ticks: u64,
    system_tick_delta: u64,
    ticks_per_second: u32,
) -> f32 {
    let window = system_tick_delta as f64 * ticks_per_second as f64;
    if window <= 0.0 {
        return 0.0;
    }
    let delta = curr_ticks.saturating_sub(prev_ticks);
    ((delta as f64 / window) * 100.0).clamp(0.0, 100.0) as f32
}

/// CPU% descending, pid ascending on ties.
pub fn rank_entries(rows: &mut [ProcessTableEntry]) {
    rows.sort_by(|a, b| {
        b.cpu_percent
            .partial_cmp(&a.cpu_percent)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.pid().cmp(&b.pid()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(pid: i32, name: &str, ticks: u64) -> ProcessSample {
        ProcessSample {
            pid,
            name: name.to_string(),
            cpu_ticks_cumulative: ticks,
            rss_kb: 1024.0,
        }
    }

    fn entry(pid: i32, cpu: f32) -> ProcessTableEntry {
        ProcessTableEntry {
            sample: sample(pid, "p", 0),
            cpu_percent: cpu,
        }
    }

    #[test]
    fn first_observation_is_zero_regardless_of_ticks() {
        let mut table = ProcessTable::new();
        let rows = table.apply([sample(1, "init", 9_999_999)], 1, 100);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cpu_percent, 0.0);
    }

    #[test]
    fn delta_is_scaled_by_tick_window() {
        let mut table = ProcessTable::new();
        table.apply([sample(7, "worker", 1000)], 1, 100);
        let rows = table.apply([sample(7, "worker", 1050)], 1, 100);
        assert_eq!(rows[0].cpu_percent, 50.0);
    }

    #[test]
    fn ticks_going_backwards_yield_zero() {
        let mut table = ProcessTable::new();
        table.apply([sample(7, "worker", 5000)], 1, 100);
        let rows = table.apply([sample(7, "worker", 10)], 1, 100);
        assert_eq!(rows[0].cpu_percent, 0.0);
    }

    #[test]
    fn zero_window_yields_zero() {
        let mut table = ProcessTable::new();
        table.apply([sample(7, "worker", 0)], 0, 100);
        let rows = table.apply([sample(7, "worker", 500)], 0, 100);
        assert_eq!(rows[0].cpu_percent, 0.0);
    }

    #[test]
    fn rate_is_clamped_to_one_hundred() {
        assert_eq!(process_cpu_percent(0, 1_000_000, 1, 100), 100.0);
    }

    #[test]
    fn reused_pid_with_new_name_starts_fresh() {
        let mut table = ProcessTable::new();
        table.apply([sample(42, "old", 100)], 1, 100);
        let rows = table.apply([sample(42, "new", 190)], 1, 100);
        assert_eq!(rows[0].cpu_percent, 0.0);
        assert_eq!(rows[0].sample.name, "new");
    }

    #[test]
    fn exited_pid_leaves_no_state() {
        let mut table = ProcessTable::new();
        table.apply([sample(1, "a", 10), sample(2, "b", 10)], 1, 100);
        let rows = table.apply([sample(1, "a", 20)], 1, 100);
        assert_eq!(rows.len(), 1);
        assert!(table.get(2).is_none());

        // pid 2 coming back is a first observation, not a delta against 10.
        let rows = table.apply([sample(1, "a", 30), sample(2, "b", 80)], 1, 100);
        let two = rows.iter().find(|r| r.pid() == 2).unwrap();
        assert_eq!(two.cpu_percent, 0.0);
    }

    #[test]
    fn ranking_breaks_ties_by_ascending_pid() {
        let mut rows = vec![entry(200, 10.0), entry(100, 10.0), entry(300, 50.0)];
        rank_entries(&mut rows);
        let order: Vec<(i32, f32)> = rows.iter().map(|r| (r.pid(), r.cpu_percent)).collect();
        assert_eq!(order, vec![(300, 50.0), (100, 10.0), (200, 10.0)]);
    }
}
