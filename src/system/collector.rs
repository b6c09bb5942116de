use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use tracing::{debug, warn};

use super::counters::CounterSource;
use super::rate::RateEngine;
use super::snapshot::SystemSnapshot;
use super::table::ProcessTable;

/// Sequences one sampling cycle: system CPU, memory, then the process table.
pub struct Collector<S> {
    source: S,
    engine: RateEngine,
    table: ProcessTable,
    // CPU total at the last successful table refresh. A skipped cycle widens
    // the next process window instead of mixing two baselines.
    table_baseline_total: Option<u64>,
}

impl<S: CounterSource> Collector<S> {
    pub fn new(source: S) -> Self {
        Collector {
            source,
            engine: RateEngine::new(),
            table: ProcessTable::new(),
            table_baseline_total: None,
        }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn table(&self) -> &ProcessTable {
        &self.table
    }

    /// Take the throwaway baseline so the first rendered rates are real deltas.
    pub fn prime(&mut self) -> Result<()> {
        let cpu = self
            .source
            .read_system_cpu()
            .wrap_err("failed to read baseline cpu counters")?;
        self.engine.prime(cpu);

        let ticks_per_second = self.source.ticks_per_second();
        let rows = self
            .table
            .refresh(&mut self.source, 1, ticks_per_second)
            .wrap_err("failed to take baseline process listing")?;
        self.table_baseline_total = Some(cpu.total_ticks);
        debug!(processes = rows.len(), "baseline primed");
        Ok(())
    }

    pub fn refresh(&mut self) -> Result<SystemSnapshot> {
        let _refresh_span = tracing::debug_span!("collector.refresh").entered();

        let cpu = self
            .source
            .read_system_cpu()
            .wrap_err("failed to read system cpu counters")?;
        let cpu_percent = self.engine.compute_system_cpu_percent(cpu);

        let (memory_percent, advisory) = match self.engine.compute_memory_percent(&mut self.source)
        {
            Ok(percent) => (percent, None),
            Err(err) => {
                warn!(%err, "memory usage unavailable");
                (0.0, Some(format!("Memory usage unavailable: {err}")))
            }
        };

        let system_tick_delta = self
            .table_baseline_total
            .map_or(0, |base| cpu.total_ticks.saturating_sub(base));
        let ticks_per_second = self.source.ticks_per_second();
        let rows = self
            .table
            .refresh(&mut self.source, system_tick_delta, ticks_per_second)
            .wrap_err("failed to list processes")?;
        self.table_baseline_total = Some(cpu.total_ticks);

        debug!(
            processes = rows.len(),
            cpu_percent,
            memory_percent,
            system_tick_delta,
            "cycle sampled"
        );

        Ok(SystemSnapshot {
            cpu_percent,
            memory_percent,
            rows,
            advisory,
        })
    }
}
