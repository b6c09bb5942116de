use color_eyre::Result;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(not(target_os = "linux"))]
mod unsupported;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(not(target_os = "linux"))]
use unsupported as platform_impl;

pub use platform_impl::PlatformSource;

/// Open the kernel counter source for the running platform.
pub fn open_source() -> Result<PlatformSource> {
    PlatformSource::open()
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;
    use crate::system::counters::CounterSource;

    #[test]
    fn live_source_reads_current_process() {
        let mut source = open_source().unwrap();
        assert!(source.ticks_per_second() > 0);

        let cpu = source.read_system_cpu().unwrap();
        assert!(cpu.total_ticks >= cpu.idle_ticks);

        let pid = std::process::id() as i32;
        let pids = source.list_process_ids().unwrap();
        assert!(pids.contains(&pid));

        let sample = source.read_process_sample(pid).unwrap();
        assert_eq!(sample.pid, pid);
        assert!(sample.rss_kb > 0.0);
    }

    #[test]
    fn live_source_reports_missing_pid_as_gone() {
        let mut source = open_source().unwrap();
        assert!(source.read_process_sample(i32::MAX).is_none());
    }
}
