use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, Signal, System};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KillResult {
    Success(i32, &'static str),
    Failed(i32, String),
    NotFound(i32),
}

impl KillResult {
    pub fn is_success(&self) -> bool {
        matches!(self, KillResult::Success(..))
    }

    /// Operator-facing text for the status line.
    pub fn message(&self) -> String {
        match self {
            KillResult::Success(pid, _) => format!("Process {pid} terminated."),
            KillResult::Failed(pid, _) => format!("Failed to kill process {pid} (try sudo)."),
            KillResult::NotFound(pid) => format!("Process {pid} not found"),
        }
    }
}

/// Sends the graceful termination signal to a process.
pub trait ProcessController {
    fn terminate(&mut self, pid: i32) -> KillResult;
}

pub struct SignalController {
    sys: System,
}

impl Default for SignalController {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalController {
    pub fn new() -> Self {
        SignalController { sys: System::new() }
    }
}

impl ProcessController for SignalController {
    fn terminate(&mut self, pid: i32) -> KillResult {
        let Ok(raw) = u32::try_from(pid) else {
            return KillResult::NotFound(pid);
        };
        if raw == 0 {
            return KillResult::NotFound(pid);
        }
        let pids = [Pid::from_u32(raw)];
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&pids),
            true,
            ProcessRefreshKind::nothing(),
        );
        let result = kill_process(&self.sys, pid, Signal::Term);
        info!(pid, outcome = ?result, "termination requested");
        result
    }
}

pub fn kill_process(sys: &System, pid: i32, signal: Signal) -> KillResult {
    let Ok(raw) = u32::try_from(pid) else {
        return KillResult::NotFound(pid);
    };
    match sys.process(Pid::from_u32(raw)) {
        Some(process) => {
            let signal_name = match signal {
                Signal::Term => "SIGTERM",
                Signal::Kill => "SIGKILL",
                _ => "signal",
            };
            match process.kill_with(signal) {
                Some(true) => KillResult::Success(pid, signal_name),
                Some(false) => KillResult::Failed(
                    pid,
                    format!("Failed to send {signal_name} to PID {pid}"),
                ),
                None => KillResult::Failed(
                    pid,
                    format!("{signal_name} is not supported on this platform"),
                ),
            }
        }
        None => KillResult::NotFound(pid),
    }
}
