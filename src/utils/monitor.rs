#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessesToUpdate, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct PhaseStats {
    pub phase: String,
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
    pub phase_time: Duration,
    pub elapsed_time: Duration,
}

#[cfg(feature = "cli")]
struct MonitorState {
    system: System,
    last_mark: Instant,
    peak_memory_mb: u64,
}

/// Samples process CPU and memory between analysis phases.
#[cfg(feature = "cli")]
pub struct PhaseMonitor {
    state: Option<Mutex<MonitorState>>,
    pid: Option<Pid>,
    start_time: Instant,
}

#[cfg(feature = "cli")]
impl PhaseMonitor {
    pub fn new(enabled: bool) -> Self {
        let pid = if enabled {
            sysinfo::get_current_pid().ok()
        } else {
            None
        };

        if enabled && pid.is_none() {
            tracing::warn!("Could not resolve current PID, monitoring disabled");
        }

        let state = pid.map(|pid| {
            let mut system = System::new();
            system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
            Mutex::new(MonitorState {
                system,
                last_mark: Instant::now(),
                peak_memory_mb: 0,
            })
        });

        Self {
            state,
            pid,
            start_time: Instant::now(),
        }
    }

    pub fn sample(&self, phase: &str) -> Option<PhaseStats> {
        let pid = self.pid?;
        let mut state = self.state.as_ref()?.lock().ok()?;
        state
            .system
            .refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

        let (cpu_usage, memory_mb) = {
            let process = state.system.process(pid)?;
            (process.cpu_usage(), process.memory() / 1024 / 1024)
        };
        state.peak_memory_mb = state.peak_memory_mb.max(memory_mb);

        let now = Instant::now();
        let phase_time = now.duration_since(state.last_mark);
        state.last_mark = now;

        Some(PhaseStats {
            phase: phase.to_string(),
            cpu_usage,
            memory_usage_mb: memory_mb,
            peak_memory_mb: state.peak_memory_mb,
            phase_time,
            elapsed_time: self.start_time.elapsed(),
        })
    }

    pub fn log_phase(&self, phase: &str) {
        if let Some(stats) = self.sample(phase) {
            tracing::info!(
                phase = %stats.phase,
                cpu = stats.cpu_usage,
                memory_mb = stats.memory_usage_mb,
                peak_mb = stats.peak_memory_mb,
                "📊 phase finished in {:?} (total {:?})",
                stats.phase_time,
                stats.elapsed_time
            );
        }
    }

    pub fn log_final_stats(&self) {
        if let Some(stats) = self.sample("final") {
            tracing::info!(
                "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB",
                stats.elapsed_time,
                stats.peak_memory_mb
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_some()
    }
}

#[cfg(feature = "cli")]
impl Default for PhaseMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// No-op stand-in when built without the cli feature
#[cfg(not(feature = "cli"))]
#[derive(Default)]
pub struct PhaseMonitor;

#[cfg(not(feature = "cli"))]
impl PhaseMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_phase(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_produces_no_stats() {
        let monitor = PhaseMonitor::new(false);
        assert!(!monitor.is_enabled());
        assert!(monitor.sample("extract").is_none());
    }

    #[test]
    fn test_enabled_monitor_samples_current_process() {
        let monitor = PhaseMonitor::new(true);
        assert!(monitor.is_enabled());

        let first = monitor.sample("x").unwrap();
        assert_eq!(first.phase, "x");
        assert!(first.peak_memory_mb >= first.memory_usage_mb);

        let second = monitor.sample("y").unwrap();
        assert_eq!(second.phase, "y");
        assert!(second.elapsed_time >= first.elapsed_time);
        assert!(second.peak_memory_mb >= first.peak_memory_mb);
    }
}
