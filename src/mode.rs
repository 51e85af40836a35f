//! Runtime execution-model detection.
//! The host is probed once for the partitioned-scheduling marker; the result
//! is memoized and never re-evaluated for the life of the process.

use crate::host::CapabilityProbe;
use once_cell::sync::OnceCell;
use std::fmt;

/// Which task-execution model the host runtime provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeMode {
    /// The world is split into independently scheduled regions, each with
    /// its own execution context.
    Partitioned,
    /// One shared single-threaded scheduling context for all tasks.
    Global,
}

impl RuntimeMode {
    pub fn is_partitioned(self) -> bool {
        matches!(self, RuntimeMode::Partitioned)
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeMode::Partitioned => f.write_str("partitioned"),
            RuntimeMode::Global => f.write_str("global"),
        }
    }
}

/// Write-once memo for a detected [`RuntimeMode`].
///
/// The first call to [`resolve`](Self::resolve) runs the probe; every later
/// call returns the memoized value without touching the probe again, even
/// when first use happens concurrently from several threads.
pub struct ModeCell {
    cell: OnceCell<RuntimeMode>,
}

impl ModeCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Detect the mode, probing at most once over the life of this cell.
    pub fn resolve(&self, probe: &dyn CapabilityProbe) -> RuntimeMode {
        *self.cell.get_or_init(|| Self::probe_once(probe))
    }

    /// The memoized mode, if detection has already run.
    pub fn get(&self) -> Option<RuntimeMode> {
        self.cell.get().copied()
    }

    fn probe_once(probe: &dyn CapabilityProbe) -> RuntimeMode {
        let mode = match probe.region_marker_present() {
            Ok(true) => RuntimeMode::Partitioned,
            Ok(false) => RuntimeMode::Global,
            Err(err) => {
                // Lookup failure is indistinguishable from absence for our
                // purposes: non-partitioned hosts are the common case.
                tracing::warn!(error = %err, "capability probe failed, assuming global scheduling");
                RuntimeMode::Global
            }
        };
        tracing::info!(%mode, "host runtime mode detected");
        mode
    }
}

impl Default for ModeCell {
    fn default() -> Self {
        Self::new()
    }
}

static PROCESS_MODE: ModeCell = ModeCell::new();

/// Process-wide runtime mode, probed on first call and fixed thereafter.
/// Concurrent first calls agree on one value; the probe runs exactly once.
pub fn runtime_mode(probe: &dyn CapabilityProbe) -> RuntimeMode {
    PROCESS_MODE.resolve(probe)
}

/// Whether the detected host is the partitioned variant. Exposed for
/// callers that vary unrelated behavior by execution model.
pub fn is_partitioned(probe: &dyn CapabilityProbe) -> bool {
    runtime_mode(probe).is_partitioned()
}
