//! Error taxonomy for the scheduling layer.
//! Configuration problems are fatal host mismatches; invocation problems are
//! per-call rejections. Neither triggers a fallback to the other backend.

use crate::mode::RuntimeMode;
use thiserror::Error;

/// Failure of the capability probe machinery itself.
///
/// "Marker absent" is not a probe error: the probe reports that as
/// `Ok(false)`. This type only covers cases where the probe could not run at
/// all, and the mode detector maps it to [`RuntimeMode::Global`] rather than
/// propagating it.
#[derive(Debug, Clone, Error)]
#[error("capability probe failed: {reason}")]
pub struct ProbeError {
    pub reason: String,
}

impl ProbeError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A host scheduling surface refused a registration call.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HostError {
    pub message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors surfaced by [`SchedulerBridge::schedule_repeating`].
///
/// [`SchedulerBridge::schedule_repeating`]: crate::scheduler::SchedulerBridge::schedule_repeating
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Precondition violation: a repeating task needs a period of at least
    /// one tick. Checked before any host primitive is invoked.
    #[error("repeating task period must be at least one tick (got {period})")]
    InvalidPeriod { period: u64 },

    /// The scheduling surface the detected mode requires is missing from the
    /// host runtime. This is a deployment or version mismatch, not a
    /// recoverable runtime condition.
    #[error("host runtime exposes no {mode} scheduling surface; host build is incompatible")]
    Configuration { mode: RuntimeMode },

    /// The host scheduling surface exists but rejected this registration.
    #[error("host rejected task registration: {0}")]
    Invocation(#[from] HostError),
}
