//! The scheduler bridge: detect the host's execution model once, bind the
//! matching backend adapter, and expose one registration operation.

use crate::backend::{self, Backend};
use crate::error::ScheduleError;
use crate::host::HostRuntime;
use crate::mode::{self, RuntimeMode};
use crate::request::ScheduleRequest;
use crate::task::TaskHandle;
use std::fmt;
use std::sync::Arc;

/// Schedules repeating, cancellable callbacks near a spatial location,
/// regardless of whether the host partitions its world into regions or runs
/// one global scheduling context.
///
/// The execution model is resolved when the bridge is built and never
/// re-evaluated; a registration failure is surfaced to the caller and never
/// silently retried against the other model.
pub struct SchedulerBridge {
    mode: RuntimeMode,
    backend: Box<dyn Backend>,
}

impl SchedulerBridge {
    /// Build a bridge for `host`, resolving the execution model through the
    /// process-wide detector (probed once per process, see
    /// [`mode::runtime_mode`]).
    pub fn new(host: Arc<dyn HostRuntime>) -> Self {
        let mode = mode::runtime_mode(host.capability_probe());
        Self::with_mode(host, mode)
    }

    /// Build a bridge for an explicitly resolved mode. For embedders that
    /// manage their own [`ModeCell`](crate::mode::ModeCell), e.g. when
    /// driving several simulated hosts inside one process.
    pub fn with_mode(host: Arc<dyn HostRuntime>, mode: RuntimeMode) -> Self {
        tracing::info!(%mode, "binding scheduler backend");
        let backend = backend::for_mode(mode, host);
        Self { mode, backend }
    }

    /// The execution model this bridge was bound to.
    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    /// Whether the bound host is the partitioned variant. Exposed for
    /// callers that vary unrelated behavior by execution model.
    pub fn is_partitioned(&self) -> bool {
        self.mode.is_partitioned()
    }

    /// Register a repeating, cancellable callback associated with the
    /// request's location.
    ///
    /// Dispatches synchronously to the bound backend and returns the handle
    /// immediately; the host decides when firings actually run, on its own
    /// worker context. In global mode the location is carried but has no
    /// effect on placement.
    ///
    /// Preconditions are checked before any host primitive is touched: a
    /// zero period fails with [`ScheduleError::InvalidPeriod`].
    pub fn schedule_repeating(
        &self,
        request: ScheduleRequest,
    ) -> Result<TaskHandle, ScheduleError> {
        request.validate()?;
        self.backend.schedule_repeating(request)
    }
}

impl fmt::Debug for SchedulerBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchedulerBridge")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
