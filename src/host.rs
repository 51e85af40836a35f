//! Host-facing capability traits.
//! The embedder implements these against whichever server runtime it links;
//! this crate never reaches into the host through dynamic lookup itself.

use crate::error::{HostError, ProbeError};
use crate::request::{Location, OwnerId};
use std::sync::Arc;

/// Closure a host scheduler invokes once per firing, on a host-managed
/// worker context (the region-owning thread in partitioned mode, the host's
/// designated scheduling thread in global mode).
pub type HostTaskFn = Box<dyn FnMut() + Send + 'static>;

/// Backend-native cancellable task reference returned by a host
/// registration call. Never exposed to callers directly; it is wrapped by
/// [`TaskHandle`](crate::task::TaskHandle).
pub trait NativeTask: Send + Sync {
    /// Request that no future firings occur. Best-effort: an in-flight
    /// firing is not interrupted. Hosts are expected to make this idempotent.
    fn cancel(&self);
}

/// Probe for the marker that only the partitioned host variant carries.
pub trait CapabilityProbe: Send + Sync {
    /// `Ok(true)` when the partitioned-scheduling marker is present,
    /// `Ok(false)` when the lookup completes and finds nothing. Absence is
    /// the expected outcome on non-partitioned hosts, not an error. `Err` is
    /// reserved for probe machinery failures.
    fn region_marker_present(&self) -> Result<bool, ProbeError>;
}

/// Region-keyed repeating-task registration, present only on partitioned
/// hosts.
pub trait RegionScheduler: Send + Sync {
    /// Register `task` to fire every `period` ticks after `initial_delay`
    /// ticks, on the execution context owning the region that contains
    /// `location`. Returns the host's cancellable reference.
    fn run_at_fixed_rate(
        &self,
        owner: &OwnerId,
        location: Location,
        task: HostTaskFn,
        initial_delay: u64,
        period: u64,
    ) -> Result<Arc<dyn NativeTask>, HostError>;
}

/// Single shared repeating-task registration, the non-partitioned model.
/// Takes no location; every task runs on the host's one scheduling context.
pub trait GlobalScheduler: Send + Sync {
    fn run_at_fixed_rate(
        &self,
        owner: &OwnerId,
        task: HostTaskFn,
        initial_delay: u64,
        period: u64,
    ) -> Result<Arc<dyn NativeTask>, HostError>;
}

/// The scheduling surfaces a concrete host runtime exposes.
///
/// A host advertises at most the surfaces it actually has; `None` for the
/// surface the detected mode requires is a fatal configuration mismatch,
/// surfaced as [`ScheduleError::Configuration`](crate::error::ScheduleError).
pub trait HostRuntime: Send + Sync {
    fn capability_probe(&self) -> &dyn CapabilityProbe;

    fn region_scheduler(&self) -> Option<&dyn RegionScheduler>;

    fn global_scheduler(&self) -> Option<&dyn GlobalScheduler>;
}
