//! Scheduler compatibility layer for host runtimes with incompatible
//! task-execution models.
//!
//! Some host builds partition the world into independently scheduled
//! regions; others run one single-threaded global scheduler. This crate
//! detects which model is present (once per process), binds the matching
//! backend adapter, and exposes a single operation: schedule a repeating,
//! cancellable callback near a spatial location. The returned handle
//! cancels uniformly across both models, including when cancellation races
//! the registration call itself.

mod backend;
pub mod error;
pub mod host;
pub mod mode;
pub mod request;
pub mod scheduler;
pub mod task;

// Re-export main public APIs
pub use error::{HostError, ProbeError, ScheduleError};
pub use host::{
    CapabilityProbe, GlobalScheduler, HostRuntime, HostTaskFn, NativeTask, RegionScheduler,
};
pub use mode::{ModeCell, RuntimeMode, is_partitioned, runtime_mode};
pub use request::{Location, OwnerId, RepeatingFn, ScheduleRequest, WorldId};
pub use scheduler::SchedulerBridge;
pub use task::TaskHandle;
