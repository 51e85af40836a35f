//! Backend adapters translating schedule requests into host registration
//! calls. One adapter per execution model, selected once per bridge.

mod global;
mod region;

pub(crate) use global::GlobalBackend;
pub(crate) use region::RegionBackend;

use crate::error::ScheduleError;
use crate::host::HostRuntime;
use crate::mode::RuntimeMode;
use crate::request::ScheduleRequest;
use crate::task::TaskHandle;
use std::sync::Arc;

/// A registration strategy against one concrete host scheduling surface.
/// Mode selection happens once, at bridge construction; adapters never fall
/// back to each other.
pub(crate) trait Backend: Send + Sync {
    fn schedule_repeating(&self, request: ScheduleRequest) -> Result<TaskHandle, ScheduleError>;
}

/// Pick the adapter matching the detected mode.
pub(crate) fn for_mode(mode: RuntimeMode, host: Arc<dyn HostRuntime>) -> Box<dyn Backend> {
    match mode {
        RuntimeMode::Partitioned => Box::new(RegionBackend::new(host)),
        RuntimeMode::Global => Box::new(GlobalBackend::new(host)),
    }
}

/// Wrap the caller's callback for handoff to a host scheduler.
///
/// The host invokes the returned closure with no arguments (it only knows
/// its own native reference); the caller's callback must instead see the
/// same [`TaskHandle`] the scheduling call returned, on every firing. The
/// wrapper also drops firings that slip in after cancellation was requested
/// but before the host processed the native cancel.
pub(crate) fn wrap_callback(
    handle: &TaskHandle,
    callback: crate::request::RepeatingFn,
) -> crate::host::HostTaskFn {
    let handle = handle.clone();
    Box::new(move || {
        if handle.is_cancel_requested() {
            return;
        }
        callback(&handle);
    })
}
