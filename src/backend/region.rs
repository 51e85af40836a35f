//! Adapter for the partitioned host model: tasks register against the
//! region that owns the request's location.

use super::{Backend, wrap_callback};
use crate::error::ScheduleError;
use crate::host::HostRuntime;
use crate::mode::RuntimeMode;
use crate::request::ScheduleRequest;
use crate::task::TaskHandle;
use std::sync::Arc;

pub(crate) struct RegionBackend {
    host: Arc<dyn HostRuntime>,
}

impl RegionBackend {
    pub(crate) fn new(host: Arc<dyn HostRuntime>) -> Self {
        Self { host }
    }
}

impl Backend for RegionBackend {
    fn schedule_repeating(&self, request: ScheduleRequest) -> Result<TaskHandle, ScheduleError> {
        // Detection said the host is partitioned; a missing region surface
        // at this point is a host build mismatch, not a runtime condition.
        let region = self
            .host
            .region_scheduler()
            .ok_or(ScheduleError::Configuration {
                mode: RuntimeMode::Partitioned,
            })?;

        // Two-phase construction: the handle and the wrapping closure must
        // exist before the registration call that produces the native
        // reference the handle will eventually wrap.
        let handle = TaskHandle::unbound();
        let wrapped = wrap_callback(&handle, request.callback.clone());

        let native = region.run_at_fixed_rate(
            &request.owner,
            request.location,
            wrapped,
            request.initial_delay,
            request.period,
        )?;
        handle.bind(native);

        tracing::debug!(
            owner = %request.owner,
            location = %request.location,
            initial_delay = request.initial_delay,
            period = request.period,
            "registered repeating task with region scheduler"
        );
        Ok(handle)
    }
}
