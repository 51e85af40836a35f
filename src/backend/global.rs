//! Adapter for the non-partitioned host model: one shared scheduling
//! context for every task. The request's location is accepted for API
//! uniformity but deliberately unused here.

use super::{Backend, wrap_callback};
use crate::error::ScheduleError;
use crate::host::HostRuntime;
use crate::mode::RuntimeMode;
use crate::request::ScheduleRequest;
use crate::task::TaskHandle;
use std::sync::Arc;

pub(crate) struct GlobalBackend {
    host: Arc<dyn HostRuntime>,
}

impl GlobalBackend {
    pub(crate) fn new(host: Arc<dyn HostRuntime>) -> Self {
        Self { host }
    }
}

impl Backend for GlobalBackend {
    fn schedule_repeating(&self, request: ScheduleRequest) -> Result<TaskHandle, ScheduleError> {
        let global = self
            .host
            .global_scheduler()
            .ok_or(ScheduleError::Configuration {
                mode: RuntimeMode::Global,
            })?;

        // Same two-phase shape as the region adapter: handle and closure
        // first, native reference bound after registration returns.
        let handle = TaskHandle::unbound();
        let wrapped = wrap_callback(&handle, request.callback.clone());

        let native = global.run_at_fixed_rate(
            &request.owner,
            wrapped,
            request.initial_delay,
            request.period,
        )?;
        handle.bind(native);

        tracing::debug!(
            owner = %request.owner,
            initial_delay = request.initial_delay,
            period = request.period,
            "registered repeating task with global scheduler"
        );
        Ok(handle)
    }
}
