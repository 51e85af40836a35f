//! Schedule request data model: owner identity, spatial location, callback
//! and timing parameters. Requests are transient; the facade consumes them.

use crate::error::ScheduleError;
use crate::task::TaskHandle;
use std::fmt;
use std::sync::Arc;

/// Identifies a world/dimension within the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorldId(pub u32);

/// A point in a host world. In partitioned mode the host derives the owning
/// region from it; in global mode it is carried but unused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub world: WorldId,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    pub fn new(world: WorldId, x: f64, y: f64, z: f64) -> Self {
        Self { world, x, y, z }
    }

    /// Coordinates of the 16x16 block column containing this location, the
    /// unit partitioned hosts key their regions on.
    pub fn chunk(&self) -> (i32, i32) {
        ((self.x.floor() as i32) >> 4, (self.z.floor() as i32) >> 4)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "world {} ({:.1}, {:.1}, {:.1})",
            self.world.0, self.x, self.y, self.z
        )
    }
}

/// Identity of the caller (plugin) registering a task, as the host wants to
/// see it attributed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerId(Arc<str>);

impl OwnerId {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller callback for a repeating task. Every firing receives the same
/// [`TaskHandle`] the scheduling call returned, so the task can cancel
/// itself from inside its own body.
pub type RepeatingFn = Arc<dyn Fn(&TaskHandle) + Send + Sync + 'static>;

/// A request to run a repeating, cancellable callback near a location.
/// Delay and period are in host ticks; a period of zero is invalid.
#[derive(Clone)]
pub struct ScheduleRequest {
    pub owner: OwnerId,
    pub location: Location,
    pub callback: RepeatingFn,
    pub initial_delay: u64,
    pub period: u64,
}

impl ScheduleRequest {
    pub fn new(
        owner: OwnerId,
        location: Location,
        callback: RepeatingFn,
        initial_delay: u64,
        period: u64,
    ) -> Self {
        Self {
            owner,
            location,
            callback,
            initial_delay,
            period,
        }
    }

    /// Check preconditions that are not already enforced by the types.
    pub(crate) fn validate(&self) -> Result<(), ScheduleError> {
        if self.period == 0 {
            return Err(ScheduleError::InvalidPeriod { period: self.period });
        }
        Ok(())
    }
}

impl fmt::Debug for ScheduleRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduleRequest")
            .field("owner", &self.owner)
            .field("location", &self.location)
            .field("initial_delay", &self.initial_delay)
            .field("period", &self.period)
            .finish_non_exhaustive()
    }
}
