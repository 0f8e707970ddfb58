//! Bindings to the browser APIs the map depends on.

mod geolocation;
mod history;
mod wake_lock;

pub use self::{geolocation::*, history::*, wake_lock::*};

use radius_core::entities::{geo::MapPoint, position::PositionPolicy};

/// Resources of a running live tracking session.
///
/// Dropping the session stops watching the position
/// and releases the screen wake lock.
pub struct BrowserSession {
    _watch: PositionWatch,
    _wake_lock: ScreenWakeLock,
}

impl BrowserSession {
    pub fn start<F>(policy: &PositionPolicy, on_position: F) -> anyhow::Result<Self>
    where
        F: Fn(MapPoint) + 'static,
    {
        let watch = PositionWatch::start(policy, on_position)?;
        let wake_lock = ScreenWakeLock::acquire();
        Ok(Self {
            _watch: watch,
            _wake_lock: wake_lock,
        })
    }
}

impl std::fmt::Debug for BrowserSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserSession").finish_non_exhaustive()
    }
}
