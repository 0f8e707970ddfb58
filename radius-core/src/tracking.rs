//! Live tracking of the device position relative to the radius circle.

use radius_entities::{geo::MapPoint, radius::RadiusMeters};

/// Where the live marker is placed until the first position arrives.
pub const LIVE_MARKER_SENTINEL: (f64, f64) = (0.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CircleIndicator {
    /// Not tracking or no position yet.
    #[default]
    Default,
    Inside,
    Outside,
}

impl CircleIndicator {
    pub fn from_distance(origin: MapPoint, radius: RadiusMeters, position: MapPoint) -> Self {
        match MapPoint::distance(origin, position) {
            Some(d) if d < radius.to_distance() => Self::Inside,
            _ => Self::Outside,
        }
    }

    /// CSS color of the circle.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Default => "rgb(51, 136, 255)",
            Self::Inside => "green",
            Self::Outside => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingStatus {
    Idle,
    Tracking,
}

/// A running tracking session.
///
/// The handle owns the resources of the session (position subscription,
/// wake lock). They are released when the handle is dropped.
#[derive(Debug)]
pub struct TrackingSession<S> {
    _handle: S,
    fix: Option<MapPoint>,
}

impl<S> TrackingSession<S> {
    const fn new(handle: S) -> Self {
        Self {
            _handle: handle,
            fix: None,
        }
    }

    /// Last received device position.
    pub const fn fix(&self) -> Option<MapPoint> {
        self.fix
    }

    pub fn live_marker_position(&self) -> MapPoint {
        self.fix.unwrap_or_else(|| {
            let (lat, lng) = LIVE_MARKER_SENTINEL;
            MapPoint::from_lat_lng_deg(lat, lng)
        })
    }
}

#[derive(Debug)]
pub enum Tracking<S> {
    Idle,
    Active(TrackingSession<S>),
}

impl<S> Default for Tracking<S> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<S> Tracking<S> {
    pub const fn status(&self) -> TrackingStatus {
        match self {
            Self::Idle => TrackingStatus::Idle,
            Self::Active(_) => TrackingStatus::Tracking,
        }
    }

    pub const fn session(&self) -> Option<&TrackingSession<S>> {
        match self {
            Self::Idle => None,
            Self::Active(session) => Some(session),
        }
    }

    /// Switches between [`TrackingStatus::Idle`] and [`TrackingStatus::Tracking`].
    ///
    /// `start` is only invoked when switching on. If it fails the state
    /// remains idle. Switching off drops the session.
    pub fn toggle<F, E>(&mut self, start: F) -> Result<TrackingStatus, E>
    where
        F: FnOnce() -> Result<S, E>,
    {
        match std::mem::take(self) {
            Self::Idle => {
                let handle = start()?;
                log::debug!("Start live tracking");
                *self = Self::Active(TrackingSession::new(handle));
            }
            Self::Active(session) => {
                log::debug!("Stop live tracking");
                drop(session);
            }
        }
        Ok(self.status())
    }

    /// Records a new device position.
    ///
    /// Returns `false` if tracking is not active, e.g. for callbacks
    /// that arrive after the session has been stopped.
    pub fn record_fix(&mut self, position: MapPoint) -> bool {
        match self {
            Self::Idle => false,
            Self::Active(session) => {
                session.fix = Some(position);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[derive(Debug)]
    struct Handle(Rc<Cell<usize>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn toggle_twice_releases_the_session() {
        let released = Rc::new(Cell::new(0));
        let mut tracking = Tracking::default();
        assert_eq!(
            tracking.toggle(|| Ok::<_, ()>(Handle(Rc::clone(&released)))),
            Ok(TrackingStatus::Tracking)
        );
        assert_eq!(released.get(), 0);
        assert_eq!(
            tracking.toggle(|| -> Result<Handle, ()> { unreachable!() }),
            Ok(TrackingStatus::Idle)
        );
        assert_eq!(released.get(), 1);
        assert!(tracking.session().is_none());
    }

    #[test]
    fn failed_start_keeps_idle() {
        let mut tracking = Tracking::<Handle>::default();
        assert_eq!(tracking.toggle(|| Err("unsupported")), Err("unsupported"));
        assert_eq!(tracking.status(), TrackingStatus::Idle);
    }

    #[test]
    fn live_marker_starts_at_sentinel() {
        let mut tracking = Tracking::default();
        tracking.toggle(|| Ok::<_, ()>(())).unwrap();
        let session = tracking.session().unwrap();
        assert_eq!(session.fix(), None);
        assert_eq!(
            session.live_marker_position(),
            MapPoint::from_lat_lng_deg(0.0, 0.0)
        );
        let p = MapPoint::from_lat_lng_deg(3.0, 101.0);
        assert!(tracking.record_fix(p));
        assert_eq!(tracking.session().unwrap().live_marker_position(), p);
    }

    #[test]
    fn ignore_fix_when_idle() {
        let mut tracking = Tracking::<()>::default();
        assert!(!tracking.record_fix(MapPoint::from_lat_lng_deg(1.0, 1.0)));
    }

    #[test]
    fn indicator_inside_iff_closer_than_radius() {
        let origin = MapPoint::from_lat_lng_deg(0.0, 0.0);
        let radius = RadiusMeters::from_km(10).unwrap();
        // ~5.6 km
        let near = MapPoint::from_lat_lng_deg(0.0, 0.05);
        // ~11.1 km
        let far = MapPoint::from_lat_lng_deg(0.0, 0.1);
        assert_eq!(
            CircleIndicator::from_distance(origin, radius, origin),
            CircleIndicator::Inside
        );
        assert_eq!(
            CircleIndicator::from_distance(origin, radius, near),
            CircleIndicator::Inside
        );
        assert_eq!(
            CircleIndicator::from_distance(origin, radius, far),
            CircleIndicator::Outside
        );
    }

    #[test]
    fn indicator_colors() {
        assert_eq!(CircleIndicator::Default.color(), "rgb(51, 136, 255)");
        assert_eq!(CircleIndicator::Inside.color(), "green");
        assert_eq!(CircleIndicator::Outside.color(), "red");
    }
}
