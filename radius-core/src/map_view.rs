//! State and behavior of the map view.
//!
//! [`MapView`] owns the [`ViewState`] and the [`Tracking`] state machine.
//! The origin marker and the radius circle both read their position from
//! [`ViewState::origin`], so the circle is centered on the marker at any time.
//!
//! Rejected input never changes the state. The web app keeps the URL in sync
//! by writing [`MapView::path`] after every change.

use radius_entities::{
    geo::MapPoint, map_style::MapStyle, radius::RadiusMeters, view_state::ViewState, zoom::Zoom,
};

use crate::{
    route::{self, RouteError},
    tracking::{CircleIndicator, Tracking, TrackingSession, TrackingStatus},
    Error, Result,
};

#[derive(Debug)]
pub struct MapView<S> {
    state: ViewState,
    tracking: Tracking<S>,
}

/// Outcome of [`MapView::initialize`].
#[derive(Debug)]
pub struct Initialized<S> {
    pub view: MapView<S>,
    /// Set if the path could not be resolved and the browser
    /// has to be redirected to [`route::ROOT_PATH`].
    pub redirect: Option<RouteError>,
}

impl<S> MapView<S> {
    pub const fn new(state: ViewState) -> Self {
        Self {
            state,
            tracking: Tracking::Idle,
        }
    }

    /// Creates the view for the given URL path.
    ///
    /// Malformed paths fall back to the default view state
    /// instead of rendering a partial state.
    pub fn initialize(path: &str) -> Initialized<S> {
        match route::resolve(path) {
            Ok(route) => Initialized {
                view: Self::new(route.into_view_state()),
                redirect: None,
            },
            Err(err) => {
                log::debug!("Unable to resolve route '{path}': {err}");
                Initialized {
                    view: Self::new(ViewState::default()),
                    redirect: Some(err),
                }
            }
        }
    }

    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    pub const fn origin(&self) -> MapPoint {
        self.state.origin
    }

    /// Center of the radius circle.
    pub const fn circle_center(&self) -> MapPoint {
        self.state.origin
    }

    pub const fn radius(&self) -> RadiusMeters {
        self.state.radius
    }

    pub const fn style(&self) -> MapStyle {
        self.state.style
    }

    pub const fn zoom(&self) -> Zoom {
        self.state.zoom
    }

    /// The path that encodes the current state.
    pub fn path(&self) -> String {
        route::view_path(&self.state)
    }

    pub fn set_map_style(&mut self, id: &str) -> Result<MapStyle> {
        let style = MapStyle::parse_id(id)?;
        self.state.style = style;
        Ok(style)
    }

    /// Sets the radius from user input in whole kilometers.
    pub fn set_radius(&mut self, km: &str) -> Result<RadiusMeters> {
        let radius = RadiusMeters::parse_km(km)?;
        self.state.radius = radius;
        Ok(radius)
    }

    /// Moves the origin marker together with the radius circle.
    pub fn move_origin(&mut self, origin: MapPoint) -> Result<()> {
        if !origin.is_valid() {
            return Err(Error::InvalidPosition);
        }
        self.state.origin = origin;
        Ok(())
    }

    pub fn set_zoom(&mut self, zoom: Zoom) {
        self.state.zoom = zoom;
    }

    pub const fn tracking_status(&self) -> TrackingStatus {
        self.tracking.status()
    }

    pub const fn tracking_session(&self) -> Option<&TrackingSession<S>> {
        self.tracking.session()
    }

    /// Position of the live marker if tracking is active.
    pub fn live_marker(&self) -> Option<MapPoint> {
        self.tracking
            .session()
            .map(TrackingSession::live_marker_position)
    }

    /// Starts or stops live tracking.
    ///
    /// See [`Tracking::toggle`].
    pub fn toggle_tracking<F, E>(&mut self, start: F) -> std::result::Result<TrackingStatus, E>
    where
        F: FnOnce() -> std::result::Result<S, E>,
    {
        self.tracking.toggle(start)
    }

    /// Handles a position update of the tracked device.
    pub fn track_position(&mut self, position: MapPoint) -> Result<CircleIndicator> {
        if !self.tracking.record_fix(position) {
            return Err(Error::NotTracking);
        }
        Ok(self.circle_indicator())
    }

    /// Whether the tracked device is inside of the radius circle.
    pub fn circle_indicator(&self) -> CircleIndicator {
        self.tracking
            .session()
            .and_then(TrackingSession::fix)
            .map_or(CircleIndicator::Default, |fix| {
                CircleIndicator::from_distance(self.state.origin, self.state.radius, fix)
            })
    }
}

impl<S> Default for MapView<S> {
    fn default() -> Self {
        Self::new(ViewState::default())
    }
}
