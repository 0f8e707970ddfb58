//! Route table of the web app.
//!
//! Two shapes of paths are recognized:
//!
//! - `/` (the default view)
//! - `/:lat/:lng/:radius[/:zoom[/:mapstyle]]`
//!
//! Everything else has to be redirected to [`ROOT_PATH`].

use radius_entities::{
    geo::{self, MapPoint},
    map_style::{MapStyle, UnknownMapStyle},
    radius::{RadiusError, RadiusMeters},
    view_state::ViewState,
    zoom::Zoom,
};
use thiserror::Error;

pub const ROOT_PATH: &str = "/";

const MIN_VIEW_SEGMENTS: usize = 3;
const MAX_VIEW_SEGMENTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    View(ViewState),
}

impl Route {
    /// The state a map view starts with.
    pub fn into_view_state(self) -> ViewState {
        match self {
            Self::Root => ViewState::default(),
            Self::View(state) => state,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("No route matches '{0}'")]
    UnknownPath(String),
    #[error(transparent)]
    Origin(#[from] geo::ParseError),
    #[error(transparent)]
    Radius(#[from] RadiusError),
    #[error("Invalid zoom level '{0}'")]
    Zoom(String),
    #[error(transparent)]
    MapStyle(#[from] UnknownMapStyle),
}

/// Resolves the path part of a URL (without query or fragment).
pub fn resolve(path: &str) -> Result<Route, RouteError> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Ok(Route::Root);
    }
    let segments: Vec<_> = trimmed.split('/').collect();
    if !(MIN_VIEW_SEGMENTS..=MAX_VIEW_SEGMENTS).contains(&segments.len())
        || segments.iter().any(|s| s.is_empty())
    {
        return Err(RouteError::UnknownPath(path.to_owned()));
    }
    let origin = MapPoint::parse_lat_lng_deg(segments[0], segments[1])?;
    let radius = RadiusMeters::parse_km(segments[2])?;
    let zoom = segments
        .get(3)
        .map(|z| parse_zoom(z))
        .transpose()?
        .unwrap_or_default();
    let style = segments
        .get(4)
        .map(|s| MapStyle::parse_id(s))
        .transpose()?
        .unwrap_or_default();
    Ok(Route::View(ViewState {
        origin,
        radius,
        zoom,
        style,
    }))
}

fn parse_zoom(zoom: &str) -> Result<Zoom, RouteError> {
    zoom.trim()
        .parse::<f64>()
        .ok()
        .and_then(Zoom::from_f64)
        .ok_or_else(|| RouteError::Zoom(zoom.to_owned()))
}

/// Path that encodes the given view state.
///
/// Coordinates are rounded to 4 decimal places.
pub fn view_path(state: &ViewState) -> String {
    let ViewState {
        origin,
        radius,
        zoom,
        style,
    } = state;
    let (lat, lng) = origin.to_lat_lng_deg();
    format!(
        "/{lat:.4}/{lng:.4}/{km}/{zoom}/{style}",
        km = radius.to_km(),
        style = style.id()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(path: &str) -> ViewState {
        match resolve(path) {
            Ok(Route::View(state)) => state,
            other => panic!("Unexpected route for '{path}': {other:?}"),
        }
    }

    #[test]
    fn root() {
        assert_eq!(resolve("/"), Ok(Route::Root));
        assert_eq!(resolve(""), Ok(Route::Root));
        assert_eq!(resolve("/").unwrap().into_view_state(), ViewState::default());
    }

    #[test]
    fn full_view_path() {
        let state = view("/3.1000/101.7000/5/14/2");
        assert_eq!(state.origin, MapPoint::from_lat_lng_deg(3.1, 101.7));
        assert_eq!(state.radius.to_meters(), 5_000);
        assert_eq!(state.zoom, Zoom::new(14));
        assert_eq!(state.style, MapStyle::CartoLight);
        assert_eq!(
            state.style.tile_url(),
            "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png"
        );
    }

    #[test]
    fn optional_zoom_and_style() {
        let state = view("/3.1/101.7/5");
        assert_eq!(state.zoom, Zoom::default());
        assert_eq!(state.style, MapStyle::default());

        let state = view("/3.1/101.7/5/15/");
        assert_eq!(state.zoom, Zoom::new(15));
        assert_eq!(state.style, MapStyle::default());
    }

    #[test]
    fn non_numeric_fields() {
        assert!(matches!(
            resolve("/abc/101.7000/5/14/2"),
            Err(RouteError::Origin(geo::ParseError::Lat(_)))
        ));
        assert!(matches!(
            resolve("/3.1/xyz/5/14/2"),
            Err(RouteError::Origin(geo::ParseError::Lng(_)))
        ));
        assert!(matches!(
            resolve("/3.1/101.7/five/14/2"),
            Err(RouteError::Radius(RadiusError::NotAnInteger(_)))
        ));
        assert_eq!(
            resolve("/3.1/101.7/5/near/2"),
            Err(RouteError::Zoom("near".into()))
        );
    }

    #[test]
    fn invalid_values() {
        assert!(matches!(
            resolve("/91/101.7/5"),
            Err(RouteError::Origin(geo::ParseError::LatRange(_)))
        ));
        assert!(matches!(
            resolve("/3.1/101.7/51"),
            Err(RouteError::Radius(RadiusError::OutOfRange(51)))
        ));
        assert_eq!(
            resolve("/3.1/101.7/5/14/99"),
            Err(RouteError::MapStyle(UnknownMapStyle("99".into())))
        );
    }

    #[test]
    fn unknown_shapes() {
        for path in ["/3.1", "/3.1/101.7", "/1/2/3/4/5/6", "/3.1//5", "/about"] {
            assert!(
                matches!(resolve(path), Err(RouteError::UnknownPath(_))),
                "{path}"
            );
        }
    }

    #[test]
    fn zoom_is_clamped() {
        assert_eq!(view("/3.1/101.7/5/2").zoom.level(), 10);
        assert_eq!(view("/3.1/101.7/5/13.6").zoom.level(), 14);
    }

    #[test]
    fn encode_view_state_into_path() {
        assert_eq!(
            view_path(&ViewState::default()),
            "/3.1420/101.6918/10/12/1"
        );
        let state = ViewState {
            origin: MapPoint::from_lat_lng_deg(-33.868_82, 151.209_29),
            radius: RadiusMeters::from_km(50).unwrap(),
            zoom: Zoom::new(16),
            style: MapStyle::HikeBike,
        };
        assert_eq!(view_path(&state), "/-33.8688/151.2093/50/16/11");
    }

    #[test]
    fn encoded_path_resolves_to_the_same_view() {
        let state = view("/3.1000/101.7000/5/14/2");
        assert_eq!(view(&view_path(&state)), state);
    }
}
