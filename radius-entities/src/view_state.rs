use crate::{geo::MapPoint, map_style::MapStyle, radius::RadiusMeters, zoom::Zoom};

pub const DEFAULT_ORIGIN_LAT_DEG: f64 = 3.1420;
pub const DEFAULT_ORIGIN_LNG_DEG: f64 = 101.6918;

/// Everything that is encoded into the URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Center of the radius circle and position of the origin marker.
    pub origin: MapPoint,
    pub radius: RadiusMeters,
    pub zoom: Zoom,
    pub style: MapStyle,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            origin: MapPoint::from_lat_lng_deg(DEFAULT_ORIGIN_LAT_DEG, DEFAULT_ORIGIN_LNG_DEG),
            radius: RadiusMeters::default(),
            zoom: Zoom::default(),
            style: MapStyle::default(),
        }
    }
}
