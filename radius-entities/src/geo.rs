use std::fmt;

use thiserror::Error;

pub type RawCoord = i32;

// Assumption: 2-complement binary representation
const RAW_COORD_INVALID: RawCoord = RawCoord::MIN;
const RAW_COORD_MAX: RawCoord = RawCoord::MAX;
const RAW_COORD_MIN: RawCoord = -RAW_COORD_MAX;

/// Compact fixed-point integer representation of a geographical coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoCoord(RawCoord);

impl GeoCoord {
    const INVALID: Self = Self(RAW_COORD_INVALID);

    pub const fn to_raw(self) -> RawCoord {
        self.0
    }

    pub const fn from_raw(raw: RawCoord) -> Self {
        Self(raw)
    }

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for GeoCoord {
    fn default() -> Self {
        Self::INVALID
    }
}

const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

// Latitude and longitude only differ in their value range.
macro_rules! angular_coord {
    ($name:ident, $deg_max:expr) => {
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $name(GeoCoord);

        impl $name {
            const DEG_MAX: f64 = $deg_max;
            const DEG_MIN: f64 = -$deg_max;
            const RAD_MAX: f64 = Self::DEG_MAX * DEG_TO_RAD;
            const RAD_MIN: f64 = Self::DEG_MIN * DEG_TO_RAD;
            const RAW_SPAN: f64 = RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64;
            const TO_DEG: f64 = (Self::DEG_MAX - Self::DEG_MIN) / Self::RAW_SPAN;
            const TO_RAD: f64 = (Self::RAD_MAX - Self::RAD_MIN) / Self::RAW_SPAN;
            const FROM_DEG: f64 = Self::RAW_SPAN / (Self::DEG_MAX - Self::DEG_MIN);

            pub const fn to_raw(self) -> RawCoord {
                self.0.to_raw()
            }

            pub const fn from_raw(raw: RawCoord) -> Self {
                Self(GeoCoord::from_raw(raw))
            }

            pub fn is_valid(self) -> bool {
                self.0.is_valid()
            }

            pub fn to_rad(self) -> f64 {
                if self.is_valid() {
                    f64::from(self.to_raw()) * Self::TO_RAD
                } else {
                    f64::NAN
                }
            }

            pub fn to_deg(self) -> f64 {
                if self.is_valid() {
                    let deg = f64::from(self.to_raw()) * Self::TO_DEG;
                    debug_assert!(deg >= Self::DEG_MIN);
                    debug_assert!(deg <= Self::DEG_MAX);
                    deg
                } else {
                    f64::NAN
                }
            }

            pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
                let deg = deg.into();
                debug_assert!(deg >= Self::DEG_MIN);
                debug_assert!(deg <= Self::DEG_MAX);
                #[allow(clippy::cast_possible_truncation)]
                let raw = f64::round(deg * Self::FROM_DEG) as RawCoord;
                let res = Self::from_raw(raw);
                debug_assert!(res.is_valid());
                res
            }

            /// Returns `None` for values outside of the valid range (including NaN).
            pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
                let deg = deg.into();
                (Self::DEG_MIN..=Self::DEG_MAX)
                    .contains(&deg)
                    .then(|| Self::from_deg(deg))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.to_deg())
            }
        }
    };
}

angular_coord!(LatCoord, 90.0);
angular_coord!(LngCoord, 180.0);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Invalid latitude '{0}'")]
    Lat(String),
    #[error("Invalid longitude '{0}'")]
    Lng(String),
    #[error("Latitude degrees out of range: {0}")]
    LatRange(f64),
    #[error("Longitude degrees out of range: {0}")]
    LngRange(f64),
}

/// Compact internal representation of a geographical location on a (flat) map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    pub fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, ParseError> {
        let lat_deg = lat_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseError::Lat(lat_deg_str.to_owned()))?;
        let lng_deg = lng_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseError::Lng(lng_deg_str.to_owned()))?;
        let lat = LatCoord::try_from_deg(lat_deg).ok_or(ParseError::LatRange(lat_deg))?;
        let lng = LngCoord::try_from_deg(lng_deg).ok_or(ParseError::LngRange(lng_deg))?;
        Ok(Self::new(lat, lng))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_200.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using a special case of the Vincenty
    /// formula for numerical accuracy.
    /// Reference: <https://en.wikipedia.org/wiki/Great-circle_distance>
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Option<Distance> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }

        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let (lat1_sin, lat1_cos) = lat1_rad.sin_cos();
        let (lat2_sin, lat2_cos) = lat2_rad.sin_cos();

        let dlng = (lng1_rad - lng2_rad).abs();
        let (dlng_sin, dlng_cos) = dlng.sin_cos();

        let nom1 = lat2_cos * dlng_sin;
        let nom2 = lat1_cos * lat2_sin - lat1_sin * lat2_cos * dlng_cos;

        let nom = (nom1 * nom1 + nom2 * nom2).sqrt();
        let denom = lat1_sin * lat2_sin + lat1_cos * lat2_cos * dlng_cos;

        Some(Distance::from_meters(
            MEAN_EARTH_RADIUS.to_meters() * nom.atan2(denom),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lat_lng_range() {
        assert!(MapPoint::try_from_lat_lng_deg(90.0, 180.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, -180.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(90.1, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -180.1).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_none());
    }

    #[test]
    fn default_point_is_invalid() {
        assert!(!MapPoint::default().is_valid());
        assert!(MapPoint::from_lat_lng_deg(0.0, 0.0).is_valid());
    }

    #[test]
    fn parse_lat_lng_deg() {
        let p = MapPoint::parse_lat_lng_deg("3.142", " 101.6918").unwrap();
        assert_eq!(p, MapPoint::from_lat_lng_deg(3.142, 101.6918));
        assert_eq!(
            MapPoint::parse_lat_lng_deg(".5", "101.7"),
            Ok(MapPoint::from_lat_lng_deg(0.5, 101.7))
        );
        assert_eq!(
            MapPoint::parse_lat_lng_deg("abc", "101.7"),
            Err(ParseError::Lat("abc".into()))
        );
        assert_eq!(
            MapPoint::parse_lat_lng_deg("1.0", "east"),
            Err(ParseError::Lng("east".into()))
        );
        assert_eq!(
            MapPoint::parse_lat_lng_deg("95.0", "1.0"),
            Err(ParseError::LatRange(95.0))
        );
    }

    #[test]
    fn deg_roundtrip_is_precise_enough() {
        let (lat, lng) = MapPoint::from_lat_lng_deg(3.1420, 101.6918).to_lat_lng_deg();
        assert!((lat - 3.1420).abs() < 1e-7);
        assert!((lng - 101.6918).abs() < 1e-7);
    }

    #[test]
    fn distance_between_identical_points_is_zero() {
        let p = MapPoint::from_lat_lng_deg(3.1420, 101.6918);
        let d = MapPoint::distance(p, p).unwrap();
        assert!(d.to_meters().abs() < 1e-6);
    }

    #[test]
    fn distance_along_the_equator() {
        let p1 = MapPoint::from_lat_lng_deg(0.0, 0.0);
        let p2 = MapPoint::from_lat_lng_deg(0.0, 1.0);
        let d = MapPoint::distance(p1, p2).unwrap().to_meters();
        // one degree ~ 111.2 km
        assert!((d - 111_199.0).abs() < 100.0);
    }

    #[test]
    fn distance_of_invalid_points() {
        let p = MapPoint::from_lat_lng_deg(0.0, 0.0);
        assert!(MapPoint::distance(p, MapPoint::default()).is_none());
    }
}
