use std::fmt;

pub const MIN_ZOOM: u8 = 10;
pub const MAX_ZOOM: u8 = 19;

/// Zoom level of the map, clamped to the range the tile providers support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Zoom(u8);

impl Zoom {
    pub fn new(level: u8) -> Self {
        Self(level.clamp(MIN_ZOOM, MAX_ZOOM))
    }

    /// Leaflet reports fractional zoom levels while animating.
    pub fn from_f64(level: f64) -> Option<Self> {
        if !level.is_finite() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let level = level.round().clamp(0.0, f64::from(u8::MAX)) as u8;
        Some(Self::new(level))
    }

    pub const fn level(self) -> u8 {
        self.0
    }

    pub fn to_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(12)
    }
}

impl fmt::Display for Zoom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_zoom_level() {
        assert_eq!(Zoom::new(3).level(), MIN_ZOOM);
        assert_eq!(Zoom::new(14).level(), 14);
        assert_eq!(Zoom::new(25).level(), MAX_ZOOM);
    }

    #[test]
    fn zoom_from_float() {
        assert_eq!(Zoom::from_f64(13.4), Some(Zoom::new(13)));
        assert_eq!(Zoom::from_f64(-1.0), Some(Zoom::new(MIN_ZOOM)));
        assert_eq!(Zoom::from_f64(f64::NAN), None);
    }
}
