use std::fmt;

use thiserror::Error;

use crate::geo::Distance;

const METERS_PER_KM: u32 = 1_000;

/// Radius of the circle around the origin.
///
/// Always a whole number of kilometers within [`RadiusMeters::MIN_KM`]
/// and [`RadiusMeters::MAX_KM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RadiusMeters(u32);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadiusError {
    #[error("Radius must be a whole number of kilometers, got '{0}'")]
    NotAnInteger(String),
    #[error("Radius of {0} km is out of range")]
    OutOfRange(i64),
}

impl RadiusMeters {
    pub const MIN_KM: u32 = 1;
    pub const MAX_KM: u32 = 50;

    pub fn from_km(km: u32) -> Result<Self, RadiusError> {
        if (Self::MIN_KM..=Self::MAX_KM).contains(&km) {
            Ok(Self(km * METERS_PER_KM))
        } else {
            Err(RadiusError::OutOfRange(i64::from(km)))
        }
    }

    /// Parses user input as whole kilometers.
    pub fn parse_km(km: &str) -> Result<Self, RadiusError> {
        let km = km
            .trim()
            .parse::<i64>()
            .map_err(|_| RadiusError::NotAnInteger(km.to_owned()))?;
        let km = u32::try_from(km).map_err(|_| RadiusError::OutOfRange(km))?;
        Self::from_km(km)
    }

    pub const fn to_meters(self) -> u32 {
        self.0
    }

    pub const fn to_km(self) -> u32 {
        self.0 / METERS_PER_KM
    }

    pub fn to_distance(self) -> Distance {
        Distance::from_meters(f64::from(self.0))
    }
}

impl Default for RadiusMeters {
    fn default() -> Self {
        Self(10 * METERS_PER_KM)
    }
}

impl fmt::Display for RadiusMeters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_km() {
        assert_eq!(RadiusMeters::parse_km("1").unwrap().to_meters(), 1_000);
        assert_eq!(RadiusMeters::parse_km("50").unwrap().to_meters(), 50_000);
        assert_eq!(RadiusMeters::parse_km(" 7 ").unwrap().to_km(), 7);
    }

    #[test]
    fn reject_out_of_range() {
        assert_eq!(
            RadiusMeters::parse_km("0"),
            Err(RadiusError::OutOfRange(0))
        );
        assert_eq!(
            RadiusMeters::parse_km("51"),
            Err(RadiusError::OutOfRange(51))
        );
        assert_eq!(
            RadiusMeters::parse_km("-3"),
            Err(RadiusError::OutOfRange(-3))
        );
    }

    #[test]
    fn reject_non_integers() {
        for input in ["", "abc", "2.5", "5km", "1e3"] {
            assert!(
                matches!(
                    RadiusMeters::parse_km(input),
                    Err(RadiusError::NotAnInteger(_))
                ),
                "{input}"
            );
        }
    }

    #[test]
    fn default_radius() {
        assert_eq!(RadiusMeters::default().to_meters(), 10_000);
    }
}
