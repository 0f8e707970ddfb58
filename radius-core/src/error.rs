use radius_entities::{map_style::UnknownMapStyle, radius::RadiusError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Radius(#[from] RadiusError),
    #[error(transparent)]
    MapStyle(#[from] UnknownMapStyle),
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Live tracking is not active")]
    NotTracking,
}
