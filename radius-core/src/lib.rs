//! # radius-core
//!
//! Application logic of the radius map that does not depend on a browser:
//! resolving routes, mutating the view state and tracking the device
//! relative to the radius circle.

pub mod map_view;
pub mod route;
pub mod search;
pub mod tracking;

mod error;

pub use self::error::Error;

pub use radius_entities as entities;

pub type Result<T> = std::result::Result<T, Error>;
