use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod geocoding;
mod public;

pub use self::{geocoding::*, public::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("{0:?}")]
    Api(radius_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<radius_boundary::Error> for Error {
    fn from(err: radius_boundary::Error) -> Self {
        Self::Api(err)
    }
}

/// Parses the body of a radius server response.
pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(response.json::<radius_boundary::Error>().await?.into())
    }
}
