use gloo_net::http::Request;

use radius_boundary::ClientSettings;

use crate::{into_json, Result};

/// API of the radius server.
#[derive(Clone)]
pub struct PublicApi {
    url: String,
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    pub async fn settings(&self) -> Result<ClientSettings> {
        let url = format!("{}/settings", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }
}
