use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use radius_boundary::NominatimPlace;
use radius_core::search::{PlaceQuery, RESULT_LIMIT};

use crate::{Error, Result};

/// Client of a Nominatim compatible geocoding service.
///
/// Requests are neither cached nor retried.
#[derive(Clone)]
pub struct GeocodingApi {
    url: String,
}

impl GeocodingApi {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into().trim_end_matches('/').to_owned();
        Self { url }
    }

    pub async fn search(&self, query: &PlaceQuery) -> Result<Vec<NominatimPlace>> {
        let url = search_url(&self.url, query);
        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(Error::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

fn search_url(endpoint_url: &str, query: &PlaceQuery) -> String {
    let encoded_query = utf8_percent_encode(query.as_str(), NON_ALPHANUMERIC);
    format!(
        "{endpoint_url}/search?format=json&addressdetails=1&limit={RESULT_LIMIT}&q={encoded_query}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_search_url() {
        let query = PlaceQuery::new("Masjid Negara, KL").unwrap();
        assert_eq!(
            search_url("https://nominatim.openstreetmap.org", &query),
            "https://nominatim.openstreetmap.org/search?format=json&addressdetails=1&limit=5&q=Masjid%20Negara%2C%20KL"
        );
    }

    #[test]
    fn strip_trailing_slash_of_endpoint() {
        let api = GeocodingApi::new("https://example.org/nominatim/");
        assert_eq!(api.url, "https://example.org/nominatim");
    }
}
