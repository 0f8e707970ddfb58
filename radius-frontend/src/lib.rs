use leptos::*;
use leptos_router::*;

use radius_boundary::ClientSettings;
use radius_core::entities::position::PositionPolicy;
use radius_frontend_api as api;

mod components;
mod device;

mod pages;
use pages::*;

const DEFAULT_API_URL: &str = "/api";
const DEFAULT_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org";

/// Runtime settings delivered by the server.
#[derive(Clone)]
pub struct Settings {
    pub geocoding_api: api::GeocodingApi,
    pub position_policy: PositionPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            geocoding_api: api::GeocodingApi::new(DEFAULT_GEOCODING_URL),
            position_policy: PositionPolicy::default(),
        }
    }
}

impl From<ClientSettings> for Settings {
    fn from(from: ClientSettings) -> Self {
        let ClientSettings {
            version: _,
            geocoding_url,
            position_policy,
        } = from;
        Self {
            geocoding_api: api::GeocodingApi::new(geocoding_url),
            position_policy: position_policy.into(),
        }
    }
}

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let settings = RwSignal::new(Settings::default());

    // -- actions -- //

    let public_api = api::PublicApi::new(DEFAULT_API_URL.to_string());

    let fetch_settings = Action::new(move |()| {
        let public_api = public_api.clone();
        async move {
            match public_api.settings().await {
                Ok(client_settings) => {
                    log::info!("Connected to radius server v{}", client_settings.version);
                    settings.set(client_settings.into());
                }
                Err(err) => {
                    log::warn!("Unable to fetch settings, use defaults: {err}");
                }
            }
        }
    });

    // -- init -- //

    fetch_settings.dispatch(());

    view! {
      <Router>
        <main>
          <Routes>
            <Route
              path="/*any"
              view=move || view! { <MapPage settings = settings.into() /> }
            />
          </Routes>
        </main>
      </Router>
    }
}
