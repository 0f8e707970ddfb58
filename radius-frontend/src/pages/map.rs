use leptos::*;
use leptos_router::use_location;

use radius_core::{
    entities::{geo::MapPoint, place::PlaceResult, zoom::Zoom},
    map_view::{Initialized, MapView},
    route::ROOT_PATH,
};

use crate::{
    components::*,
    device::{current_position, replace_path, BrowserSession},
    Settings,
};

#[allow(clippy::too_many_lines)]
#[component]
#[must_use]
pub fn MapPage(settings: Signal<Settings>) -> impl IntoView {
    let location = use_location();
    let Initialized { view, redirect } =
        MapView::<BrowserSession>::initialize(&location.pathname.get_untracked());
    if let Some(err) = redirect {
        log::info!("Redirect to {ROOT_PATH}: {err}");
        replace_path(ROOT_PATH);
    }
    let zoom = view.zoom();

    // -- signals -- //

    let view = RwSignal::new(view);
    let map = RwSignal::new(None::<leaflet::Map>);

    let origin = Signal::derive(move || view.with(MapView::origin));
    let radius = Signal::derive(move || view.with(MapView::radius));
    let style = Signal::derive(move || view.with(MapView::style));
    let indicator = Signal::derive(move || view.with(MapView::circle_indicator));
    let live_marker = Signal::derive(move || view.with(MapView::live_marker));
    let tracking = Signal::derive(move || view.with(MapView::tracking_status));
    let geocoding_api = Signal::derive(move || settings.with(|s| s.geocoding_api.clone()));

    // -- effects -- //

    // The first run is skipped so that a redirect to the root path is kept
    // until the user changes the view.
    Effect::new(move |previous_path: Option<String>| {
        let path = view.with(MapView::path);
        if previous_path.is_some_and(|previous| previous != path) {
            log::debug!("Update URL path: {path}");
            replace_path(&path);
        }
        path
    });

    // -- callbacks -- //

    let on_origin_moved = Callback::new(move |point: MapPoint| {
        match view.try_update(|v| v.move_origin(point)) {
            Some(Ok(())) => pan_to(map, point),
            Some(Err(err)) => log::warn!("Unable to move origin: {err}"),
            None => {}
        }
    });

    let on_zoom_changed = Callback::new(move |zoom: Zoom| {
        if view.with_untracked(MapView::zoom) != zoom {
            view.update(|v| v.set_zoom(zoom));
        }
    });

    let on_radius_input = Callback::new(move |km: String| {
        if let Some(Err(err)) = view.try_update(|v| v.set_radius(&km)) {
            log::warn!("Ignore radius '{km}': {err}");
        }
    });

    let on_style_selected = Callback::new(move |id: String| {
        if let Some(Err(err)) = view.try_update(|v| v.set_map_style(&id)) {
            log::warn!("Ignore map style '{id}': {err}");
        }
    });

    let on_place_selected = Callback::new(move |place: PlaceResult| {
        log::debug!("Selected place '{}'", place.display_name);
        on_origin_moved.call(place.position);
    });

    // -- actions -- //

    let locate = Action::new(move |()| {
        let policy = settings.with_untracked(|s| s.position_policy);
        async move {
            match current_position(&policy).await {
                Ok(point) => on_origin_moved.call(point),
                Err(err) => log::warn!("Unable to locate device: {err}"),
            }
        }
    });

    let on_locate = Callback::new(move |()| {
        locate.dispatch(());
    });

    let on_track_position = move |point: MapPoint| {
        match view.try_update(|v| v.track_position(point)) {
            Some(Ok(indicator)) => {
                log::debug!("Tracked position {point} ({indicator:?})");
                pan_to(map, point);
            }
            Some(Err(err)) => log::debug!("Ignore position update: {err}"),
            None => {}
        }
    };

    let on_toggle_tracking = Callback::new(move |()| {
        let policy = settings.with_untracked(|s| s.position_policy);
        let toggled = view.try_update(|v| {
            v.toggle_tracking(|| BrowserSession::start(&policy, on_track_position))
        });
        match toggled {
            Some(Ok(status)) => log::info!("Live tracking: {status:?}"),
            Some(Err(err)) => log::warn!("Unable to start live tracking: {err}"),
            None => {}
        }
    });

    view! {
      <RadiusMap
        origin
        radius
        style
        zoom
        indicator
        live_marker
        map
        on_origin_moved
        on_zoom_changed
      />
      <div class="panel">
        <PlaceSearch api=geocoding_api on_select=on_place_selected />
        <Controls
          radius
          style
          tracking
          on_radius_input
          on_style_selected
          on_locate
          on_toggle_tracking
        />
      </div>
    }
}
