use js_sys::{Object, Reflect};
use leaflet::LatLng;
use leptos::*;
use leptos_leaflet::{
    Circle, DragEvents, LeafletOverlayContainerContext, MapContainer, MapEvents, Marker, Position,
    TileLayer, Tooltip,
};
use wasm_bindgen::{prelude::*, JsCast};

use radius_core::{
    entities::{
        geo::MapPoint,
        map_style::MapStyle,
        radius::RadiusMeters,
        zoom::{Zoom, MIN_ZOOM},
    },
    tracking::{CircleIndicator, LIVE_MARKER_SENTINEL},
};

#[wasm_bindgen]
extern "C" {
    type Control;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = zoom)]
    fn zoom_control(options: &JsValue) -> Control;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = scale)]
    fn scale_control(options: &JsValue) -> Control;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Control, map: &ControlledMap) -> Control;

    #[wasm_bindgen(method)]
    fn remove(this: &Control) -> Control;

    /// The members of `L.Map` that are used to configure controls.
    type ControlledMap;

    #[wasm_bindgen(method, getter, js_name = attributionControl)]
    fn attribution_control(this: &ControlledMap) -> Option<Control>;

    #[wasm_bindgen(method, js_name = setMinZoom)]
    fn set_min_zoom(this: &ControlledMap, zoom: f64) -> ControlledMap;

    type DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn div_icon(options: &JsValue) -> DivIcon;

    /// A marker whose icon can be replaced by a [`DivIcon`].
    type IconMarker;

    #[wasm_bindgen(method, js_name = setIcon)]
    fn set_icon(this: &IconMarker, icon: &DivIcon) -> IconMarker;
}

const LIVE_MARKER_SIZE_PX: u32 = 12;
const LIVE_MARKER_COLOR: &str = "#17a2b8";

fn js_options(entries: &[(&str, JsValue)]) -> JsValue {
    let options = Object::new();
    for (key, value) in entries {
        if let Err(err) = Reflect::set(&options, &JsValue::from_str(key), value) {
            log::warn!("Unable to set option '{key}': {err:?}");
        }
    }
    options.into()
}

fn init_controls(map: &leaflet::Map) {
    let map: &ControlledMap = map.unchecked_ref();
    map.set_min_zoom(f64::from(MIN_ZOOM));
    if let Some(attribution) = map.attribution_control() {
        attribution.remove();
    }
    zoom_control(&js_options(&[("position", "bottomleft".into())])).add_to(map);
    scale_control(&js_options(&[
        ("metric", true.into()),
        ("imperial", false.into()),
    ]))
    .add_to(map);
}

/// Markup of the pulsating dot that shows the tracked device.
fn live_marker_html(size_px: u32, color: &str) -> String {
    format!(
        r#"<span class="pulse" style="width: {size_px}px; height: {size_px}px; background: {color}; color: {color}; box-shadow: 0 0 0 {color};"></span>"#
    )
}

/// Replaces the default icon of the surrounding [`Marker`] by a pulsating dot.
#[component]
fn PulsatingIcon() -> impl IntoView {
    let overlay = use_context::<LeafletOverlayContainerContext>();
    Effect::new(move |_| {
        let Some(marker) = overlay
            .as_ref()
            .and_then(|o| o.container::<leaflet::Marker>()) else {
            return;
        };
        let icon = div_icon(&js_options(&[
            (
                "html",
                live_marker_html(LIVE_MARKER_SIZE_PX, LIVE_MARKER_COLOR).into(),
            ),
            ("className", "".into()),
        ]));
        marker.unchecked_ref::<IconMarker>().set_icon(&icon);
    });
}

fn position(point: MapPoint) -> Position {
    let (lat, lng) = point.to_lat_lng_deg();
    Position::new(lat, lng)
}

fn marker_position(event: &leaflet::Event) -> Option<MapPoint> {
    let marker: leaflet::Marker = event.target().unchecked_into();
    let lat_lng = marker.get_lat_lng();
    MapPoint::try_from_lat_lng_deg(lat_lng.lat(), lat_lng.lng())
}

/// Centers the map on the given point and keeps the zoom level.
pub fn pan_to(map: RwSignal<Option<leaflet::Map>>, point: MapPoint) {
    let Some(map) = map.get_untracked() else {
        log::warn!("No leaflet map found");
        return;
    };
    let (lat, lng) = point.to_lat_lng_deg();
    map.set_view(&LatLng::new(lat, lng), map.get_zoom());
}

#[component]
pub fn RadiusMap(
    origin: Signal<MapPoint>,
    radius: Signal<RadiusMeters>,
    style: Signal<MapStyle>,
    zoom: Zoom,
    indicator: Signal<CircleIndicator>,
    live_marker: Signal<Option<MapPoint>>,
    map: RwSignal<Option<leaflet::Map>>,
    on_origin_moved: Callback<MapPoint, ()>,
    on_zoom_changed: Callback<Zoom, ()>,
) -> impl IntoView {
    let events = MapEvents::new();

    // Position of the origin marker while it is dragged.
    let dragged = RwSignal::new(None::<MapPoint>);

    events.clone().zoom_end(move |_| {
        let Some(map) = map.get_untracked() else {
            log::warn!("No leaflet map found");
            return;
        };
        if let Some(zoom) = Zoom::from_f64(map.get_zoom()) {
            on_zoom_changed.call(zoom);
        }
    });

    let drag_events = DragEvents::new()
        .drag(move |ev| {
            dragged.set(marker_position(&ev));
        })
        .drag_end(move |ev| {
            dragged.set(None);
            match marker_position(&ev) {
                Some(point) => on_origin_moved.call(point),
                None => log::warn!("Dropped origin marker at an invalid position"),
            }
        });

    Effect::new(move |_| {
        if let Some(map) = map.get() {
            log::debug!("Leaflet map created");
            init_controls(&map);
        }
    });

    let origin_position = Signal::derive(move || position(origin.get()));
    let circle_center =
        Signal::derive(move || position(dragged.get().unwrap_or_else(|| origin.get())));
    let circle_radius = Signal::derive(move || f64::from(radius.get().to_meters()));
    let circle_color = Signal::derive(move || indicator.get().color().to_owned());
    let live_marker_position = Signal::derive(move || {
        let point = live_marker.get().unwrap_or_else(|| {
            let (lat, lng) = LIVE_MARKER_SENTINEL;
            MapPoint::from_lat_lng_deg(lat, lng)
        });
        position(point)
    });

    view! {
      <MapContainer
        class="map"
        center=position(origin.get_untracked())
        zoom=zoom.to_f64()
        zoom_control=false
        map=map.write_only()
        set_view=true
        events
      >
        { move || {
            let style = style.get();
            view! { <TileLayer url=style.tile_url() attribution=style.attribution() /> }
        }}
        <Marker position=origin_position draggable=true drag_events>
          <Tooltip permanent=true direction="right">"Origin location"</Tooltip>
        </Marker>
        <Circle center=circle_center radius=circle_radius color=circle_color stroke=false />
        <Show when=move || live_marker.get().is_some()>
          <Marker position=live_marker_position>
            <PulsatingIcon />
            <Tooltip permanent=true direction="right">"You (live tracking)"</Tooltip>
          </Marker>
        </Show>
      </MapContainer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_marker_markup() {
        let html = live_marker_html(12, "#17a2b8");
        assert!(html.starts_with(r#"<span class="pulse""#));
        assert!(html.contains("width: 12px; height: 12px;"));
        assert!(html.contains("background: #17a2b8;"));
        assert!(html.contains("box-shadow: 0 0 0 #17a2b8;"));
    }
}
