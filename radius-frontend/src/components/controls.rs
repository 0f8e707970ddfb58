use leptos::*;

use radius_core::{
    entities::{map_style::MapStyle, radius::RadiusMeters},
    tracking::TrackingStatus,
};

#[component]
pub fn Controls(
    radius: Signal<RadiusMeters>,
    style: Signal<MapStyle>,
    tracking: Signal<TrackingStatus>,
    on_radius_input: Callback<String, ()>,
    on_style_selected: Callback<String, ()>,
    on_locate: Callback<(), ()>,
    on_toggle_tracking: Callback<(), ()>,
) -> impl IntoView {
    let is_tracking = move || tracking.get() == TrackingStatus::Tracking;

    view! {
      <input
        type="number"
        class="radius-input"
        title="Radius (km)"
        min=RadiusMeters::MIN_KM
        max=RadiusMeters::MAX_KM
        step="1"
        prop:value=move || radius.get().to_km().to_string()
        on:change=move |ev| on_radius_input.call(event_target_value(&ev))
      />
      <select
        title="Map style"
        on:change=move |ev| on_style_selected.call(event_target_value(&ev))
      >
        { MapStyle::all()
            .map(|s| view! {
              <option value=s.id() prop:selected=move || style.get() == s>{ s.label() }</option>
            })
            .collect_view()
        }
      </select>
      <button title="Move the origin to my location" on:click=move |_| on_locate.call(())>
        "Locate me"
      </button>
      <button
        title="Track my location"
        class:tracking=is_tracking
        on:click=move |_| on_toggle_tracking.call(())
      >
        { move || if is_tracking() { "Stop tracking" } else { "Track me" } }
      </button>
    }
}
