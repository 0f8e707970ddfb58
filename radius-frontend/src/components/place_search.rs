use leptos::*;

use radius_core::{
    entities::place::PlaceResult,
    search::{project_places, PlaceQuery, SearchSequencer, SearchTicket},
};
use radius_frontend_api::GeocodingApi;

/// Responses that arrive after the component was unmounted are stale too.
fn is_current(sequencer: StoredValue<SearchSequencer>, ticket: SearchTicket) -> bool {
    sequencer
        .try_with_value(|s| s.is_latest(ticket))
        .unwrap_or(false)
}

#[component]
pub fn PlaceSearch(api: Signal<GeocodingApi>, on_select: Callback<PlaceResult, ()>) -> impl IntoView {
    let results = RwSignal::new(Vec::<PlaceResult>::new());
    let sequencer = StoredValue::new(SearchSequencer::default());
    let input = NodeRef::<html::Input>::new();

    let clear = move || {
        sequencer.update_value(SearchSequencer::cancel);
        results.set(Vec::new());
    };

    let search = move |text: String| {
        let Some(query) = PlaceQuery::new(&text) else {
            clear();
            return;
        };
        let Some(ticket) = sequencer.try_update_value(SearchSequencer::next_ticket) else {
            return;
        };
        let api = api.get_untracked();
        spawn_local(async move {
            let response = api.search(&query).await;
            if !is_current(sequencer, ticket) {
                log::debug!("Discard outdated results for '{}'", query.as_str());
                return;
            }
            match response {
                Ok(places) => results.set(project_places(&places)),
                Err(err) => {
                    log::warn!("Unable to search for '{}': {err}", query.as_str());
                    results.set(Vec::new());
                }
            }
        });
    };

    let select = move |place: PlaceResult| {
        clear();
        if let Some(input) = input.get_untracked() {
            input.set_value("");
        }
        on_select.call(place);
    };

    view! {
      <div class="place-search">
        <input
          type="search"
          placeholder="Search origin"
          node_ref=input
          on:input=move |ev| search(event_target_value(&ev))
          on:keyup=move |ev| {
            if ev.key() == "Escape" {
              event_target::<web_sys::HtmlInputElement>(&ev).set_value("");
              clear();
            }
          }
        />
        <Show when=move || results.with(|r| !r.is_empty())>
          <ul>
            { move || results
                .get()
                .into_iter()
                .map(|place| {
                    let label = place.label.clone();
                    let title = place.display_name.clone();
                    view! { <li title=title on:click=move |_| select(place.clone())>{ label }</li> }
                })
                .collect_view()
            }
          </ul>
        </Show>
      </div>
    }
}
