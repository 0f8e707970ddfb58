use leptos::window;
use wasm_bindgen::JsValue;

/// Replaces the path of the current history entry
/// without adding a new one.
pub fn replace_path(path: &str) {
    let result = window()
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(path)));
    if let Err(err) = result {
        log::warn!("Unable to replace URL path with '{path}': {err:?}");
    }
}
