use std::{cell::RefCell, rc::Rc};

use anyhow::{anyhow, Result};
use futures_channel::oneshot;
use leptos::window;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Geolocation, GeolocationPosition, GeolocationPositionError, PositionOptions};

use radius_core::entities::{geo::MapPoint, position::PositionPolicy};

fn geolocation() -> Result<Geolocation> {
    window()
        .navigator()
        .geolocation()
        .map_err(|err| anyhow!("Geolocation is not available: {err:?}"))
}

fn position_options(policy: &PositionPolicy) -> PositionOptions {
    let options = PositionOptions::new();
    options.set_enable_high_accuracy(policy.enable_high_accuracy);
    options.set_timeout(policy.timeout_millis());
    options.set_maximum_age(policy.maximum_age_millis());
    options
}

fn map_point(position: &GeolocationPosition) -> Result<MapPoint> {
    let coords = position.coords();
    let (lat, lng) = (coords.latitude(), coords.longitude());
    MapPoint::try_from_lat_lng_deg(lat, lng)
        .filter(|p| p.is_valid())
        .ok_or_else(|| anyhow!("Invalid device position ({lat}, {lng})"))
}

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!(err
        .as_string()
        .unwrap_or_else(|| "unknown JS error".to_string()))
}

/// Requests the current position of the device once.
pub async fn current_position(policy: &PositionPolicy) -> Result<MapPoint> {
    let geolocation = geolocation()?;
    let (tx, rx) = oneshot::channel::<Result<MapPoint>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let tx_success = Rc::clone(&tx);
    let on_success = Closure::once(move |position: GeolocationPosition| {
        if let Some(tx) = tx_success.borrow_mut().take() {
            let _ = tx.send(map_point(&position));
        }
    });
    let tx_error = tx;
    let on_error = Closure::once(move |err: GeolocationPositionError| {
        if let Some(tx) = tx_error.borrow_mut().take() {
            let _ = tx.send(Err(anyhow!("{} (code {})", err.message(), err.code())));
        }
    });

    geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
            &position_options(policy),
        )
        .map_err(js_error)?;

    let result = rx
        .await
        .map_err(|_| anyhow!("Position request has been cancelled"))?;
    drop((on_success, on_error));
    result
}

/// Continuous subscription to position updates.
///
/// The subscription is cancelled on drop.
pub struct PositionWatch {
    geolocation: Geolocation,
    id: i32,
    _on_success: Closure<dyn FnMut(GeolocationPosition)>,
    _on_error: Closure<dyn FnMut(GeolocationPositionError)>,
}

impl PositionWatch {
    pub fn start<F>(policy: &PositionPolicy, on_position: F) -> Result<Self>
    where
        F: Fn(MapPoint) + 'static,
    {
        let geolocation = geolocation()?;
        let on_success = Closure::<dyn FnMut(GeolocationPosition)>::new(
            move |position: GeolocationPosition| match map_point(&position) {
                Ok(point) => on_position(point),
                Err(err) => log::warn!("Ignore position update: {err}"),
            },
        );
        let on_error = Closure::<dyn FnMut(GeolocationPositionError)>::new(
            |err: GeolocationPositionError| {
                log::warn!("Position update failed: {}", err.message());
            },
        );
        let id = geolocation
            .watch_position_with_error_callback_and_options(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
                &position_options(policy),
            )
            .map_err(js_error)?;
        log::debug!("Watching device position (id = {id})");
        Ok(Self {
            geolocation,
            id,
            _on_success: on_success,
            _on_error: on_error,
        })
    }
}

impl Drop for PositionWatch {
    fn drop(&mut self) {
        log::debug!("Stop watching device position (id = {})", self.id);
        self.geolocation.clear_watch(self.id);
    }
}
