use rocket::{catch, catchers, get, http::Status, serde::json::Json, Catcher, Request, Route, State};

use radius_boundary::{ClientSettings, Error};

pub fn routes() -> Vec<Route> {
    rocket::routes![get_settings]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

#[get("/settings")]
pub fn get_settings(settings: &State<ClientSettings>) -> Json<ClientSettings> {
    Json(settings.inner().clone())
}

#[catch(default)]
fn default_catcher(status: Status, req: &Request) -> Json<Error> {
    debug!("API request {} {} failed: {status}", req.method(), req.uri());
    Json(Error {
        http_status: status.code,
        message: status.reason_lossy().to_owned(),
    })
}
