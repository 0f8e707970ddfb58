use std::path::{Path, PathBuf};

use rocket::{
    fs::{FileServer, NamedFile, Options},
    get,
    http::uri::{fmt, Segments},
    Route, State,
};

/// Entry document of the single page application.
const INDEX_HTML: &str = "index.html";

/// Paths below this prefix belong to the JSON API.
const API_PREFIX: &str = "api";

pub(crate) struct StaticDir(pub PathBuf);

pub fn static_files(dir: &Path) -> Vec<Route> {
    FileServer::new(dir, Options::Index | Options::Missing).into()
}

pub fn routes() -> Vec<Route> {
    rocket::routes![get_index]
}

/// Requests that do not match a static asset get the entry document
/// so that the client side router can resolve the path.
#[get("/<path..>", rank = 20)]
async fn get_index(
    path: Segments<'_, fmt::Path>,
    dir: &State<StaticDir>,
) -> Option<NamedFile> {
    // Raw segments: client routes may start with a dot, e.g. `/.5/101.7/5`.
    if path.get(0) == Some(API_PREFIX) {
        return None;
    }
    let index = dir.0.join(INDEX_HTML);
    match NamedFile::open(&index).await {
        Ok(file) => Some(file),
        Err(err) => {
            warn!("Unable to open {}: {err}", index.display());
            None
        }
    }
}
