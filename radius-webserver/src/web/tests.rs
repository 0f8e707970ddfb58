use std::net::Ipv4Addr;

use rocket::{
    http::{ContentType, Status},
    local::blocking::Client,
};

use radius_boundary::{ClientSettings, Error, PositionPolicy};
use radius_entities::position::PositionPolicy as EntityPositionPolicy;

use super::{rocket_instance, Cfg, InstanceOptions};

const DUMMY_VERSION: &str = "3.2.1";

const FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/dist");

fn test_cfg() -> Cfg {
    Cfg {
        address: Ipv4Addr::LOCALHOST.into(),
        port: 0,
        static_dir: FIXTURE_DIR.into(),
        enable_cors: false,
        geocoding_url: "https://nominatim.example.org".into(),
        position_policy: EntityPositionPolicy::default(),
    }
}

fn client() -> Client {
    let rocket = rocket_instance(InstanceOptions::new(test_cfg(), DUMMY_VERSION));
    Client::tracked(rocket).unwrap()
}

fn assert_index(client: &Client, path: &str) {
    let res = client.get(path).dispatch();
    assert_eq!(res.status(), Status::Ok, "{path}");
    assert_eq!(res.content_type(), Some(ContentType::HTML), "{path}");
    let body = res.into_string().unwrap();
    assert!(body.contains(r#"<div id="app">"#), "{path}");
}

#[test]
fn serve_index_at_root() {
    let client = client();
    assert_index(&client, "/");
}

#[test]
fn serve_static_assets() {
    let client = client();
    let res = client.get("/main.css").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(res.content_type(), Some(ContentType::CSS));
}

#[test]
fn serve_index_for_client_side_routes() {
    let client = client();
    assert_index(&client, "/3.1/101.7/5/14/2");
    assert_index(&client, "/3.1420/101.6918/10");
    assert_index(&client, "/foo/bar");
}

#[test]
fn serve_index_for_paths_with_unusual_segments() {
    let client = client();
    assert_index(&client, "/.5/101.7/5");
    assert_index(&client, "/3.1/101.7/5/14/2:");
    assert_index(&client, "/.well-known/x");
    assert_index(&client, "/apis/foo");
}

#[test]
fn get_client_settings() {
    let client = client();
    let res = client.get("/api/settings").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(res.content_type(), Some(ContentType::JSON));
    let settings: ClientSettings = res.into_json().unwrap();
    assert_eq!(
        settings,
        ClientSettings {
            version: DUMMY_VERSION.into(),
            geocoding_url: "https://nominatim.example.org".into(),
            position_policy: PositionPolicy {
                enable_high_accuracy: true,
                timeout_ms: 30_000,
                maximum_age_ms: 60_000,
            },
        }
    );
}

#[test]
fn unknown_api_path_returns_json_error() {
    let client = client();
    let res = client.get("/api/unknown").dispatch();
    assert_eq!(res.status(), Status::NotFound);
    assert_eq!(res.content_type(), Some(ContentType::JSON));
    let err: Error = res.into_json().unwrap();
    assert_eq!(err.http_status, 404);
}

#[test]
fn missing_static_dir_responds_not_found() {
    let mut cfg = test_cfg();
    cfg.static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/missing").into();
    let client = Client::tracked(rocket_instance(InstanceOptions::new(cfg, DUMMY_VERSION))).unwrap();
    let res = client.get("/3.1/101.7/5").dispatch();
    assert_eq!(res.status(), Status::NotFound);
}
