use std::{net::IpAddr, path::PathBuf, time::Duration};

use duration_str::deserialize_duration;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("radius.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub webserver: Option<WebServer>,
    pub geocoding: Option<Geocoding>,
    pub geolocation: Option<Geolocation>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub url: String,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default()
            .geocoding
            .expect("Geocoding configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geolocation {
    pub high_accuracy: bool,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub maximum_age: Duration,
}

impl Default for Geolocation {
    fn default() -> Self {
        Config::default()
            .geolocation
            .expect("Geolocation configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.webserver.is_some());
        assert!(cfg.geocoding.is_some());
        assert!(cfg.geolocation.is_some());
    }

    #[test]
    fn default_geolocation_config() {
        let cfg = Geolocation::default();
        assert!(cfg.high_accuracy);
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert_eq!(cfg.maximum_age, Duration::from_secs(60));
    }

    #[test]
    fn sections_are_optional() {
        let cfg: Config = toml::from_str("[geocoding]\nurl = \"http://localhost:7070\"").unwrap();
        assert!(cfg.webserver.is_none());
        assert!(cfg.geolocation.is_none());
        assert_eq!(cfg.geocoding.unwrap().url, "http://localhost:7070");
    }
}
