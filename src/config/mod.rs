use std::{
    env, fs,
    io::ErrorKind,
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Result};
use radius_entities::position::PositionPolicy;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "radius.toml";

const ENV_NAME_PORT: &str = "PORT";

pub struct Config {
    pub webserver: WebServer,
    pub geocoding: Geocoding,
    pub geolocation: PositionPolicy,
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    /// File system directory of the built web app.
    pub static_dir: PathBuf,
    pub enable_cors: bool,
}

pub struct Geocoding {
    pub url: String,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(port) = env::var(ENV_NAME_PORT) {
            cfg.webserver.port = parse_port(&port)?;
        }
        Ok(cfg)
    }
}

fn parse_port(port: &str) -> Result<u16> {
    port.trim()
        .parse()
        .map_err(|err| anyhow!("Invalid {ENV_NAME_PORT} '{port}': {err}"))
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            webserver,
            geocoding,
            geolocation,
        } = from;

        let raw::WebServer {
            address,
            port,
            static_dir,
            cors,
        } = webserver.unwrap_or_default();
        let webserver = WebServer {
            address,
            port,
            static_dir,
            enable_cors: cors,
        };

        let raw::Geocoding { url } = geocoding.unwrap_or_default();
        let url = url.trim().trim_end_matches('/').to_owned();
        if url.is_empty() {
            return Err(anyhow!("No geocoding URL defined"));
        }
        let geocoding = Geocoding { url };

        let raw::Geolocation {
            high_accuracy,
            timeout,
            maximum_age,
        } = geolocation.unwrap_or_default();
        let geolocation = PositionPolicy {
            enable_high_accuracy: high_accuracy,
            timeout,
            maximum_age,
        };

        Ok(Self {
            webserver,
            geocoding,
            geolocation,
        })
    }
}
