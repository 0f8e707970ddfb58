use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use rocket::{config::Config as RocketCfg, figment::Figment, Catcher, Rocket, Route};

use radius_boundary::{ClientSettings, PositionPolicy};
use radius_entities::position::PositionPolicy as EntityPositionPolicy;

mod api;
mod frontend;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub address: IpAddr,
    pub port: u16,
    /// Directory of the built web app.
    pub static_dir: PathBuf,
    pub enable_cors: bool,
    /// Base URL of the geocoding service the web app talks to.
    pub geocoding_url: String,
    pub position_policy: EntityPositionPolicy,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    catchers: Vec<(&'static str, Vec<Catcher>)>,
    figment: Figment,
    static_dir: PathBuf,
    settings: ClientSettings,
}

impl InstanceOptions {
    fn new(cfg: Cfg, version: &'static str) -> Self {
        let Cfg {
            address,
            port,
            static_dir,
            enable_cors: _,
            geocoding_url,
            position_policy,
        } = cfg;
        let figment = RocketCfg::figment()
            .merge(("address", address))
            .merge(("port", port));
        let settings = ClientSettings {
            version: version.to_owned(),
            geocoding_url,
            position_policy: PositionPolicy::from(position_policy),
        };
        Self {
            mounts: mounts(&static_dir),
            catchers: catchers(),
            figment,
            static_dir,
            settings,
        }
    }
}

pub(crate) fn rocket_instance(options: InstanceOptions) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        catchers,
        figment,
        static_dir,
        settings,
    } = options;

    info!("Serve web app from {}", static_dir.display());

    let mut instance = rocket::custom(figment)
        .manage(frontend::StaticDir(static_dir))
        .manage(settings);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    for (m, c) in catchers {
        instance = instance.register(m, c);
    }
    instance
}

fn mounts(static_dir: &Path) -> Vec<(&'static str, Vec<Route>)> {
    vec![
        ("/api", api::routes()),
        ("/", frontend::static_files(static_dir)),
        ("/", frontend::routes()),
    ]
}

fn catchers() -> Vec<(&'static str, Vec<Catcher>)> {
    vec![("/api", api::catchers())]
}

pub async fn run(cfg: Cfg, version: &'static str) {
    let enable_cors = cfg.enable_cors;
    let instance = rocket_instance(InstanceOptions::new(cfg, version));
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
