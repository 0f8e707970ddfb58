use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod config;

#[derive(Parser)]
#[command(name = "radius", version, about = "Serve the radius map web app")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Port to listen on (overrides the PORT environment variable)
    #[arg(long)]
    port: Option<u16>,

    /// Directory of the built web app
    #[arg(long, value_name = "DIR")]
    static_dir: Option<PathBuf>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config.as_ref())?;
    let webserver_cfg = webserver_cfg(cfg, args);

    radius_webserver::run(webserver_cfg, env!("CARGO_PKG_VERSION")).await;
    Ok(())
}

fn webserver_cfg(cfg: config::Config, args: Args) -> radius_webserver::Cfg {
    let config::Config {
        webserver,
        geocoding,
        geolocation,
    } = cfg;
    let Args {
        config: _,
        port,
        static_dir,
        enable_cors,
    } = args;
    radius_webserver::Cfg {
        address: webserver.address,
        port: port.unwrap_or(webserver.port),
        static_dir: static_dir.unwrap_or(webserver.static_dir),
        enable_cors: enable_cors || webserver.enable_cors,
        geocoding_url: geocoding.url,
        position_policy: geolocation,
    }
}
