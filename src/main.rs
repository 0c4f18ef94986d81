use anyhow::{Context, Result};
use clap::Parser;
use launchpad::api::HttpRocketsProvider;
use launchpad::config::{Config, MotionSourceKind};
use launchpad::logging::init_tracing;
use launchpad::motion::{ManualMotion, MotionHandle, MotionSensor, NoMotion, SimulatedMotion};
use launchpad::ui::mvi::Store;
use launchpad::ui::rocket_launch::RocketLaunchEnvironment;
use launchpad::ui::rocket_list::{RocketListAction, RocketListEnvironment, RocketListReducer};
use launchpad::ui::App;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "launchpad")]
#[command(version, about = "Browse rockets and launch one")]
struct Args {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// API base URL, e.g. http://localhost:8080
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Pitch source for the launch screen
    #[arg(long, value_enum, value_name = "SOURCE")]
    motion: Option<MotionSourceKind>,

    /// Fetch once, print rocket names and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = load_config(&args)?;
    tracing::info!(endpoint = %config.api.rockets_url(), motion = ?config.motion.source, "Starting");

    let provider = HttpRocketsProvider::new(&config.api).context("Failed to build HTTP client")?;
    let (sensor, manual) = motion_sensor(config.motion.source);
    let motion = MotionHandle::new(sensor, Duration::from_millis(config.motion.interval_ms));
    let environment =
        RocketListEnvironment::new(Arc::new(provider), RocketLaunchEnvironment::new(motion));
    let mut store = Store::<RocketListReducer>::new(Default::default(), Arc::new(environment));

    if args.list {
        return list(&mut store).await;
    }

    let app = App::new(store, manual, config.motion.auto_start);
    launchpad::ui::run(app).await.context("Terminal UI failed")?;
    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    if let Some(endpoint) = &args.endpoint {
        config.api.base_url = endpoint.clone();
    }
    if let Some(source) = args.motion {
        config.motion.source = source;
    }
    config.validate().context("Invalid command line override")?;
    Ok(config)
}

fn motion_sensor(kind: MotionSourceKind) -> (Arc<dyn MotionSensor>, Option<ManualMotion>) {
    match kind {
        MotionSourceKind::Manual => {
            let manual = ManualMotion::new(0.0);
            (Arc::new(manual.clone()), Some(manual))
        }
        MotionSourceKind::Simulated => (Arc::new(SimulatedMotion::default()), None),
        MotionSourceKind::None => (Arc::new(NoMotion), None),
    }
}

/// Headless mode: one load cycle, printed to stdout.
async fn list(store: &mut Store<RocketListReducer>) -> Result<()> {
    store.send(RocketListAction::Load);
    while store.next().await.is_some() {}

    let state = store.state();
    if let Some(error) = &state.error {
        return Err(error.clone().into());
    }
    for rocket in &state.rockets {
        println!("{}", rocket.rocket_name);
    }
    Ok(())
}
