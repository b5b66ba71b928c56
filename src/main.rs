mod app;
mod camera;
mod config;
mod event;
mod frame_clock;
mod ui;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use crate::app::App;
use crate::config::{AppConfig, load_config_from_path, resolve_root};

#[derive(Parser, Debug)]
#[command(author, version, about = "Density grids on a globe, crossfading between datasets")]
struct Args {
    /// TOML configuration; built-in datasets are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory that relative data and texture paths resolve against
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Log filter, e.g. "info" or "densglobe=debug,events=trace"
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(filter) = args.log_level.as_deref() {
        logger.parse_filters(filter);
    }
    logger.init();

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let cfg = match args.config.as_deref() {
        Some(path) => {
            log::info!("config: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let cfg = AppConfig::default();
            cfg.validate()?;
            cfg
        }
    };
    let root = resolve_root(args.assets.as_deref(), args.config.as_deref());

    // Everything is loaded and built before a window exists.
    let datasets = densglobe_grid::load_all(&cfg.datasets, &cfg.derived, &root)?;
    let cpu = densglobe_mesh_cpu::build_globe_mesh(&datasets, &cfg.boxes)?;
    drop(datasets);

    let (mut rl, thread) = raylib::init()
        .size(cfg.window.width, cfg.window.height)
        .title(&cfg.window.title)
        .resizable()
        .msaa_4x()
        .build();
    rl.set_target_fps(60);

    let mut app = App::new(&mut rl, &thread, &cfg, &cpu, &root)?;
    drop(cpu);

    while !rl.window_should_close() {
        let dt = app.frame_dt(&rl);
        app.step(&mut rl, dt);
        app.render(&mut rl, &thread, dt);
        app.sync_event_waiting();
    }
    Ok(())
}
