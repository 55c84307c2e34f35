use std::error::Error;
use std::path::Path;
use std::time::Instant;

use photon_lite::{render, Config};

const SCENE_PATH: &str = "scene.json";

fn load_config() -> Result<Config, Box<dyn Error>> {
    if Path::new(SCENE_PATH).exists() {
        log::info!("Loading scene from {}", SCENE_PATH);
        Ok(Config::load(SCENE_PATH)?)
    } else {
        log::info!("No {} found, rendering the demo scene", SCENE_PATH);
        Ok(Config::default())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let scene = config.scene();
    let (width, height) = (config.render.width, config.render.height);

    log::debug!(
        "Scene: {} spheres, {} disks, {} lights",
        scene.spheres.len(),
        scene.disks.len(),
        scene.lights.len()
    );

    log::info!("Start drawing {}x{} ...", width, height);
    let now = Instant::now();

    let frame = render(&scene, &config.render.frustum, width, height);

    log::info!("Finished, elapsed: {} ms", now.elapsed().as_millis());

    frame.save(&config.render.output)?;
    log::info!("Saved {}", config.render.output.display());

    Ok(())
}
