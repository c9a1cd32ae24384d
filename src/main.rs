//! Object viewer
//!
//! Opens a window showing one of every object the factory can build.
//! Pass a config file path as the first argument to use its tunables and
//! catalog override; otherwise `factory.ron` in the working directory is
//! tried, then the defaults.

use macroquad::prelude::*;
use object_factory::engine::{FlatTerrain, ParticlePool, Scene};
use object_factory::viewer::Showcase;
use object_factory::{FactoryConfig, ObjectFactory, VERSION};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Object Viewer v{}", VERSION),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "factory.ron".to_string());
    let config = FactoryConfig::load_or_default(&config_path);

    let factory = match ObjectFactory::with_config(Scene::new(), FlatTerrain::new(), ParticlePool::new(), config) {
        Ok(factory) => factory,
        Err(e) => {
            log::error!("catalog override failed, using built-in recipes: {}", e);
            ObjectFactory::new(Scene::new(), FlatTerrain::new(), ParticlePool::new())
        }
    };

    let mut showcase = Showcase::new(factory);
    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        showcase.handle_input();
        showcase.update(get_frame_time());
        showcase.draw();
        next_frame().await;
    }
}
