//! Headless demo runner.
//!
//! Runs the simulation for a fixed number of ticks with a seeded random
//! wander script standing in for a human on the controls, logging effect
//! triggers as they fire. Useful for smoke-testing a level layout from
//! the command line.

use clap::Parser;
use log::{debug, info, warn};

use toydash::components::gridposition::GridPosition;
use toydash::components::player::{ControlScheme, Player};
use toydash::game::Game;
use toydash::resources::clipstore::ClipStore;
use toydash::resources::gameconfig::GameConfig;
use toydash::resources::input::DirectionControl;
use toydash::resources::layout::LevelLayout;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless toydash simulation runner")]
struct Cli {
    /// Path to the INI configuration file
    #[arg(short, long, default_value = "./config.ini")]
    config: String,

    /// Path to a JSON level layout
    #[arg(short, long)]
    layout: Option<String>,

    /// Path to a JSON clip table (defaults to the built-in strip)
    #[arg(long)]
    clips: Option<String>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u32,

    /// Seed for the wander script
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

const TICK_SECONDS: f32 = 1.0 / 60.0;
const TICK_MILLIS: f64 = 1000.0 / 60.0;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using default configuration", e);
    }
    let clips = match &cli.clips {
        Some(path) => ClipStore::load_from_file(path)?,
        None => ClipStore::default(),
    };
    let layout = match &cli.layout {
        Some(path) => LevelLayout::load_from_file(path)?,
        None => LevelLayout::empty(),
    };

    let (mut game, effect_rx) = Game::new(config, clips, &layout)?;

    let mut rng = fastrand::Rng::with_seed(cli.seed);
    let mut held: Option<DirectionControl> = None;
    let mut now_ms = 0.0;

    for tick in 0..cli.ticks {
        // change heading every half second or so
        if tick % 30 == 0 {
            if let Some(dir) = held.take() {
                game.release_control(ControlScheme::Main, dir);
            }
            if rng.u8(..4) > 0 {
                let dir = match rng.u8(..4) {
                    0 => DirectionControl::Up,
                    1 => DirectionControl::Down,
                    2 => DirectionControl::Left,
                    _ => DirectionControl::Right,
                };
                game.press_control(ControlScheme::Main, dir);
                held = Some(dir);
            }
        }

        now_ms += TICK_MILLIS;
        game.tick(TICK_SECONDS, now_ms);

        for effect in effect_rx.try_iter() {
            debug!("tick {}: effect {:?}", tick, effect);
        }
    }

    let entity = game.player();
    let world = game.world();
    if let (Some(player), Some(position)) =
        (world.get::<Player>(entity), world.get::<GridPosition>(entity))
    {
        info!(
            "simulated {} ticks: player at {:?}, score {}, {}",
            cli.ticks,
            position.pos,
            player.score,
            if player.dead { "dead" } else { "alive" }
        );
    }
    Ok(())
}
