//! Game facade: owns the ECS world and the tick schedule.
//!
//! The host constructs a [`Game`] from configuration, a clip table, and a
//! level layout, then calls [`Game::tick`] once per frame with the frame
//! delta and a wall-clock timestamp. Everything else (input, effect
//! drain) goes through the world accessors.
//!
//! Systems run in one chained sequence per tick, so within a tick the
//! order is always: platforms move, respawns fire, controls integrate,
//! riders follow, contacts resolve, positions commit, locomotion and
//! animation update, input edges settle, effects flush.

use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;
use glam::Vec2;
use log::{debug, info};

use crate::components::animation::{AnimationCursor, ClipId};
use crate::components::contact::Contact;
use crate::components::gridposition::GridPosition;
use crate::components::inventory::ToyParts;
use crate::components::platform::PlatformPatrol;
use crate::components::player::{ControlScheme, Player, PlayerRig};
use crate::components::rigidbody::RigidBody;
use crate::events::effect::EffectCmd;
use crate::events::toy::observe_toy_completed;
use crate::resources::board::Board;
use crate::resources::clipstore::ClipStore;
use crate::resources::effects::setup_effects;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{DirectionControl, InputState};
use crate::resources::layout::{CellKind, LevelLayout};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::{advance_animation, select_locomotion};
use crate::systems::commit::commit_positions;
use crate::systems::contact::resolve_contacts;
use crate::systems::effects::{forward_effect_cmds, update_effect_cmds};
use crate::systems::input::settle_input;
use crate::systems::kinematics::kinematics;
use crate::systems::platform::{platform_patrol, platform_ride};
use crate::systems::respawn::respawn_players;
use crate::systems::time::update_world_time;

/// The running simulation.
pub struct Game {
    world: World,
    schedule: Schedule,
    player: Entity,
    next_player_id: u32,
}

impl Game {
    /// Build a world from validated config, clips, and layout. Returns
    /// the game plus the receiver for effect triggers.
    pub fn new(
        config: GameConfig,
        clips: ClipStore,
        layout: &LevelLayout,
    ) -> Result<(Self, Receiver<EffectCmd>), String> {
        config.validate()?;
        clips.validate()?;
        layout.validate(config.board_width, config.board_height)?;

        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(InputState::default());
        world.insert_resource(Board::new(config.board_width, config.board_height));
        let effect_rx = setup_effects(&mut world);
        world.spawn(Observer::new(observe_toy_completed));

        spawn_layout_entities(&mut world, layout);

        let spawn = layout
            .spawn_pos()
            .unwrap_or(Vec2::new(config.start_x, config.start_y));
        let rest_start = clips.rest.start;
        let player = spawn_player_at(
            &mut world,
            0,
            spawn,
            ControlScheme::Main,
            config.acceleration_step,
            config.max_velocity,
            rest_start,
        );
        info!("player 0 spawned at {:?}", spawn);

        world.insert_resource(config);
        world.insert_resource(clips);

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                platform_patrol,
                respawn_players,
                kinematics,
                platform_ride,
                resolve_contacts,
                commit_positions,
                select_locomotion,
                advance_animation,
                settle_input,
                update_effect_cmds,
                forward_effect_cmds,
            )
                .chain(),
        );
        schedule
            .initialize(&mut world)
            .map_err(|e| format!("Failed to build schedule: {:?}", e))?;

        Ok((
            Self {
                world,
                schedule,
                player,
                next_player_id: 1,
            },
            effect_rx,
        ))
    }

    /// Advance the simulation by `dt` seconds at wall-clock `now_ms`.
    pub fn tick(&mut self, dt: f32, now_ms: f64) {
        update_world_time(&mut self.world, dt, now_ms);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Spawn an extra player on the given control group at the first
    /// player's spawn point.
    pub fn add_player(&mut self, scheme: ControlScheme) -> Entity {
        let spawn = self
            .world
            .get::<Player>(self.player)
            .map(|p| p.start_pos)
            .unwrap_or(Vec2::ZERO);
        let (step, max) = {
            let config = self.world.resource::<GameConfig>();
            (config.acceleration_step, config.max_velocity)
        };
        let rest_start = self.world.resource::<ClipStore>().rest.start;
        let id = self.next_player_id;
        self.next_player_id += 1;
        debug!("player {} spawned at {:?}", id, spawn);
        spawn_player_at(&mut self.world, id, spawn, scheme, step, max, rest_start)
    }

    /// Press a directional control.
    pub fn press_control(&mut self, scheme: ControlScheme, dir: DirectionControl) {
        self.world
            .resource_mut::<InputState>()
            .control_mut(scheme, dir)
            .press();
    }

    /// Release a directional control.
    pub fn release_control(&mut self, scheme: ControlScheme, dir: DirectionControl) {
        self.world
            .resource_mut::<InputState>()
            .control_mut(scheme, dir)
            .release();
    }

    /// The first player entity.
    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

fn spawn_player_at(
    world: &mut World,
    id: u32,
    spawn: Vec2,
    scheme: ControlScheme,
    step: f32,
    max_velocity: f32,
    rest_start: u32,
) -> Entity {
    let entity = world
        .spawn((
            Player::new(id, spawn),
            scheme,
            RigidBody::new(step, max_velocity),
            GridPosition::new(spawn.x, spawn.y),
            AnimationCursor::new(ClipId::Rest, rest_start),
            ToyParts::new(),
            PlayerRig::default(),
        ))
        .id();
    world
        .resource_mut::<Board>()
        .add_entity(entity, spawn, (1.0, 1.0));
    entity
}

/// Instantiate every legend-mapped cell of the layout on the board.
fn spawn_layout_entities(world: &mut World, layout: &LevelLayout) {
    for (x, y, kind) in layout.iter_cells() {
        let pos = Vec2::new(x, y);
        let (contact, patrol) = match kind {
            CellKind::Wall => (Contact::Block, None),
            CellKind::Door { open } => (Contact::Door { open: *open }, None),
            CellKind::Hazard => (Contact::Hazard, None),
            CellKind::Ice => (Contact::Ice, None),
            CellKind::PartPickup { part } => (Contact::PartPickup { part: part.clone() }, None),
            CellKind::ToyStation => (Contact::ToyStation, None),
            CellKind::Platform {
                width,
                height,
                axis,
                range,
                speed,
            } => (
                Contact::Platform {
                    width: *width,
                    height: *height,
                },
                Some(PlatformPatrol::new(pos, (*axis).into(), *range, *speed)),
            ),
            CellKind::Spawn => continue,
        };
        let extent = contact.extent();
        let entity = match patrol {
            Some(patrol) => world.spawn((GridPosition::new(x, y), contact, patrol)).id(),
            None => world.spawn((GridPosition::new(x, y), contact)).id(),
        };
        world
            .resource_mut::<Board>()
            .add_entity(entity, pos, extent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(json: &str) -> LevelLayout {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = GameConfig::new();
        config.max_velocity = 0.0;
        let result = Game::new(config, ClipStore::default(), &LevelLayout::empty());
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_oversized_layout() {
        let mut config = GameConfig::new();
        config.board_width = 2;
        config.board_height = 2;
        let layout = layout(r#"{ "grid": ["WWWW"], "legend": { "W": { "kind": "wall" } } }"#);
        assert!(Game::new(config, ClipStore::default(), &layout).is_err());
    }

    #[test]
    fn test_layout_spawn_overrides_config_start() {
        let layout = layout(
            r#"{ "grid": ["....", "..S."], "legend": { "S": { "kind": "spawn" } } }"#,
        );
        let (game, _rx) = Game::new(GameConfig::new(), ClipStore::default(), &layout).unwrap();
        let pos = game.world().get::<GridPosition>(game.player()).unwrap();
        assert_eq!(pos.pos, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_tick_moves_player_under_held_control() {
        let (mut game, _rx) =
            Game::new(GameConfig::new(), ClipStore::default(), &LevelLayout::empty()).unwrap();
        game.press_control(ControlScheme::Main, DirectionControl::Right);
        for i in 0..10 {
            game.tick(1.0 / 60.0, f64::from(i) * 16.0);
        }
        let pos = game.world().get::<GridPosition>(game.player()).unwrap();
        assert!(pos.pos.x > 1.0, "moved right from the default start");
    }

    #[test]
    fn test_second_player_uses_own_control_group() {
        let (mut game, _rx) =
            Game::new(GameConfig::new(), ClipStore::default(), &LevelLayout::empty()).unwrap();
        let second = game.add_player(ControlScheme::Secondary);
        game.press_control(ControlScheme::Secondary, DirectionControl::Down);
        for i in 0..10 {
            game.tick(1.0 / 60.0, f64::from(i) * 16.0);
        }
        let first = game.world().get::<GridPosition>(game.player()).unwrap().pos;
        let second_pos = game.world().get::<GridPosition>(second).unwrap().pos;
        assert_eq!(first, Vec2::new(1.0, 1.0), "main player untouched");
        assert!(second_pos.y > 1.0, "secondary player moved down");
    }
}
