//! World plugin - map building, transitions, respawn, and treasure.

use bevy::prelude::*;

use super::builder::{plan_level, spawn_level, LevelPlan};
use super::components::{LevelEntity, Tile, TileKind, TransitionTrigger, Treasure};
use super::data::{CurrentMap, MapRegistry};
use super::error::DataLoadError;
use super::spawning::treasure_sprite;
use crate::body::{Bounds, RectExt, SpriteKey};
use crate::core::{
    Arrival, GameSet, GameSettings, GameState, MapChangeRequest, PlayerDiedEvent,
    TreasureOpenedEvent,
};
use crate::enemies::EnemyRegistry;
use crate::player::{spawn_player, Controls, Player, PlayerStats};

/// World plugin - handles the current map and moving between maps.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapRegistry>()
            .init_resource::<CurrentMap>()
            .add_systems(OnEnter(GameState::InGame), setup_world)
            .add_systems(
                Update,
                (
                    detect_map_transition,
                    respawn_after_death,
                    change_map,
                    open_treasure,
                )
                    .chain()
                    .in_set(GameSet::Level),
            );
    }
}

fn build_plan(
    maps: &MapRegistry,
    settings: &GameSettings,
    enemies: &EnemyRegistry,
    id: u32,
    arrival: Arrival,
) -> Result<LevelPlan, DataLoadError> {
    plan_level(maps.get(id)?, settings, enemies, arrival)
}

/// Build the start map and create the player on it.
pub fn setup_world(
    mut commands: Commands,
    settings: Res<GameSettings>,
    maps: Res<MapRegistry>,
    enemies: Res<EnemyRegistry>,
    stats: Res<PlayerStats>,
    mut current: ResMut<CurrentMap>,
) {
    let plan = match build_plan(&maps, &settings, &enemies, settings.start_map, Arrival::Fresh) {
        Ok(plan) => plan,
        Err(e) => {
            error!("Failed to build start map {}: {}", settings.start_map, e);
            return;
        }
    };

    spawn_level(&mut commands, &plan, &settings);
    spawn_player(
        &mut commands,
        plan.player_position(Vec2::ZERO),
        &stats,
        &settings,
    );
    *current = CurrentMap {
        id: settings.start_map,
        from: None,
    };

    info!(
        "Built map {}: {} tiles, {} enemies",
        settings.start_map,
        plan.tiles.len(),
        plan.enemies.len()
    );
}

/// Ask for a map change when the player walks into a trigger.
pub fn detect_map_transition(
    player_query: Query<&Bounds, With<Player>>,
    triggers: Query<(&Bounds, &TransitionTrigger), Without<Player>>,
    current: Res<CurrentMap>,
    mut requests: EventWriter<MapChangeRequest>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };

    if let Some((_, trigger)) = triggers
        .iter()
        .find(|(bounds, _)| bounds.rect.overlaps(&player.rect))
    {
        requests.send(MapChangeRequest {
            destination: trigger.destination,
            arrival: Arrival::From(current.id),
        });
    }
}

/// A dead player starts over on the start map.
pub fn respawn_after_death(
    mut died: EventReader<PlayerDiedEvent>,
    settings: Res<GameSettings>,
    mut requests: EventWriter<MapChangeRequest>,
) {
    if died.read().last().is_some() {
        requests.send(MapChangeRequest {
            destination: settings.start_map,
            arrival: Arrival::Fresh,
        });
    }
}

/// Replace the current map with the requested one and place the player.
///
/// The latest request of the tick wins. A map that fails to build leaves
/// the current one in place.
pub fn change_map(
    mut commands: Commands,
    mut requests: EventReader<MapChangeRequest>,
    settings: Res<GameSettings>,
    maps: Res<MapRegistry>,
    enemies: Res<EnemyRegistry>,
    level_entities: Query<Entity, With<LevelEntity>>,
    mut player_query: Query<&mut Bounds, With<Player>>,
    mut current: ResMut<CurrentMap>,
) {
    let Some(request) = requests.read().last().copied() else {
        return;
    };

    let plan = match build_plan(
        &maps,
        &settings,
        &enemies,
        request.destination,
        request.arrival,
    ) {
        Ok(plan) => plan,
        Err(e) => {
            error!("Failed to build map {}: {}", request.destination, e);
            return;
        }
    };

    for entity in level_entities.iter() {
        commands.entity(entity).despawn_recursive();
    }
    spawn_level(&mut commands, &plan, &settings);

    if let Ok(mut bounds) = player_query.get_single_mut() {
        let position = plan.player_position(bounds.rect.top_left());
        bounds.move_to(position);
    }

    *current = CurrentMap {
        id: request.destination,
        from: match request.arrival {
            Arrival::From(origin) => Some(origin),
            Arrival::Fresh => None,
        },
    };
    info!("Entered map {} from {:?}", current.id, current.from);
}

/// Open the chest the player is touching when interact is pressed.
pub fn open_treasure(
    mut commands: Commands,
    controls: Res<Controls>,
    player_query: Query<&Bounds, With<Player>>,
    mut chests: Query<(Entity, &Bounds, &mut Tile, &mut SpriteKey), (With<Treasure>, Without<Player>)>,
    mut opened: EventWriter<TreasureOpenedEvent>,
) {
    if !controls.interact {
        return;
    }
    let Ok(player) = player_query.get_single() else {
        return;
    };

    for (entity, bounds, mut tile, mut key) in chests.iter_mut() {
        if !bounds.rect.overlaps(&player.rect) {
            continue;
        }
        let TileKind::Treasure { chest, .. } = tile.kind else {
            continue;
        };

        tile.kind = TileKind::Treasure { chest, opened: true };
        *key = treasure_sprite(chest, true);
        commands.entity(entity).remove::<Treasure>();
        opened.send(TreasureOpenedEvent {
            tile: entity,
            chest,
        });
        info!("Opened chest {}", chest);
        break;
    }
}
