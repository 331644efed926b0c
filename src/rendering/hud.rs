//! HUD: a stats snapshot for any front end, plus the bars the game shows.

use bevy::prelude::*;

use super::visual_config::VisualConfig;
use crate::combat::{CombatRegistry, Health};
use crate::core::GameState;
use crate::player::{Energy, Experience, Player, PlayerCombat};

/// What the HUD shows, refreshed every frame.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct HudStats {
    pub health: f32,
    pub max_health: f32,
    pub energy: f32,
    pub max_energy: f32,
    pub experience: u32,
    pub weapon: String,
    pub spell: String,
    /// Spell switching is on cooldown.
    pub spell_switch_locked: bool,
}

impl HudStats {
    pub fn health_fraction(&self) -> f32 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }

    pub fn energy_fraction(&self) -> f32 {
        if self.max_energy > 0.0 {
            (self.energy / self.max_energy).min(1.0)
        } else {
            0.0
        }
    }
}

pub fn update_hud_stats(
    registry: Res<CombatRegistry>,
    player_query: Query<(&Health, &Energy, &Experience, &PlayerCombat), With<Player>>,
    mut hud: ResMut<HudStats>,
) {
    let Ok((health, energy, experience, combat)) = player_query.get_single() else {
        return;
    };

    *hud = HudStats {
        health: health.current,
        max_health: health.maximum,
        energy: energy.current,
        max_energy: energy.maximum,
        experience: experience.0,
        weapon: registry
            .weapon(combat.weapon)
            .map(|w| w.name.clone())
            .unwrap_or_default(),
        spell: registry
            .spell(combat.selected_spell)
            .map(|s| s.name.clone())
            .unwrap_or_default(),
        spell_switch_locked: combat.switch_locked,
    };
}

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for health bar fill.
#[derive(Component)]
pub struct HealthBar;

/// Marker for energy bar fill.
#[derive(Component)]
pub struct EnergyBar;

/// Setup HUD bar systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(
            Update,
            update_bars
                .after(update_hud_stats)
                .run_if(in_state(GameState::InGame)),
        );
}

/// Spawn the bars in the top-left corner.
fn spawn_hud(mut commands: Commands, config: Res<VisualConfig>) {
    commands
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                row_gap: Val::Px(4.0),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_bar(
                parent,
                config.health_bar_width,
                config.bar_height,
                config.color(config.health_color),
                config.color(config.bar_background),
                HealthBar,
            );
            spawn_bar(
                parent,
                config.energy_bar_width,
                config.bar_height,
                config.color(config.energy_color),
                config.color(config.bar_background),
                EnergyBar,
            );
        });
}

/// Helper to spawn a status bar.
fn spawn_bar<M: Component>(
    parent: &mut ChildBuilder,
    width: f32,
    height: f32,
    color: Color,
    background: Color,
    bar_marker: M,
) {
    parent
        .spawn((
            Node {
                width: Val::Px(width),
                height: Val::Px(height),
                ..default()
            },
            BackgroundColor(background),
        ))
        .with_children(|bg| {
            bg.spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(color),
                bar_marker,
            ));
        });
}

fn update_bars(
    hud: Res<HudStats>,
    mut health_bar: Query<&mut Node, (With<HealthBar>, Without<EnergyBar>)>,
    mut energy_bar: Query<&mut Node, (With<EnergyBar>, Without<HealthBar>)>,
) {
    if let Ok(mut bar) = health_bar.get_single_mut() {
        bar.width = Val::Percent(hud.health_fraction() * 100.0);
    }
    if let Ok(mut bar) = energy_bar.get_single_mut() {
        bar.width = Val::Percent(hud.energy_fraction() * 100.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bar_fractions() {
        let hud = HudStats {
            health: 25.0,
            max_health: 100.0,
            energy: 60.5,
            max_energy: 60.0,
            ..default()
        };
        assert_relative_eq!(hud.health_fraction(), 0.25);
        // Regeneration may overshoot the cap by one step
        assert_relative_eq!(hud.energy_fraction(), 1.0);
    }

    #[test]
    fn zero_maximum_shows_empty_bars() {
        let hud = HudStats::default();
        assert_eq!(hud.health_fraction(), 0.0);
        assert_eq!(hud.energy_fraction(), 0.0);
    }
}
