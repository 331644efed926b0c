//! Weapon and spell tables loaded from RON.

use bevy::prelude::*;
use serde::Deserialize;

use crate::player::PlayerStats;

/// A melee weapon.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WeaponDefinition {
    pub name: String,
    /// Added to the base attack cooldown, in milliseconds.
    pub cooldown: u64,
    pub damage: f32,
    /// Sprite size when pointing right or left; swapped for up and down.
    #[serde(default = "default_weapon_size")]
    pub size: (f32, f32),
}

fn default_weapon_size() -> (f32, f32) {
    (40.0, 20.0)
}

/// What a spell does when cast.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpellKind {
    /// Line of damaging flames in front of the player.
    Flame,
    /// Restores health.
    Heal,
}

/// A castable spell.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SpellDefinition {
    pub name: String,
    pub kind: SpellKind,
    pub strength: f32,
    /// Energy spent per cast.
    pub cost: f32,
}

/// Resource holding the weapon and spell tables, in cycling order.
#[derive(Resource, Deserialize, Clone, Debug)]
pub struct CombatRegistry {
    pub weapons: Vec<WeaponDefinition>,
    pub spells: Vec<SpellDefinition>,
}

impl Default for CombatRegistry {
    fn default() -> Self {
        Self {
            weapons: vec![WeaponDefinition {
                name: "sword".to_string(),
                cooldown: 100,
                damage: 15.0,
                size: default_weapon_size(),
            }],
            spells: vec![
                SpellDefinition {
                    name: "flame".to_string(),
                    kind: SpellKind::Flame,
                    strength: 25.0,
                    cost: 20.0,
                },
                SpellDefinition {
                    name: "heal".to_string(),
                    kind: SpellKind::Heal,
                    strength: 20.0,
                    cost: 10.0,
                },
            ],
        }
    }
}

impl CombatRegistry {
    pub fn weapon(&self, index: usize) -> Option<&WeaponDefinition> {
        self.weapons.get(index)
    }

    pub fn spell(&self, index: usize) -> Option<&SpellDefinition> {
        self.spells.get(index)
    }

    /// Attack stat plus the weapon's damage.
    pub fn weapon_damage(&self, stats: &PlayerStats, weapon: usize) -> f32 {
        stats.attack + self.weapon(weapon).map_or(0.0, |w| w.damage)
    }

    /// Magic stat plus the spell's strength.
    pub fn magic_damage(&self, stats: &PlayerStats, spell: usize) -> f32 {
        stats.magic + self.spell(spell).map_or(0.0, |s| s.strength)
    }

    /// Weapon cooldown in ms, zero for an unknown index.
    pub fn weapon_cooldown(&self, weapon: usize) -> u64 {
        self.weapon(weapon).map_or(0, |w| w.cooldown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_formulas_add_base_stats() {
        let registry = CombatRegistry::default();
        let stats = PlayerStats::default();
        assert_eq!(registry.weapon_damage(&stats, 0), 25.0);
        assert_eq!(registry.magic_damage(&stats, 0), 29.0);
        assert_eq!(registry.magic_damage(&stats, 1), 24.0);
    }

    #[test]
    fn registry_parses_from_ron() {
        let registry: CombatRegistry = ron::from_str(
            r#"(
                weapons: [(name: "axe", cooldown: 300, damage: 20.0)],
                spells: [(name: "flame", kind: Flame, strength: 5.0, cost: 20.0)],
            )"#,
        )
        .expect("valid registry");
        assert_eq!(registry.weapon_cooldown(0), 300);
        assert_eq!(registry.weapons[0].size, (40.0, 20.0));
        assert_eq!(registry.spells[0].kind, SpellKind::Flame);
    }
}
