//! Combat module - health, weapons, spells, and damage.

mod components;
mod data;
mod effects;
mod plugin;
mod systems;

pub use components::*;
pub use data::{CombatRegistry, SpellDefinition, SpellKind, WeaponDefinition};
pub use effects::{flame_positions, weapon_rect};
pub use plugin::CombatPlugin;
pub use systems::resolve_attacks;
