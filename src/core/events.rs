//! Global events used for cross-system communication.
//!
//! Entities never call into each other directly. Enemies ask for the player
//! to be hurt, the player asks for a weapon to appear, dying enemies ask for
//! experience to be granted; the owning system reads the event and applies
//! it during its own step of the frame.

use bevy::prelude::*;

/// What kind of attack produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttackKind {
    /// Melee weapon swing.
    #[default]
    Weapon,
    /// Offensive spell effect.
    Magic,
}

/// Sent when a damaging sprite overlaps a damageable one.
#[derive(Event, Debug, Clone, Copy)]
pub struct HitEvent {
    /// Entity being hit
    pub target: Entity,
    /// Kind of attack, decides which damage formula applies
    pub kind: AttackKind,
}

/// Sent by an attacking enemy every frame it is in its attack state.
///
/// The player only loses health while vulnerable.
#[derive(Event, Debug, Clone)]
pub struct PlayerDamageEvent {
    pub amount: f32,
    /// Species attack style ("slash", "claw", ...), kept for effects.
    pub attack_type: String,
}

/// Sent when experience should be added to the player.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEvent {
    pub amount: u32,
}

/// Actions the player state machine requests from the combat systems.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PlayerAction {
    /// Spawn the hitbox of weapon `weapon` next to the player.
    MeleeStarted { weapon: usize },
    /// The attack window closed; remove the weapon hitbox if any.
    AttackEnded,
    /// Cast the spell at `spell` index.
    SpellCast {
        spell: usize,
        /// Magic stat plus spell strength.
        strength: f32,
        cost: f32,
    },
}

/// How the player enters a freshly built map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrival {
    /// Start of a session or respawn: use the map's player marker.
    Fresh,
    /// Walked in from another map: use the trigger leading back there.
    From(u32),
}

/// Request to tear down the current map and build another one.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapChangeRequest {
    pub destination: u32,
    pub arrival: Arrival,
}

/// Sent once when the player's health drops to zero.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerDiedEvent;

/// Sent when the player opens a treasure chest.
#[derive(Event, Debug, Clone, Copy)]
pub struct TreasureOpenedEvent {
    pub tile: Entity,
    pub chest: i32,
}
