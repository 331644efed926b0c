//! Combat-related components.

use bevy::prelude::*;

// Re-export from core to avoid duplication
pub use crate::core::{AttackKind, HitEvent, PlayerDamageEvent};

/// Component for entities that can take damage.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub current: f32,
    pub maximum: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn heal(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.maximum - self.current).max(0.0);
        self.current += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn restore(&mut self) {
        self.current = self.maximum;
    }
}

/// Post-hit invincibility window.
///
/// While not vulnerable, incoming damage is ignored. Vulnerability comes
/// back once `now - hit_time >= invincibility`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vulnerability {
    pub vulnerable: bool,
    pub hit_time: u64,
    /// Invincibility duration in milliseconds.
    pub invincibility: u64,
}

impl Vulnerability {
    pub fn new(invincibility: u64) -> Self {
        Self {
            vulnerable: true,
            hit_time: 0,
            invincibility,
        }
    }

    /// Start the invincibility window.
    pub fn register_hit(&mut self, now: u64) {
        self.hit_time = now;
        self.vulnerable = false;
    }

    /// Restore vulnerability once the window has elapsed.
    pub fn refresh(&mut self, now: u64) {
        if !self.vulnerable && now.saturating_sub(self.hit_time) >= self.invincibility {
            self.vulnerable = true;
        }
    }
}

/// Sprites that hurt `Damageable` sprites they overlap.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Damaging(pub AttackKind);

/// Sprites that can be hit by `Damaging` sprites.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Damageable;

/// The transient weapon hitbox next to the player.
#[derive(Component, Debug, Clone, Copy)]
pub struct WeaponAttack {
    /// Index into `CombatRegistry::weapons`.
    pub weapon: usize,
}

/// A spell particle; removed when its animation has played once.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpellEffect {
    pub frames: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vulnerability_window_closes_and_reopens() {
        let mut vulnerability = Vulnerability::new(300);
        vulnerability.register_hit(1_000);
        assert!(!vulnerability.vulnerable);

        vulnerability.refresh(1_299);
        assert!(!vulnerability.vulnerable);

        vulnerability.refresh(1_300);
        assert!(vulnerability.vulnerable);
    }

    #[test]
    fn heal_is_capped() {
        let mut health = Health::new(100.0);
        health.take_damage(30.0);
        assert_eq!(health.heal(50.0), 30.0);
        assert_eq!(health.current, 100.0);
    }
}
