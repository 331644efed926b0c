//! Monotonic millisecond clock shared by every cooldown.

use bevy::prelude::*;

/// Milliseconds since the game started.
///
/// All cooldowns and invincibility windows record a start timestamp and
/// compare `now - start` against a duration; nothing fires on its own.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameClock {
    now_ms: u64,
}

impl GameClock {
    pub fn new(now_ms: u64) -> Self {
        Self { now_ms }
    }

    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Milliseconds elapsed since `start`. Never underflows.
    pub fn since(&self, start: u64) -> u64 {
        self.now_ms.saturating_sub(start)
    }

    /// Whether at least `duration` ms have passed since `start`.
    pub fn elapsed(&self, start: u64, duration: u64) -> bool {
        self.since(start) >= duration
    }

    /// Move the clock forward; it never goes backwards.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn advance_by(&mut self, delta_ms: u64) {
        self.now_ms += delta_ms;
    }
}

/// Copy Bevy's virtual time into the game clock.
pub fn tick_game_clock(time: Res<Time>, mut clock: ResMut<GameClock>) {
    clock.advance_to(time.elapsed().as_millis() as u64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_compares_against_duration() {
        let clock = GameClock::new(1_400);
        assert!(clock.elapsed(1_000, 400));
        assert!(!clock.elapsed(1_001, 400));
    }

    #[test]
    fn clock_is_monotonic() {
        let mut clock = GameClock::new(500);
        clock.advance_to(200);
        assert_eq!(clock.now(), 500);
        assert_eq!(clock.since(900), 0);
    }
}
