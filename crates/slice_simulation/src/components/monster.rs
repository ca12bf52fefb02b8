//! Monster - AI combatant со stun state

use bevy::prelude::*;
use crate::components::{Combatant, Health, Position, SpawnOrder};
use crate::shared::Countdown;
use crate::tuning::{MONSTER_ATTACK_COOLDOWN, MONSTER_BASE_SPEED, MONSTER_MAX_SPEED_BONUS};

/// Статы монстра на момент спавна (выдаёт WaveDirector)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonsterStats {
    pub max_hp: u32,
    pub damage: u32,
    pub range: f32,
    /// Финальный монстр boss wave
    pub mini_boss: bool,
}

impl MonsterStats {
    /// speed = 1.2 + min(1.2, maxHp / 200)
    pub fn speed(&self) -> f32 {
        MONSTER_BASE_SPEED + MONSTER_MAX_SPEED_BONUS.min(self.max_hp as f32 / 200.0)
    }

    pub fn bundle(&self, position: Vec2, order: SpawnOrder) -> (Monster, Combatant, Health, Position, SpawnOrder) {
        (
            Monster {
                speed: self.speed(),
                stun: Countdown::READY,
                mini_boss: self.mini_boss,
            },
            Combatant::new(self.damage, self.range, MONSTER_ATTACK_COOLDOWN),
            Health::new(self.max_hp),
            Position(position),
            order,
        )
    }
}

#[derive(Component, Debug, Clone)]
pub struct Monster {
    /// Шаг движения к цели (units/tick)
    pub speed: f32,
    pub stun: Countdown,
    pub mini_boss: bool,
}

impl Monster {
    pub fn is_stunned(&self) -> bool {
        !self.stun.is_ready()
    }

    /// Stun не стакается: remaining = max(remaining, seconds)
    pub fn stun(&mut self, seconds: f32) {
        self.stun.extend(seconds);
    }

    /// Один шаг к цели; нулевая дистанция - не двигаемся
    pub fn step_toward(&self, from: Vec2, target: Vec2) -> Vec2 {
        match crate::shared::direction(from, target) {
            Some(dir) => from + dir * self.speed,
            None => from,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave_one() -> MonsterStats {
        MonsterStats {
            max_hp: 50,
            damage: 4,
            range: 44.0,
            mini_boss: false,
        }
    }

    #[test]
    fn test_speed_from_max_hp() {
        assert!((wave_one().speed() - 1.45).abs() < 1e-6);

        let tanky = MonsterStats { max_hp: 1000, ..wave_one() };
        assert!((tanky.speed() - 2.4).abs() < 1e-6);
    }

    #[test]
    fn test_stun_is_max_not_additive() {
        let (mut monster, ..) = wave_one().bundle(Vec2::ZERO, SpawnOrder(0));
        assert!(!monster.is_stunned());

        monster.stun(1.4);
        monster.stun(1.0);
        assert_eq!(monster.stun.remaining(), 1.4);
        assert!(monster.is_stunned());
    }

    #[test]
    fn test_step_toward() {
        let (monster, ..) = wave_one().bundle(Vec2::ZERO, SpawnOrder(0));
        let next = monster.step_toward(Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert!((next.x - 1.45).abs() < 1e-6);
        assert_eq!(next.y, 0.0);

        // Цель в той же точке - стоим
        let same = monster.step_toward(Vec2::ONE, Vec2::ONE);
        assert_eq!(same, Vec2::ONE);
    }
}
