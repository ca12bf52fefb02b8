//! Конфигурация симуляции (arena, seed, tick rate)
//!
//! Всё, что host может захотеть поменять без пересборки формул баланса.
//! Формулы волн и статы абилок - в `tuning`.

use bevy::prelude::*;
use crate::shared::Bounds;

/// Параметры запуска симуляции
#[derive(Resource, Debug, Clone)]
pub struct SimConfig {
    /// Seed для `DeterministicRng`
    pub seed: u64,

    /// Частота фиксированного тика (Hz)
    pub tick_rate: f32,

    /// Прямоугольник арены - projectiles вне него удаляются
    pub arena: Bounds,

    /// Зона, в которой могут находиться герои (арена минус рамка HUD)
    pub hero_bounds: Bounds,

    /// Скорость героя (units/tick)
    pub hero_move_speed: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: 60.0,
            arena: Bounds::new(0.0, 0.0, 900.0, 540.0),
            hero_bounds: Bounds::new(40.0, 60.0, 860.0, 500.0),
            hero_move_speed: 2.2,
        }
    }
}

impl SimConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Длительность одного тика (секунды) - общий dt для всех таймеров
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate
    }

    pub fn arena_width(&self) -> f32 {
        self.arena.max.x - self.arena.min.x
    }

    pub fn arena_height(&self) -> f32 {
        self.arena.max.y - self.arena.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.seed, 42);
        assert!((config.dt() - 1.0 / 60.0).abs() < f32::EPSILON);
        assert_eq!(config.arena_width(), 900.0);
        assert_eq!(config.arena_height(), 540.0);
    }

    #[test]
    fn test_with_seed_keeps_defaults() {
        let config = SimConfig::with_seed(7);
        assert_eq!(config.seed, 7);
        assert_eq!(config.hero_move_speed, 2.2);
    }
}
