//! Базовые компоненты combatant'ов: Position, Health, Combatant, SpawnOrder

use bevy::prelude::*;
use crate::shared::Countdown;

/// Позиция на плоскости арены (continuous coordinates)
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

/// Порядковый номер спавна
///
/// Query iteration order в ECS меняется после despawn (swap_remove),
/// поэтому все "первый встреченный выигрывает" правила сортируют по SpawnOrder.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpawnOrder(pub u64);

/// Монотонный счётчик SpawnOrder
#[derive(Resource, Debug, Default)]
pub struct SpawnCounter {
    next: u64,
}

impl SpawnCounter {
    pub fn next(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.next);
        self.next += 1;
        order
    }
}

/// Сортирует `(SpawnOrder, T)` и отдаёт только T
pub fn in_spawn_order<T>(mut items: Vec<(SpawnOrder, T)>) -> Vec<T> {
    items.sort_by_key(|(order, _)| *order);
    items.into_iter().map(|(_, item)| item).collect()
}

/// Здоровье
///
/// Инвариант: 0 ≤ current ≤ max. current == 0 → мёртв, удаляется на cleanup.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Доля здоровья (0.0..=1.0) для health bar
    pub fn ratio(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }
}

/// Боевые характеристики (общие для героев и монстров)
#[derive(Component, Debug, Clone, Copy)]
pub struct Combatant {
    /// Урон за одну атаку
    pub damage: u32,

    /// Радиус атаки
    pub range: f32,

    /// Cooldown между атаками (секунды)
    pub attack_cooldown: f32,

    /// Текущий cooldown таймер
    pub attack_timer: Countdown,
}

impl Combatant {
    pub fn new(damage: u32, range: f32, attack_cooldown: f32) -> Self {
        Self {
            damage,
            range,
            attack_cooldown,
            attack_timer: Countdown::READY,
        }
    }

    pub fn can_attack(&self) -> bool {
        self.attack_timer.is_ready()
    }

    pub fn reset_attack(&mut self) {
        self.attack_timer.reset(self.attack_cooldown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage_saturates() {
        let mut health = Health::new(50);
        health.take_damage(30);
        assert_eq!(health.current, 20);
        assert!(health.is_alive());

        health.take_damage(100);
        assert_eq!(health.current, 0);
        assert!(!health.is_alive());
        assert_eq!(health.ratio(), 0.0);
    }

    #[test]
    fn test_combatant_cooldown() {
        let mut combatant = Combatant::new(6, 90.0, 1.0);
        assert!(combatant.can_attack());

        combatant.reset_attack();
        assert!(!combatant.can_attack());
        assert_eq!(combatant.attack_timer.remaining(), 1.0);

        combatant.attack_timer.tick(0.5);
        assert!(!combatant.can_attack());

        combatant.attack_timer.tick(0.5);
        assert!(combatant.can_attack());
    }

    #[test]
    fn test_spawn_counter_and_ordering() {
        let mut counter = SpawnCounter::default();
        let a = counter.next();
        let b = counter.next();
        assert!(a < b);

        let sorted = in_spawn_order(vec![(b, "second"), (a, "first")]);
        assert_eq!(sorted, vec!["first", "second"]);
    }
}
