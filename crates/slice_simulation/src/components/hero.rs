//! Hero - player-controlled combatant + фиксированный roster

use bevy::prelude::*;
use serde::Serialize;
use crate::components::{Combatant, Health, Position, SpawnOrder};
use crate::shared::Countdown;
use crate::tuning::HERO_ATTACK_RANGE;

/// Абилка героя (tagged union вместо virtual override)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ability {
    /// Оглушить всех монстров в радиусе
    Stun,
    /// Рывок по последнему направлению движения
    Dash,
    /// Projectile в ближайшего монстра
    Fireball,
}

impl Ability {
    pub fn label(&self) -> &'static str {
        match self {
            Ability::Stun => "STUN",
            Ability::Dash => "DASH",
            Ability::Fireball => "FIREBALL",
        }
    }
}

/// Hero-specific состояние (Combatant/Health/Position - отдельными компонентами)
#[derive(Component, Debug, Clone)]
pub struct Hero {
    pub name: &'static str,
    pub color: [u8; 3],
    pub ability: Ability,

    /// Cooldown абилки (секунды)
    pub ability_cooldown: f32,

    /// Текущий таймер абилки
    pub ability_timer: Countdown,

    /// Последнее ненулевое направление движения (unit vector)
    pub last_direction: Vec2,
}

impl Hero {
    pub fn can_use_ability(&self) -> bool {
        self.ability_timer.is_ready()
    }

    pub fn consume_ability(&mut self) {
        self.ability_timer.reset(self.ability_cooldown);
    }

    pub fn ability_cooldown_remaining(&self) -> f32 {
        self.ability_timer.remaining()
    }
}

/// Статичное описание архетипа героя
#[derive(Debug, Clone, Copy)]
pub struct HeroArchetype {
    pub name: &'static str,
    pub ability: Ability,
    pub ability_cooldown: f32,
    pub spawn: Vec2,
    pub color: [u8; 3],
    pub max_hp: u32,
    pub damage: u32,
    /// Атак в секунду → attack_cooldown = 1 / attacks_per_second
    pub attacks_per_second: f32,
}

/// Стартовый состав партии (порядок = индекс выбора)
pub const HERO_ROSTER: [HeroArchetype; 3] = [
    HeroArchetype {
        name: "Tank",
        ability: Ability::Stun,
        ability_cooldown: 3.5,
        spawn: Vec2::new(160.0, 260.0),
        color: [64, 150, 255],
        max_hp: 240,
        damage: 6,
        attacks_per_second: 1.2,
    },
    HeroArchetype {
        name: "Rogue",
        ability: Ability::Dash,
        ability_cooldown: 2.0,
        spawn: Vec2::new(210.0, 320.0),
        color: [255, 120, 90],
        max_hp: 140,
        damage: 12,
        attacks_per_second: 2.2,
    },
    HeroArchetype {
        name: "Mage",
        ability: Ability::Fireball,
        ability_cooldown: 2.8,
        spawn: Vec2::new(220.0, 200.0),
        color: [170, 110, 255],
        max_hp: 110,
        damage: 18,
        attacks_per_second: 1.4,
    },
];

impl HeroArchetype {
    pub fn attack_cooldown(&self) -> f32 {
        1.0 / self.attacks_per_second
    }

    /// Полный набор компонентов героя
    pub fn bundle(&self, order: SpawnOrder) -> (Hero, Combatant, Health, Position, SpawnOrder) {
        (
            Hero {
                name: self.name,
                color: self.color,
                ability: self.ability,
                ability_cooldown: self.ability_cooldown,
                ability_timer: Countdown::READY,
                last_direction: Vec2::X,
            },
            Combatant::new(self.damage, HERO_ATTACK_RANGE, self.attack_cooldown()),
            Health::new(self.max_hp),
            Position(self.spawn),
            order,
        )
    }
}

/// Индекс выбранного героя в roster
///
/// Хранится "как пришло" из input, резолвится с clamp к текущему размеру roster.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SelectedHero {
    pub index: usize,
}

impl SelectedHero {
    /// None - roster пуст (defeat)
    pub fn resolve(&self, roster_len: usize) -> Option<usize> {
        if roster_len == 0 {
            return None;
        }
        Some(self.index.min(roster_len - 1))
    }

    /// Clamp после cleanup, когда roster сократился
    pub fn clamp_to(&mut self, roster_len: usize) {
        if self.index >= roster_len {
            self.index = roster_len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_archetypes() {
        let names: Vec<_> = HERO_ROSTER.iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["Tank", "Rogue", "Mage"]);

        let tank = HERO_ROSTER[0];
        assert_eq!(tank.ability, Ability::Stun);
        assert_eq!(tank.max_hp, 240);
        assert!((tank.attack_cooldown() - 1.0 / 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_hero_bundle_defaults() {
        let (hero, combatant, health, position, _) = HERO_ROSTER[1].bundle(SpawnOrder(0));
        assert_eq!(hero.last_direction, Vec2::X);
        assert!(hero.can_use_ability());
        assert_eq!(combatant.range, HERO_ATTACK_RANGE);
        assert_eq!(health.current, 140);
        assert_eq!(position.0, Vec2::new(210.0, 320.0));
    }

    #[test]
    fn test_selected_hero_resolve() {
        let selected = SelectedHero { index: 2 };
        assert_eq!(selected.resolve(3), Some(2));
        assert_eq!(selected.resolve(2), Some(1));
        assert_eq!(selected.resolve(0), None);
    }

    #[test]
    fn test_selected_hero_clamp() {
        let mut selected = SelectedHero { index: 2 };
        selected.clamp_to(1);
        assert_eq!(selected.index, 0);

        selected.clamp_to(0);
        assert_eq!(selected.index, 0);
    }
}
