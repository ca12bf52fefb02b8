//! Абстрактные input intents
//!
//! Симуляция не знает про клавиатуру/мышь - host переводит устройства в
//! `Intent` и кладёт в `IntentQueue`. Очередь разбирается в начале тика
//! (SimSet::Input), даже на паузе: выбор героя и pause toggle работают всегда.

use bevy::prelude::*;

pub mod systems;

pub use systems::{apply_intents, move_selected_hero};

/// Intent от игрока
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Непрерывное движение выбранного героя (держится до следующего Move)
    Move(Vec2),
    /// Выбор героя по индексу в roster
    SelectHero(usize),
    /// Активировать абилку выбранного героя
    UseAbility,
    TogglePause,
}

/// Накопленные intents до следующего тика
#[derive(Resource, Debug, Default)]
pub struct IntentQueue {
    pending: Vec<Intent>,
}

impl IntentQueue {
    pub fn push(&mut self, intent: Intent) {
        self.pending.push(intent);
    }

    pub fn drain(&mut self) -> Vec<Intent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Текущий вектор движения (сырой, нормализуется при применении)
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct MoveIntent(pub Vec2);

/// Флаг: в этом тике надо активировать абилку
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct AbilityRequest {
    pub pending: bool,
}

/// Input plugin - регистрирует системы input в SimTick
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<IntentQueue>()
            .init_resource::<MoveIntent>()
            .init_resource::<AbilityRequest>()
            .add_systems(crate::SimTick, apply_intents.in_set(crate::SimSet::Input))
            .add_systems(crate::SimTick, move_selected_hero.in_set(crate::SimSet::Movement));
    }
}
