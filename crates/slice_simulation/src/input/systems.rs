//! Input systems: разбор intents + движение выбранного героя

use bevy::prelude::*;
use crate::components::{in_spawn_order, Hero, Position, SelectedHero, SpawnOrder};
use crate::config::SimConfig;
use crate::input::{AbilityRequest, Intent, IntentQueue, MoveIntent};
use crate::SimStatus;

/// Система: разбор IntentQueue
///
/// Выполняется и на паузе. UseAbility на паузе или после defeat
/// отбрасывается (не копится до снятия паузы), в том числе если пауза
/// включилась позже в той же очереди.
pub fn apply_intents(
    mut queue: ResMut<IntentQueue>,
    mut move_intent: ResMut<MoveIntent>,
    mut selected: ResMut<SelectedHero>,
    mut ability: ResMut<AbilityRequest>,
    mut status: ResMut<SimStatus>,
) {
    for intent in queue.drain() {
        match intent {
            Intent::Move(vector) => {
                move_intent.0 = vector;
            }
            Intent::SelectHero(index) => {
                selected.index = index;
            }
            Intent::UseAbility => {
                if status.paused || status.defeat {
                    crate::log("UseAbility ignored (paused or defeat)");
                    continue;
                }
                ability.pending = true;
            }
            Intent::TogglePause => {
                status.paused = !status.paused;
                crate::log_info(if status.paused { "⏸ Paused" } else { "▶ Resumed" });
            }
        }
    }

    // UseAbility раньше TogglePause в той же пачке тоже не переживает паузу
    if status.paused || status.defeat {
        ability.pending = false;
    }
}

/// Система: движение выбранного героя по MoveIntent
///
/// Вектор нормализуется (диагональ не быстрее), last_direction обновляется
/// только ненулевым движением, позиция clamp'ится в hero_bounds.
pub fn move_selected_hero(
    move_intent: Res<MoveIntent>,
    selected: Res<SelectedHero>,
    config: Res<SimConfig>,
    mut heroes: Query<(Entity, &SpawnOrder, &mut Position, &mut Hero)>,
) {
    let Some(dir) = crate::shared::direction(Vec2::ZERO, move_intent.0) else {
        return;
    };

    let roster = in_spawn_order(heroes.iter().map(|(e, order, ..)| (*order, e)).collect());
    let Some(index) = selected.resolve(roster.len()) else {
        return;
    };

    let Ok((_, _, mut position, mut hero)) = heroes.get_mut(roster[index]) else {
        return;
    };

    hero.last_direction = dir;
    position.0 = config.hero_bounds.clamp(position.0 + dir * config.hero_move_speed);
}
