//! Cooldown tick для всех combatant'ов

use bevy::prelude::*;
use crate::components::{Combatant, Hero, Monster};
use crate::config::SimConfig;

/// System: attack cooldown, ability cooldown героев, stun монстров
pub fn tick_cooldowns(
    config: Res<SimConfig>,
    mut combatants: Query<&mut Combatant>,
    mut heroes: Query<&mut Hero>,
    mut monsters: Query<&mut Monster>,
) {
    let dt = config.dt();

    for mut combatant in combatants.iter_mut() {
        combatant.attack_timer.tick(dt);
    }

    for mut hero in heroes.iter_mut() {
        hero.ability_timer.tick(dt);
    }

    for mut monster in monsters.iter_mut() {
        monster.stun.tick(dt);
    }
}
