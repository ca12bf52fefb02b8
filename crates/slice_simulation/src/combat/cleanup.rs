//! Cleanup pass - последняя система тика

use bevy::prelude::*;
use crate::components::{in_spawn_order, Health, Hero, Monster, Position, SelectedHero, SpawnOrder};
use crate::events::{FrameEvent, FrameEvents};
use crate::spawner::Spawner;
use crate::SimStatus;

/// System: despawn всех с hp == 0, clamp выбора, defeat
///
/// Despawn через Commands применяется в конце SimTick, поэтому к
/// следующему тику мёртвых entity в мире уже нет.
pub fn cleanup_dead(
    heroes: Query<(Entity, &SpawnOrder, &Health, &Hero)>,
    monsters: Query<(Entity, &SpawnOrder, &Position, &Health, &Monster), Without<Hero>>,
    mut selected: ResMut<SelectedHero>,
    mut status: ResMut<SimStatus>,
    mut events: ResMut<FrameEvents>,
    mut spawner: Spawner,
) {
    let dead_monsters = in_spawn_order(
        monsters
            .iter()
            .filter(|(_, _, _, health, _)| !health.is_alive())
            .map(|(e, order, pos, _, monster)| (*order, (e, pos.0, monster.mini_boss)))
            .collect(),
    );

    for (entity, position, mini_boss) in dead_monsters {
        spawner.commands.entity(entity).despawn();
        spawner.death_burst(position);
        status.kills += 1;
        events.push(FrameEvent::MonsterKilled { mini_boss });
        if mini_boss {
            crate::log_info("👑 Mini-boss defeated");
        }
    }

    let mut survivors = 0;
    let roster = in_spawn_order(heroes.iter().map(|(e, order, health, hero)| (*order, (e, health.is_alive(), hero.name))).collect());
    for (entity, alive, name) in roster {
        if alive {
            survivors += 1;
            continue;
        }
        spawner.commands.entity(entity).despawn();
        events.push(FrameEvent::HeroDied { hero: name });
        crate::log_warning(&format!("☠ {} has fallen", name));
    }

    selected.clamp_to(survivors);

    if survivors == 0 && !status.defeat {
        status.defeat = true;
        events.push(FrameEvent::Defeat);
        crate::log_warning("DEFEAT: roster is empty");
    }
}
