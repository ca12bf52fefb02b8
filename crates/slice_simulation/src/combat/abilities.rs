//! Ability activation - intent → одна dispatch-функция по `Ability`
//!
//! Правила расхода cooldown различаются намеренно и сохраняются как есть:
//! - DASH: всегда успешен → cooldown расходуется
//! - FIREBALL: нет цели или нулевой вектор прицела → no-op, cooldown НЕ расходуется
//! - STUN: расходует cooldown даже если в радиусе никого нет

use bevy::prelude::*;
use crate::combat::Projectile;
use crate::components::{in_spawn_order, Ability, Health, Hero, Monster, Position, SelectedHero, SpawnOrder};
use crate::config::SimConfig;
use crate::events::{FrameEvent, FrameEvents};
use crate::input::AbilityRequest;
use crate::shared::{direction, nearest};
use crate::spawner::Spawner;
use crate::tuning::*;

pub type AbilityMonsterQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static SpawnOrder,
        &'static Position,
        &'static Health,
        &'static mut Monster,
    ),
    Without<Hero>,
>;

/// System: активировать абилку выбранного героя (если был UseAbility)
pub fn activate_ability(
    mut request: ResMut<AbilityRequest>,
    selected: Res<SelectedHero>,
    config: Res<SimConfig>,
    mut heroes: Query<(Entity, &SpawnOrder, &mut Position, &mut Hero), Without<Monster>>,
    mut monsters: AbilityMonsterQuery,
    mut spawner: Spawner,
    mut events: ResMut<FrameEvents>,
) {
    if !request.pending {
        return;
    }
    request.pending = false;

    let roster = in_spawn_order(heroes.iter().map(|(e, order, ..)| (*order, e)).collect());
    let Some(index) = selected.resolve(roster.len()) else {
        return;
    };
    let Ok((_, _, mut position, mut hero)) = heroes.get_mut(roster[index]) else {
        return;
    };

    if !hero.can_use_ability() {
        crate::log(&format!(
            "{} ability on cooldown ({:.2}s)",
            hero.name,
            hero.ability_cooldown_remaining()
        ));
        return;
    }

    let used = match hero.ability {
        Ability::Dash => dash(&mut position.0, &hero, &config, &mut spawner),
        Ability::Fireball => cast_fireball(position.0, &monsters, &mut spawner),
        Ability::Stun => stun_area(position.0, &mut monsters, &mut spawner),
    };

    if used {
        hero.consume_ability();
        events.push(FrameEvent::AbilityUsed {
            hero: hero.name,
            ability: hero.ability,
        });
        crate::log_info(&format!("✨ {} used {}", hero.name, hero.ability.label()));
    }
}

/// DASH: рывок по last_direction ((1,0) если герой ещё не двигался), clamp в bounds
pub fn dash(position: &mut Vec2, hero: &Hero, config: &SimConfig, spawner: &mut Spawner) -> bool {
    let dir = if hero.last_direction == Vec2::ZERO {
        Vec2::X
    } else {
        hero.last_direction
    };

    let from = *position;
    let to = config.hero_bounds.clamp(from + dir * DASH_DISTANCE);
    *position = to;

    spawner.dash_trail(from, to, hero.color);
    true
}

/// FIREBALL: projectile в ближайшего живого монстра
pub fn cast_fireball(origin: Vec2, monsters: &AbilityMonsterQuery, spawner: &mut Spawner) -> bool {
    let horde = in_spawn_order(
        monsters
            .iter()
            .filter(|(_, _, _, health, _)| health.is_alive())
            .map(|(e, order, pos, ..)| (*order, (e, pos.0)))
            .collect(),
    );

    let Some(((target, target_pos), _)) = nearest(origin, horde.into_iter().map(|(e, p)| ((e, p), p))) else {
        crate::log("FIREBALL: no target");
        return false;
    };

    let Some(dir) = direction(origin, target_pos) else {
        crate::log(&format!("FIREBALL: zero-length aim at {:?}", target));
        return false;
    };

    spawner.spawn_ordered((
        Position(origin),
        Projectile {
            velocity: dir * FIREBALL_SPEED,
            radius: FIREBALL_RADIUS,
            damage: FIREBALL_DAMAGE,
        },
    ));
    true
}

/// STUN: все монстры в радиусе, max(remaining, duration)
pub fn stun_area(origin: Vec2, monsters: &mut AbilityMonsterQuery, spawner: &mut Spawner) -> bool {
    let mut affected = 0;
    for (_, _, position, _, mut monster) in monsters.iter_mut() {
        if origin.distance(position.0) <= STUN_RADIUS {
            monster.stun(STUN_DURATION);
            affected += 1;
        }
    }

    spawner.stun_pulse(origin);
    crate::log(&format!("STUN: {} monsters affected", affected));
    true
}
