//! Combat Resolver - targeting + атаки + движение монстров
//!
//! Один раз за тик, после cooldowns/projectiles и до cleanup. Для каждого
//! героя (roster order):
//! 1. Герой бьёт ближайшего живого монстра, если тот в range и атака готова.
//! 2. Если у героя вообще нашлась цель (даже вне range), все не-оглушённые
//!    монстры (spawn order) отвечают: бьют ближайшего живого героя или
//!    делают шаг к нему.
//!
//! Монстры отвечают после КАЖДОГО такого героя: при трёх героях монстр вне
//! range делает три шага за тик, а второй герой бьёт уже после ответа.
//! Монстр, убитый героем, ещё атакует до cleanup, но не двигается.

use bevy::prelude::*;
use crate::components::{in_spawn_order, Combatant, Health, Hero, Monster, Position, SpawnOrder};
use crate::shared::nearest;

pub type HeroCombatQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static SpawnOrder,
        &'static Position,
        &'static mut Health,
        &'static mut Combatant,
        &'static Hero,
    ),
    Without<Monster>,
>;

pub type MonsterCombatQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static SpawnOrder,
        &'static mut Position,
        &'static mut Health,
        &'static mut Combatant,
        &'static Monster,
    ),
    Without<Hero>,
>;

/// System: resolve combat
pub fn resolve_combat(mut heroes: HeroCombatQuery, mut monsters: MonsterCombatQuery) {
    let roster = in_spawn_order(heroes.iter().map(|(e, order, ..)| (*order, e)).collect());
    let horde = in_spawn_order(monsters.iter().map(|(e, order, ..)| (*order, e)).collect());

    for &hero in &roster {
        if !hero_strike(hero, &horde, &mut heroes, &mut monsters) {
            continue;
        }
        // Ответ монстров после каждого героя, у которого нашлась цель
        monsters_respond(&roster, &horde, &mut heroes, &mut monsters);
    }
}

/// Атака героя по ближайшему живому монстру
///
/// Возвращает false, если герой мёртв или живых монстров нет вообще.
fn hero_strike(
    hero: Entity,
    horde: &[Entity],
    heroes: &mut HeroCombatQuery,
    monsters: &mut MonsterCombatQuery,
) -> bool {
    let Ok((_, _, hero_pos, hero_health, mut attack, hero_data)) = heroes.get_mut(hero) else {
        return false;
    };
    if !hero_health.is_alive() {
        return false;
    }

    let living_monsters = horde.iter().filter_map(|&m| {
        let (_, _, pos, health, ..) = monsters.get(m).ok()?;
        health.is_alive().then_some((m, pos.0))
    });
    let Some((target, distance)) = nearest(hero_pos.0, living_monsters) else {
        return false;
    };

    if distance <= attack.range && attack.can_attack() {
        if let Ok((_, _, _, mut health, ..)) = monsters.get_mut(target) {
            health.take_damage(attack.damage);
            attack.reset_attack();
            crate::log(&format!(
                "⚔ {} hits monster {:?} for {} (HP: {}/{})",
                hero_data.name, target, attack.damage, health.current, health.max
            ));
        }
    }
    true
}

/// Проход всех не-оглушённых монстров (spawn order)
fn monsters_respond(
    roster: &[Entity],
    horde: &[Entity],
    heroes: &mut HeroCombatQuery,
    monsters: &mut MonsterCombatQuery,
) {
    for &monster in horde {
        let Ok((_, _, mut position, health, mut attack, monster_data)) = monsters.get_mut(monster) else {
            continue;
        };
        if monster_data.is_stunned() {
            continue;
        }

        let from = position.0;
        let living_heroes = roster.iter().filter_map(|&h| {
            let (_, _, pos, health, ..) = heroes.get(h).ok()?;
            health.is_alive().then_some(((h, pos.0), pos.0))
        });
        let Some(((target, target_pos), distance)) = nearest(from, living_heroes) else {
            continue;
        };

        if distance <= attack.range {
            if !attack.can_attack() {
                continue;
            }
            if let Ok((_, _, _, mut hero_health, _, hero_data)) = heroes.get_mut(target) {
                hero_health.take_damage(attack.damage);
                attack.reset_attack();
                crate::log(&format!(
                    "🩸 Monster {:?} hits {} for {} (HP: {}/{})",
                    monster, hero_data.name, attack.damage, hero_health.current, hero_health.max
                ));
            }
        } else if health.is_alive() {
            // Убитый в этом тике ещё бьёт, но уже не двигается
            position.0 = monster_data.step_toward(from, target_pos);
        }
    }
}
