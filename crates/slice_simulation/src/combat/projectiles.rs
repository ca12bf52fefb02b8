//! Projectiles - прямолинейные снаряды героев (FIREBALL)
//!
//! Lifecycle: spawn из ability → каждый тик position += velocity →
//! despawn при выходе за арену или на первом попадании.

use bevy::prelude::*;
use crate::components::{in_spawn_order, Health, Monster, Position, SpawnOrder};
use crate::config::SimConfig;
use crate::spawner::Spawner;
use crate::tuning::PROJECTILE_HIT_PADDING;

#[derive(Component, Debug, Clone)]
pub struct Projectile {
    /// Скорость (units/tick)
    pub velocity: Vec2,
    pub radius: f32,
    pub damage: u32,
}

impl Projectile {
    /// Дистанция попадания не зависит от размера монстра
    pub fn hit_distance(&self) -> f32 {
        self.radius + PROJECTILE_HIT_PADDING
    }
}

/// System: движение projectiles + collision с монстрами
///
/// Один projectile - максимум один монстр. При нескольких пересечениях
/// выигрывает первый в spawn order (не ближайший).
pub fn update_projectiles(
    config: Res<SimConfig>,
    mut projectiles: Query<(Entity, &SpawnOrder, &mut Position, &Projectile), Without<Monster>>,
    mut monsters: Query<(Entity, &SpawnOrder, &Position, &mut Health), With<Monster>>,
    mut spawner: Spawner,
) {
    let shots = in_spawn_order(projectiles.iter().map(|(e, order, ..)| (*order, e)).collect());
    let horde = in_spawn_order(monsters.iter().map(|(e, order, ..)| (*order, e)).collect());

    for shot in shots {
        let Ok((_, _, mut position, projectile)) = projectiles.get_mut(shot) else {
            continue;
        };

        position.0 += projectile.velocity;

        if !config.arena.contains(position.0) {
            spawner.commands.entity(shot).despawn();
            continue;
        }

        let hit_distance = projectile.hit_distance();
        let victim = horde.iter().copied().find(|&m| {
            monsters
                .get(m)
                .is_ok_and(|(_, _, pos, health)| health.is_alive() && pos.0.distance(position.0) <= hit_distance)
        });

        let Some(victim) = victim else {
            continue;
        };

        if let Ok((_, _, _, mut health)) = monsters.get_mut(victim) {
            health.take_damage(projectile.damage);
            crate::log(&format!(
                "💥 Fireball hit {:?} for {} (HP: {}/{})",
                victim, projectile.damage, health.current, health.max
            ));
        }

        let impact = position.0;
        spawner.explosion(impact);
        spawner.commands.entity(shot).despawn();
    }
}
