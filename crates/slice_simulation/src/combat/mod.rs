//! Combat module - cooldowns, abilities, projectiles, resolver, cleanup
//!
//! Всё в SimTick, порядок задают SimSet'ы:
//! 1. tick_cooldowns (Cooldowns) - attack/ability/stun таймеры
//! 2. activate_ability (Abilities) - intent → STUN / DASH / FIREBALL
//! 3. update_projectiles (Projectiles) - движение + первое попадание
//! 4. resolve_combat (Combat) - targeting, атаки, ответ монстров после каждого героя
//! 5. cleanup_dead (Cleanup) - despawn hp == 0, clamp выбора, defeat

use bevy::prelude::*;

pub mod abilities;
pub mod cleanup;
pub mod cooldowns;
pub mod projectiles;
pub mod resolver;


// Re-export основных типов
pub use abilities::activate_ability;
pub use cleanup::cleanup_dead;
pub use cooldowns::tick_cooldowns;
pub use projectiles::{update_projectiles, Projectile};
pub use resolver::resolve_combat;

/// Combat Plugin
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        use crate::{SimSet, SimTick};

        app.add_systems(SimTick, tick_cooldowns.in_set(SimSet::Cooldowns))
            .add_systems(SimTick, activate_ability.in_set(SimSet::Abilities))
            .add_systems(SimTick, update_projectiles.in_set(SimSet::Projectiles))
            .add_systems(SimTick, resolve_combat.in_set(SimSet::Combat))
            .add_systems(SimTick, cleanup_dead.in_set(SimSet::Cleanup));
    }
}
