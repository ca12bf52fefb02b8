//! Effects update systems (SimSet::Effects)

use bevy::prelude::*;
use rand::Rng;
use crate::components::Position;
use crate::config::SimConfig;
use crate::effects::{Particle, Ring, ScreenFx};
use crate::tuning::{PARTICLE_DRAG, PARTICLE_SHRINK, RING_THINNING};
use crate::DeterministicRng;

impl Particle {
    /// Один тик: движение + затухание
    pub fn advance(&mut self, position: &mut Vec2, dt: f32) {
        *position += self.velocity;
        self.velocity *= PARTICLE_DRAG;
        self.size *= PARTICLE_SHRINK;
        self.life -= dt;
    }
}

impl Ring {
    pub fn advance(&mut self, dt: f32) {
        self.radius += self.expand_rate * dt;
        self.thickness *= RING_THINNING;
        self.life -= dt;
    }
}

/// Система: update частиц, despawn при life ≤ 0
pub fn update_particles(
    mut commands: Commands,
    config: Res<SimConfig>,
    mut particles: Query<(Entity, &mut Position, &mut Particle)>,
) {
    let dt = config.dt();
    for (entity, mut position, mut particle) in particles.iter_mut() {
        particle.advance(&mut position.0, dt);
        if particle.life <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

/// Система: update колец
pub fn update_rings(
    mut commands: Commands,
    config: Res<SimConfig>,
    mut rings: Query<(Entity, &mut Ring)>,
) {
    let dt = config.dt();
    for (entity, mut ring) in rings.iter_mut() {
        ring.advance(dt);
        if ring.life <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

/// Система: flash/shake countdowns + jitter камеры
pub fn update_screen_fx(
    config: Res<SimConfig>,
    mut fx: ResMut<ScreenFx>,
    mut rng: ResMut<DeterministicRng>,
) {
    let dt = config.dt();

    if fx.flash_remaining > 0.0 {
        fx.flash_remaining = (fx.flash_remaining - dt).max(0.0);
    }

    if fx.shake_remaining > 0.0 {
        fx.shake_remaining = (fx.shake_remaining - dt).max(0.0);
    }

    if fx.shake_remaining > 0.0 && fx.shake_duration > 0.0 {
        let falloff = fx.shake_remaining / fx.shake_duration;
        let jitter = Vec2::new(rng.rng.gen_range(-1.0..=1.0), rng.rng.gen_range(-1.0..=1.0));
        fx.shake_offset = jitter * fx.shake_magnitude * falloff;
    } else {
        fx.shake_offset = Vec2::ZERO;
        fx.shake_magnitude = 0.0;
    }
}
