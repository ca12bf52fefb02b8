//! Emitters - какие эффекты порождают боевые события

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;
use crate::components::Position;
use crate::effects::{Particle, Ring};
use crate::spawner::Spawner;
use crate::tuning::*;

const EXPLOSION_COLOR: [u8; 3] = [255, 160, 80];
const EXPLOSION_RING_COLOR: [u8; 3] = [255, 190, 120];
const STUN_RING_COLOR: [u8; 3] = [120, 180, 255];
const DEATH_COLOR: [u8; 3] = [220, 80, 80];

impl Spawner<'_, '_> {
    pub fn particle(&mut self, at: Vec2, particle: Particle) {
        self.spawn_ordered((Position(at), particle));
    }

    pub fn ring(&mut self, at: Vec2, ring: Ring) {
        self.spawn_ordered((Position(at), ring));
    }

    /// Радиальный разлёт частиц со случайным углом/скоростью
    fn burst(&mut self, at: Vec2, count: usize, color: [u8; 3], max_speed: f32) {
        for _ in 0..count {
            let angle = self.rng.rng.gen::<f32>() * TAU;
            let speed = 0.5 + self.rng.rng.gen::<f32>() * max_speed;
            let life = 0.3 + self.rng.rng.gen::<f32>() * 0.4;
            let size = 3.0 + self.rng.rng.gen::<f32>() * 3.0;
            self.particle(
                at,
                Particle {
                    velocity: Vec2::from_angle(angle) * speed,
                    size,
                    life,
                    max_life: life,
                    color,
                },
            );
        }
    }

    /// Попадание fireball: кольцо + искры + flash + shake
    pub fn explosion(&mut self, at: Vec2) {
        self.ring(
            at,
            Ring {
                radius: 8.0,
                expand_rate: EXPLOSION_RING_EXPAND,
                thickness: 6.0,
                life: EXPLOSION_RING_LIFE,
                max_life: EXPLOSION_RING_LIFE,
                color: EXPLOSION_RING_COLOR,
                base_alpha: 220,
            },
        );
        self.burst(at, EXPLOSION_PARTICLES, EXPLOSION_COLOR, 3.0);
        self.fx.flash(EXPLOSION_FLASH);
        self.fx.shake(EXPLOSION_SHAKE, EXPLOSION_SHAKE_MAGNITUDE);
    }

    /// STUN: кольцо дорастает до радиуса оглушения за время жизни
    pub fn stun_pulse(&mut self, at: Vec2) {
        let start_radius = 10.0;
        self.ring(
            at,
            Ring {
                radius: start_radius,
                expand_rate: (STUN_RADIUS - start_radius) / EXPLOSION_RING_LIFE,
                thickness: 5.0,
                life: EXPLOSION_RING_LIFE,
                max_life: EXPLOSION_RING_LIFE,
                color: STUN_RING_COLOR,
                base_alpha: 200,
            },
        );
    }

    /// DASH: частицы вдоль пройденного отрезка
    pub fn dash_trail(&mut self, from: Vec2, to: Vec2, color: [u8; 3]) {
        let steps = (from.distance(to) / DASH_TRAIL_STEP).floor() as usize;
        for i in 0..=steps {
            let t = if steps == 0 { 0.0 } else { i as f32 / steps as f32 };
            let jitter = Vec2::new(
                self.rng.rng.gen_range(-0.5..=0.5),
                self.rng.rng.gen_range(-0.5..=0.5),
            );
            self.particle(
                from.lerp(to, t),
                Particle {
                    velocity: jitter,
                    size: 5.0,
                    life: 0.25,
                    max_life: 0.25,
                    color,
                },
            );
        }
    }

    pub fn death_burst(&mut self, at: Vec2) {
        self.burst(at, DEATH_BURST_PARTICLES, DEATH_COLOR, 2.0);
    }
}
