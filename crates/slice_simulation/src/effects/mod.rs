//! Transient cosmetic effects: particles, rings, screen flash, camera shake
//!
//! На gameplay не влияют - renderer только читает их из snapshot.
//! Живут как обычные entity (Position + Particle/Ring + SpawnOrder),
//! удаляются когда life ≤ 0.

use bevy::prelude::*;

pub mod emitters;
pub mod systems;


pub use emitters::*;
pub use systems::*;

/// Частица: летит по velocity, замедляется и уменьшается
#[derive(Component, Debug, Clone)]
pub struct Particle {
    /// Скорость (units/tick)
    pub velocity: Vec2,
    pub size: f32,
    pub life: f32,
    pub max_life: f32,
    pub color: [u8; 3],
}

impl Particle {
    /// Alpha = доля оставшейся жизни
    pub fn alpha(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

/// Расширяющееся кольцо (explosion, stun pulse)
#[derive(Component, Debug, Clone)]
pub struct Ring {
    pub radius: f32,
    /// Рост радиуса (units/sec)
    pub expand_rate: f32,
    pub thickness: f32,
    pub life: f32,
    pub max_life: f32,
    pub color: [u8; 3],
    /// Alpha при спавне (0..=255)
    pub base_alpha: u8,
}

impl Ring {
    /// Alpha линейно от оставшейся жизни относительно исходной
    pub fn alpha(&self) -> u8 {
        if self.max_life <= 0.0 {
            return 0;
        }
        let scaled = self.base_alpha as f32 * (self.life / self.max_life);
        scaled.clamp(0.0, 255.0) as u8
    }
}

/// Глобальные screen-space эффекты (flash + shake)
#[derive(Resource, Debug, Clone, Default)]
pub struct ScreenFx {
    pub flash_remaining: f32,
    pub flash_duration: f32,
    pub shake_remaining: f32,
    pub shake_duration: f32,
    pub shake_magnitude: f32,
    /// Смещение камеры на текущий тик (пересчитывается пока shake активен)
    pub shake_offset: Vec2,
}

impl ScreenFx {
    /// Новый flash не короче текущего
    pub fn flash(&mut self, duration: f32) {
        if duration >= self.flash_remaining {
            self.flash_remaining = duration;
            self.flash_duration = duration;
        }
    }

    pub fn shake(&mut self, duration: f32, magnitude: f32) {
        if duration >= self.shake_remaining {
            self.shake_remaining = duration;
            self.shake_duration = duration;
        }
        self.shake_magnitude = self.shake_magnitude.max(magnitude);
    }

    pub fn flash_alpha(&self) -> f32 {
        if self.flash_remaining <= 0.0 || self.flash_duration <= 0.0 {
            return 0.0;
        }
        (self.flash_remaining / self.flash_duration).clamp(0.0, 1.0) * crate::tuning::FLASH_MAX_ALPHA
    }
}

/// Effects plugin - update частиц/колец/экрана в SimSet::Effects
pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenFx>().add_systems(
            crate::SimTick,
            (update_particles, update_rings, update_screen_fx)
                .chain()
                .in_set(crate::SimSet::Effects),
        );
    }
}
