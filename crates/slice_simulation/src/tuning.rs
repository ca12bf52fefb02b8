//! Баланс: константы абилок, projectile, волн и эффектов
//!
//! Скорости в units/tick, длительности в секундах.

// === Abilities ===

/// DASH: дистанция рывка
pub const DASH_DISTANCE: f32 = 120.0;
/// DASH: шаг сэмплирования trail-частиц вдоль отрезка
pub const DASH_TRAIL_STEP: f32 = 12.0;

/// STUN: радиус вокруг героя
pub const STUN_RADIUS: f32 = 90.0;
/// STUN: длительность
pub const STUN_DURATION: f32 = 1.5;

/// FIREBALL: скорость projectile (units/tick)
pub const FIREBALL_SPEED: f32 = 6.5;
pub const FIREBALL_RADIUS: f32 = 12.0;
pub const FIREBALL_DAMAGE: u32 = 28;

/// Padding попадания projectile - не зависит от размера монстра
pub const PROJECTILE_HIT_PADDING: f32 = 14.0;

// === Heroes / Monsters ===

pub const HERO_ATTACK_RANGE: f32 = 90.0;
pub const MONSTER_ATTACK_COOLDOWN: f32 = 0.8;
pub const MONSTER_BASE_SPEED: f32 = 1.2;
pub const MONSTER_MAX_SPEED_BONUS: f32 = 1.2;

// === Waves ===

pub const WAVE_BASE_SPAWNS: u32 = 4;
pub const WAVE_SPAWNS_PER_LEVEL: u32 = 2;
/// Каждая N-я волна - boss wave
pub const BOSS_WAVE_EVERY: u32 = 5;
pub const BOSS_WAVE_EXTRA_SPAWNS: u32 = 4;

pub const SPAWN_INTERVAL_BASE: f32 = 0.55;
pub const SPAWN_INTERVAL_PER_WAVE: f32 = 0.02;
pub const SPAWN_INTERVAL_MIN: f32 = 0.15;

pub const INTERMISSION_DURATION: f32 = 1.2;

pub const MONSTER_BASE_HP: u32 = 40;
pub const MONSTER_HP_PER_WAVE: u32 = 10;
pub const MONSTER_BASE_DAMAGE: u32 = 4;
pub const MONSTER_BASE_RANGE: f32 = 42.0;
pub const MONSTER_RANGE_PER_WAVE: f32 = 2.0;

/// Бонус финального монстра boss wave (+hp, +damage, +range)
pub const MINI_BOSS_HP_BONUS: u32 = 120;
pub const MINI_BOSS_DAMAGE_BONUS: u32 = 6;
pub const MINI_BOSS_RANGE_BONUS: f32 = 12.0;

/// Spawn за правым краем: x = ARENA_WIDTH + OFFSET + rand[0, JITTER)
pub const SPAWN_X_OFFSET: f32 = 60.0;
pub const SPAWN_X_JITTER: i32 = 300;
/// y = MARGIN + rand[0, JITTER)
pub const SPAWN_Y_MARGIN: f32 = 100.0;
pub const SPAWN_Y_JITTER: i32 = 360;

// === Effects ===

pub const PARTICLE_DRAG: f32 = 0.98;
pub const PARTICLE_SHRINK: f32 = 0.96;
pub const RING_THINNING: f32 = 0.97;

pub const EXPLOSION_PARTICLES: usize = 14;
pub const EXPLOSION_RING_LIFE: f32 = 0.35;
pub const EXPLOSION_RING_EXPAND: f32 = 220.0;
pub const EXPLOSION_FLASH: f32 = 0.12;
pub const EXPLOSION_SHAKE: f32 = 0.25;
pub const EXPLOSION_SHAKE_MAGNITUDE: f32 = 6.0;

pub const DEATH_BURST_PARTICLES: usize = 8;

/// Максимальная alpha screen flash
pub const FLASH_MAX_ALPHA: f32 = 0.5;
