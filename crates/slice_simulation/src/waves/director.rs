//! WaveDirector - конечный автомат темпа спавна
//!
//! Active ──(спавны кончились && живых нет)──▶ Intermission(1.2s)
//! Intermission ──(countdown ≤ 0 && живых нет)──▶ Active(wave + 1)
//!
//! Чистая логика без ECS: на вход dt и число живых монстров,
//! на выход - что должно произойти в этом тике.

use bevy::prelude::*;
use crate::components::MonsterStats;
use crate::tuning::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WavePhase {
    /// Спавним или ждём, пока текущая волна умрёт
    Active,
    /// Пауза перед следующей волной
    Intermission { remaining: f32 },
}

/// Результат одного шага директора
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveStep {
    Idle,
    Spawn(MonsterStats),
    WaveCleared { wave: u32 },
    WaveStarted { wave: u32 },
}

#[derive(Resource, Debug, Clone)]
pub struct WaveDirector {
    wave: u32,
    phase: WavePhase,
    spawns_remaining: u32,
    spawn_interval: f32,
    spawn_timer: f32,
    /// Старт первой волны ещё не объявлен
    opening_pending: bool,
}

impl Default for WaveDirector {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveDirector {
    /// Волна 1, Active, первый монстр на ближайшем тике
    pub fn new() -> Self {
        let mut director = Self {
            wave: 1,
            phase: WavePhase::Active,
            spawns_remaining: 0,
            spawn_interval: 0.0,
            spawn_timer: 0.0,
            opening_pending: true,
        };
        director.start_wave(1);
        director
    }

    pub fn is_boss_wave(wave: u32) -> bool {
        wave % BOSS_WAVE_EVERY == 0
    }

    /// 4 + 2n, +4 на boss wave
    pub fn spawn_count(wave: u32) -> u32 {
        let base = WAVE_BASE_SPAWNS + wave * WAVE_SPAWNS_PER_LEVEL;
        if Self::is_boss_wave(wave) {
            base + BOSS_WAVE_EXTRA_SPAWNS
        } else {
            base
        }
    }

    /// max(0.15, 0.55 - 0.02n)
    pub fn spawn_interval_for(wave: u32) -> f32 {
        (SPAWN_INTERVAL_BASE - wave as f32 * SPAWN_INTERVAL_PER_WAVE).max(SPAWN_INTERVAL_MIN)
    }

    /// Статы монстра волны n; mini_boss добавляет (+120 hp, +6 dmg, +12 range)
    pub fn monster_stats(wave: u32, mini_boss: bool) -> MonsterStats {
        let mut stats = MonsterStats {
            max_hp: MONSTER_BASE_HP + wave * MONSTER_HP_PER_WAVE,
            damage: MONSTER_BASE_DAMAGE + wave / 2,
            range: MONSTER_BASE_RANGE + wave as f32 * MONSTER_RANGE_PER_WAVE,
            mini_boss,
        };
        if mini_boss {
            stats.max_hp += MINI_BOSS_HP_BONUS;
            stats.damage += MINI_BOSS_DAMAGE_BONUS;
            stats.range += MINI_BOSS_RANGE_BONUS;
        }
        stats
    }

    pub fn start_wave(&mut self, wave: u32) {
        self.wave = wave;
        self.phase = WavePhase::Active;
        self.spawns_remaining = Self::spawn_count(wave);
        self.spawn_interval = Self::spawn_interval_for(wave);
        self.spawn_timer = 0.0;
    }

    /// Волна 1 стартует без Intermission, поэтому её объявляют отдельно:
    /// Some(1) ровно один раз, дальше None
    pub fn take_opening(&mut self) -> Option<u32> {
        if !self.opening_pending {
            return None;
        }
        self.opening_pending = false;
        Some(self.wave)
    }

    /// Один тик автомата
    ///
    /// Оставшиеся спавны важнее проверки "живых нет": если игрок выкосил
    /// всех раньше конца burst'а, спавн продолжается.
    pub fn advance(&mut self, dt: f32, living_monsters: usize) -> WaveStep {
        match self.phase {
            WavePhase::Active => {
                if self.spawns_remaining > 0 {
                    self.spawn_timer -= dt;
                    if self.spawn_timer > 0.0 {
                        return WaveStep::Idle;
                    }

                    let last = self.spawns_remaining == 1;
                    let stats = Self::monster_stats(self.wave, last && Self::is_boss_wave(self.wave));
                    self.spawn_timer = self.spawn_interval;
                    self.spawns_remaining -= 1;
                    WaveStep::Spawn(stats)
                } else if living_monsters == 0 {
                    self.phase = WavePhase::Intermission {
                        remaining: INTERMISSION_DURATION,
                    };
                    WaveStep::WaveCleared { wave: self.wave }
                } else {
                    WaveStep::Idle
                }
            }
            WavePhase::Intermission { remaining } => {
                let remaining = remaining - dt;
                self.phase = WavePhase::Intermission { remaining };
                if remaining <= 0.0 && living_monsters == 0 {
                    self.start_wave(self.wave + 1);
                    WaveStep::WaveStarted { wave: self.wave }
                } else {
                    WaveStep::Idle
                }
            }
        }
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    pub fn spawns_remaining(&self) -> u32 {
        self.spawns_remaining
    }

    pub fn spawn_interval(&self) -> f32 {
        self.spawn_interval
    }

    /// Остаток intermission (0 в Active)
    pub fn intermission_remaining(&self) -> f32 {
        match self.phase {
            WavePhase::Active => 0.0,
            WavePhase::Intermission { remaining } => remaining.max(0.0),
        }
    }
}
