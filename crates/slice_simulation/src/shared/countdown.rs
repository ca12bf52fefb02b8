//! Countdown - decaying timer value type
//!
//! Одна реализация на все таймеры: attack cooldown героев и монстров,
//! ability cooldown, stun. Уменьшается только когда симуляция тикает,
//! поэтому пауза замораживает все таймеры автоматически.

/// Таймер обратного отсчёта (секунды)
///
/// Инвариант: remaining ≥ 0.0
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    /// Готовый таймер (remaining == 0)
    pub const READY: Countdown = Countdown { remaining: 0.0 };

    pub fn new(remaining: f32) -> Self {
        Self {
            remaining: remaining.max(0.0),
        }
    }

    /// Один тик: если таймер активен - уменьшаем на dt (не ниже 0)
    pub fn tick(&mut self, dt: f32) {
        if self.remaining > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Перезапуск на полную длительность
    pub fn reset(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
    }

    /// max(remaining, duration) - повторное применение не стакается
    pub fn extend(&mut self, duration: f32) {
        self.remaining = self.remaining.max(duration);
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}
