//! Геометрия арены: bounds, clamp, nearest-target

use bevy::prelude::*;

/// Axis-aligned прямоугольник на плоскости
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }
}

/// Единичный вектор направления или None для нулевой длины
pub fn direction(from: Vec2, to: Vec2) -> Option<Vec2> {
    let delta = to - from;
    let len = delta.length();
    if len == 0.0 {
        return None;
    }
    Some(delta / len)
}

/// Ближайший кандидат по прямой
///
/// Порядок кандидатов = порядок tie-break: при равной дистанции
/// выигрывает первый (строгое `<`).
pub fn nearest<T>(from: Vec2, candidates: impl IntoIterator<Item = (T, Vec2)>) -> Option<(T, f32)> {
    let mut best: Option<(T, f32)> = None;

    for (candidate, position) in candidates {
        let distance = from.distance(position);
        let closer = match &best {
            Some((_, best_distance)) => distance < *best_distance,
            None => true,
        };
        if closer {
            best = Some((candidate, distance));
        }
    }

    best
}
