//! Игровые события внутри одного тика (для UI/audio collaborators)
//!
//! Не bevy `Event`: тики гоняются через `run_schedule` без `App::update`,
//! поэтому буфер живёт в resource и очищается в начале каждого тика.

use bevy::prelude::*;
use serde::Serialize;
use crate::components::Ability;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FrameEvent {
    WaveStarted { wave: u32, boss_wave: bool },
    MonsterSpawned { wave: u32, mini_boss: bool },
    WaveCleared { wave: u32 },
    AbilityUsed { hero: &'static str, ability: Ability },
    MonsterKilled { mini_boss: bool },
    HeroDied { hero: &'static str },
    Defeat,
}

/// События текущего тика
#[derive(Resource, Debug, Default)]
pub struct FrameEvents {
    events: Vec<FrameEvent>,
}

impl FrameEvents {
    pub fn push(&mut self, event: FrameEvent) {
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrameEvent> {
        self.events.iter()
    }

    pub fn to_vec(&self) -> Vec<FrameEvent> {
        self.events.clone()
    }
}
