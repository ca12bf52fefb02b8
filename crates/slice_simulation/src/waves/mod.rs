//! Waves - пейсинг спавна монстров
//!
//! `WaveDirector` (director.rs) решает, ЧТО делать в тике;
//! `spawn_monsters` переводит решение в entity + FrameEvent.
//! Работает до cleanup: живые = hp > 0, даже если entity ещё не удалена.

use bevy::prelude::*;
use rand::Rng;
use crate::components::{Health, Monster, MonsterStats, SpawnCounter};
use crate::config::SimConfig;
use crate::events::{FrameEvent, FrameEvents};
use crate::spawner::Spawner;
use crate::tuning::*;

pub mod director;

pub use director::{WaveDirector, WavePhase, WaveStep};

/// System: один шаг WaveDirector
pub fn spawn_monsters(
    config: Res<SimConfig>,
    mut director: ResMut<WaveDirector>,
    monsters: Query<&Health, With<Monster>>,
    mut events: ResMut<FrameEvents>,
    mut spawner: Spawner,
) {
    let living = monsters.iter().filter(|health| health.is_alive()).count();

    if let Some(wave) = director.take_opening() {
        announce_wave(wave, &director, &mut events);
    }

    match director.advance(config.dt(), living) {
        WaveStep::Idle => {}
        WaveStep::Spawn(stats) => {
            let position = spawn_position(&config, &mut spawner);
            let order = spawner.next_order();
            spawner.commands.spawn(stats.bundle(position, order));
            events.push(FrameEvent::MonsterSpawned {
                wave: director.wave(),
                mini_boss: stats.mini_boss,
            });

            if stats.mini_boss {
                crate::log_info(&format!(
                    "👑 Mini-boss spawned (wave {}, HP: {}, dmg: {})",
                    director.wave(),
                    stats.max_hp,
                    stats.damage
                ));
            } else {
                crate::log(&format!(
                    "Monster spawned at ({:.0}, {:.0}), {} left in wave {}",
                    position.x,
                    position.y,
                    director.spawns_remaining(),
                    director.wave()
                ));
            }
        }
        WaveStep::WaveCleared { wave } => {
            events.push(FrameEvent::WaveCleared { wave });
            crate::log_info(&format!("🏁 Wave {} cleared", wave));
        }
        WaveStep::WaveStarted { wave } => announce_wave(wave, &director, &mut events),
    }
}

fn announce_wave(wave: u32, director: &WaveDirector, events: &mut FrameEvents) {
    let boss_wave = WaveDirector::is_boss_wave(wave);
    events.push(FrameEvent::WaveStarted { wave, boss_wave });
    crate::log_info(&format!(
        "🌊 Wave {} started ({} spawns{})",
        wave,
        director.spawns_remaining(),
        if boss_wave { ", BOSS" } else { "" }
    ));
}

/// Справа за краем арены: x = width + 60 + rand[0, 300), y = 100 + rand[0, 360)
fn spawn_position(config: &SimConfig, spawner: &mut Spawner) -> Vec2 {
    let rng = &mut spawner.rng.rng;
    let x = config.arena.max.x + SPAWN_X_OFFSET + rng.gen_range(0..SPAWN_X_JITTER) as f32;
    let y = SPAWN_Y_MARGIN + rng.gen_range(0..SPAWN_Y_JITTER) as f32;
    Vec2::new(x, y)
}

/// Спавн монстра вне тика (сценарии и тесты)
pub fn spawn_monster_at(world: &mut World, position: Vec2, stats: MonsterStats) -> Entity {
    let order = world.resource_mut::<SpawnCounter>().next();
    world.spawn(stats.bundle(position, order)).id()
}

/// Wave plugin
pub struct WavePlugin;

impl Plugin for WavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WaveDirector>()
            .add_systems(crate::SimTick, spawn_monsters.in_set(crate::SimSet::Waves));
    }
}
