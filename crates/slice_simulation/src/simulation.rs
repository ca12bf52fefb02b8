//! Simulation - пошаговый фасад над Bevy App
//!
//! Host (renderer, тесты, headless bin) работает только через него:
//! `push_intent` → `tick` → `snapshot`. Один `tick()` = ровно один SimTick,
//! без привязки к wall-clock, поэтому одинаковый seed + intents дают
//! одинаковые snapshot'ы.

use bevy::prelude::*;
use crate::config::SimConfig;
use crate::input::{Intent, IntentQueue};
use crate::snapshot::{build_snapshot, SimSnapshot};
use crate::{spawn_roster, SimCorePlugin, SimStatus, SimTick};

pub struct Simulation {
    app: App,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl Simulation {
    /// Новая сессия: roster заспавнен, волна 1 начнётся с первого тика
    pub fn new(config: SimConfig) -> Self {
        crate::log_info(&format!("Simulation created (seed: {})", config.seed));

        let mut app = App::new();
        app.add_plugins(SimCorePlugin { config });
        spawn_roster(app.world_mut());

        Self { app }
    }

    /// Intent применится в начале следующего tick()
    pub fn push_intent(&mut self, intent: Intent) {
        self.app.world_mut().resource_mut::<IntentQueue>().push(intent);
    }

    pub fn tick(&mut self) {
        self.app.world_mut().run_schedule(SimTick);
    }

    pub fn run_ticks(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    pub fn snapshot(&mut self) -> SimSnapshot {
        build_snapshot(self.app.world_mut())
    }

    pub fn status(&self) -> &SimStatus {
        self.app.world().resource::<SimStatus>()
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }

    /// Прямой доступ для сценариев (расстановка монстров, правка hp)
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
