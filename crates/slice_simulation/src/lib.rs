//! SLICE Simulation Core
//!
//! Fixed-timestep wave survival на Bevy 0.16 ECS (headless).
//! Партия из трёх героев против волн монстров, спавнящихся справа за ареной.
//!
//! Один тик = один прогон schedule `SimTick`, порядок задаётся `SimSet`:
//! Input → Cooldowns → Movement → Abilities → Projectiles → Combat →
//! Effects → Waves → Cleanup. На паузе выполняется только Input.
//!
//! Renderer/input host снаружи: кладёт `Intent`, читает `SimSnapshot`.

use bevy::ecs::schedule::ScheduleLabel;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod combat;
pub mod components;
pub mod config;
pub mod effects;
pub mod events;
pub mod input;
pub mod logger;
pub mod shared;
pub mod simulation;
pub mod snapshot;
pub mod spawner;
pub mod tuning;
pub mod waves;

// Re-export базовых типов для удобства
pub use combat::{CombatPlugin, Projectile};
pub use components::*;
pub use config::SimConfig;
pub use effects::{EffectsPlugin, Particle, Ring, ScreenFx};
pub use events::{FrameEvent, FrameEvents};
pub use input::{InputPlugin, Intent, IntentQueue};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, log_with_level, set_log_level, set_logger,
    set_logger_if_needed, ConsoleLogger, LogLevel, LogPrinter,
};
pub use simulation::Simulation;
pub use snapshot::{build_snapshot, SimSnapshot};
pub use waves::{spawn_monster_at, WaveDirector, WavePhase, WavePlugin};

/// Schedule одного шага симуляции
///
/// Не FixedUpdate напрямую: тесты и `Simulation::tick()` гоняют его через
/// `world.run_schedule`, без накопления wall-clock времени.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimTick;

/// Стадии тика (chained в порядке объявления)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    Input,
    Cooldowns,
    Movement,
    Abilities,
    Projectiles,
    Combat,
    Effects,
    Waves,
    Cleanup,
}

impl SimSet {
    /// Стадии, замороженные на паузе
    const GAMEPLAY: [SimSet; 8] = [
        SimSet::Cooldowns,
        SimSet::Movement,
        SimSet::Abilities,
        SimSet::Projectiles,
        SimSet::Combat,
        SimSet::Effects,
        SimSet::Waves,
        SimSet::Cleanup,
    ];
}

/// Глобальное состояние сессии
#[derive(Resource, Debug, Clone, Default)]
pub struct SimStatus {
    /// Номер текущего тика (растёт и на паузе)
    pub tick: u64,
    pub paused: bool,
    /// Roster пуст; тики продолжают идти
    pub defeat: bool,
    pub kills: u32,
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Run condition: gameplay стадии выполняются только вне паузы
pub fn simulation_running(status: Res<SimStatus>) -> bool {
    !status.paused
}

/// Начало тика: счётчик + очистка событий прошлого тика
pub fn begin_tick(mut status: ResMut<SimStatus>, mut events: ResMut<FrameEvents>) {
    status.tick += 1;
    events.clear();
}

/// Ядро симуляции: resources + SimTick со всеми стадиями
///
/// Не спавнит героев и не привязывается ко времени: это делают
/// `SimulationPlugin` (real-time host) и `Simulation` (пошаговый фасад).
pub struct SimCorePlugin {
    pub config: SimConfig,
}

impl Default for SimCorePlugin {
    fn default() -> Self {
        Self {
            config: SimConfig::default(),
        }
    }
}

impl Plugin for SimCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_schedule(SimTick)
            .insert_resource(self.config.clone())
            .insert_resource(DeterministicRng::new(self.config.seed))
            .init_resource::<SimStatus>()
            .init_resource::<SpawnCounter>()
            .init_resource::<SelectedHero>()
            .init_resource::<FrameEvents>()
            .configure_sets(
                SimTick,
                (
                    SimSet::Input,
                    SimSet::Cooldowns,
                    SimSet::Movement,
                    SimSet::Abilities,
                    SimSet::Projectiles,
                    SimSet::Combat,
                    SimSet::Effects,
                    SimSet::Waves,
                    SimSet::Cleanup,
                )
                    .chain(),
            );

        for set in SimSet::GAMEPLAY {
            app.configure_sets(SimTick, set.run_if(simulation_running));
        }

        app.add_systems(SimTick, begin_tick.in_set(SimSet::Input).before(input::apply_intents))
            .add_plugins((InputPlugin, CombatPlugin, EffectsPlugin, WavePlugin));
    }
}

/// Спавн стартового roster (Tank, Rogue, Mage) в порядке выбора
pub fn spawn_roster(world: &mut World) {
    for archetype in HERO_ROSTER.iter() {
        let order = world.resource_mut::<SpawnCounter>().next();
        world.spawn(archetype.bundle(order));
    }
    log_info(&format!("Roster spawned: {} heroes", HERO_ROSTER.len()));
}

/// Exclusive system: один SimTick из FixedUpdate
fn run_simulation_tick(world: &mut World) {
    world.run_schedule(SimTick);
}

/// Real-time plugin: SimTick на каждом FixedUpdate (60Hz)
pub struct SimulationPlugin {
    pub config: SimConfig,
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self {
            config: SimConfig::default(),
        }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep = tick_rate (по умолчанию 60Hz)
            .insert_resource(Time::<Fixed>::from_hz(self.config.tick_rate as f64))
            .add_plugins(SimCorePlugin {
                config: self.config.clone(),
            })
            .add_systems(Startup, spawn_roster)
            .add_systems(FixedUpdate, run_simulation_tick);
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins).add_plugins(SimulationPlugin {
        config: SimConfig::with_seed(seed),
    });

    app
}
