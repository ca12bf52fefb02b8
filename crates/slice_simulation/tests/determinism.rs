//! Тесты детерминизма
//!
//! Симуляция с одинаковым seed и одинаковыми intents должна давать
//! идентичные snapshot'ы (включая позиции частиц и shake offset).

use bevy::prelude::*;
use slice_simulation::*;

/// Scripted intents: движение, переключение героев, все три абилки
fn scripted(tick: u32) -> Vec<Intent> {
    match tick % 240 {
        10 => vec![Intent::Move(Vec2::new(0.3, -1.0))],
        60 => vec![Intent::Move(Vec2::ZERO), Intent::UseAbility],
        100 => vec![Intent::SelectHero(2), Intent::UseAbility],
        150 => vec![Intent::SelectHero(1), Intent::Move(Vec2::new(1.0, 0.2))],
        160 => vec![Intent::UseAbility, Intent::Move(Vec2::ZERO)],
        200 => vec![Intent::SelectHero(0)],
        _ => Vec::new(),
    }
}

/// Запускает симуляцию и возвращает финальный snapshot
fn run_simulation(seed: u64, tick_count: u32) -> SimSnapshot {
    let mut sim = Simulation::new(SimConfig::with_seed(seed));
    for tick in 0..tick_count {
        for intent in scripted(tick) {
            sim.push_intent(intent);
        }
        sim.tick();
    }
    sim.snapshot()
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const TICK_COUNT: u32 = 1500;

    let snapshot1 = run_simulation(SEED, TICK_COUNT);
    let snapshot2 = run_simulation(SEED, TICK_COUNT);

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;
    const TICK_COUNT: u32 = 900;

    // Запускаем 3 раза - все должны быть идентичны (включая JSON)
    let snapshots: Vec<_> = (0..3).map(|_| run_simulation(SEED, TICK_COUNT)).collect();
    let reference = serde_json::to_string(&snapshots[0]).expect("serializable");

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(snapshots[0], *snapshot, "Прогон {} дал результат отличный от прогона 0", i);
        let json = serde_json::to_string(snapshot).expect("serializable");
        assert_eq!(reference, json);
    }
}

#[test]
fn test_different_seeds_diverge() {
    // Позиции спавна берутся из RNG - разные seed'ы дают разные волны
    let snapshot1 = run_simulation(1, 120);
    let snapshot2 = run_simulation(2, 120);

    let positions1: Vec<_> = snapshot1.monsters.iter().map(|m| m.position).collect();
    let positions2: Vec<_> = snapshot2.monsters.iter().map(|m| m.position).collect();
    assert!(!positions1.is_empty());
    assert_ne!(positions1, positions2);
}

#[test]
fn test_headless_app_spawns_roster() {
    let mut app = create_headless_app(7);
    app.update();

    let world = app.world_mut();
    let mut heroes = world.query::<&Hero>();
    assert_eq!(heroes.iter(world).count(), 3);
    assert_eq!(world.resource::<DeterministicRng>().seed, 7);
}
