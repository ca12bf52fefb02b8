//! Headless симуляция SLICE
//!
//! Прогоняет scripted сессию без рендера: движение, смена героев, абилки.
//! В конце печатает сводку и финальный snapshot (JSON) - удобно для diff'а
//! между двумя запусками с одним seed.

use bevy::math::Vec2;
use slice_simulation::{init_logger, log_info, set_log_level, Intent, LogLevel, SimConfig, Simulation};

const TOTAL_TICKS: u32 = 3600;

/// Скрипт: (тик, intent)
///
/// Цикл 240 тиков (4s) длиннее любого cooldown: к своему тику
/// абилка каждого героя уже откатилась.
fn scripted_intents(tick: u32) -> Vec<Intent> {
    match tick {
        1 => return vec![Intent::SelectHero(2), Intent::Move(Vec2::new(0.0, 1.0))],
        90 => return vec![Intent::Move(Vec2::ZERO)],
        _ => {}
    }

    match tick % 240 {
        60 => vec![Intent::SelectHero(0), Intent::UseAbility],
        120 => vec![Intent::SelectHero(2), Intent::UseAbility],
        180 => vec![
            Intent::SelectHero(1),
            Intent::Move(Vec2::new(1.0, 0.0)),
            Intent::UseAbility,
            Intent::Move(Vec2::ZERO),
        ],
        _ => Vec::new(),
    }
}

fn main() {
    init_logger();
    set_log_level(LogLevel::Info);

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42);
    println!("Starting SLICE headless simulation (seed: {})", seed);

    let mut sim = Simulation::new(SimConfig::with_seed(seed));

    for tick in 1..=TOTAL_TICKS {
        for intent in scripted_intents(tick) {
            sim.push_intent(intent);
        }
        sim.tick();

        if tick % 600 == 0 {
            let snapshot = sim.snapshot();
            log_info(&format!(
                "Tick {}: wave {}, {} heroes, {} monsters, {} kills",
                tick,
                snapshot.hud.wave,
                snapshot.heroes.len(),
                snapshot.monsters.len(),
                snapshot.hud.kills
            ));
        }

        if sim.status().defeat {
            log_info(&format!("Defeat at tick {}", tick));
            break;
        }
    }

    let snapshot = sim.snapshot();
    println!(
        "Simulation complete: wave {}, kills {}, defeat: {}",
        snapshot.hud.wave, snapshot.hud.kills, snapshot.hud.defeat
    );

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(err) => slice_simulation::log_error(&format!("Snapshot serialization failed: {}", err)),
    }
}
