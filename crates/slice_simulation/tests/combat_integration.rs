//! Integration тесты combat + abilities
//!
//! Сценарии через публичный `Simulation` фасад: расставляем монстров,
//! подаём intents, проверяем snapshot после тиков.

use bevy::prelude::*;
use slice_simulation::*;

fn wave_one() -> MonsterStats {
    WaveDirector::monster_stats(1, false)
}

/// Entity героя по имени (roster мог сократиться)
fn hero_entity(sim: &mut Simulation, name: &str) -> Option<Entity> {
    let world = sim.world_mut();
    let mut query = world.query::<(Entity, &Hero)>();
    query.iter(world).find(|(_, hero)| hero.name == name).map(|(e, _)| e)
}

fn set_hero_position(sim: &mut Simulation, name: &str, at: Vec2) {
    let entity = hero_entity(sim, name).expect("hero exists");
    sim.world_mut().entity_mut(entity).insert(Position(at));
}

fn kill_hero(sim: &mut Simulation, name: &str) {
    let entity = hero_entity(sim, name).expect("hero exists");
    sim.world_mut().entity_mut(entity).insert(Health { current: 0, max: 1 });
}

fn hero_view<'a>(snapshot: &'a SimSnapshot, name: &str) -> &'a slice_simulation::snapshot::HeroView {
    snapshot.heroes.iter().find(|h| h.name == name).expect("hero in snapshot")
}

#[test]
fn test_tank_hits_adjacent_monster_once() {
    let mut sim = Simulation::default();
    // dist до Tank = 30, до Rogue/Mage > 90
    spawn_monster_at(sim.world_mut(), Vec2::new(130.0, 260.0), wave_one());

    sim.tick();
    let snapshot = sim.snapshot();

    assert_eq!(snapshot.monsters[0].hp, 44);
    // Монстр (range 44) в ответ бьёт Tank
    assert_eq!(hero_view(&snapshot, "Tank").hp, 236);

    let tank = hero_entity(&mut sim, "Tank").expect("tank alive");
    let remaining = sim
        .world()
        .get::<Combatant>(tank)
        .map(|c| c.attack_timer.remaining())
        .unwrap_or_default();
    assert!((remaining - 1.0 / 1.2).abs() < 1e-5, "remaining = {}", remaining);
}

#[test]
fn test_stun_consumes_cooldown_without_targets() {
    let mut sim = Simulation::default();
    sim.push_intent(Intent::UseAbility);
    sim.tick();

    let snapshot = sim.snapshot();
    assert_eq!(snapshot.hud.selected_ability, Some(Ability::Stun));
    assert!((snapshot.hud.selected_cooldown - 3.5).abs() < 1e-5);
    assert!(snapshot.events.contains(&FrameEvent::AbilityUsed {
        hero: "Tank",
        ability: Ability::Stun
    }));
    assert!(!snapshot.rings.is_empty(), "stun pulse ring");
}

#[test]
fn test_stun_freezes_monster_in_radius() {
    let mut sim = Simulation::default();
    let stats = MonsterStats {
        max_hp: 2000,
        ..wave_one()
    };
    // dist до Tank = 80 (в радиусе stun), до всех героев > range 44
    spawn_monster_at(sim.world_mut(), Vec2::new(240.0, 260.0), stats);

    sim.push_intent(Intent::UseAbility);
    sim.tick();
    let stunned_at = sim.snapshot().monsters[0].position;
    assert!(sim.snapshot().monsters[0].stunned);

    sim.run_ticks(80);
    let snapshot = sim.snapshot();
    assert!(snapshot.monsters[0].stunned);
    assert_eq!(snapshot.monsters[0].position, stunned_at);
    assert!(snapshot.heroes.iter().all(|h| h.hp == h.max_hp));

    sim.run_ticks(20);
    let snapshot = sim.snapshot();
    assert!(!snapshot.monsters[0].stunned);
    assert_ne!(snapshot.monsters[0].position, stunned_at);
}

#[test]
fn test_fireball_without_target_keeps_cooldown() {
    let mut sim = Simulation::default();
    // Первый монстр волны появится только в Waves, после Abilities
    sim.push_intent(Intent::SelectHero(2));
    sim.push_intent(Intent::UseAbility);
    sim.tick();

    let snapshot = sim.snapshot();
    assert_eq!(snapshot.hud.selected_ability, Some(Ability::Fireball));
    assert_eq!(snapshot.hud.selected_cooldown, 0.0);
    assert!(snapshot.projectiles.is_empty());
    assert!(!snapshot.events.iter().any(|e| matches!(e, FrameEvent::AbilityUsed { .. })));
}

#[test]
fn test_fireball_zero_length_aim_is_noop() {
    let mut sim = Simulation::default();
    // Ровно в точке Mage
    spawn_monster_at(sim.world_mut(), Vec2::new(220.0, 200.0), wave_one());

    sim.push_intent(Intent::SelectHero(2));
    sim.push_intent(Intent::UseAbility);
    sim.tick();

    let snapshot = sim.snapshot();
    assert!(snapshot.projectiles.is_empty());
    assert_eq!(snapshot.hud.selected_cooldown, 0.0);
}

#[test]
fn test_fireball_hits_nearest_monster() {
    let mut sim = Simulation::default();
    spawn_monster_at(sim.world_mut(), Vec2::new(400.0, 200.0), wave_one());

    sim.push_intent(Intent::SelectHero(2));
    sim.push_intent(Intent::UseAbility);
    sim.tick();

    let snapshot = sim.snapshot();
    assert_eq!(snapshot.projectiles.len(), 1);
    assert!((snapshot.hud.selected_cooldown - 2.8).abs() < 1e-5);

    let mut hit_tick = None;
    for tick in 2..=40 {
        sim.tick();
        let snapshot = sim.snapshot();
        if snapshot.monsters[0].hp < 50 {
            hit_tick = Some(tick);
            assert_eq!(snapshot.monsters[0].hp, 22);
            assert!(snapshot.projectiles.is_empty());
            assert!(snapshot.hud.flash_alpha > 0.0, "explosion flash");
            assert!(!snapshot.rings.is_empty(), "explosion ring");
            break;
        }
    }
    assert!(hit_tick.is_some(), "fireball should connect within 40 ticks");
}

#[test]
fn test_dash_clamped_to_hero_bounds() {
    let mut sim = Simulation::default();
    set_hero_position(&mut sim, "Rogue", Vec2::new(850.0, 320.0));

    sim.push_intent(Intent::SelectHero(1));
    sim.push_intent(Intent::Move(Vec2::new(1.0, 0.0)));
    sim.push_intent(Intent::UseAbility);
    sim.tick();

    let snapshot = sim.snapshot();
    let rogue = hero_view(&snapshot, "Rogue");
    assert_eq!(rogue.position, [860.0, 320.0]);
    assert!((rogue.ability_cooldown - 2.0).abs() < 1e-5);
    assert!(!snapshot.particles.is_empty(), "dash trail");
}

#[test]
fn test_dash_defaults_to_facing_right() {
    let mut sim = Simulation::default();
    sim.push_intent(Intent::SelectHero(1));
    sim.push_intent(Intent::UseAbility);
    sim.tick();

    let snapshot = sim.snapshot();
    assert_eq!(hero_view(&snapshot, "Rogue").position, [330.0, 320.0]);
}

#[test]
fn test_movement_clamped_and_normalized() {
    let mut sim = Simulation::default();
    sim.push_intent(Intent::Move(Vec2::new(3.0, 4.0)));
    sim.tick();

    let [x, y] = hero_view(&sim.snapshot(), "Tank").position;
    // |(0.6, 0.8)| * 2.2
    assert!((x - (160.0 + 0.6 * 2.2)).abs() < 1e-4);
    assert!((y - (260.0 + 0.8 * 2.2)).abs() < 1e-4);

    sim.push_intent(Intent::Move(Vec2::new(-1.0, 0.0)));
    sim.run_ticks(200);
    assert_eq!(hero_view(&sim.snapshot(), "Tank").position[0], 40.0);
}

#[test]
fn test_selection_clamped_when_roster_shrinks() {
    let mut sim = Simulation::default();
    sim.push_intent(Intent::SelectHero(2));
    sim.tick();
    assert_eq!(sim.snapshot().hud.selected_index, Some(2));

    kill_hero(&mut sim, "Mage");
    sim.tick();

    let snapshot = sim.snapshot();
    assert_eq!(snapshot.heroes.len(), 2);
    assert_eq!(snapshot.hud.selected_index, Some(1));
    assert_eq!(snapshot.selected_hero().map(|h| h.name), Some("Rogue"));
    assert!(snapshot.events.contains(&FrameEvent::HeroDied { hero: "Mage" }));
    assert!(!snapshot.hud.defeat);
}

#[test]
fn test_empty_roster_reports_defeat_without_panic() {
    let mut sim = Simulation::default();
    for name in ["Tank", "Rogue", "Mage"] {
        kill_hero(&mut sim, name);
    }
    sim.tick();

    let snapshot = sim.snapshot();
    assert!(snapshot.heroes.is_empty());
    assert!(snapshot.hud.defeat);
    assert_eq!(snapshot.hud.selected_index, None);
    assert_eq!(snapshot.hud.selected_ability, None);
    assert!(snapshot.events.contains(&FrameEvent::Defeat));

    // Любые intents после defeat безопасны, тики продолжаются
    sim.push_intent(Intent::SelectHero(5));
    sim.push_intent(Intent::Move(Vec2::new(1.0, 1.0)));
    sim.push_intent(Intent::UseAbility);
    sim.run_ticks(60);

    let snapshot = sim.snapshot();
    assert!(snapshot.hud.defeat);
    assert_eq!(snapshot.hud.tick, 61);
    assert_eq!(snapshot.hud.selected_index, None);
    // Defeat объявляется один раз
    assert!(!snapshot.events.contains(&FrameEvent::Defeat));
}

#[test]
fn test_pause_freezes_world_but_accepts_selection() {
    let mut sim = Simulation::default();
    sim.run_ticks(40);
    let before = sim.snapshot();

    sim.push_intent(Intent::TogglePause);
    sim.tick();
    let paused = sim.snapshot();
    assert!(paused.hud.paused);
    assert_eq!(paused.monsters, before.monsters);

    sim.push_intent(Intent::SelectHero(2));
    sim.push_intent(Intent::Move(Vec2::new(1.0, 0.0)));
    sim.push_intent(Intent::UseAbility);
    sim.run_ticks(30);

    let frozen = sim.snapshot();
    assert_eq!(frozen.hud.selected_index, Some(2));
    assert_eq!(frozen.monsters, paused.monsters);
    assert_eq!(frozen.hud.spawns_remaining, paused.hud.spawns_remaining);
    for (a, b) in frozen.heroes.iter().zip(paused.heroes.iter()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.hp, b.hp);
    }

    // UseAbility на паузе отброшен - после resume абилка не срабатывает
    sim.push_intent(Intent::TogglePause);
    sim.tick();
    let resumed = sim.snapshot();
    assert!(!resumed.hud.paused);
    assert_eq!(resumed.hud.selected_cooldown, 0.0);
    assert!(!resumed.events.iter().any(|e| matches!(e, FrameEvent::AbilityUsed { .. })));
}

#[test]
fn test_ability_queued_before_pause_is_dropped() {
    let mut sim = Simulation::default();
    sim.push_intent(Intent::UseAbility);
    sim.push_intent(Intent::TogglePause);
    sim.run_ticks(10);
    assert!(sim.snapshot().hud.paused);

    sim.push_intent(Intent::TogglePause);
    sim.tick();

    let resumed = sim.snapshot();
    assert!(!resumed.hud.paused);
    assert_eq!(resumed.hud.selected_cooldown, 0.0);
    assert!(!resumed.events.iter().any(|e| matches!(e, FrameEvent::AbilityUsed { .. })));
}

#[test]
fn test_health_invariants_long_run() {
    let mut sim = Simulation::new(SimConfig::with_seed(7));

    for tick in 0..3000u32 {
        if tick % 200 == 50 {
            sim.push_intent(Intent::SelectHero((tick / 200) as usize % 3));
            sim.push_intent(Intent::UseAbility);
        }
        sim.tick();

        let snapshot = sim.snapshot();
        // Cleanup в конце тика: мёртвых в snapshot нет
        for hero in &snapshot.heroes {
            assert!(hero.hp > 0 && hero.hp <= hero.max_hp, "tick {}: {:?}", tick, hero);
        }
        for monster in &snapshot.monsters {
            assert!(monster.hp > 0 && monster.hp <= monster.max_hp, "tick {}: {:?}", tick, monster);
        }
        if let Some(index) = snapshot.hud.selected_index {
            assert!(index < snapshot.heroes.len());
        }
    }

    let snapshot = sim.snapshot();
    assert!(snapshot.hud.kills > 0 || snapshot.hud.defeat);
}
