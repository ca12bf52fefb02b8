//! SimSnapshot - read-only срез мира после тика (для renderer/UI/audio)
//!
//! Плоские serde-структуры без Entity/Vec2: renderer не зависит от bevy.
//! Все списки отсортированы по SpawnOrder.

use bevy::prelude::*;
use serde::Serialize;
use crate::combat::Projectile;
use crate::components::{in_spawn_order, Ability, Health, Hero, Monster, Position, SelectedHero, SpawnOrder};
use crate::effects::{Particle, Ring, ScreenFx};
use crate::events::{FrameEvent, FrameEvents};
use crate::waves::{WaveDirector, WavePhase};
use crate::SimStatus;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub name: &'static str,
    pub color: [u8; 3],
    pub position: [f32; 2],
    pub hp: u32,
    pub max_hp: u32,
    pub hp_ratio: f32,
    pub ability: Ability,
    pub ability_cooldown: f32,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonsterView {
    pub position: [f32; 2],
    pub hp: u32,
    pub max_hp: u32,
    pub hp_ratio: f32,
    pub stunned: bool,
    pub mini_boss: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectileView {
    pub position: [f32; 2],
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleView {
    pub position: [f32; 2],
    pub size: f32,
    pub color: [u8; 3],
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingView {
    pub position: [f32; 2],
    pub radius: f32,
    pub thickness: f32,
    /// RGBA
    pub color: [u8; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PhaseView {
    Active,
    Intermission,
}

/// Скаляры для HUD
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudView {
    pub tick: u64,
    pub wave: u32,
    pub phase: PhaseView,
    pub intermission_remaining: f32,
    pub spawns_remaining: u32,
    /// None - roster пуст
    pub selected_index: Option<usize>,
    pub selected_ability: Option<Ability>,
    pub selected_cooldown: f32,
    pub paused: bool,
    pub defeat: bool,
    pub flash_alpha: f32,
    pub shake_offset: [f32; 2],
    pub kills: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimSnapshot {
    pub heroes: Vec<HeroView>,
    pub monsters: Vec<MonsterView>,
    pub projectiles: Vec<ProjectileView>,
    pub particles: Vec<ParticleView>,
    pub rings: Vec<RingView>,
    pub hud: HudView,
    pub events: Vec<FrameEvent>,
}

impl SimSnapshot {
    pub fn selected_hero(&self) -> Option<&HeroView> {
        self.heroes.iter().find(|hero| hero.selected)
    }

    pub fn living_monsters(&self) -> usize {
        self.monsters.iter().filter(|m| m.hp > 0).count()
    }
}

fn xy(position: &Position) -> [f32; 2] {
    [position.0.x, position.0.y]
}

/// Собирает snapshot из мира (между тиками)
pub fn build_snapshot(world: &mut World) -> SimSnapshot {
    let selected_raw = world.resource::<SelectedHero>().index;

    let mut hero_query = world.query::<(&SpawnOrder, &Position, &Health, &Hero)>();
    let roster = in_spawn_order(
        hero_query
            .iter(world)
            .map(|(order, pos, health, hero)| (*order, (xy(pos), *health, hero.clone())))
            .collect(),
    );
    let selected_index = SelectedHero { index: selected_raw }.resolve(roster.len());

    let heroes: Vec<HeroView> = roster
        .into_iter()
        .enumerate()
        .map(|(i, (position, health, hero))| HeroView {
            name: hero.name,
            color: hero.color,
            position,
            hp: health.current,
            max_hp: health.max,
            hp_ratio: health.ratio(),
            ability: hero.ability,
            ability_cooldown: hero.ability_cooldown_remaining(),
            selected: Some(i) == selected_index,
        })
        .collect();

    let mut monster_query = world.query::<(&SpawnOrder, &Position, &Health, &Monster)>();
    let monsters = in_spawn_order(
        monster_query
            .iter(world)
            .map(|(order, pos, health, monster)| {
                (
                    *order,
                    MonsterView {
                        position: xy(pos),
                        hp: health.current,
                        max_hp: health.max,
                        hp_ratio: health.ratio(),
                        stunned: monster.is_stunned(),
                        mini_boss: monster.mini_boss,
                    },
                )
            })
            .collect(),
    );

    let mut projectile_query = world.query::<(&SpawnOrder, &Position, &Projectile)>();
    let projectiles = in_spawn_order(
        projectile_query
            .iter(world)
            .map(|(order, pos, projectile)| {
                (
                    *order,
                    ProjectileView {
                        position: xy(pos),
                        radius: projectile.radius,
                    },
                )
            })
            .collect(),
    );

    let mut particle_query = world.query::<(&SpawnOrder, &Position, &Particle)>();
    let particles = in_spawn_order(
        particle_query
            .iter(world)
            .map(|(order, pos, particle)| {
                (
                    *order,
                    ParticleView {
                        position: xy(pos),
                        size: particle.size,
                        color: particle.color,
                        alpha: particle.alpha(),
                    },
                )
            })
            .collect(),
    );

    let mut ring_query = world.query::<(&SpawnOrder, &Position, &Ring)>();
    let rings = in_spawn_order(
        ring_query
            .iter(world)
            .map(|(order, pos, ring)| {
                let [r, g, b] = ring.color;
                (
                    *order,
                    RingView {
                        position: xy(pos),
                        radius: ring.radius,
                        thickness: ring.thickness,
                        color: [r, g, b, ring.alpha()],
                    },
                )
            })
            .collect(),
    );

    let selected = selected_index.and_then(|i| heroes.get(i));
    let director = world.resource::<WaveDirector>();
    let status = world.resource::<SimStatus>();
    let fx = world.resource::<ScreenFx>();

    let hud = HudView {
        tick: status.tick,
        wave: director.wave(),
        phase: match director.phase() {
            WavePhase::Active => PhaseView::Active,
            WavePhase::Intermission { .. } => PhaseView::Intermission,
        },
        intermission_remaining: director.intermission_remaining(),
        spawns_remaining: director.spawns_remaining(),
        selected_index,
        selected_ability: selected.map(|hero| hero.ability),
        selected_cooldown: selected.map_or(0.0, |hero| hero.ability_cooldown),
        paused: status.paused,
        defeat: status.defeat,
        flash_alpha: fx.flash_alpha(),
        shake_offset: [fx.shake_offset.x, fx.shake_offset.y],
        kills: status.kills,
    };

    let events = world.resource::<FrameEvents>().to_vec();

    SimSnapshot {
        heroes,
        monsters,
        projectiles,
        particles,
        rings,
        hud,
        events,
    }
}
