//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: общие для combatant'ов (Position, Health, Combatant, SpawnOrder)
//! - hero: player-controlled (Hero, Ability, HERO_ROSTER, SelectedHero)
//! - monster: AI (Monster, MonsterStats)
//!
//! Hero/Monster - не наследование, а tag-компонент поверх общих данных.

pub mod actor;
pub mod hero;
pub mod monster;

// Re-exports для удобного импорта
pub use actor::*;
pub use hero::*;
pub use monster::*;
