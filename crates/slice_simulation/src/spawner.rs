//! Spawner - SystemParam для всех спавнов внутри тика
//!
//! Собирает вместе Commands, SpawnCounter, RNG и ScreenFx, чтобы
//! каждая новая entity гарантированно получала SpawnOrder.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use crate::components::{SpawnCounter, SpawnOrder};
use crate::effects::ScreenFx;
use crate::DeterministicRng;

#[derive(SystemParam)]
pub struct Spawner<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub counter: ResMut<'w, SpawnCounter>,
    pub rng: ResMut<'w, DeterministicRng>,
    pub fx: ResMut<'w, ScreenFx>,
}

impl Spawner<'_, '_> {
    pub fn next_order(&mut self) -> SpawnOrder {
        self.counter.next()
    }

    /// Спавн bundle + свежий SpawnOrder
    pub fn spawn_ordered<B: Bundle>(&mut self, bundle: B) -> Entity {
        let order = self.counter.next();
        self.commands.spawn((bundle, order)).id()
    }
}
