//! Shared primitives - используются всеми доменами симуляции
//!
//! - countdown: decaying timer (attack cooldown, ability cooldown, stun)
//! - math: arena bounds, nearest-target поиск, guarded normalize

pub mod countdown;
pub mod math;

pub use countdown::*;
pub use math::*;
