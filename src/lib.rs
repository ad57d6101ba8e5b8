//! Duel Arena - deterministic one-on-one turn-based combat

pub mod character;
pub mod combat;
pub mod core;
pub mod observer;
