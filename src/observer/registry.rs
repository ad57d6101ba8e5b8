//! Fight observers
//!
//! Observers are notified synchronously, in subscription order, once per
//! finished fight. Identity is the `Rc` allocation, not structural equality.
//! A failing observer is logged and skipped; the rest still run.

use std::rc::Rc;

use crate::character::Character;
use crate::combat::result::{FightResult, Side};
use crate::core::Result;

/// A finished fight with access to both combatants
pub struct FinishedFight<'a> {
    result: &'a FightResult,
    player: &'a mut Character,
    ai: &'a mut Character,
}

impl<'a> FinishedFight<'a> {
    pub fn new(result: &'a FightResult, player: &'a mut Character, ai: &'a mut Character) -> Self {
        Self { result, player, ai }
    }

    pub fn result(&self) -> &FightResult {
        self.result
    }

    pub fn character(&self, side: Side) -> &Character {
        match side {
            Side::Player => &*self.player,
            Side::Ai => &*self.ai,
        }
    }

    pub fn winner(&self) -> Option<&Character> {
        self.result.winner().map(|side| self.character(side))
    }

    pub fn loser(&self) -> Option<&Character> {
        self.result.loser().map(|side| self.character(side))
    }

    pub fn winner_mut(&mut self) -> Option<&mut Character> {
        match self.result.winner()? {
            Side::Player => Some(&mut *self.player),
            Side::Ai => Some(&mut *self.ai),
        }
    }

    /// Mutable winner alongside the loser, for reward logic
    pub fn winner_and_loser(&mut self) -> Option<(&mut Character, &Character)> {
        match self.result.winner()? {
            Side::Player => Some((&mut *self.player, &*self.ai)),
            Side::Ai => Some((&mut *self.ai, &*self.player)),
        }
    }
}

/// Subscriber notified once per completed fight
pub trait FightObserver {
    fn on_fight_finished(&self, fight: &mut FinishedFight<'_>) -> Result<()>;

    /// Label used in logs
    fn name(&self) -> &str {
        "observer"
    }
}

/// Ordered, identity-deduplicated observer list
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Rc<dyn FightObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unless this exact observer is already subscribed
    pub fn subscribe(&mut self, observer: Rc<dyn FightObserver>) {
        if !self.contains(&observer) {
            self.observers.push(observer);
        }
    }

    /// Remove by identity; no-op if absent
    pub fn unsubscribe(&mut self, observer: &Rc<dyn FightObserver>) {
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
    }

    pub fn contains(&self, observer: &Rc<dyn FightObserver>) -> bool {
        self.observers.iter().any(|o| Rc::ptr_eq(o, observer))
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Notify every observer in order. Returns how many of them failed.
    pub fn notify(&self, fight: &mut FinishedFight<'_>) -> usize {
        let mut failures = 0;
        for observer in &self.observers {
            if let Err(e) = observer.on_fight_finished(fight) {
                failures += 1;
                tracing::warn!(observer = observer.name(), error = %e, "Observer failed");
            }
        }
        failures
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.observers.iter().map(|o| o.name()))
            .finish()
    }
}
