//! Duel loop
//!
//! The player (initiator) always strikes first in a round. A responder that
//! drops to zero never counter-attacks, so both sides can never fall in the
//! same round.

use std::rc::Rc;

use crate::character::Character;
use crate::combat::result::{FightOutcome, FightResult, FightTally, Side};
use crate::core::config::{CombatConfig, GameConfig};
use crate::core::{Dice, Result};
use crate::observer::{FightObserver, FinishedFight, ObserverRegistry};

/// Runs duels and notifies observers of the outcome
#[derive(Debug)]
pub struct CombatEngine {
    config: CombatConfig,
    dice: Dice,
    observers: ObserverRegistry,
}

impl CombatEngine {
    /// Engine with dice seeded from `config.combat.seed`; rejects an invalid config
    pub fn new(config: &GameConfig, observers: ObserverRegistry) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: config.combat.clone(),
            dice: Dice::seeded(config.combat.seed),
            observers,
        })
    }

    pub fn subscribe(&mut self, observer: Rc<dyn FightObserver>) {
        self.observers.subscribe(observer);
    }

    pub fn unsubscribe(&mut self, observer: &Rc<dyn FightObserver>) {
        self.observers.unsubscribe(observer);
    }

    pub fn observers(&self) -> &ObserverRegistry {
        &self.observers
    }

    /// Fight until one side drops or the round limit is hit
    ///
    /// The player is always rested first. The responder is rested only if it
    /// has never been rested, so a wounded responder can be sent into a
    /// second fight as-is.
    pub fn play(&mut self, player: &mut Character, ai: &mut Character) -> FightResult {
        player.rest();
        if !ai.is_rested() {
            ai.rest();
        }

        let mut tally = FightTally::new();
        let outcome = loop {
            tally.add_round();

            let damage = player.attack(&mut self.dice);
            if damage == 0 {
                tally.add_exhausted_turn();
            }
            let dealt = ai.receive_attack(damage, &mut self.dice);
            tally.add_damage_dealt(dealt);

            if !ai.is_alive() {
                break FightOutcome::victory(Side::Player);
            }

            let counter = ai.attack(&mut self.dice);
            let received = player.receive_attack(counter, &mut self.dice);
            tally.add_damage_received(received);

            if !player.is_alive() {
                break FightOutcome::victory(Side::Ai);
            }

            tracing::debug!(
                round = tally.rounds(),
                dealt,
                received,
                player_health = player.current_health(),
                ai_health = ai.current_health(),
                "Round complete"
            );

            if tally.rounds() >= self.config.max_rounds {
                tracing::warn!(
                    rounds = tally.rounds(),
                    player = player.name(),
                    ai = ai.name(),
                    "Round limit reached, fight is a draw"
                );
                break FightOutcome::Draw;
            }
        };

        let result = tally.finish(outcome, player.current_health(), ai.current_health());
        tracing::info!(
            player = player.name(),
            ai = ai.name(),
            rounds = result.rounds(),
            winner = ?result.winner(),
            "Fight finished"
        );

        let mut fight = FinishedFight::new(&result, player, ai);
        self.observers.notify(&mut fight);

        result
    }
}
