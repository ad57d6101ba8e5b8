//! Fight bookkeeping
//!
//! `FightTally` accumulates while the loop runs and is consumed exactly once
//! into a `FightResult`, so the outcome cannot be written twice.

use serde::{Deserialize, Serialize};

/// Role of a character in a duel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The initiator, attacks first every round
    Player,
    /// The responder
    Ai,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Ai,
            Self::Ai => Self::Player,
        }
    }
}

/// How a fight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FightOutcome {
    Victory { winner: Side, loser: Side },
    /// Round limit reached with both sides standing
    Draw,
}

impl FightOutcome {
    pub fn victory(winner: Side) -> Self {
        Self::Victory {
            winner,
            loser: winner.opponent(),
        }
    }
}

/// Running totals for a fight in progress
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FightTally {
    rounds: u32,
    damage_dealt: u32,
    damage_received: u32,
    exhausted_turns: u32,
}

impl FightTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_round(&mut self) {
        self.rounds += 1;
    }

    pub fn add_damage_dealt(&mut self, damage: u32) {
        self.damage_dealt = self.damage_dealt.saturating_add(damage);
    }

    pub fn add_damage_received(&mut self, damage: u32) {
        self.damage_received = self.damage_received.saturating_add(damage);
    }

    pub fn add_exhausted_turn(&mut self) {
        self.exhausted_turns += 1;
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Close the tally
    pub fn finish(self, outcome: FightOutcome, player_health: i32, ai_health: i32) -> FightResult {
        FightResult {
            rounds: self.rounds,
            damage_dealt: self.damage_dealt,
            damage_received: self.damage_received,
            exhausted_turns: self.exhausted_turns,
            outcome,
            player_health,
            ai_health,
        }
    }
}

/// Summary of a completed fight, from the player's point of view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightResult {
    rounds: u32,
    damage_dealt: u32,
    damage_received: u32,
    exhausted_turns: u32,
    outcome: FightOutcome,
    player_health: i32,
    ai_health: i32,
}

impl FightResult {
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn damage_dealt(&self) -> u32 {
        self.damage_dealt
    }

    pub fn damage_received(&self) -> u32 {
        self.damage_received
    }

    pub fn exhausted_turns(&self) -> u32 {
        self.exhausted_turns
    }

    pub fn outcome(&self) -> FightOutcome {
        self.outcome
    }

    pub fn winner(&self) -> Option<Side> {
        match self.outcome {
            FightOutcome::Victory { winner, .. } => Some(winner),
            FightOutcome::Draw => None,
        }
    }

    pub fn loser(&self) -> Option<Side> {
        match self.outcome {
            FightOutcome::Victory { loser, .. } => Some(loser),
            FightOutcome::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == FightOutcome::Draw
    }

    /// Final health of the given side
    pub fn health(&self, side: Side) -> i32 {
        match side {
            Side::Player => self.player_health,
            Side::Ai => self.ai_health,
        }
    }
}
