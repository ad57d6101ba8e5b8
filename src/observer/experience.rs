//! Experience rewards for the winner of a fight

use crate::character::Character;
use crate::core::config::ExperienceConfig;
use crate::core::Result;
use crate::observer::registry::{FightObserver, FinishedFight};

/// XP formula and level thresholds
#[derive(Debug, Clone, Default)]
pub struct XpCalculator {
    config: ExperienceConfig,
}

impl XpCalculator {
    pub fn new(config: ExperienceConfig) -> Self {
        Self { config }
    }

    /// XP earned for beating an opponent of `loser_level`
    ///
    /// Scales with the loser's level. Beating someone stronger pays a bonus,
    /// beating someone weaker pays less. Never below 1.
    pub fn xp_earned(&self, winner_level: u32, loser_level: u32) -> u32 {
        let raw = self.config.base_xp.saturating_mul(loser_level);
        let earned = match winner_level.cmp(&loser_level) {
            std::cmp::Ordering::Equal => raw,
            std::cmp::Ordering::Less => {
                raw.saturating_add(raw.saturating_mul(self.config.level_bonus_percent) / 100)
            }
            std::cmp::Ordering::Greater => {
                raw - raw.saturating_mul(self.config.level_penalty_percent.min(100)) / 100
            }
        };
        earned.max(1)
    }

    /// XP total needed to leave `level`
    pub fn xp_for_next_level(&self, level: u32) -> u32 {
        self.config.xp_per_level.saturating_mul(level)
    }

    /// Award XP to the winner and level up when the threshold is crossed.
    /// Returns the XP earned.
    pub fn add_xp(&self, winner: &mut Character, loser_level: u32) -> u32 {
        let earned = self.xp_earned(winner.level(), loser_level);
        let total = winner.add_xp(earned);

        if total >= self.xp_for_next_level(winner.level()) {
            winner.level_up(&self.config);
            tracing::info!(
                character = winner.name(),
                level = winner.level(),
                "Level up"
            );
        }

        earned
    }
}

/// Awards experience to the winner of every decisive fight
#[derive(Debug, Clone, Default)]
pub struct ExperienceObserver {
    calculator: XpCalculator,
}

impl ExperienceObserver {
    pub fn new(calculator: XpCalculator) -> Self {
        Self { calculator }
    }
}

impl FightObserver for ExperienceObserver {
    fn on_fight_finished(&self, fight: &mut FinishedFight<'_>) -> Result<()> {
        let Some((winner, loser)) = fight.winner_and_loser() else {
            return Ok(());
        };

        let earned = self.calculator.add_xp(winner, loser.level());
        tracing::debug!(character = winner.name(), earned, total = winner.xp(), "XP awarded");
        Ok(())
    }

    fn name(&self) -> &str {
        "experience"
    }
}
