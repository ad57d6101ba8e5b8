//! Duel configuration with documented constants
//!
//! All tunable numbers live here. Every section has defaults, so a TOML file
//! only needs to name the values it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{DuelError, Result};

/// Top-level configuration for duels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub combat: CombatConfig,
    pub stamina: StaminaConfig,
    pub experience: ExperienceConfig,
}

/// Round loop settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Seed for the fight's dice
    pub seed: u64,

    /// Maximum number of rounds before a fight is declared a draw
    ///
    /// Neither attacks nor armor are guaranteed to make progress (an attack
    /// can roll 0, armor can absorb everything), so the loop needs a bound.
    pub max_rounds: u32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            max_rounds: 1000,
        }
    }
}

/// Stamina gate applied to every attack
///
/// Each attack costs `base_cost + d(cost_die)`. When stamina drops to zero
/// the attack is lost (an exhausted turn) and stamina refills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaminaConfig {
    pub max: u32,
    pub base_cost: u32,
    pub cost_die: u32,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            max: 100,
            base_cost: 25,
            cost_die: 20,
        }
    }
}

/// Experience award and level growth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceConfig {
    /// XP per level of the defeated opponent
    pub base_xp: u32,

    /// XP needed per current level to reach the next one
    pub xp_per_level: u32,

    /// Extra XP (percent) when beating a higher-level opponent
    pub level_bonus_percent: u32,

    /// XP lost (percent) when beating a lower-level opponent
    pub level_penalty_percent: u32,

    /// Growth of max health and base damage on level up (percent)
    pub growth_percent: u32,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            base_xp: 30,
            xp_per_level: 100,
            level_bonus_percent: 20,
            level_penalty_percent: 20,
            growth_percent: 15,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.combat.max_rounds == 0 {
            return Err(DuelError::InvalidConfig(
                "combat.max_rounds must be at least 1".into(),
            ));
        }

        if self.stamina.max == 0 {
            return Err(DuelError::InvalidConfig(
                "stamina.max must be positive".into(),
            ));
        }

        let StaminaConfig {
            max,
            base_cost,
            cost_die,
        } = self.stamina;
        if base_cost.checked_add(cost_die).is_none() {
            return Err(DuelError::InvalidConfig(format!(
                "stamina.base_cost ({base_cost}) plus stamina.cost_die ({cost_die}) overflows"
            )));
        }
        if base_cost >= max {
            return Err(DuelError::InvalidConfig(format!(
                "stamina.base_cost ({base_cost}) must be below stamina.max ({max})"
            )));
        }

        if self.experience.xp_per_level == 0 {
            return Err(DuelError::InvalidConfig(
                "experience.xp_per_level must be positive".into(),
            ));
        }

        if self.experience.level_penalty_percent > 100 {
            return Err(DuelError::InvalidConfig(format!(
                "experience.level_penalty_percent ({}) cannot exceed 100",
                self.experience.level_penalty_percent
            )));
        }

        Ok(())
    }
}
