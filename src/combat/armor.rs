//! Armor strategies
//!
//! Armor turns incoming raw damage into the damage actually applied to
//! health. Applied damage is always within `0..=raw`.

use std::fmt;
use std::str::FromStr;

use crate::combat::constants::{
    ICE_BLOCK_DICE, ICE_BLOCK_DIE, LEATHER_ABSORB_PERCENT, SHIELD_BLOCK_THRESHOLD,
};
use crate::core::{Dice, DuelError};

/// Declarative armor selection used by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArmorTag {
    IceBlock,
    Shield,
    LeatherArmor,
}

impl ArmorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IceBlock => "ICE_BLOCK",
            Self::Shield => "SHIELD",
            Self::LeatherArmor => "LEATHER_ARMOR",
        }
    }

    /// Tag to strategy mapping
    pub fn resolve(self) -> Box<dyn ArmorType> {
        match self {
            Self::IceBlock => Box::new(IceBlock),
            Self::Shield => Box::new(Shield),
            Self::LeatherArmor => Box::new(LeatherArmor),
        }
    }
}

impl fmt::Display for ArmorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArmorTag {
    type Err = DuelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ICE_BLOCK" => Ok(Self::IceBlock),
            "SHIELD" => Ok(Self::Shield),
            "LEATHER_ARMOR" => Ok(Self::LeatherArmor),
            _ => Err(DuelError::UnknownArmorType(s.to_string())),
        }
    }
}

/// Defensive behavior attached to a character
pub trait ArmorType: fmt::Debug {
    /// Damage that gets through, never more than `raw_damage`
    fn mitigate(&mut self, raw_damage: u32, dice: &mut Dice) -> u32;

    /// Tag this strategy was built from, if any
    fn tag(&self) -> Option<ArmorTag> {
        None
    }
}

/// Blocks the whole hit on a high percentile roll, otherwise nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Shield;

impl ArmorType for Shield {
    fn mitigate(&mut self, raw_damage: u32, dice: &mut Dice) -> u32 {
        if dice.percent() > SHIELD_BLOCK_THRESHOLD {
            0
        } else {
            raw_damage
        }
    }

    fn tag(&self) -> Option<ArmorTag> {
        Some(ArmorTag::Shield)
    }
}

/// Absorbs a flat quarter of every hit (rounded down)
#[derive(Debug, Clone, Copy, Default)]
pub struct LeatherArmor;

impl ArmorType for LeatherArmor {
    fn mitigate(&mut self, raw_damage: u32, _dice: &mut Dice) -> u32 {
        raw_damage - raw_damage * LEATHER_ABSORB_PERCENT / 100
    }

    fn tag(&self) -> Option<ArmorTag> {
        Some(ArmorTag::LeatherArmor)
    }
}

/// Absorbs 2d8 per hit
#[derive(Debug, Clone, Copy, Default)]
pub struct IceBlock;

impl ArmorType for IceBlock {
    fn mitigate(&mut self, raw_damage: u32, dice: &mut Dice) -> u32 {
        let absorbed = dice.roll_many(ICE_BLOCK_DICE, ICE_BLOCK_DIE);
        raw_damage.saturating_sub(absorbed)
    }

    fn tag(&self) -> Option<ArmorTag> {
        Some(ArmorTag::IceBlock)
    }
}
