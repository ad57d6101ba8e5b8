//! Strategy constants - all dice and thresholds in one place

// Attack strategies
pub const SWORD_DIE: u32 = 12;
pub const BOW_CRIT_THRESHOLD: u32 = 70;
pub const BOW_CRIT_MULTIPLIER: u32 = 3;
pub const FIREBOLT_DICE: u32 = 3;
pub const FIREBOLT_DIE: u32 = 10;

// Armor strategies
pub const SHIELD_BLOCK_THRESHOLD: u32 = 80;
pub const LEATHER_ABSORB_PERCENT: u32 = 25;
pub const ICE_BLOCK_DICE: u32 = 2;
pub const ICE_BLOCK_DIE: u32 = 8;
