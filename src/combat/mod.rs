pub mod armor;
pub mod attack;
pub mod constants;
pub mod engine;
pub mod result;

pub use armor::{ArmorTag, ArmorType, IceBlock, LeatherArmor, Shield};
pub use attack::{AttackTag, AttackType, Bow, FireBolt, MultiAttack, TwoHandedSword};
pub use engine::CombatEngine;
pub use result::{FightOutcome, FightResult, FightTally, Side};
