//! Attack strategies
//!
//! A character carries exactly one `AttackType`. Several tags collapse into a
//! `MultiAttack` that cycles through its components in order.

use std::fmt;
use std::str::FromStr;

use crate::combat::constants::{
    BOW_CRIT_MULTIPLIER, BOW_CRIT_THRESHOLD, FIREBOLT_DICE, FIREBOLT_DIE, SWORD_DIE,
};
use crate::core::{Dice, DuelError};

/// Declarative attack selection used by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackTag {
    Bow,
    FireBolt,
    Sword,
}

impl AttackTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bow => "BOW",
            Self::FireBolt => "FIREBOLT",
            Self::Sword => "SWORD",
        }
    }

    /// Tag to strategy mapping
    pub fn resolve(self) -> Box<dyn AttackType> {
        match self {
            Self::Bow => Box::new(Bow),
            Self::FireBolt => Box::new(FireBolt),
            Self::Sword => Box::new(TwoHandedSword),
        }
    }
}

impl fmt::Display for AttackTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttackTag {
    type Err = DuelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BOW" => Ok(Self::Bow),
            "FIREBOLT" => Ok(Self::FireBolt),
            "SWORD" => Ok(Self::Sword),
            _ => Err(DuelError::UnknownAttackType(s.to_string())),
        }
    }
}

/// Offensive behavior attached to a character
pub trait AttackType: fmt::Debug {
    /// Raw damage for one attack
    fn attack(&mut self, base_damage: u32, dice: &mut Dice) -> u32;

    /// Tags this strategy was assembled from, in order
    fn tags(&self) -> Vec<AttackTag> {
        Vec::new()
    }
}

/// Base damage plus a d12
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoHandedSword;

impl AttackType for TwoHandedSword {
    fn attack(&mut self, base_damage: u32, dice: &mut Dice) -> u32 {
        base_damage.saturating_add(dice.roll(SWORD_DIE))
    }

    fn tags(&self) -> Vec<AttackTag> {
        vec![AttackTag::Sword]
    }
}

/// Base damage, tripled on a critical percentile roll
#[derive(Debug, Clone, Copy, Default)]
pub struct Bow;

impl AttackType for Bow {
    fn attack(&mut self, base_damage: u32, dice: &mut Dice) -> u32 {
        if dice.percent() > BOW_CRIT_THRESHOLD {
            base_damage.saturating_mul(BOW_CRIT_MULTIPLIER)
        } else {
            base_damage
        }
    }

    fn tags(&self) -> Vec<AttackTag> {
        vec![AttackTag::Bow]
    }
}

/// 3d10 of magic damage; weapon skill does not matter
#[derive(Debug, Clone, Copy, Default)]
pub struct FireBolt;

impl AttackType for FireBolt {
    fn attack(&mut self, _base_damage: u32, dice: &mut Dice) -> u32 {
        dice.roll_many(FIREBOLT_DICE, FIREBOLT_DIE)
    }

    fn tags(&self) -> Vec<AttackTag> {
        vec![AttackTag::FireBolt]
    }
}

/// Composite attack: one component per turn, round-robin in insertion order
///
/// The cursor survives across turns and fights.
#[derive(Debug)]
pub struct MultiAttack {
    components: Vec<Box<dyn AttackType>>,
    next: usize,
}

impl MultiAttack {
    pub fn new(components: Vec<Box<dyn AttackType>>) -> Self {
        Self {
            components,
            next: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl AttackType for MultiAttack {
    fn attack(&mut self, base_damage: u32, dice: &mut Dice) -> u32 {
        if self.components.is_empty() {
            return 0;
        }
        let index = self.next;
        self.next = (self.next + 1) % self.components.len();
        self.components[index].attack(base_damage, dice)
    }

    fn tags(&self) -> Vec<AttackTag> {
        self.components.iter().flat_map(|c| c.tags()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always deals the same amount, without touching the dice
    #[derive(Debug)]
    struct Fixed(u32);

    impl AttackType for Fixed {
        fn attack(&mut self, _base_damage: u32, _dice: &mut Dice) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_sword_adds_d12() {
        let mut dice = Dice::seeded(11);
        let mut replay = dice.clone();

        let damage = TwoHandedSword.attack(15, &mut dice);
        assert_eq!(damage, 15 + replay.roll(SWORD_DIE));
        assert!((16..=27).contains(&damage));
    }

    #[test]
    fn test_sword_saturates_huge_base_damage() {
        let mut dice = Dice::seeded(11);
        assert_eq!(TwoHandedSword.attack(u32::MAX, &mut dice), u32::MAX);
    }

    #[test]
    fn test_bow_critical_saturates_huge_base_damage() {
        let mut dice = Dice::seeded(5);
        let mut saw_crit = false;
        for _ in 0..200 {
            let mut replay = dice.clone();
            let damage = Bow.attack(2_000_000_000, &mut dice);
            if replay.percent() > BOW_CRIT_THRESHOLD {
                assert_eq!(damage, u32::MAX);
                saw_crit = true;
            } else {
                assert_eq!(damage, 2_000_000_000);
            }
        }
        assert!(saw_crit);
    }

    #[test]
    fn test_bow_is_base_or_triple() {
        let mut dice = Dice::seeded(5);
        let mut saw_crit = false;
        let mut saw_plain = false;
        for _ in 0..200 {
            let mut replay = dice.clone();
            let damage = Bow.attack(10, &mut dice);
            if replay.percent() > BOW_CRIT_THRESHOLD {
                assert_eq!(damage, 30);
                saw_crit = true;
            } else {
                assert_eq!(damage, 10);
                saw_plain = true;
            }
        }
        assert!(saw_crit && saw_plain);
    }

    #[test]
    fn test_firebolt_ignores_base_damage() {
        let mut dice = Dice::seeded(8);
        let mut replay = dice.clone();

        let damage = FireBolt.attack(1000, &mut dice);
        assert_eq!(damage, replay.roll_many(FIREBOLT_DICE, FIREBOLT_DIE));
        assert!((3..=30).contains(&damage));
    }

    #[test]
    fn test_multi_attack_round_robin() {
        let mut dice = Dice::seeded(1);
        let mut multi = MultiAttack::new(vec![Box::new(Fixed(1)), Box::new(Fixed(2)), Box::new(Fixed(3))]);

        let hits: Vec<u32> = (0..7).map(|_| multi.attack(0, &mut dice)).collect();
        assert_eq!(hits, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_multi_attack_preserves_tag_order() {
        let multi = MultiAttack::new(vec![AttackTag::Bow.resolve(), AttackTag::FireBolt.resolve()]);
        assert_eq!(multi.tags(), vec![AttackTag::Bow, AttackTag::FireBolt]);
        assert_eq!(multi.len(), 2);
    }

    #[test]
    fn test_empty_multi_attack_deals_nothing() {
        let mut dice = Dice::seeded(1);
        let mut multi = MultiAttack::new(Vec::new());
        assert_eq!(multi.attack(10, &mut dice), 0);
    }

    #[test]
    fn test_tag_parsing() {
        assert_eq!("bow".parse::<AttackTag>().unwrap(), AttackTag::Bow);
        assert_eq!("FireBolt".parse::<AttackTag>().unwrap(), AttackTag::FireBolt);
        assert_eq!("SWORD".parse::<AttackTag>().unwrap(), AttackTag::Sword);
        assert!(matches!(
            "axe".parse::<AttackTag>(),
            Err(DuelError::UnknownAttackType(tag)) if tag == "axe"
        ));
    }
}
