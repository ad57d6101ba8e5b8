//! Character aggregate: stats plus one attack and one armor strategy

use crate::combat::armor::{ArmorTag, ArmorType};
use crate::combat::attack::{AttackTag, AttackType};
use crate::core::config::{ExperienceConfig, StaminaConfig};
use crate::core::{Dice, DuelError, Result};

/// Attack resource. Running dry costs the attack and refills the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamina {
    max: u32,
    current: u32,
    base_cost: u32,
    cost_die: u32,
}

impl Stamina {
    pub fn new(config: StaminaConfig) -> Self {
        Self {
            max: config.max,
            current: config.max,
            base_cost: config.base_cost,
            cost_die: config.cost_die,
        }
    }

    /// A pool that never runs out
    pub fn unlimited() -> Self {
        Self {
            max: 1,
            current: 1,
            base_cost: 0,
            cost_die: 0,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn refill(&mut self) {
        self.current = self.max;
    }

    /// Pay for one attack. Returns false when the character is exhausted.
    pub fn spend(&mut self, dice: &mut Dice) -> bool {
        let cost = self.base_cost.saturating_add(dice.roll(self.cost_die));
        self.current = self.current.saturating_sub(cost);
        if self.current == 0 {
            self.refill();
            return false;
        }
        true
    }
}

impl Default for Stamina {
    fn default() -> Self {
        Self::new(StaminaConfig::default())
    }
}

/// A combatant
#[derive(Debug)]
pub struct Character {
    name: String,
    max_health: u32,
    current_health: i32,
    base_damage: u32,
    level: u32,
    xp: u32,
    stamina: Stamina,
    rested: bool,
    attack_type: Box<dyn AttackType>,
    armor_type: Box<dyn ArmorType>,
}

impl Character {
    /// Unrested character at level 1. Call `rest()` before it fights.
    pub fn new(
        name: impl Into<String>,
        max_health: u32,
        base_damage: u32,
        attack_type: Box<dyn AttackType>,
        armor_type: Box<dyn ArmorType>,
    ) -> Result<Self> {
        if max_health == 0 {
            return Err(DuelError::InvalidStat {
                field: "max_health",
                value: max_health,
            });
        }
        Ok(Self {
            name: name.into(),
            max_health,
            current_health: 0,
            base_damage,
            level: 1,
            xp: 0,
            stamina: Stamina::default(),
            rested: false,
            attack_type,
            armor_type,
        })
    }

    pub fn with_stamina(mut self, stamina: Stamina) -> Self {
        self.stamina = stamina;
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level.max(1);
        self
    }

    /// Restore full health and stamina
    pub fn rest(&mut self) {
        self.current_health = i32::try_from(self.max_health).unwrap_or(i32::MAX);
        self.stamina.refill();
        self.rested = true;
    }

    /// Raw damage for this turn; 0 means the character was exhausted
    pub fn attack(&mut self, dice: &mut Dice) -> u32 {
        if !self.stamina.spend(dice) {
            return 0;
        }
        self.attack_type.attack(self.base_damage, dice)
    }

    /// Apply an incoming hit through armor; returns the damage taken
    pub fn receive_attack(&mut self, raw_damage: u32, dice: &mut Dice) -> u32 {
        let applied = self.armor_type.mitigate(raw_damage, dice).min(raw_damage);
        self.current_health = self.current_health.saturating_sub_unsigned(applied);
        applied
    }

    /// Add experience, returning the new total
    pub fn add_xp(&mut self, amount: u32) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        self.xp
    }

    /// Gain a level; health and damage grow by the configured percentage
    pub fn level_up(&mut self, growth: &ExperienceConfig) {
        self.level += 1;
        self.max_health = grow(self.max_health, growth.growth_percent);
        self.base_damage = grow(self.base_damage, growth.growth_percent);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn current_health(&self) -> i32 {
        self.current_health
    }

    pub fn base_damage(&self) -> u32 {
        self.base_damage
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn stamina(&self) -> &Stamina {
        &self.stamina
    }

    pub fn is_rested(&self) -> bool {
        self.rested
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    pub fn attack_tags(&self) -> Vec<AttackTag> {
        self.attack_type.tags()
    }

    pub fn armor_tag(&self) -> Option<ArmorTag> {
        self.armor_type.tag()
    }
}

/// Percentage growth, always at least +1
fn grow(value: u32, percent: u32) -> u32 {
    let bonus = (value.saturating_mul(percent) / 100).max(1);
    value.saturating_add(bonus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::armor::{LeatherArmor, Shield};
    use crate::combat::attack::TwoHandedSword;

    #[derive(Debug)]
    struct Passthrough;

    impl ArmorType for Passthrough {
        fn mitigate(&mut self, raw_damage: u32, _dice: &mut Dice) -> u32 {
            raw_damage
        }
    }

    /// Misbehaving armor that claims to apply more than it received
    #[derive(Debug)]
    struct Amplifier;

    impl ArmorType for Amplifier {
        fn mitigate(&mut self, raw_damage: u32, _dice: &mut Dice) -> u32 {
            raw_damage * 2
        }
    }

    fn knight() -> Character {
        Character::new("knight", 90, 15, Box::new(TwoHandedSword), Box::new(Passthrough)).unwrap()
    }

    #[test]
    fn test_zero_max_health_rejected() {
        let err = Character::new("ghost", 0, 5, Box::new(TwoHandedSword), Box::new(Shield))
            .unwrap_err();
        assert!(matches!(
            err,
            DuelError::InvalidStat {
                field: "max_health",
                value: 0
            }
        ));
    }

    #[test]
    fn test_unrested_character_has_no_health() {
        let character = knight();
        assert_eq!(character.current_health(), 0);
        assert!(!character.is_rested());
        assert!(!character.is_alive());
    }

    #[test]
    fn test_rest_restores_max_health() {
        let mut character = knight();
        character.rest();
        assert_eq!(character.current_health(), 90);

        let mut dice = Dice::seeded(1);
        character.receive_attack(40, &mut dice);
        assert_eq!(character.current_health(), 50);

        character.rest();
        assert_eq!(character.current_health(), 90);
    }

    #[test]
    fn test_health_may_go_negative() {
        let mut character = knight();
        character.rest();
        let mut dice = Dice::seeded(1);
        assert_eq!(character.receive_attack(100, &mut dice), 100);
        assert_eq!(character.current_health(), -10);
        assert!(!character.is_alive());
    }

    #[test]
    fn test_receive_attack_never_heals_or_overshoots() {
        let mut character =
            Character::new("odd", 50, 5, Box::new(TwoHandedSword), Box::new(Amplifier)).unwrap();
        character.rest();
        let mut dice = Dice::seeded(1);
        assert_eq!(character.receive_attack(10, &mut dice), 10);
        assert_eq!(character.current_health(), 40);
        assert_eq!(character.receive_attack(0, &mut dice), 0);
        assert_eq!(character.current_health(), 40);
    }

    #[test]
    fn test_leather_applies_mitigated_damage() {
        let mut character =
            Character::new("scout", 80, 10, Box::new(TwoHandedSword), Box::new(LeatherArmor))
                .unwrap();
        character.rest();
        let mut dice = Dice::seeded(1);
        assert_eq!(character.receive_attack(20, &mut dice), 15);
        assert_eq!(character.current_health(), 65);
    }

    #[test]
    fn test_unlimited_stamina_never_exhausts() {
        let mut character = knight().with_stamina(Stamina::unlimited());
        character.rest();
        let mut dice = Dice::seeded(3);
        for _ in 0..100 {
            assert!(character.attack(&mut dice) > 15);
        }
    }

    #[test]
    fn test_default_stamina_exhausts_periodically() {
        let mut character = knight();
        character.rest();
        let mut dice = Dice::seeded(3);
        let attacks: Vec<u32> = (0..12).map(|_| character.attack(&mut dice)).collect();
        // 100 stamina, 26..=45 per swing: at most 3 swings land before a rest turn
        assert!(attacks.iter().any(|&d| d == 0));
        assert!(attacks[0] > 0);
    }

    #[test]
    fn test_stamina_refills_after_exhaustion() {
        let mut stamina = Stamina::new(StaminaConfig {
            max: 10,
            base_cost: 10,
            cost_die: 0,
        });
        let mut dice = Dice::seeded(1);
        assert!(!stamina.spend(&mut dice));
        assert_eq!(stamina.current(), 10);
    }

    #[test]
    fn test_huge_stamina_cost_exhausts_without_overflow() {
        let mut stamina = Stamina::new(StaminaConfig {
            max: 100,
            base_cost: u32::MAX,
            cost_die: 20,
        });
        let mut dice = Dice::seeded(9);
        for _ in 0..10 {
            assert!(!stamina.spend(&mut dice));
            assert_eq!(stamina.current(), 100);
        }
    }

    #[test]
    fn test_level_up_grows_stats() {
        let mut character = knight();
        let growth = ExperienceConfig::default();
        character.level_up(&growth);
        assert_eq!(character.level(), 2);
        assert_eq!(character.max_health(), 103); // 90 + 13
        assert_eq!(character.base_damage(), 17); // 15 + 2
    }

    #[test]
    fn test_level_up_grows_small_stats_by_one() {
        let mut character =
            Character::new("tiny", 3, 1, Box::new(TwoHandedSword), Box::new(Shield)).unwrap();
        character.level_up(&ExperienceConfig::default());
        assert_eq!(character.max_health(), 4);
        assert_eq!(character.base_damage(), 2);
    }

    #[test]
    fn test_add_xp_accumulates() {
        let mut character = knight();
        assert_eq!(character.add_xp(30), 30);
        assert_eq!(character.add_xp(12), 42);
        assert_eq!(character.xp(), 42);
    }
}
