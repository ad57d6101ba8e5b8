//! Character archetype presets
//!
//! The four playable archetypes and their fixed stat lines.

use std::fmt;
use std::str::FromStr;

use crate::character::builder::CharacterBuilder;
use crate::character::character::{Character, Stamina};
use crate::combat::armor::ArmorTag;
use crate::combat::attack::AttackTag;
use crate::core::{DuelError, GameConfig, Result};

/// Playable archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    /// Sword and shield
    Fighter,
    /// Fire bolts behind an ice block
    Mage,
    /// Bow and leather
    Archer,
    /// Alternates bow and fire bolt, carries a shield
    MageArcher,
}

/// Fixed stat line for an archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeStats {
    pub max_health: u32,
    pub base_damage: u32,
    pub attacks: &'static [AttackTag],
    pub armor: ArmorTag,
}

impl Archetype {
    /// All archetypes in listing order
    pub const ALL: [Archetype; 4] = [
        Archetype::Fighter,
        Archetype::Mage,
        Archetype::Archer,
        Archetype::MageArcher,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fighter => "fighter",
            Self::Mage => "mage",
            Self::Archer => "archer",
            Self::MageArcher => "mage_archer",
        }
    }

    pub fn stats(&self) -> ArchetypeStats {
        match self {
            Self::Fighter => ArchetypeStats {
                max_health: 90,
                base_damage: 15,
                attacks: &[AttackTag::Sword],
                armor: ArmorTag::Shield,
            },
            Self::Archer => ArchetypeStats {
                max_health: 80,
                base_damage: 10,
                attacks: &[AttackTag::Bow],
                armor: ArmorTag::LeatherArmor,
            },
            Self::Mage => ArchetypeStats {
                max_health: 70,
                base_damage: 8,
                attacks: &[AttackTag::FireBolt],
                armor: ArmorTag::IceBlock,
            },
            Self::MageArcher => ArchetypeStats {
                max_health: 75,
                base_damage: 9,
                attacks: &[AttackTag::Bow, AttackTag::FireBolt],
                armor: ArmorTag::Shield,
            },
        }
    }

    /// Builder preloaded with this archetype's stat line
    pub fn builder(&self) -> CharacterBuilder {
        let stats = self.stats();
        CharacterBuilder::new()
            .name(self.name())
            .max_health(stats.max_health)
            .base_damage(stats.base_damage)
            .attack_types(stats.attacks.iter().copied())
            .armor_type(stats.armor)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Archetype {
    type Err = DuelError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|archetype| archetype.name() == lowered)
            .ok_or_else(|| DuelError::UnknownCharacterKind(s.to_string()))
    }
}

/// Names accepted by `create_character`, in listing order
pub fn characters_list() -> &'static [&'static str] {
    &["fighter", "mage", "archer", "mage_archer"]
}

/// Build a named archetype with default stamina
pub fn create_character(name: &str) -> Result<Character> {
    name.parse::<Archetype>()?.builder().build()
}

/// Build a named archetype using the configured stamina pool
pub fn create_character_with(name: &str, config: &GameConfig) -> Result<Character> {
    name.parse::<Archetype>()?
        .builder()
        .stamina(Stamina::new(config.stamina))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::StaminaConfig;

    #[test]
    fn test_list_order() {
        assert_eq!(
            characters_list(),
            &["fighter", "mage", "archer", "mage_archer"]
        );
        let names: Vec<&str> = Archetype::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, characters_list());
    }

    #[test]
    fn test_fighter_stats() {
        let fighter = create_character("fighter").unwrap();
        assert_eq!(fighter.max_health(), 90);
        assert_eq!(fighter.base_damage(), 15);
        assert_eq!(fighter.attack_tags(), vec![AttackTag::Sword]);
        assert_eq!(fighter.armor_tag(), Some(ArmorTag::Shield));
    }

    #[test]
    fn test_mage_archer_has_composite_attack() {
        let hybrid = create_character("mage_archer").unwrap();
        assert_eq!(hybrid.max_health(), 75);
        assert_eq!(hybrid.base_damage(), 9);
        assert_eq!(
            hybrid.attack_tags(),
            vec![AttackTag::Bow, AttackTag::FireBolt]
        );
        assert_eq!(hybrid.armor_tag(), Some(ArmorTag::Shield));
    }

    #[test]
    fn test_names_are_case_insensitive() {
        for name in ["FIGHTER", "Mage", "aRcHeR", "Mage_Archer"] {
            assert!(create_character(name).is_ok(), "{name} should resolve");
        }
    }

    #[test]
    fn test_unknown_kind() {
        for name in ["unknown", "", "mage archer", "fighters"] {
            let err = create_character(name).unwrap_err();
            assert!(matches!(err, DuelError::UnknownCharacterKind(ref n) if n == name));
        }
    }

    #[test]
    fn test_created_character_named_after_archetype() {
        let archer = create_character("ARCHER").unwrap();
        assert_eq!(archer.name(), "archer");
    }

    #[test]
    fn test_configured_stamina() {
        let mut config = GameConfig::default();
        config.stamina = StaminaConfig {
            max: 500,
            base_cost: 1,
            cost_die: 1,
        };
        let mage = create_character_with("mage", &config).unwrap();
        assert_eq!(mage.stamina().current(), 500);
    }
}
