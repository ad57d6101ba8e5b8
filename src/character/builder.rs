//! Fluent character assembly
//!
//! Setters only record the request. `build` checks that every required field
//! is present, resolves tags to strategies, and returns an unrested character.

use crate::character::character::{Character, Stamina};
use crate::combat::armor::ArmorTag;
use crate::combat::attack::{AttackTag, AttackType, MultiAttack};
use crate::core::{DuelError, Result};

#[derive(Debug, Clone, Default)]
pub struct CharacterBuilder {
    name: Option<String>,
    max_health: Option<u32>,
    base_damage: Option<u32>,
    attack_types: Vec<String>,
    armor_type: Option<String>,
    level: Option<u32>,
    stamina: Option<Stamina>,
}

impl CharacterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn max_health(mut self, max_health: u32) -> Self {
        self.max_health = Some(max_health);
        self
    }

    pub fn base_damage(mut self, base_damage: u32) -> Self {
        self.base_damage = Some(base_damage);
        self
    }

    /// Replace the attack tags. Accepts `AttackTag`s or raw tag strings.
    pub fn attack_types<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.attack_types = tags.into_iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn armor_type(mut self, tag: impl ToString) -> Self {
        self.armor_type = Some(tag.to_string());
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn stamina(mut self, stamina: Stamina) -> Self {
        self.stamina = Some(stamina);
        self
    }

    pub fn build(self) -> Result<Character> {
        let max_health = self.max_health.ok_or(DuelError::MissingField("max_health"))?;
        let base_damage = self
            .base_damage
            .ok_or(DuelError::MissingField("base_damage"))?;
        if self.attack_types.is_empty() {
            return Err(DuelError::MissingField("attack_types"));
        }
        let armor_tag = self
            .armor_type
            .as_deref()
            .ok_or(DuelError::MissingField("armor_type"))?;

        tracing::info!(max_health, base_damage, "Creating a character");

        let mut attacks = self
            .attack_types
            .iter()
            .map(|tag| tag.parse::<AttackTag>().map(AttackTag::resolve))
            .collect::<Result<Vec<Box<dyn AttackType>>>>()?;

        let attack_type: Box<dyn AttackType> = if attacks.len() == 1 {
            attacks.remove(0)
        } else {
            Box::new(MultiAttack::new(attacks))
        };

        let armor_type = armor_tag.parse::<ArmorTag>()?.resolve();

        let mut character = Character::new(
            self.name.unwrap_or_else(|| "character".to_string()),
            max_health,
            base_damage,
            attack_type,
            armor_type,
        )?
        .with_stamina(self.stamina.unwrap_or_default());

        if let Some(level) = self.level {
            character = character.with_level(level);
        }

        Ok(character)
    }
}
