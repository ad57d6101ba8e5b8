pub mod archetype;
pub mod builder;
#[allow(clippy::module_inception)]
pub mod character;

pub use archetype::{characters_list, create_character, create_character_with, Archetype};
pub use builder::CharacterBuilder;
pub use character::{Character, Stamina};
