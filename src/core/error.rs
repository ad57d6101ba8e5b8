use thiserror::Error;

#[derive(Error, Debug)]
pub enum DuelError {
    #[error("Unknown character kind: {0}")]
    UnknownCharacterKind(String),

    #[error("Unknown attack type: {0}")]
    UnknownAttackType(String),

    #[error("Unknown armor type: {0}")]
    UnknownArmorType(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {value}")]
    InvalidStat { field: &'static str, value: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Observer error: {0}")]
    Observer(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DuelError>;
