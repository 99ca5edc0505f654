use thiserror::Error;

/// Fruit placement failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    #[error("no free tile for fruit ({area} tiles, snake length {snake_len})")]
    BoardFull { area: usize, snake_len: usize },
}

/// Loading or validating a [`crate::GameConfig`] failed.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
