use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error)]
pub enum Error {
    #[error("duration must be positive, got {0}s")]
    InvalidDuration(i64),

    #[error("duration of {secs}s exceeds the {max}s limit")]
    DurationTooLong { secs: i64, max: i64 },

    #[error("{0} is disabled in the configuration")]
    FeatureDisabled(&'static str),

    #[error("config file does not exist: {0}")]
    ConfigNotFound(PathBuf),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("could not render config: {0}")]
    ConfigRender(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{self}")
    }
}
