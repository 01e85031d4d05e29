// Error types shared by the library modules. The command layer wraps these
// in `anyhow::Error`; the messages below are what ends up on stderr, so
// they are kept short and lower-case.

use thiserror::Error;

/// Everything that can go wrong between reading the config and decoding
/// a lookup response.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to read config; you may need to run the init command")]
    ConfigMissing,

    #[error("unable to determine the user configuration directory")]
    NoConfigDir,

    #[error("authentication strings not set")]
    MissingCredentials,

    #[error("missing phone number")]
    MissingNumber,

    #[error("no data points selected; use --all to request all data points")]
    NoFields,

    /// Non-success HTTP status, carrying the status line text
    /// (e.g. `401 Unauthorized`).
    #[error("{0}")]
    Status(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
