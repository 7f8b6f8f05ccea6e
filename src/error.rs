use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not read secret file {path}: {source}")]
    SecretRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid secret file {path}: {source}")]
    SecretParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("could not read input {path}: {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
