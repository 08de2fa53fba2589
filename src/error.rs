use thiserror::Error;

/// Failures of the durable key-value layer and of (de)serializing cell values
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode stored value: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("could not encode value: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

impl StorageError {
    pub fn io(key: &str, source: std::io::Error) -> Self {
        StorageError::Io {
            key: key.to_string(),
            source,
        }
    }
}
