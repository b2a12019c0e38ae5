// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors that may occur while locating, reading, or parsing a kubeconfig.
#[derive(Debug, Error)]
pub enum KubeconfigError {
    /// The invoking user's home directory could not be determined.
    #[error("Could not determine home directory")]
    Homeless,

    /// A filesystem read failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed YAML or does not match the expected shape.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, KubeconfigError>;
