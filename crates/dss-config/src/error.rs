//! Errors raised while assembling [`crate::DssConfig`].

use dss_core::enums::SourceKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file or environment provider could not be read, or its values do
    /// not fit the config shape.
    #[error("failed to read dss configuration: {0}")]
    Provider(#[from] figment::Error),

    /// A count or duration that must be positive was zero.
    #[error("'{field}' must be greater than zero")]
    ZeroValue { field: &'static str },

    /// A dataset location was configured as a blank string.
    #[error("source '{kind}' has a blank location")]
    BlankSource { kind: SourceKind },
}
