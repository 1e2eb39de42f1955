use binder_di::ContainerError;
use thiserror::Error;

/// Errors while validating or applying a batch of binding configurations
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A record is missing one of its required keys
    #[error("binding configuration has no \"{0}\" key")]
    MissingKey(&'static str),

    /// Registration or eager resolution failed
    #[error(transparent)]
    Container(#[from] ContainerError),
}
