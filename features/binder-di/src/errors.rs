use std::sync::Arc;

use thiserror::Error;

use crate::{descriptor::IntrospectError, types::DynError};

/// Errors raised while registering or resolving bindings.
///
/// Every variant is terminal to the call that produced it and propagates
/// unmodified through the recursive resolution chain to the original caller.
#[derive(Error, Debug)]
pub enum ContainerError {
    /// The identifier has no binding and does not name a constructible type
    #[error("identifier \"{0}\" is not defined")]
    NotFound(String),

    /// A type-name recipe refers to a type the introspector does not know
    #[error("\"{0}\" is not an object instance, a factory, or a known type name")]
    UnknownType(String),

    /// Construction depth for one identifier passed the configured ceiling
    #[error("\"{type_name}\" exceeds the maximum recursion count of {max}")]
    Recursion { type_name: String, max: usize },

    /// A factory produced something other than an object
    #[error("resolver for \"{identifier}\" returned a non-object value of kind \"{kind}\"")]
    UnexpectedValue {
        identifier: String,
        kind: &'static str,
    },

    /// An argument outside the accepted domain of a registry operation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A constructor parameter has neither a default nor a declared type
    #[error("unable to resolve constructor argument {position} for \"{type_name}\"")]
    UnresolvableParameter { position: usize, type_name: String },

    /// The introspector failed on a type it was asked to describe
    #[error("type introspection for \"{type_name}\" failed: {source}")]
    Introspection {
        type_name: String,
        #[source]
        source: IntrospectError,
    },

    /// A descriptor's construct function failed
    #[error("constructor for \"{type_name}\" failed - error: {error:?}")]
    Construction {
        type_name: String,
        error: Arc<DynError>,
    },

    #[error("failed to downcast, required: '{required_type}' actual: '{actual_type}'")]
    DowncastFailed {
        required_type: &'static str,
        actual_type: &'static str,
    },
}
