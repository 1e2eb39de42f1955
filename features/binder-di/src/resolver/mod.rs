//! Resolver variants, one per recipe kind.
//!
//! A resolver is selected from the binding's recipe at resolution time and
//! borrows the owning container for the duration of one resolution.

use crate::{errors::ContainerError, types::Instance};

mod callable;
mod instance;
mod reflection;

pub(crate) use callable::CallableResolver;
pub(crate) use instance::InstanceResolver;
pub(crate) use reflection::ReflectionResolver;

/// Turns one bound recipe into an object
pub(crate) trait Resolve {
    fn resolve(&self) -> Result<Instance, ContainerError>;
}
