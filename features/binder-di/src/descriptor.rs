//! The type-introspection capability.
//!
//! There is no live reflection to lean on, so constructor shapes are explicit
//! descriptions instead: a concrete type reports its constructor as a
//! [`TypeDescriptor`] (ordered parameters plus a positional construct
//! function), descriptors are collected in a [`TypeRegistry`], and the
//! automatic resolver depends only on the [`TypeIntrospector`] trait - any
//! other source of descriptions, hand-written or generated, plugs in the same
//! way.

use std::collections::HashMap;

use thiserror::Error;

use crate::types::{DynError, Instance, Value};

/// Errors reported by a [`TypeIntrospector`]
#[derive(Error, Debug)]
pub enum IntrospectError {
    /// The type name is not known at all
    #[error("type \"{0}\" is not known")]
    UnknownType(String),
    /// The type is listed but its description cannot be produced, e.g. a
    /// generated description referring to a type that no longer exists
    #[error("type information for \"{type_name}\" is unavailable: {reason}")]
    Unavailable { type_name: String, reason: String },
}

/// One constructor parameter, in declaration order
#[derive(Debug)]
pub struct ParamSpec {
    declared_type: Option<String>,
    default: Option<Value>,
}

impl ParamSpec {
    /// Parameter resolved by looking its declared type up in the container
    pub fn of_type(name: impl Into<String>) -> Self {
        ParamSpec {
            declared_type: Some(name.into()),
            default: None,
        }
    }

    /// Parameter filled from a default, no lookup performed
    pub fn with_default(value: Value) -> Self {
        ParamSpec {
            declared_type: None,
            default: Some(value),
        }
    }

    /// Parameter with no declared type and no default.
    ///
    /// Automatic resolution rejects these, naming the position.
    pub fn untyped() -> Self {
        ParamSpec {
            declared_type: None,
            default: None,
        }
    }

    pub fn declared_type(&self) -> Option<&str> {
        self.declared_type.as_deref()
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

type ConstructFn = Box<dyn Fn(Vec<Value>) -> Result<Instance, DynError> + Send + Sync>;

/// Constructor description for one concrete type: the ordered parameter
/// list and a function building the instance from positional arguments.
pub struct TypeDescriptor {
    type_name: String,
    params: Vec<ParamSpec>,
    construct: ConstructFn,
}

impl std::fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl TypeDescriptor {
    pub fn new<F>(type_name: impl Into<String>, params: Vec<ParamSpec>, construct: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Instance, DynError> + Send + Sync + 'static,
    {
        TypeDescriptor {
            type_name: type_name.into(),
            params,
            construct: Box::new(construct),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub(crate) fn construct(&self, arguments: Vec<Value>) -> Result<Instance, DynError> {
        (self.construct)(arguments)
    }
}

/// Implemented by concrete types that can describe their own constructor
pub trait Describe {
    fn descriptor() -> TypeDescriptor;
}

/// Reports whether a type name is constructible and describes its
/// constructor. The automatic resolver depends only on this trait, never on
/// any particular source of type information.
pub trait TypeIntrospector: Send + Sync {
    /// Whether `type_name` can be described and constructed
    fn contains(&self, type_name: &str) -> bool;

    /// The constructor description for `type_name`
    fn describe(&self, type_name: &str) -> Result<&TypeDescriptor, IntrospectError>;
}

/// Name-keyed descriptor store, the default [`TypeIntrospector`]
#[derive(Default)]
pub struct TypeRegistry {
    descriptors: HashMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        TypeRegistry {
            descriptors: HashMap::new(),
        }
    }

    /// Adds a descriptor under its own type name, replacing any previous one
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        self.descriptors
            .insert(descriptor.type_name().to_string(), descriptor);
        self
    }

    /// Adds the descriptor of a self-describing type
    pub fn register<T: Describe>(&mut self) -> &mut Self {
        self.insert(T::descriptor())
    }
}

impl TypeIntrospector for TypeRegistry {
    fn contains(&self, type_name: &str) -> bool {
        self.descriptors.contains_key(type_name)
    }

    fn describe(&self, type_name: &str) -> Result<&TypeDescriptor, IntrospectError> {
        self.descriptors
            .get(type_name)
            .ok_or_else(|| IntrospectError::UnknownType(type_name.to_string()))
    }
}
