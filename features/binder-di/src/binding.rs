use crate::{
    container::Container,
    errors::ContainerError,
    types::{Injectable, Instance, Value},
};

/// Factory callback producing a value for one identifier.
///
/// The owning container is passed in so the callback can resolve its own
/// sub-dependencies through [`Container::get`].
pub type FactoryFn = Box<dyn Fn(&Container) -> Result<Value, ContainerError> + Send + Sync>;

/// How an identifier is turned into an object. Fixed once at bind time,
/// so no runtime kind-sniffing happens during resolution.
pub enum Recipe {
    /// A fully constructed value, returned verbatim and never re-invoked
    Instance(Instance),
    /// Invoked on every resolution unless the binding is single
    Factory(FactoryFn),
    /// Constructed automatically through the type introspector
    TypeName(String),
}

impl Recipe {
    /// Wraps an existing value
    pub fn instance<T: Injectable>(value: T) -> Self {
        Recipe::Instance(Instance::new(value))
    }

    pub fn factory<F>(callback: F) -> Self
    where
        F: Fn(&Container) -> Result<Value, ContainerError> + Send + Sync + 'static,
    {
        Recipe::Factory(Box::new(callback))
    }

    pub fn type_name(name: impl Into<String>) -> Self {
        Recipe::TypeName(name.into())
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Recipe::Instance(_) => "instance",
            Recipe::Factory(_) => "factory",
            Recipe::TypeName(_) => "type",
        }
    }
}

impl std::fmt::Debug for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recipe::Instance(inst) => f.debug_tuple("Instance").field(inst).finish(),
            Recipe::Factory(_) => f.debug_tuple("Factory").finish(),
            Recipe::TypeName(name) => f.debug_tuple("TypeName").field(name).finish(),
        }
    }
}

/// One registered binding: the recipe plus its lifecycle mark
pub(crate) struct Binding {
    pub recipe: Recipe,
    pub single: bool,
}
