use std::{
    any::type_name,
    collections::HashMap,
    fmt::Debug,
    sync::{Arc, Mutex},
};

use crate::{
    binding::{Binding, Recipe},
    descriptor::{TypeIntrospector, TypeRegistry},
    errors::ContainerError,
    guard::RecursionGuard,
    resolver::{CallableResolver, InstanceResolver, ReflectionResolver, Resolve},
    types::{Injectable, Instance},
};

/// Registry of bindings and the orchestrator of their resolution.
///
/// A binding maps a string identifier to a [`Recipe`]. Resolution picks the
/// matching resolver variant: stored instances are returned as-is, factories
/// are invoked with a reference to the container, and type names are
/// constructed automatically through the configured [`TypeIntrospector`].
/// Bindings marked single are resolved once and the result is reused for
/// every later request.
///
/// The singleton cache and the recursion guard sit behind mutexes so
/// resolution only needs `&self` and factories can call back into
/// [`Container::get`] while they are being resolved. The resolution model
/// itself is synchronous and request-scoped.
pub struct Container {
    bindings: HashMap<String, Binding>,
    resolved: Mutex<HashMap<String, Instance>>,
    guard: Mutex<RecursionGuard>,
    types: Box<dyn TypeIntrospector>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let resolved = self.resolved.lock().unwrap();
        let mut map = f.debug_struct("Container");
        for (identifier, binding) in &self.bindings {
            let state = if resolved.contains_key(identifier) {
                "resolved"
            } else if binding.single {
                "single"
            } else {
                binding.recipe.kind()
            };
            map.field(identifier, &state);
        }
        map.finish()
    }
}

impl Container {
    /// Creates an empty container with no introspectable types
    pub fn new() -> Self {
        Self::with_types(TypeRegistry::new())
    }

    /// Creates a container that resolves automatic construction through
    /// `types`
    pub fn with_types(types: impl TypeIntrospector + 'static) -> Self {
        Container {
            bindings: HashMap::new(),
            resolved: Mutex::new(HashMap::new()),
            guard: Mutex::new(RecursionGuard::new()),
            types: Box::new(types),
        }
    }

    /// Whether a binding exists for `identifier`
    pub fn has(&self, identifier: &str) -> bool {
        self.bindings.contains_key(identifier)
    }

    /// All bound identifiers, sorted
    pub fn identifiers(&self) -> Vec<String> {
        let mut identifiers: Vec<String> = self.bindings.keys().cloned().collect();
        identifiers.sort();
        identifiers
    }

    /// Resolves `identifier` to an object.
    ///
    /// A cached singleton is returned immediately. Otherwise the binding's
    /// resolver variant runs; an unbound identifier that names a
    /// constructible type is resolved automatically, anything else fails
    /// with [`ContainerError::NotFound`]. When the outermost `get` on the
    /// call chain returns, the recursion guard is cleared - also on failure.
    pub fn get(&self, identifier: &str) -> Result<Instance, ContainerError> {
        self.guard.lock().unwrap().enter_frame();
        let result = self.resolve(identifier);
        self.guard.lock().unwrap().exit_frame();
        result
    }

    /// Resolves `identifier` and downcasts the result to a concrete type
    pub fn require<T: Injectable>(&self, identifier: &str) -> Result<Arc<T>, ContainerError> {
        self.get(identifier)?
            .downcast()
            .map_err(|actual_type| ContainerError::DowncastFailed {
                required_type: type_name::<T>(),
                actual_type,
            })
    }

    /// Binds `recipe` to `identifier`, replacing any previous binding.
    ///
    /// Cached state and the singleton mark of the previous binding are
    /// cleared first. A [`Recipe::TypeName`] naming a type the introspector
    /// does not know is rejected.
    pub fn set(&mut self, identifier: &str, recipe: Recipe) -> Result<&mut Self, ContainerError> {
        self.bind(identifier, recipe, false)
    }

    /// Like [`Container::set`], additionally marking the binding single
    pub fn single(
        &mut self,
        identifier: &str,
        recipe: Recipe,
    ) -> Result<&mut Self, ContainerError> {
        self.bind(identifier, recipe, true)
    }

    /// Like [`Container::single`], but resolves immediately instead of on
    /// first access
    pub fn set_new(
        &mut self,
        identifier: &str,
        recipe: Recipe,
    ) -> Result<&mut Self, ContainerError> {
        self.single(identifier, recipe)?;
        tracing::debug!("Eager loading {}", identifier);
        self.get(identifier)?;
        Ok(self)
    }

    /// Removes the binding, its cached instance and its singleton mark.
    ///
    /// Does nothing when the identifier is not bound.
    pub fn remove(&mut self, identifier: &str) -> &mut Self {
        self.bindings.remove(identifier);
        self.resolved.lock().unwrap().remove(identifier);
        tracing::debug!("Removed binding for {}", identifier);
        self
    }

    /// Sets the construction-depth ceiling, which must be at least 1
    pub fn set_max_recursion(&mut self, max: usize) -> Result<&mut Self, ContainerError> {
        if max == 0 {
            return Err(ContainerError::InvalidArgument(
                "maximum recursion count must be at least 1".to_string(),
            ));
        }
        self.guard.lock().unwrap().set_max(max);
        Ok(self)
    }

    pub(crate) fn introspector(&self) -> &dyn TypeIntrospector {
        self.types.as_ref()
    }

    pub(crate) fn count_up(&self, key: &str) -> Result<(), ContainerError> {
        self.guard.lock().unwrap().increment(key)
    }

    pub(crate) fn count_reset(&self, key: &str) {
        self.guard.lock().unwrap().reset(key);
    }

    fn bind(
        &mut self,
        identifier: &str,
        recipe: Recipe,
        single: bool,
    ) -> Result<&mut Self, ContainerError> {
        if let Recipe::TypeName(type_name) = &recipe {
            if !self.types.contains(type_name) {
                return Err(ContainerError::UnknownType(type_name.clone()));
            }
        }

        // a new binding is authoritative - drop whatever was resolved before
        self.resolved.lock().unwrap().remove(identifier);

        tracing::debug!("Registered {} binding for {}", recipe.kind(), identifier);
        self.bindings
            .insert(identifier.to_string(), Binding { recipe, single });
        Ok(self)
    }

    fn resolve(&self, identifier: &str) -> Result<Instance, ContainerError> {
        if let Some(cached) = self.resolved.lock().unwrap().get(identifier).cloned() {
            tracing::trace!("Resolved {} from cache", identifier);
            return Ok(cached);
        }

        let Some(binding) = self.bindings.get(identifier) else {
            // an unbound identifier may still name a constructible type
            if self.types.contains(identifier) {
                return ReflectionResolver::new(self, identifier).resolve();
            }
            tracing::error!("Tried to resolve an undefined identifier: {}", identifier);
            return Err(ContainerError::NotFound(identifier.to_string()));
        };

        let instance = match &binding.recipe {
            // already resolved, exempt from singleton bookkeeping
            Recipe::Instance(instance) => return InstanceResolver::new(instance).resolve(),
            Recipe::Factory(callback) => {
                CallableResolver::new(self, identifier, callback).resolve()?
            }
            Recipe::TypeName(type_name) => ReflectionResolver::new(self, type_name).resolve()?,
        };

        if binding.single {
            self.resolved
                .lock()
                .unwrap()
                .insert(identifier.to_string(), instance.clone());
        }

        Ok(instance)
    }
}
