use binder_di::{Container, TypeIntrospector};

use crate::{
    config::{BindingConfig, RawBinding},
    errors::ConfigError,
};

/// Applies a batch of declarative bindings onto a container.
///
/// Records are validated and registered in declaration order. Eager records
/// are resolved only once the whole batch is registered, so they may refer to
/// identifiers declared later in the same batch. A validation or registration
/// failure aborts the load before any eager resolution happens; records
/// registered up to that point stay registered.
pub fn load(container: &mut Container, bindings: Vec<RawBinding>) -> Result<(), ConfigError> {
    tracing::debug!("Loading {} binding configurations", bindings.len());

    let mut eager = Vec::new();
    for raw in bindings {
        let config = BindingConfig::try_from(raw)?;
        let (identifier, recipe, single, is_eager) = config.into_parts();

        if is_eager {
            // eager implies single; resolution is deferred to the end of the batch
            container.single(&identifier, recipe)?;
            eager.push(identifier);
        } else if single {
            container.single(&identifier, recipe)?;
        } else {
            container.set(&identifier, recipe)?;
        }
    }

    for identifier in eager {
        tracing::debug!("Eager loading {}", identifier);
        container.get(&identifier)?;
    }

    Ok(())
}

/// Builds a fresh container from a batch of declarative bindings.
///
/// The container starts with no introspectable types; use
/// [`from_bindings_with_types`] when the batch relies on automatic
/// construction.
pub fn from_bindings(bindings: Vec<RawBinding>) -> Result<Container, ConfigError> {
    let mut container = Container::new();
    load(&mut container, bindings)?;
    Ok(container)
}

/// Builds a container resolving automatic construction through `types`,
/// then applies the batch
pub fn from_bindings_with_types(
    types: impl TypeIntrospector + 'static,
    bindings: Vec<RawBinding>,
) -> Result<Container, ConfigError> {
    let mut container = Container::with_types(types);
    load(&mut container, bindings)?;
    Ok(container)
}
