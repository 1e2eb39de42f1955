use std::sync::Arc;

use crate::{
    container::Container,
    errors::ContainerError,
    resolver::Resolve,
    types::{Instance, Value},
};

/// Automatic constructor injection driven by the type introspector.
///
/// Walks the described constructor parameters in declaration order: a default
/// value always wins, a declared type is resolved recursively through the
/// container, anything else is rejected naming the parameter position.
pub(crate) struct ReflectionResolver<'a> {
    container: &'a Container,
    type_name: &'a str,
}

impl<'a> ReflectionResolver<'a> {
    pub fn new(container: &'a Container, type_name: &'a str) -> Self {
        ReflectionResolver {
            container,
            type_name,
        }
    }
}

impl Resolve for ReflectionResolver<'_> {
    fn resolve(&self) -> Result<Instance, ContainerError> {
        self.container.count_up(self.type_name)?;

        let descriptor = self
            .container
            .introspector()
            .describe(self.type_name)
            .map_err(|source| ContainerError::Introspection {
                type_name: self.type_name.to_string(),
                source,
            })?;

        let mut arguments = Vec::with_capacity(descriptor.params().len());
        for (position, param) in descriptor.params().iter().enumerate() {
            // a default always wins, no lookup is performed
            if let Some(default) = param.default() {
                arguments.push(default.clone());
                continue;
            }
            match param.declared_type() {
                Some(declared) => arguments.push(Value::Object(self.container.get(declared)?)),
                None => {
                    return Err(ContainerError::UnresolvableParameter {
                        position,
                        type_name: self.type_name.to_string(),
                    })
                }
            }
        }

        let instance =
            descriptor
                .construct(arguments)
                .map_err(|error| ContainerError::Construction {
                    type_name: self.type_name.to_string(),
                    error: Arc::new(error),
                })?;
        tracing::debug!("Constructed instance of {}", instance.info.type_name);

        // A successful construction pays its depth back, so a type shared by
        // several parameters in one call chain is not mistaken for a cycle.
        // Cycles never reach this point and keep accumulating until cut off.
        self.container.count_reset(self.type_name);

        Ok(instance)
    }
}
