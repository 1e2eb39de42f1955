use crate::{
    binding::FactoryFn,
    container::Container,
    errors::ContainerError,
    resolver::Resolve,
    types::{Instance, Value},
};

/// Invokes a factory callback, passing the owning container so the callback
/// can resolve its own sub-dependencies.
pub(crate) struct CallableResolver<'a> {
    container: &'a Container,
    identifier: &'a str,
    callback: &'a FactoryFn,
}

impl<'a> CallableResolver<'a> {
    pub fn new(container: &'a Container, identifier: &'a str, callback: &'a FactoryFn) -> Self {
        CallableResolver {
            container,
            identifier,
            callback,
        }
    }
}

impl Resolve for CallableResolver<'_> {
    fn resolve(&self) -> Result<Instance, ContainerError> {
        // Depth is advanced before the callback runs, so a factory that keeps
        // requesting its own identifier is cut off at the ceiling.
        self.container.count_up(self.identifier)?;

        let value = (self.callback)(self.container)?;
        let instance = match value {
            Value::Object(instance) => instance,
            other => {
                return Err(ContainerError::UnexpectedValue {
                    identifier: self.identifier.to_string(),
                    kind: other.kind(),
                })
            }
        };
        tracing::debug!("Constructed instance of {}", instance.info.type_name);

        // Repeated top-level calls to the same factory must not accumulate
        self.container.count_reset(self.identifier);

        Ok(instance)
    }
}
