use crate::{errors::ContainerError, resolver::Resolve, types::Instance};

/// Returns an already constructed value unchanged.
///
/// No construction happens here, so the recursion guard is never touched.
pub(crate) struct InstanceResolver<'a> {
    instance: &'a Instance,
}

impl<'a> InstanceResolver<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        InstanceResolver { instance }
    }
}

impl Resolve for InstanceResolver<'_> {
    fn resolve(&self) -> Result<Instance, ContainerError> {
        Ok(self.instance.clone())
    }
}
