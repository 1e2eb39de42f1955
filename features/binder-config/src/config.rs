use binder_di::Recipe;

use crate::errors::ConfigError;

/// One declarative binding description, as assembled by the caller.
///
/// The record keys are
///
/// - **identifier** : The identifier to bind, required
/// - **recipe**     : How the identifier is produced, required
/// - **single**     : Whether the binding is a single instance
/// - **eager**      : Whether the binding is resolved as soon as the whole
///   batch is registered, implying a single instance
#[derive(Default)]
pub struct RawBinding {
    pub identifier: Option<String>,
    pub recipe: Option<Recipe>,
    pub single: Option<bool>,
    pub eager: Option<bool>,
}

impl RawBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn recipe(mut self, recipe: Recipe) -> Self {
        self.recipe = Some(recipe);
        self
    }

    pub fn single(mut self, single: bool) -> Self {
        self.single = Some(single);
        self
    }

    pub fn eager(mut self, eager: bool) -> Self {
        self.eager = Some(eager);
        self
    }
}

/// A validated binding description
#[derive(Debug)]
pub struct BindingConfig {
    identifier: String,
    recipe: Recipe,
    single: bool,
    eager: bool,
}

impl TryFrom<RawBinding> for BindingConfig {
    type Error = ConfigError;

    /// Validates a raw record, naming the first missing required key
    fn try_from(raw: RawBinding) -> Result<Self, Self::Error> {
        let identifier = raw.identifier.ok_or(ConfigError::MissingKey("identifier"))?;
        let recipe = raw.recipe.ok_or(ConfigError::MissingKey("recipe"))?;

        Ok(BindingConfig {
            identifier,
            recipe,
            single: raw.single.unwrap_or(false),
            eager: raw.eager.unwrap_or(false),
        })
    }
}

impl BindingConfig {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn is_single(&self) -> bool {
        self.single
    }

    pub fn is_eager(&self) -> bool {
        self.eager
    }

    pub(crate) fn into_parts(self) -> (String, Recipe, bool, bool) {
        (self.identifier, self.recipe, self.single, self.eager)
    }
}
