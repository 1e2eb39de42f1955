//! Binder DI is a dependency-resolution registry: bindings map a string
//! identifier to a recipe for producing an object, and resolution walks the
//! recipe - returning a stored instance, invoking a factory with the
//! container, or constructing a described type automatically, recursing into
//! its constructor dependencies.
//!
//! Binder DI is split into the following parts:
//!
//! 1. [`Container`]: the binding registry and resolution entry point
//! 2. [`Recipe`]: how an identifier is produced (instance, factory, type name)
//! 3. [`TypeRegistry`] / [`TypeIntrospector`]: constructor descriptions
//!    driving automatic resolution
//! 4. Errors - for registration and resolution failures
//!
//! Self-referential construction chains are cut off by a per-container
//! recursion guard; the ceiling defaults to [`DEFAULT_MAX_RECURSION`] and is
//! configurable per container.
//!
//! # Examples
//!
//! ```rust
//! use binder_di::{Container, Recipe, Value};
//!
//! fn main() -> Result<(), binder_di::ContainerError> {
//!     let mut container = Container::new();
//!
//!     container
//!         .set(
//!             "connection_string",
//!             Recipe::instance(String::from("postgres://localhost")),
//!         )?
//!         .single(
//!             "greeting",
//!             Recipe::factory(|container| {
//!                 let connection = container.require::<String>("connection_string")?;
//!                 Ok(Value::object(format!("connected to {connection}")))
//!             }),
//!         )?;
//!
//!     let greeting = container.require::<String>("greeting")?;
//!     assert_eq!(greeting.as_str(), "connected to postgres://localhost");
//!
//!     // single bindings resolve once and are reused afterwards
//!     let again = container.require::<String>("greeting")?;
//!     assert!(std::sync::Arc::ptr_eq(&greeting, &again));
//!
//!     Ok(())
//! }
//! ```

pub mod binding;
pub mod container;
pub mod descriptor;
pub mod errors;
mod guard;
mod resolver;
pub mod types;

pub use binding::{FactoryFn, Recipe};
pub use container::Container;
pub use descriptor::{
    Describe, IntrospectError, ParamSpec, TypeDescriptor, TypeIntrospector, TypeRegistry,
};
pub use errors::ContainerError;
pub use guard::DEFAULT_MAX_RECURSION;
pub use types::{DynError, Injectable, Instance, TypeInfo, Value};
