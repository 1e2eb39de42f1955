//! Binder Config maps declarative binding descriptions onto a
//! [`binder_di::Container`].
//!
//! A batch is an ordered sequence of [`RawBinding`] records. Each record is
//! validated (identifier and recipe are required, the lifecycle flags
//! default to off) and registered in order; records flagged eager are
//! resolved only after the whole batch is registered, so they may depend on
//! identifiers declared later.
//!
//! # Examples
//!
//! ```rust
//! use binder_config::{loader, RawBinding};
//! use binder_di::{Recipe, Value};
//!
//! fn main() -> Result<(), binder_config::ConfigError> {
//!     let container = loader::from_bindings(vec![
//!         RawBinding::new()
//!             .identifier("answer")
//!             .recipe(Recipe::factory(|_| Ok(Value::object(42_i64))))
//!             .single(true),
//!     ])?;
//!
//!     let answer = container.require::<i64>("answer")?;
//!     assert_eq!(*answer, 42);
//!     Ok(())
//! }
//! ```
//!
//! Binder Config consists of the following components:
//!
//! 1. Config - the raw and validated binding records
//! 2. Loader - for applying batches onto a container
//! 3. Errors - for validation and load failures

pub mod config;
pub mod errors;
pub mod loader;

pub use config::{BindingConfig, RawBinding};
pub use errors::ConfigError;
pub use loader::{from_bindings, from_bindings_with_types, load};
