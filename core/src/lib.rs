// Actionkit Core Library

pub mod dispatch;
pub mod error;
pub mod format;
pub mod handlers;
pub mod registry;
pub mod router;
pub mod validation;
pub mod value;

use std::sync::Arc;

use actionkit_config::Config;

pub use dispatch::Dispatcher;
pub use error::{DispatchError, DispatchResult, HandlerError};
pub use registry::SchemaRegistry;
pub use router::{ActionHandler, HandlerRouter};
pub use validation::{RequestValidator, ValidatedCall};
pub use value::ParamValue;

/// Build a dispatcher from configuration: registry from the declared
/// functions, built-in handlers bound.
pub fn build_dispatcher(config: &Config) -> DispatchResult<Dispatcher> {
  let registry = SchemaRegistry::from_specs(config.functions.iter().cloned())?;

  let mut router = HandlerRouter::new();
  handlers::register_builtin_handlers(&mut router);

  Ok(Dispatcher::new(
    config,
    Arc::new(registry),
    Arc::new(router),
  ))
}
