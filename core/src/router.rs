use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{DispatchError, DispatchResult, HandlerError};
use crate::validation::ValidatedCall;

/// Implementation bound to a function name.
///
/// Handlers receive only validated, coerced parameters and return the
/// textual result the agent consumes. They may block on downstream I/O;
/// timeouts are the hosting runtime's concern.
pub trait ActionHandler: Send + Sync {
  fn handle(&self, call: &ValidatedCall) -> Result<String, HandlerError>;
}

/// Maps validated function names to their implementations.
///
/// Schema declaration and handler registration are deliberately decoupled:
/// a function may be declared before an implementation exists, in which
/// case routing fails with [`DispatchError::NoHandlerRegistered`].
#[derive(Default)]
pub struct HandlerRouter {
  handlers: HashMap<String, Arc<dyn ActionHandler>>,
}

impl HandlerRouter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn register(&mut self, name: impl Into<String>, handler: Arc<dyn ActionHandler>) {
    self.handlers.insert(name.into(), handler);
  }

  pub fn get(&self, name: &str) -> Option<&Arc<dyn ActionHandler>> {
    self.handlers.get(name)
  }

  pub fn route(&self, call: &ValidatedCall) -> DispatchResult<String> {
    let handler = self
      .handlers
      .get(call.function())
      .ok_or_else(|| DispatchError::NoHandlerRegistered(call.function().to_string()))?;

    handler
      .handle(call)
      .map_err(|err| DispatchError::HandlerExecution {
        function: call.function().to_string(),
        message: err.message().to_string(),
      })
  }
}
