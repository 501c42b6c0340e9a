//! Dispatch error types

use actionkit_protocol::ParamType;
use thiserror::Error;

/// Failures surfaced to the calling agent.
///
/// Everything except `HandlerExecution` is a deterministic contract
/// violation between the agent and the declared schema.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
  /// The event was not structurally valid
  #[error("malformed request: {0}")]
  MalformedRequest(String),

  /// The requested function is not declared in the schema
  #[error("unknown function: {0}")]
  UnknownFunction(String),

  /// A required parameter was absent
  #[error("missing required parameter: {0}")]
  MissingParameter(String),

  /// A supplied parameter is not declared in the schema
  #[error("unknown parameter: {0}")]
  UnknownParameter(String),

  /// A supplied value could not be coerced to the declared type
  #[error("parameter {name} must be of type {expected}")]
  TypeMismatch { name: String, expected: ParamType },

  /// The function is declared but has no bound implementation
  #[error("no handler registered for function: {0}")]
  NoHandlerRegistered(String),

  /// The handler itself failed
  #[error("function {function} failed: {message}")]
  HandlerExecution { function: String, message: String },

  /// Registration-time name collision
  #[error("duplicate function: {0}")]
  DuplicateFunction(String),
}

impl DispatchError {
  /// Contract violations can be corrected by the agent reformulating its
  /// call; handler execution failures cannot.
  pub fn is_contract_violation(&self) -> bool {
    !matches!(self, DispatchError::HandlerExecution { .. })
  }
}

/// Alias for Result<T, DispatchError>
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;

/// Failure raised inside a handler implementation, e.g. a downstream
/// dependency error. The router wraps it into
/// [`DispatchError::HandlerExecution`].
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HandlerError {
  message: String,
}

impl HandlerError {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}
