use crate::error::HandlerError;
use crate::router::ActionHandler;
use crate::validation::ValidatedCall;

/// Greets the caller by name.
pub struct GreetHandler;

impl ActionHandler for GreetHandler {
  fn handle(&self, call: &ValidatedCall) -> Result<String, HandlerError> {
    let first_name = call
      .str_arg("first_name")
      .ok_or_else(|| HandlerError::new("first_name absent from validated call"))?;

    Ok(match call.str_arg("last_name") {
      Some(last_name) => format!("Hello {first_name} {last_name}!"),
      None => format!("Hello {first_name}!"),
    })
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use actionkit_config::{UnknownParamPolicy, builtin_functions};
  use actionkit_protocol::{InvocationRequest, RawValue};

  use super::*;
  use crate::registry::SchemaRegistry;
  use crate::validation::RequestValidator;

  fn greet_call(request: InvocationRequest) -> ValidatedCall {
    let registry = SchemaRegistry::from_specs(builtin_functions()).expect("registry");
    RequestValidator::new(Arc::new(registry), UnknownParamPolicy::Reject)
      .validate(&request)
      .expect("validate")
  }

  #[test]
  fn greets_with_first_name_only() {
    let request = InvocationRequest::new("action-group", "greet")
      .with_parameter("first_name", RawValue::Text("Ada".to_string()));

    let body = GreetHandler.handle(&greet_call(request)).expect("handle");
    assert_eq!(body, "Hello Ada!");
  }

  #[test]
  fn appends_last_name_when_supplied() {
    let request = InvocationRequest::new("action-group", "greet")
      .with_parameter("first_name", RawValue::Text("Ada".to_string()))
      .with_parameter("last_name", RawValue::Text("Lovelace".to_string()));

    let body = GreetHandler.handle(&greet_call(request)).expect("handle");
    assert_eq!(body, "Hello Ada Lovelace!");
  }
}
