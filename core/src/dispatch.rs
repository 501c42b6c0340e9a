// Dispatcher
// Single entry point: one invocation event in, one response envelope out

use std::sync::Arc;

use actionkit_config::Config;
use actionkit_protocol::{InvocationRequest, InvocationResponse};
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::DispatchError;
use crate::format;
use crate::registry::SchemaRegistry;
use crate::router::HandlerRouter;
use crate::validation::RequestValidator;

/// Orchestrates parse -> validate -> route -> invoke -> format.
///
/// Constructed with an already-populated registry and router; holds no
/// mutable state, so one instance serves concurrent invocations. Every
/// failure at every stage is converted into a response envelope — the
/// caller never sees a raw error.
pub struct Dispatcher {
  action_group: String,
  message_version: String,
  validator: RequestValidator,
  router: Arc<HandlerRouter>,
}

impl std::fmt::Debug for Dispatcher {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Dispatcher")
      .field("action_group", &self.action_group)
      .field("message_version", &self.message_version)
      .finish_non_exhaustive()
  }
}

impl Dispatcher {
  pub fn new(config: &Config, registry: Arc<SchemaRegistry>, router: Arc<HandlerRouter>) -> Self {
    Self {
      action_group: config.action_group.name.clone(),
      message_version: config.dispatch.message_version.clone(),
      validator: RequestValidator::new(registry, config.dispatch.unknown_parameters),
      router,
    }
  }

  /// Handle one raw JSON event.
  pub fn handle_json(&self, raw: &str) -> InvocationResponse {
    match serde_json::from_str::<Value>(raw) {
      Ok(value) => self.handle_value(value),
      Err(err) => self.malformed(&Value::Null, err.to_string()),
    }
  }

  /// Handle one already-parsed JSON event.
  pub fn handle_value(&self, value: Value) -> InvocationResponse {
    match serde_json::from_value::<InvocationRequest>(value.clone()) {
      Ok(request) => self.handle(request),
      Err(err) => self.malformed(&value, err.to_string()),
    }
  }

  /// Handle one structured invocation request.
  pub fn handle(&self, request: InvocationRequest) -> InvocationResponse {
    let call_id = Uuid::new_v4();
    let agent = request
      .agent
      .as_ref()
      .and_then(|a| a.name.as_deref())
      .unwrap_or("unknown");
    info!(%call_id, agent, function = %request.function, "invocation received");
    debug!(%call_id, ?request, "received event");

    if request.action_group != self.action_group {
      warn!(
        %call_id,
        got = %request.action_group,
        expected = %self.action_group,
        "action group mismatch; routing by function name"
      );
    }

    let response = match self.dispatch(&request) {
      Ok(body) => format::success(&request, body),
      Err(error) => {
        warn!(%call_id, %error, "dispatch failed");
        format::failure(&request, &error)
      }
    };

    debug!(%call_id, ?response, "sending response");
    response
  }

  fn dispatch(&self, request: &InvocationRequest) -> Result<String, DispatchError> {
    let call = self.validator.validate(request)?;
    self.router.route(&call)
  }

  // Salvage whatever identifiers the raw event carries so the echo holds
  // as far as the input allows.
  fn malformed(&self, value: &Value, detail: String) -> InvocationResponse {
    let action_group = value
      .get("actionGroup")
      .and_then(Value::as_str)
      .unwrap_or_default();
    let function = value
      .get("function")
      .and_then(Value::as_str)
      .unwrap_or_default();
    let message_version = value
      .get("messageVersion")
      .and_then(Value::as_str)
      .unwrap_or(self.message_version.as_str());

    let error = DispatchError::MalformedRequest(detail);
    warn!(%error, "rejecting malformed event");
    format::failure_raw(message_version, action_group, function, &error)
  }
}
