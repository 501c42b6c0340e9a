// End-to-end dispatch scenarios: one event in, one envelope out,
// identifiers echoed on every path.

use std::sync::Arc;

use actionkit_config::{Config, UnknownParamPolicy};
use actionkit_core::{
  ActionHandler, Dispatcher, HandlerError, HandlerRouter, SchemaRegistry, ValidatedCall,
  build_dispatcher,
};
use actionkit_protocol::{
  FunctionSpec, InvocationResponse, ParamType, ParameterSpec, ResponseState,
};
use pretty_assertions::assert_eq;
use serde_json::json;

struct EchoNameHandler;

impl ActionHandler for EchoNameHandler {
  fn handle(&self, call: &ValidatedCall) -> Result<String, HandlerError> {
    let first_name = call
      .str_arg("first_name")
      .ok_or_else(|| HandlerError::new("first_name absent"))?;
    Ok(format!("Hello {first_name}!"))
  }
}

struct BrokenHandler;

impl ActionHandler for BrokenHandler {
  fn handle(&self, _call: &ValidatedCall) -> Result<String, HandlerError> {
    Err(HandlerError::new("lookup service returned 503"))
  }
}

fn action_spec() -> FunctionSpec {
  FunctionSpec::new("do-some-action", "Does some action")
    .with_param(ParameterSpec::new("first_name", ParamType::String).required())
    .with_param(ParameterSpec::new("last_name", ParamType::String))
}

fn dispatcher_with(handler: Arc<dyn ActionHandler>, policy: UnknownParamPolicy) -> Dispatcher {
  let mut config = Config::default();
  config.dispatch.unknown_parameters = policy;

  let registry = SchemaRegistry::from_specs([action_spec()]).expect("registry");
  let mut router = HandlerRouter::new();
  router.register("do-some-action", handler);

  Dispatcher::new(&config, Arc::new(registry), Arc::new(router))
}

fn assert_echo(response: &InvocationResponse, action_group: &str, function: &str) {
  assert_eq!(response.response.action_group, action_group);
  assert_eq!(response.response.function, function);
}

#[test]
fn valid_call_with_optional_parameter_absent_succeeds() {
  let dispatcher = dispatcher_with(Arc::new(EchoNameHandler), UnknownParamPolicy::Reject);

  let response = dispatcher.handle_value(json!({
    "actionGroup": "action-group",
    "function": "do-some-action",
    "parameters": [{ "name": "first_name", "type": "string", "value": "Ada" }]
  }));

  assert_echo(&response, "action-group", "do-some-action");
  assert_eq!(response.body_text(), "Hello Ada!");
  assert_eq!(response.response.function_response.response_state, None);
}

#[test]
fn missing_required_parameter_names_the_first_in_schema_order() {
  let dispatcher = dispatcher_with(Arc::new(EchoNameHandler), UnknownParamPolicy::Reject);

  let response = dispatcher.handle_value(json!({
    "actionGroup": "action-group",
    "function": "do-some-action",
    "parameters": [{ "name": "last_name", "value": "Lovelace" }]
  }));

  assert_echo(&response, "action-group", "do-some-action");
  assert_eq!(
    response.body_text(),
    "missing required parameter: first_name"
  );
  assert_eq!(
    response.response.function_response.response_state,
    Some(ResponseState::Reprompt)
  );
}

#[test]
fn unknown_function_is_an_error_response_not_a_panic() {
  let dispatcher = dispatcher_with(Arc::new(EchoNameHandler), UnknownParamPolicy::Reject);

  let response = dispatcher.handle_value(json!({
    "actionGroup": "action-group",
    "function": "does-not-exist"
  }));

  assert_echo(&response, "action-group", "does-not-exist");
  assert_eq!(response.body_text(), "unknown function: does-not-exist");
}

#[test]
fn undeclared_parameter_is_rejected_or_ignored_by_policy() {
  let event = json!({
    "actionGroup": "action-group",
    "function": "do-some-action",
    "parameters": [
      { "name": "first_name", "value": "Ada" },
      { "name": "nickname", "value": "Countess" }
    ]
  });

  let rejecting = dispatcher_with(Arc::new(EchoNameHandler), UnknownParamPolicy::Reject);
  let response = rejecting.handle_value(event.clone());
  assert_eq!(response.body_text(), "unknown parameter: nickname");

  let ignoring = dispatcher_with(Arc::new(EchoNameHandler), UnknownParamPolicy::Ignore);
  let response = ignoring.handle_value(event);
  assert_eq!(response.body_text(), "Hello Ada!");
}

#[test]
fn handler_failure_still_echoes_identifiers() {
  let dispatcher = dispatcher_with(Arc::new(BrokenHandler), UnknownParamPolicy::Reject);

  let response = dispatcher.handle_value(json!({
    "actionGroup": "action-group",
    "function": "do-some-action",
    "parameters": [{ "name": "first_name", "value": "Ada" }]
  }));

  assert_echo(&response, "action-group", "do-some-action");
  assert_eq!(
    response.body_text(),
    "function do-some-action failed: lookup service returned 503"
  );
  assert_eq!(
    response.response.function_response.response_state,
    Some(ResponseState::Failure)
  );
}

#[test]
fn malformed_event_yields_a_well_formed_envelope() {
  let dispatcher = dispatcher_with(Arc::new(EchoNameHandler), UnknownParamPolicy::Reject);

  // Not JSON at all: identifiers are unsalvageable but the envelope holds.
  let response = dispatcher.handle_json("not json {");
  assert_echo(&response, "", "");
  assert!(response.body_text().starts_with("malformed request:"));

  // Valid JSON missing the function field: actionGroup is salvaged.
  let response = dispatcher.handle_value(json!({ "actionGroup": "action-group" }));
  assert_echo(&response, "action-group", "");
  assert!(response.body_text().starts_with("malformed request:"));
  assert_eq!(
    response.response.function_response.response_state,
    Some(ResponseState::Reprompt)
  );
}

#[test]
fn message_version_is_echoed_from_the_request() {
  let dispatcher = dispatcher_with(Arc::new(EchoNameHandler), UnknownParamPolicy::Reject);

  let response = dispatcher.handle_value(json!({
    "messageVersion": "2.0",
    "actionGroup": "action-group",
    "function": "do-some-action",
    "parameters": [{ "name": "first_name", "value": "Ada" }]
  }));

  assert_eq!(response.message_version, "2.0");
}

#[test]
fn default_config_builds_a_working_greeter() {
  let dispatcher = build_dispatcher(&Config::default()).expect("build dispatcher");

  let response = dispatcher.handle_value(json!({
    "actionGroup": "action-group",
    "function": "greet",
    "parameters": [
      { "name": "first_name", "value": "Ada" },
      { "name": "last_name", "value": "Lovelace" }
    ]
  }));

  assert_eq!(response.body_text(), "Hello Ada Lovelace!");
}

#[test]
fn duplicate_function_declarations_fail_at_build_time() {
  let mut config = Config::default();
  config.functions = vec![action_spec(), action_spec()];

  let err = build_dispatcher(&config).expect_err("build dispatcher");
  assert_eq!(err.to_string(), "duplicate function: do-some-action");
}

#[test]
fn declared_function_without_handler_reports_no_binding() {
  let config = Config::default();
  let registry = SchemaRegistry::from_specs(config.functions.iter().cloned()).expect("registry");
  let router = HandlerRouter::new();
  let dispatcher = Dispatcher::new(&config, Arc::new(registry), Arc::new(router));

  let response = dispatcher.handle_value(json!({
    "actionGroup": "action-group",
    "function": "greet",
    "parameters": [{ "name": "first_name", "value": "Ada" }]
  }));

  assert_eq!(
    response.body_text(),
    "no handler registered for function: greet"
  );
}
