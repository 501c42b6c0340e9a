// Response Formatting
// Every outcome becomes a well-formed envelope echoing the request identifiers

use actionkit_protocol::{InvocationRequest, InvocationResponse, ResponseState};

use crate::error::DispatchError;

/// Wrap a handler result into the response envelope.
pub fn success(request: &InvocationRequest, body: impl Into<String>) -> InvocationResponse {
  InvocationResponse::text(
    request.message_version.as_str(),
    request.action_group.as_str(),
    request.function.as_str(),
    body,
  )
}

/// Wrap any failure into the same envelope shape, so the calling agent can
/// reason about it in-conversation instead of seeing a raw error.
pub fn failure(request: &InvocationRequest, error: &DispatchError) -> InvocationResponse {
  failure_raw(
    request.message_version.as_str(),
    request.action_group.as_str(),
    request.function.as_str(),
    error,
  )
}

/// Failure envelope from bare identifiers, for events that never parsed into
/// a request.
pub fn failure_raw(
  message_version: &str,
  action_group: &str,
  function: &str,
  error: &DispatchError,
) -> InvocationResponse {
  InvocationResponse::error(
    message_version,
    action_group,
    function,
    error.to_string(),
    state_for(error),
  )
}

fn state_for(error: &DispatchError) -> ResponseState {
  if error.is_contract_violation() {
    ResponseState::Reprompt
  } else {
    ResponseState::Failure
  }
}
