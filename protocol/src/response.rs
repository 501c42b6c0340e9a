use serde::{Deserialize, Serialize};

/// Textual payload slot of a response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBody {
  pub body: String,
}

/// Response body keyed by content tag. Text is the only tag this runtime
/// consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
  #[serde(rename = "TEXT")]
  pub text: TextBody,
}

/// How the agent runtime should treat a failed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseState {
  /// The action itself failed; the agent should not expect a retry to help
  /// without outside intervention.
  Failure,
  /// The call violated the declared contract; the agent may correct its
  /// arguments and call again.
  Reprompt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub response_state: Option<ResponseState>,
  pub response_body: ResponseBody,
}

/// Inner response object echoing the identifiers of the originating request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
  pub action_group: String,
  pub function: String,
  pub function_response: FunctionResponse,
}

/// Complete envelope returned to the agent runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
  pub message_version: String,
  pub response: ActionResponse,
}

impl InvocationResponse {
  /// Successful result: plain text body, no response state.
  pub fn text(
    message_version: impl Into<String>,
    action_group: impl Into<String>,
    function: impl Into<String>,
    body: impl Into<String>,
  ) -> Self {
    Self::build(message_version, action_group, function, body, None)
  }

  /// Failed result: the error text in the same body slot, tagged with how
  /// the agent should proceed.
  pub fn error(
    message_version: impl Into<String>,
    action_group: impl Into<String>,
    function: impl Into<String>,
    body: impl Into<String>,
    state: ResponseState,
  ) -> Self {
    Self::build(message_version, action_group, function, body, Some(state))
  }

  fn build(
    message_version: impl Into<String>,
    action_group: impl Into<String>,
    function: impl Into<String>,
    body: impl Into<String>,
    response_state: Option<ResponseState>,
  ) -> Self {
    Self {
      message_version: message_version.into(),
      response: ActionResponse {
        action_group: action_group.into(),
        function: function.into(),
        function_response: FunctionResponse {
          response_state,
          response_body: ResponseBody {
            text: TextBody { body: body.into() },
          },
        },
      },
    }
  }

  pub fn body_text(&self) -> &str {
    &self.response.function_response.response_body.text.body
  }
}
