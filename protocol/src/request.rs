use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

fn default_message_version() -> String {
  "1.0".to_string()
}

/// Identity of the calling agent. Informational only; never used for routing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentInfo {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub alias: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
}

/// A parameter value as it arrives on the wire, before any coercion.
///
/// Variant order matters: untagged deserialization tries top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
  Bool(bool),
  Number(serde_json::Number),
  Text(String),
  List(Vec<RawValue>),
  Null,
}

impl Default for RawValue {
  fn default() -> Self {
    RawValue::Null
  }
}

impl RawValue {
  /// Human-readable tag for error messages.
  pub fn kind(&self) -> &'static str {
    match self {
      RawValue::Bool(_) => "boolean",
      RawValue::Number(_) => "number",
      RawValue::Text(_) => "text",
      RawValue::List(_) => "list",
      RawValue::Null => "null",
    }
  }
}

/// One entry of the wire parameter list.
///
/// The `type` field is the caller's own assertion and is not trusted;
/// validation coerces against the declared schema instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestParameter {
  pub name: String,
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub param_type: Option<String>,
  #[serde(default)]
  pub value: RawValue,
}

/// Invocation event sent by the agent runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationRequest {
  #[serde(default = "default_message_version")]
  pub message_version: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub agent: Option<AgentInfo>,
  pub action_group: String,
  pub function: String,
  #[serde(default)]
  pub parameters: Vec<RequestParameter>,
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub session_attributes: BTreeMap<String, String>,
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub prompt_session_attributes: BTreeMap<String, String>,
}

impl InvocationRequest {
  pub fn new(action_group: impl Into<String>, function: impl Into<String>) -> Self {
    Self {
      message_version: default_message_version(),
      agent: None,
      action_group: action_group.into(),
      function: function.into(),
      parameters: Vec::new(),
      session_attributes: BTreeMap::new(),
      prompt_session_attributes: BTreeMap::new(),
    }
  }

  pub fn with_parameter(mut self, name: impl Into<String>, value: RawValue) -> Self {
    self.parameters.push(RequestParameter {
      name: name.into(),
      param_type: None,
      value,
    });
    self
  }

  /// Fold the wire parameter list into a name -> value map.
  /// On duplicate names the last entry wins.
  pub fn parameter_map(&self) -> BTreeMap<&str, &RawValue> {
    self
      .parameters
      .iter()
      .map(|p| (p.name.as_str(), &p.value))
      .collect()
  }
}
