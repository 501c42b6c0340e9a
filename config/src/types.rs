// Configuration Types
// All configuration type definitions

use actionkit_protocol::{FunctionSpec, ParamType, ParameterSpec};
use serde::{Deserialize, Serialize};

fn default_message_version() -> String {
  "1.0".to_string()
}

/// How to treat request parameters that are not declared in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownParamPolicy {
  /// Fail the call with an unknown-parameter error.
  #[default]
  Reject,
  /// Drop the value silently; the handler never sees it.
  Ignore,
}

/// Identity of the action group advertised to the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionGroupConfig {
  pub name: String,
  #[serde(default)]
  pub description: String,
}

impl Default for ActionGroupConfig {
  fn default() -> Self {
    Self {
      name: "action-group".to_string(),
      description: "Actions exposed to the conversational agent".to_string(),
    }
  }
}

/// Dispatch behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
  /// Unknown-parameter handling
  #[serde(default)]
  pub unknown_parameters: UnknownParamPolicy,
  /// Protocol version echoed when the request carries none
  #[serde(default = "default_message_version")]
  pub message_version: String,
}

impl Default for DispatchConfig {
  fn default() -> Self {
    Self {
      unknown_parameters: UnknownParamPolicy::default(),
      message_version: default_message_version(),
    }
  }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
  /// Action group identity
  #[serde(default)]
  pub action_group: ActionGroupConfig,
  /// Dispatch settings
  #[serde(default)]
  pub dispatch: DispatchConfig,
  /// Declared function schema, in declaration order
  #[serde(default)]
  pub functions: Vec<FunctionSpec>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      action_group: ActionGroupConfig::default(),
      dispatch: DispatchConfig::default(),
      functions: builtin_functions(),
    }
  }
}

/// Schema entries shipped with the built-in handlers.
pub fn builtin_functions() -> Vec<FunctionSpec> {
  vec![
    FunctionSpec::new("greet", "Greet the user by name")
      .with_param(
        ParameterSpec::new("first_name", ParamType::String)
          .required()
          .describe("First name of the user"),
      )
      .with_param(
        ParameterSpec::new("last_name", ParamType::String).describe("Last name of the user"),
      ),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_config_declares_builtin_schema() {
    let config = Config::default();
    assert_eq!(config.action_group.name, "action-group");
    assert_eq!(config.dispatch.unknown_parameters, UnknownParamPolicy::Reject);
    assert!(config.functions.iter().any(|f| f.name == "greet"));
  }
}
