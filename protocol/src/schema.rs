use std::fmt;

use serde::{Deserialize, Serialize};

/// Value types a declared parameter can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
  String,
  Integer,
  Number,
  Boolean,
  Array,
}

impl fmt::Display for ParamType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let token = match self {
      ParamType::String => "string",
      ParamType::Integer => "integer",
      ParamType::Number => "number",
      ParamType::Boolean => "boolean",
      ParamType::Array => "array",
    };
    f.write_str(token)
  }
}

/// One declared parameter of a callable function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSpec {
  pub name: String,
  #[serde(rename = "type")]
  pub param_type: ParamType,
  #[serde(default)]
  pub required: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

impl ParameterSpec {
  pub fn new(name: impl Into<String>, param_type: ParamType) -> Self {
    Self {
      name: name.into(),
      param_type,
      required: false,
      description: None,
    }
  }

  pub fn required(mut self) -> Self {
    self.required = true;
    self
  }

  pub fn describe(mut self, text: impl Into<String>) -> Self {
    self.description = Some(text.into());
    self
  }
}

/// Declared contract for one callable function.
///
/// Parameter declaration order is preserved; required-parameter checks walk
/// the list front to back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSpec {
  pub name: String,
  pub description: String,
  #[serde(default)]
  pub parameters: Vec<ParameterSpec>,
}

impl FunctionSpec {
  pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      description: description.into(),
      parameters: Vec::new(),
    }
  }

  pub fn with_param(mut self, param: ParameterSpec) -> Self {
    self.parameters.push(param);
    self
  }

  pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
    self.parameters.iter().find(|p| p.name == name)
  }
}
