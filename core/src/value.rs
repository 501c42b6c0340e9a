// Parameter Coercion
// Explicit conversion from raw wire values to declared types

use actionkit_protocol::{ParamType, RawValue};

use crate::error::{DispatchError, DispatchResult};

/// A parameter value after coercion against its declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
  Str(String),
  Int(i64),
  Num(f64),
  Bool(bool),
  List(Vec<String>),
}

impl ParamValue {
  pub fn as_str(&self) -> Option<&str> {
    match self {
      ParamValue::Str(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_int(&self) -> Option<i64> {
    match self {
      ParamValue::Int(n) => Some(*n),
      _ => None,
    }
  }

  pub fn as_num(&self) -> Option<f64> {
    match self {
      ParamValue::Num(n) => Some(*n),
      ParamValue::Int(n) => Some(*n as f64),
      _ => None,
    }
  }

  pub fn as_bool(&self) -> Option<bool> {
    match self {
      ParamValue::Bool(b) => Some(*b),
      _ => None,
    }
  }

  pub fn as_list(&self) -> Option<&[String]> {
    match self {
      ParamValue::List(items) => Some(items),
      _ => None,
    }
  }
}

/// Coerce a raw wire value to the declared parameter type.
///
/// A null value behaves like empty text: present, but only meaningful for
/// types where empty input is valid.
pub fn coerce(name: &str, raw: &RawValue, expected: ParamType) -> DispatchResult<ParamValue> {
  let empty = RawValue::Text(String::new());
  let raw = if matches!(raw, RawValue::Null) {
    &empty
  } else {
    raw
  };

  match expected {
    ParamType::String => coerce_string(name, raw),
    ParamType::Integer => coerce_integer(name, raw),
    ParamType::Number => coerce_number(name, raw),
    ParamType::Boolean => coerce_boolean(name, raw),
    ParamType::Array => coerce_array(name, raw),
  }
}

fn mismatch(name: &str, expected: ParamType) -> DispatchError {
  DispatchError::TypeMismatch {
    name: name.to_string(),
    expected,
  }
}

fn coerce_string(name: &str, raw: &RawValue) -> DispatchResult<ParamValue> {
  match raw {
    RawValue::Text(text) => Ok(ParamValue::Str(text.clone())),
    RawValue::Number(n) => Ok(ParamValue::Str(n.to_string())),
    RawValue::Bool(b) => Ok(ParamValue::Str(b.to_string())),
    _ => Err(mismatch(name, ParamType::String)),
  }
}

fn coerce_integer(name: &str, raw: &RawValue) -> DispatchResult<ParamValue> {
  match raw {
    RawValue::Text(text) => text
      .trim()
      .parse::<i64>()
      .map(ParamValue::Int)
      .map_err(|_| mismatch(name, ParamType::Integer)),
    RawValue::Number(n) => n
      .as_i64()
      .map(ParamValue::Int)
      .ok_or_else(|| mismatch(name, ParamType::Integer)),
    _ => Err(mismatch(name, ParamType::Integer)),
  }
}

fn coerce_number(name: &str, raw: &RawValue) -> DispatchResult<ParamValue> {
  match raw {
    RawValue::Text(text) => text
      .trim()
      .parse::<f64>()
      .map(ParamValue::Num)
      .map_err(|_| mismatch(name, ParamType::Number)),
    RawValue::Number(n) => n
      .as_f64()
      .map(ParamValue::Num)
      .ok_or_else(|| mismatch(name, ParamType::Number)),
    _ => Err(mismatch(name, ParamType::Number)),
  }
}

fn coerce_boolean(name: &str, raw: &RawValue) -> DispatchResult<ParamValue> {
  match raw {
    RawValue::Bool(b) => Ok(ParamValue::Bool(*b)),
    RawValue::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
      "true" | "yes" | "1" => Ok(ParamValue::Bool(true)),
      "false" | "no" | "0" => Ok(ParamValue::Bool(false)),
      _ => Err(mismatch(name, ParamType::Boolean)),
    },
    RawValue::Number(n) => match n.as_i64() {
      Some(1) => Ok(ParamValue::Bool(true)),
      Some(0) => Ok(ParamValue::Bool(false)),
      _ => Err(mismatch(name, ParamType::Boolean)),
    },
    _ => Err(mismatch(name, ParamType::Boolean)),
  }
}

fn coerce_array(name: &str, raw: &RawValue) -> DispatchResult<ParamValue> {
  match raw {
    RawValue::List(items) => {
      let mut out = Vec::with_capacity(items.len());
      for item in items {
        match item {
          RawValue::Text(text) => out.push(text.clone()),
          RawValue::Number(n) => out.push(n.to_string()),
          RawValue::Bool(b) => out.push(b.to_string()),
          _ => return Err(mismatch(name, ParamType::Array)),
        }
      }
      Ok(ParamValue::List(out))
    }
    RawValue::Text(text) => coerce_array_text(name, text.trim()),
    _ => Err(mismatch(name, ParamType::Array)),
  }
}

// Text arrays arrive either as a JSON array literal or comma-delimited.
fn coerce_array_text(name: &str, text: &str) -> DispatchResult<ParamValue> {
  if text.is_empty() {
    return Ok(ParamValue::List(Vec::new()));
  }
  if text.starts_with('[') {
    let items: Vec<serde_json::Value> =
      serde_json::from_str(text).map_err(|_| mismatch(name, ParamType::Array))?;
    let mut out = Vec::with_capacity(items.len());
    for item in items {
      match item {
        serde_json::Value::String(s) => out.push(s),
        serde_json::Value::Number(n) => out.push(n.to_string()),
        serde_json::Value::Bool(b) => out.push(b.to_string()),
        _ => return Err(mismatch(name, ParamType::Array)),
      }
    }
    return Ok(ParamValue::List(out));
  }
  Ok(ParamValue::List(
    text.split(',').map(|item| item.trim().to_string()).collect(),
  ))
}
