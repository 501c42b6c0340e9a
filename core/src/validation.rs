use std::collections::BTreeMap;
use std::sync::Arc;

use actionkit_config::UnknownParamPolicy;
use actionkit_protocol::InvocationRequest;

use crate::error::{DispatchError, DispatchResult};
use crate::registry::SchemaRegistry;
use crate::value::{ParamValue, coerce};

/// A call that passed schema validation.
///
/// Holds exactly the parameters the schema accepts: required ones always,
/// optional ones only when supplied and valid. Only the validator can
/// construct one.
#[derive(Debug, Clone)]
pub struct ValidatedCall {
  function: String,
  values: BTreeMap<String, ParamValue>,
}

impl ValidatedCall {
  pub fn function(&self) -> &str {
    &self.function
  }

  pub fn get(&self, name: &str) -> Option<&ParamValue> {
    self.values.get(name)
  }

  pub fn str_arg(&self, name: &str) -> Option<&str> {
    self.values.get(name).and_then(ParamValue::as_str)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.values.contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}

/// Checks an incoming invocation against the declared schema and produces
/// the coerced call the router consumes.
///
/// Validation is strict and fails fast: the first violation aborts the call
/// before any handler runs.
pub struct RequestValidator {
  registry: Arc<SchemaRegistry>,
  unknown_parameters: UnknownParamPolicy,
}

impl RequestValidator {
  pub fn new(registry: Arc<SchemaRegistry>, unknown_parameters: UnknownParamPolicy) -> Self {
    Self {
      registry,
      unknown_parameters,
    }
  }

  pub fn registry(&self) -> &SchemaRegistry {
    &self.registry
  }

  pub fn validate(&self, request: &InvocationRequest) -> DispatchResult<ValidatedCall> {
    let spec = self.registry.lookup(&request.function)?;
    let supplied = request.parameter_map();

    // Required parameters, checked in declaration order. A key present with
    // an empty or null value counts as present; coercion decides its fate.
    for param in spec.parameters.iter().filter(|p| p.required) {
      if !supplied.contains_key(param.name.as_str()) {
        return Err(DispatchError::MissingParameter(param.name.clone()));
      }
    }

    // Undeclared parameters, checked in wire order.
    for supplied_param in &request.parameters {
      if spec.parameter(&supplied_param.name).is_none() {
        match self.unknown_parameters {
          UnknownParamPolicy::Reject => {
            return Err(DispatchError::UnknownParameter(supplied_param.name.clone()));
          }
          UnknownParamPolicy::Ignore => {}
        }
      }
    }

    let mut values = BTreeMap::new();
    for param in &spec.parameters {
      if let Some(raw) = supplied.get(param.name.as_str()).copied() {
        let value = coerce(&param.name, raw, param.param_type)?;
        values.insert(param.name.clone(), value);
      }
    }

    Ok(ValidatedCall {
      function: spec.name.clone(),
      values,
    })
  }
}
