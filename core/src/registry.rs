use std::collections::HashMap;

use actionkit_protocol::FunctionSpec;
use serde_json::{Map, Value, json};

use crate::error::{DispatchError, DispatchResult};

/// Declared function specifications, keyed by name.
///
/// Populated once at startup and read-only afterwards, so shared references
/// can be handed to concurrent dispatches without locking.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
  specs: HashMap<String, FunctionSpec>,
  order: Vec<String>,
}

impl SchemaRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a registry from a schema declaration.
  pub fn from_specs(specs: impl IntoIterator<Item = FunctionSpec>) -> DispatchResult<Self> {
    let mut registry = Self::new();
    for spec in specs {
      registry.register(spec)?;
    }
    Ok(registry)
  }

  pub fn register(&mut self, spec: FunctionSpec) -> DispatchResult<()> {
    if self.specs.contains_key(&spec.name) {
      return Err(DispatchError::DuplicateFunction(spec.name));
    }
    self.order.push(spec.name.clone());
    self.specs.insert(spec.name.clone(), spec);
    Ok(())
  }

  pub fn lookup(&self, name: &str) -> DispatchResult<&FunctionSpec> {
    self
      .specs
      .get(name)
      .ok_or_else(|| DispatchError::UnknownFunction(name.to_string()))
  }

  pub fn contains(&self, name: &str) -> bool {
    self.specs.contains_key(name)
  }

  /// Specs in registration order.
  pub fn list(&self) -> impl Iterator<Item = &FunctionSpec> {
    self.order.iter().filter_map(|name| self.specs.get(name))
  }

  /// Render the registry as the function-schema document advertised to the
  /// agent's model.
  pub fn function_schema(&self) -> Value {
    let functions: Vec<Value> = self
      .list()
      .map(|spec| {
        let mut parameters = Map::new();
        for param in &spec.parameters {
          let mut decl = Map::new();
          decl.insert("type".to_string(), json!(param.param_type));
          decl.insert("required".to_string(), json!(param.required));
          if let Some(description) = &param.description {
            decl.insert("description".to_string(), json!(description));
          }
          parameters.insert(param.name.clone(), Value::Object(decl));
        }
        json!({
          "name": spec.name,
          "description": spec.description,
          "parameters": parameters,
        })
      })
      .collect();

    json!({ "functions": functions })
  }
}
