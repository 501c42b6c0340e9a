// Actionkit Configuration System
// Out-of-band declaration of the action group and its function schema

pub mod loader;
pub mod types;

pub use loader::{load, load_or_default, parse};
pub use types::{
  ActionGroupConfig, Config, DispatchConfig, UnknownParamPolicy, builtin_functions,
};
