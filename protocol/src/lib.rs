// Actionkit Protocol Layer
// Request/response envelopes and the declared function schema

pub mod request;
pub mod response;
pub mod schema;

pub use request::{AgentInfo, InvocationRequest, RawValue, RequestParameter};
pub use response::{
  ActionResponse, FunctionResponse, InvocationResponse, ResponseBody, ResponseState, TextBody,
};
pub use schema::{FunctionSpec, ParamType, ParameterSpec};
