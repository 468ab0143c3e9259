mod call;
mod engine;
mod error;
mod functions;
mod functions_impl;
mod host;
mod params;
mod value;

pub use call::{CallContext, CallOutcome, CallSite};
pub use engine::{Engine, EngineOptions, Entry};
pub use error::{BindingError, CallError};
pub use functions::Function;
pub use functions_impl::FunctionImpl;
pub use host::{Console, ContextId, Host, StaticHost, Window, WindowId, WindowKind};
pub use params::{bind, optional, required, Arg, Bound, Param, ParamKind, Signature};
pub use value::{Array, Map, Value};
