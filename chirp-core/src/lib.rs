//! Builtin-function runtime for the client scripting language.
//!
//! Scripts call builtins by name with loosely typed arguments. The [`Engine`]
//! resolves the name, binds the arguments against the function's declared
//! [`Signature`] and runs the handler against an application-provided
//! [`Host`].

mod runtime;

pub use crate::runtime::{
    bind, optional, required, Arg, Array, BindingError, Bound, CallContext, CallError,
    CallOutcome, CallSite, Console, ContextId, Engine, EngineOptions, Entry, Function,
    FunctionImpl, Host, Map, Param, ParamKind, Signature, StaticHost, Value, Window, WindowId,
    WindowKind,
};
