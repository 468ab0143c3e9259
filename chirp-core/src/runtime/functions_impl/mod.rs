/// Builtin handlers organized by category.
/// Each handler receives its already bound arguments and returns the call's value.
pub mod collections;
pub mod context;
pub mod date;
pub mod text;

use anyhow::Result;

use super::call::CallContext;
use super::params::Bound;
use super::value::Value;

/// Type alias for builtin handler functions
pub type FunctionImpl = fn(&mut CallContext<'_>, Bound) -> Result<Value>;

pub fn boolean(_ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    Ok(Value::from(args.variant(0).to_boolean()))
}

pub fn false_value(_ctx: &mut CallContext<'_>, _args: Bound) -> Result<Value> {
    Ok(Value::from(false))
}
