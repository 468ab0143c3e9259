use anyhow::Result;

use crate::runtime::call::CallContext;
use crate::runtime::params::Bound;
use crate::runtime::value::{Array, Value};

/// Every argument becomes one element, in call order.
pub fn array(_ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    let array: Array = args.into_rest().into_iter().collect();
    Ok(Value::Array(array))
}

/// Concatenates arrays and map values; scalars and nothing are kept as one
/// element each. A hole in a sparse array stays a hole: it takes up its
/// index in the output but is never set.
pub fn flatten(_ctx: &mut CallContext<'_>, args: Bound) -> Result<Value> {
    let mut flat = Array::new();
    let mut next = 0;
    for value in args.into_rest() {
        match value {
            Value::Nothing | Value::Scalar(_) => {
                flat.set(next, value);
                next += 1;
            }
            Value::Array(inner) => {
                for (offset, element) in inner.iter() {
                    flat.set(next + offset, element.clone());
                }
                next += inner.size();
            }
            Value::Map(inner) => {
                for element in inner.into_values() {
                    flat.set(next, element);
                    next += 1;
                }
            }
        }
    }
    Ok(Value::Array(flat))
}
