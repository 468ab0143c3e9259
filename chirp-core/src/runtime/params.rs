use std::fmt;

use super::error::BindingError;
use super::value::{Value, NOTHING};

/// How a raw argument is coerced before the handler sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Integer coercion, negative values saturate to 0.
    Unsigned,
    Signed,
    String,
    NonEmptyString,
    Boolean,
    /// Any value, passed through untouched.
    Variant,
}

impl ParamKind {
    pub fn describe(self) -> &'static str {
        match self {
            ParamKind::Unsigned => "uint",
            ParamKind::Signed => "int",
            ParamKind::String => "string",
            ParamKind::NonEmptyString => "non-empty string",
            ParamKind::Boolean => "boolean",
            ParamKind::Variant => "variant",
        }
    }

    fn zero(self) -> Arg {
        match self {
            ParamKind::Unsigned => Arg::Unsigned(0),
            ParamKind::Signed => Arg::Signed(0),
            ParamKind::String | ParamKind::NonEmptyString => Arg::Text(String::new()),
            ParamKind::Boolean => Arg::Boolean(false),
            ParamKind::Variant => Arg::Variant(Value::Nothing),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
}

pub const fn required(name: &'static str, kind: ParamKind) -> Param {
    Param {
        name,
        kind,
        required: true,
    }
}

pub const fn optional(name: &'static str, kind: ParamKind) -> Param {
    Param {
        name,
        kind,
        required: false,
    }
}

/// Declared parameters of one function, consumed in order.
///
/// A variadic signature binds its declared parameters positionally and hands
/// every remaining argument to the handler untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    pub params: &'static [Param],
    pub variadic: bool,
}

impl Signature {
    pub const fn fixed(params: &'static [Param]) -> Self {
        Self {
            params,
            variadic: false,
        }
    }

    pub const fn variadic(params: &'static [Param]) -> Self {
        Self {
            params,
            variadic: true,
        }
    }

    pub const fn none() -> Self {
        Self::fixed(&[])
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, param) in self.params.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            if param.required {
                write!(f, "<{}:{}>", param.name, param.kind.describe())?;
            } else {
                write!(f, "[{}:{}]", param.name, param.kind.describe())?;
            }
        }
        if self.variadic {
            if !self.params.is_empty() {
                write!(f, ", ")?;
            }
            write!(f, "...")?;
        }
        write!(f, ")")
    }
}

/// One coerced argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Unsigned(u64),
    Signed(i64),
    Text(String),
    Boolean(bool),
    Variant(Value),
}

impl Arg {
    fn coerce(param: &Param, value: Value) -> Result<Self, BindingError> {
        Ok(match param.kind {
            ParamKind::Unsigned => Arg::Unsigned(u64::try_from(value.to_integer()).unwrap_or(0)),
            ParamKind::Signed => Arg::Signed(value.to_integer()),
            ParamKind::String => Arg::Text(into_text(value)),
            ParamKind::NonEmptyString => {
                let text = into_text(value);
                if text.is_empty() {
                    return Err(BindingError::EmptyStringNotAllowed {
                        parameter: param.name,
                    });
                }
                Arg::Text(text)
            }
            ParamKind::Boolean => Arg::Boolean(value.to_boolean()),
            ParamKind::Variant => Arg::Variant(value),
        })
    }
}

fn into_text(value: Value) -> String {
    match value {
        Value::Scalar(text) => text,
        other => other.to_text(),
    }
}

/// Arguments after binding: one coerced slot per declared parameter plus the
/// untouched remainder of a variadic call.
#[derive(Debug, Clone, PartialEq)]
pub struct Bound {
    args: Vec<Arg>,
    supplied: usize,
    rest: Vec<Value>,
}

impl Bound {
    /// Whether the caller passed the declared parameter at `index`.
    pub fn is_supplied(&self, index: usize) -> bool {
        index < self.supplied
    }

    /// Number of declared parameters the caller passed.
    pub fn supplied(&self) -> usize {
        self.supplied
    }

    pub fn arg(&self, index: usize) -> Option<&Arg> {
        self.args.get(index)
    }

    pub fn unsigned(&self, index: usize) -> u64 {
        match self.args.get(index) {
            Some(Arg::Unsigned(value)) => *value,
            _ => 0,
        }
    }

    pub fn signed(&self, index: usize) -> i64 {
        match self.args.get(index) {
            Some(Arg::Signed(value)) => *value,
            _ => 0,
        }
    }

    pub fn text(&self, index: usize) -> &str {
        match self.args.get(index) {
            Some(Arg::Text(value)) => value,
            _ => "",
        }
    }

    pub fn boolean(&self, index: usize) -> bool {
        matches!(self.args.get(index), Some(Arg::Boolean(true)))
    }

    pub fn variant(&self, index: usize) -> &Value {
        match self.args.get(index) {
            Some(Arg::Variant(value)) => value,
            _ => &NOTHING,
        }
    }

    /// Arguments beyond the declared ones of a variadic signature.
    pub fn rest(&self) -> &[Value] {
        &self.rest
    }

    pub fn into_rest(self) -> Vec<Value> {
        self.rest
    }
}

/// Binds raw call arguments against `signature`.
///
/// Omitted optional parameters take their kind's zero value. Arguments past
/// the declared list are dropped unless the signature is variadic.
pub fn bind(signature: &Signature, args: Vec<Value>) -> Result<Bound, BindingError> {
    let supplied = args.len().min(signature.params.len());
    let mut raw = args.into_iter();
    let mut bound = Vec::with_capacity(signature.params.len());

    for param in signature.params {
        let arg = match raw.next() {
            Some(value) => Arg::coerce(param, value)?,
            None if param.required => {
                return Err(BindingError::MissingRequiredArgument {
                    parameter: param.name,
                })
            }
            None => param.kind.zero(),
        };
        bound.push(arg);
    }

    let rest = if signature.variadic {
        raw.collect()
    } else {
        Vec::new()
    };

    Ok(Bound {
        args: bound,
        supplied,
        rest,
    })
}
