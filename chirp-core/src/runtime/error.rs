use chirp_support::{empty_argument, missing_argument};
use thiserror::Error;

/// Raised by the binder when the arguments do not satisfy a signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("{}", missing_argument(.parameter))]
    MissingRequiredArgument { parameter: &'static str },
    #[error("{}", empty_argument(.parameter))]
    EmptyStringNotAllowed { parameter: &'static str },
}

/// A hard failure: the call produced no value.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("unknown function '${0}'")]
    UnknownFunction(String),
    #[error("${function}: {error}")]
    Binding {
        function: String,
        error: BindingError,
    },
    #[error("${function}: {error:#}")]
    Handler {
        function: String,
        error: anyhow::Error,
    },
}

impl CallError {
    pub fn binding_error(&self) -> Option<&BindingError> {
        match self {
            CallError::Binding { error, .. } => Some(error),
            _ => None,
        }
    }
}
