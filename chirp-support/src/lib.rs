use std::borrow::Cow;
use std::fmt;

fn escape_single_quotes(input: &str) -> Cow<'_, str> {
    if input.contains('\'') {
        Cow::Owned(input.replace('\'', "\\'"))
    } else {
        Cow::Borrowed(input)
    }
}

fn format_call_message(function: &str, target: Option<&str>, message: impl fmt::Display) -> String {
    match target {
        Some(target) => {
            let escaped = escape_single_quotes(target);
            format!("${function}('{}'): {message}", escaped)
        }
        None => format!("${function}: {message}"),
    }
}

/// Generic warning attached to a call of `function`.
pub fn call_warning(function: &str, message: impl fmt::Display) -> String {
    format_call_message(function, None, message)
}

pub fn no_window_context(function: &str) -> String {
    format_call_message(function, None, "this window has no associated IRC context")
}

pub fn no_such_context(function: &str, context: u64) -> String {
    format_call_message(function, None, format_args!("no such IRC context ({context})"))
}

pub fn invalid_date(function: &str, error: impl fmt::Display) -> String {
    format_call_message(
        function,
        None,
        format_args!("could not construct date/time: {error}"),
    )
}

pub fn decode_error(function: &str, input: &str, error: impl fmt::Display) -> String {
    format_call_message(function, Some(input), format_args!("decoding failed: {error}"))
}

pub fn missing_argument(parameter: &str) -> String {
    format!("missing required argument '{}'", escape_single_quotes(parameter))
}

pub fn empty_argument(parameter: &str) -> String {
    format!(
        "argument '{}' must not be an empty string",
        escape_single_quotes(parameter)
    )
}
