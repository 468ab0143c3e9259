use chirp_core::{Array, Map, Value};
use serde_json::Value as Json;

/// Converts a JSON argument into a script value. `null` is nothing, numbers
/// and booleans become scalars.
pub fn to_value(json: Json) -> Value {
    match json {
        Json::Null => Value::Nothing,
        Json::Bool(flag) => Value::from(flag),
        Json::Number(number) => Value::from(number.to_string()),
        Json::String(text) => Value::from(text),
        Json::Array(items) => Value::Array(items.into_iter().map(to_value).collect::<Array>()),
        Json::Object(entries) => Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key, to_value(value)))
                .collect::<Map>(),
        ),
    }
}

/// Renders a result as JSON. Array holes come out as `null`.
pub fn from_value(value: &Value) -> Json {
    match value {
        Value::Nothing => Json::Null,
        Value::Scalar(text) => Json::String(text.clone()),
        Value::Array(array) => Json::Array(
            (0..array.size())
                .map(|index| from_value(array.get(index)))
                .collect(),
        ),
        Value::Map(map) => Json::Object(
            map.iter()
                .map(|(key, value)| (key.to_string(), from_value(value)))
                .collect(),
        ),
    }
}
