use std::fmt;

use indexmap::IndexMap;

pub(crate) static NOTHING: Value = Value::Nothing;

/// A script value.
///
/// Numbers and booleans are scalars whose numeric view is computed on
/// demand. Cloning a value deep-copies any nested array or map.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Nothing,
    Scalar(String),
    Array(Array),
    Map(Map),
}

impl Value {
    pub fn is_nothing(&self) -> bool {
        matches!(self, Value::Nothing)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nothing => "nothing",
            Value::Scalar(_) => "scalar",
            Value::Array(_) => "array",
            Value::Map(_) => "hash",
        }
    }

    /// Integer view: optional sign and leading digits, 0 when there are none.
    pub fn to_integer(&self) -> i64 {
        match self {
            Value::Nothing => 0,
            Value::Scalar(text) => parse_integer(text),
            Value::Array(array) => saturating_i64(array.size()),
            Value::Map(map) => saturating_i64(map.len()),
        }
    }

    pub fn to_boolean(&self) -> bool {
        self.to_integer() != 0
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

fn saturating_i64(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

fn parse_integer(text: &str) -> i64 {
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nothing => Ok(()),
            Value::Scalar(text) => write!(f, "{text}"),
            Value::Array(array) => {
                for (position, (_, value)) in array.iter().enumerate() {
                    if position > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
            Value::Map(map) => {
                for (position, value) in map.values().enumerate() {
                    if position > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Scalar(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Scalar(text)
    }
}

impl From<char> for Value {
    fn from(ch: char) -> Self {
        Value::Scalar(ch.to_string())
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Scalar(number.to_string())
    }
}

impl From<u64> for Value {
    fn from(number: u64) -> Self {
        Value::Scalar(number.to_string())
    }
}

impl From<usize> for Value {
    fn from(number: usize) -> Self {
        Value::Scalar(number.to_string())
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Scalar(if flag { "1" } else { "0" }.to_string())
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

/// Sparse, zero-based sequence of values.
///
/// Unset slots read as [`Value::Nothing`]. The backing storage never ends in
/// an unset slot, so `size()` is one past the highest set index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array {
    slots: Vec<Option<Value>>,
}

impl Array {
    /// Highest index `set` accepts.
    pub const MAX_INDEX: usize = (1 << 24) - 1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> &Value {
        match self.slots.get(index) {
            Some(Some(value)) => value,
            _ => &NOTHING,
        }
    }

    pub fn is_set(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    /// Stores `value` at `index`, growing the array with holes as needed.
    ///
    /// Storage is dense, so indices above [`Array::MAX_INDEX`] are refused and
    /// `false` is returned.
    pub fn set(&mut self, index: usize, value: Value) -> bool {
        let Some(len) = index.checked_add(1).filter(|_| index <= Self::MAX_INDEX) else {
            return false;
        };
        if len > self.slots.len() {
            self.slots.resize_with(len, || None);
        }
        self.slots[index] = Some(value);
        true
    }

    pub fn push(&mut self, value: Value) {
        self.slots.push(Some(value));
    }

    pub fn unset(&mut self, index: usize) -> Option<Value> {
        let removed = self.slots.get_mut(index).and_then(Option::take);
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        removed
    }

    /// Set slots in index order; holes are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Value)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }

    pub fn into_values(self) -> impl Iterator<Item = Value> {
        self.slots.into_iter().flatten()
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(Some).collect(),
        }
    }
}

/// String-keyed values kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    entries: IndexMap<String, Value>,
}

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> &Value {
        self.entries.get(key).unwrap_or(&NOTHING)
    }

    /// Overwrites in place when the key exists, appends otherwise.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn into_values(self) -> impl Iterator<Item = Value> {
        self.entries.into_values()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}
