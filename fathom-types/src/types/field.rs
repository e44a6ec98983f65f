use serde::{self, Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt::{self, Display, Formatter};

/// A single cell of an output row.
///
/// Serialized untagged, so a row of fields becomes a plain JSON array such as
/// `["20210105100000", 42, 3.5, 0.2]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
    Json(Value),
}

impl Field {
    /// Placeholder emitted for unknown field ids and missing raw columns.
    pub fn empty() -> Field {
        Field::String(String::new())
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Field::Null,
            Value::Bool(b) => Field::Boolean(b),
            Value::Number(n) => Field::Number(n),
            Value::String(s) => Field::String(s),
            value @ (Value::Array(_) | Value::Object(_)) => Field::Json(value),
        }
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::String(value.to_string())
    }
}

impl From<u64> for Field {
    fn from(value: u64) -> Self {
        Field::Number(value.into())
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Field::Null => f.write_str("null"),
            Field::Boolean(b) => write!(f, "{b}"),
            Field::Number(n) => write!(f, "{n}"),
            Field::String(s) => f.write_str(s),
            Field::Json(v) => write!(f, "{v}"),
        }
    }
}

/// Semantic column types understood by the reporting platform.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    /// Date and time at second precision, encoded as `YYYYMMDDHHMMSS`.
    YearMonthDaySecond,
    Number,
    Text,
    Boolean,
}

impl Display for FieldType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::YearMonthDaySecond => "YEAR_MONTH_DAY_SECOND",
            FieldType::Number => "NUMBER",
            FieldType::Text => "TEXT",
            FieldType::Boolean => "BOOLEAN",
        };
        f.write_str(name)
    }
}
