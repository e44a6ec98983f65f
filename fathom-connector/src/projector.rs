use crate::catalog::{FieldRequest, KnownField, RequestedColumn};
use crate::response::PageStat;
use fathom_types::serde_json::Value;
use fathom_types::types::{Field, Row};

/// Maps each record to one row holding exactly the requested fields, in
/// request order. Records keep their input order.
pub fn project(request: &FieldRequest, records: &[PageStat]) -> Vec<Row> {
    records
        .iter()
        .map(|record| project_record(request, record))
        .collect()
}

pub fn project_record(request: &FieldRequest, record: &PageStat) -> Row {
    let values = request
        .columns()
        .iter()
        .map(|column| match column {
            RequestedColumn::Known(field) => field_value(*field, record),
            RequestedColumn::Unknown(_) => Field::empty(),
        })
        .collect();
    Row::new(values)
}

fn field_value(field: KnownField, record: &PageStat) -> Field {
    let Some(value) = record.get(field) else {
        return Field::empty();
    };
    match field {
        KnownField::Timestamp => Field::String(timestamp_digits(value)),
        KnownField::Pageviews | KnownField::AverageDuration | KnownField::BounceRate => {
            Field::from(value.clone())
        }
    }
}

// The platform reads YEAR_MONTH_DAY_SECOND as bare digits.
fn timestamp_digits(value: &Value) -> String {
    match value {
        Value::String(ts) => strip_non_digits(ts),
        Value::Null => String::new(),
        other => strip_non_digits(&other.to_string()),
    }
}

/// Drops every character that is not an ASCII digit.
pub fn strip_non_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}
