use crate::catalog::KnownField;
use fathom_types::errors::connector::ConnectorError;
use fathom_types::serde::{Deserialize, Deserializer};
use fathom_types::serde_json::{self, Map, Value};

/// One `page_stats` row as returned by Datasette.
///
/// A column missing from the row is `None`; an explicit JSON `null` is
/// `Some(Value::Null)`. Columns the connector does not read are ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(crate = "fathom_types::serde")]
pub struct PageStat {
    #[serde(default, deserialize_with = "present")]
    pub ts: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub pageviews: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub avg_duration: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub bounce_rate: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl PageStat {
    pub fn get(&self, field: KnownField) -> Option<&Value> {
        match field {
            KnownField::Timestamp => self.ts.as_ref(),
            KnownField::Pageviews => self.pageviews.as_ref(),
            KnownField::AverageDuration => self.avg_duration.as_ref(),
            KnownField::BounceRate => self.bounce_rate.as_ref(),
        }
    }
}

/// Extracts the `rows` array of a Datasette `_shape=objects` response.
///
/// Every row must be a JSON object; arrays are not read positionally.
pub fn parse_rows(body: &str) -> Result<Vec<PageStat>, ConnectorError> {
    let mut body: Value = serde_json::from_str(body).map_err(ConnectorError::InvalidResponse)?;
    let rows = match body.get_mut("rows").map(Value::take) {
        Some(Value::Array(rows)) => rows,
        _ => return Err(ConnectorError::MissingRows),
    };

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            serde_json::from_value::<Map<String, Value>>(row)
                .and_then(|record| serde_json::from_value(Value::Object(record)))
                .map_err(|source| ConnectorError::InvalidRecord { index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fathom_types::serde_json::json;

    #[test]
    fn parses_rows_in_order() {
        let body = json!({
            "database": "fathom",
            "rows": [
                { "rowid": 2, "ts": "2021-01-05T11:00:00", "pageviews": 7, "avg_duration": 1.0, "bounce_rate": 0 },
                { "rowid": 1, "ts": "2021-01-05T10:00:00", "pageviews": 42, "avg_duration": 3.5, "bounce_rate": 0.2 }
            ],
            "truncated": false
        })
        .to_string();

        let rows = parse_rows(&body).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ts, Some(json!("2021-01-05T11:00:00")));
        assert_eq!(rows[1].get(KnownField::Pageviews), Some(&json!(42)));
        assert_eq!(rows[1].get(KnownField::AverageDuration), Some(&json!(3.5)));
    }

    #[test]
    fn distinguishes_missing_and_null_columns() {
        let rows = parse_rows(r#"{"rows": [{"ts": "2021", "pageviews": null}]}"#).unwrap();
        assert_eq!(rows[0].pageviews, Some(Value::Null));
        assert_eq!(rows[0].bounce_rate, None);
    }

    #[test]
    fn empty_rows() {
        assert!(parse_rows(r#"{"rows": []}"#).unwrap().is_empty());
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            parse_rows("<html>502 Bad Gateway</html>"),
            Err(ConnectorError::InvalidResponse(_))
        ));
    }

    #[test]
    fn rejects_missing_rows() {
        assert!(matches!(
            parse_rows(r#"{"ok": false, "error": "no such table"}"#),
            Err(ConnectorError::MissingRows)
        ));
        assert!(matches!(
            parse_rows(r#"{"rows": {"ts": "2021"}}"#),
            Err(ConnectorError::MissingRows)
        ));
        assert!(matches!(parse_rows("[]"), Err(ConnectorError::MissingRows)));
    }

    #[test]
    fn rejects_non_object_row() {
        assert!(matches!(
            parse_rows(r#"{"rows": [{"ts": "2021"}, [1, 2]]}"#),
            Err(ConnectorError::InvalidRecord { index: 1, .. })
        ));
        assert!(matches!(
            parse_rows(r#"{"rows": [null]}"#),
            Err(ConnectorError::InvalidRecord { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_positional_row() {
        assert!(matches!(
            parse_rows(r#"{"rows": [["2021-01-05T10:00:00", 42]]}"#),
            Err(ConnectorError::InvalidRecord { index: 0, .. })
        ));
    }
}
