use fathom_connector::fathom_types::host_types::DateRange;
use fathom_connector::fathom_types::serde_json::{json, Value};
use fathom_connector::fathom_types::types::Field;
use fathom_connector::projector::{project, strip_non_digits};
use fathom_connector::query::build_query_url;
use fathom_connector::response::PageStat;
use fathom_connector::FieldCatalog;
use proptest::prelude::*;

fn field_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("timestamp".to_string()),
        Just("pageviews".to_string()),
        Just("average_duration".to_string()),
        Just("bounce_rate".to_string()),
        "[a-z_]{1,12}",
    ]
}

fn raw_value() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        any::<u32>().prop_map(|n| Some(json!(n))),
        (0.0f64..1.0).prop_map(|f| Some(json!(f))),
    ]
}

fn page_stat() -> impl Strategy<Value = PageStat> {
    (
        proptest::option::of("[0-9T:+ -]{0,25}"),
        raw_value(),
        raw_value(),
        raw_value(),
    )
        .prop_map(|(ts, pageviews, avg_duration, bounce_rate)| PageStat {
            ts: ts.map(Value::String),
            pageviews,
            avg_duration,
            bounce_rate,
        })
}

proptest! {
    #[test]
    fn one_row_per_record_with_one_value_per_field(
        ids in proptest::collection::vec(field_id(), 1..8),
        records in proptest::collection::vec(page_stat(), 0..16),
    ) {
        let request = FieldCatalog::global().resolve(&ids);
        let rows = project(&request, &records);
        prop_assert_eq!(rows.len(), records.len());
        for row in &rows {
            prop_assert_eq!(row.values.len(), ids.len());
        }
        prop_assert_eq!(request.schema().len(), ids.len());
    }

    #[test]
    fn unknown_field_only_affects_its_position(
        ids in proptest::collection::vec(field_id(), 0..6),
        position in 0usize..6,
        records in proptest::collection::vec(page_stat(), 1..8),
    ) {
        let position = position.min(ids.len());
        let mut with_unknown = ids.clone();
        with_unknown.insert(position, "not_a_field!".to_string());

        let rows = project(&FieldCatalog::global().resolve(&ids), &records);
        let rows_with_unknown = project(&FieldCatalog::global().resolve(&with_unknown), &records);

        for (row, row_with_unknown) in rows.iter().zip(&rows_with_unknown) {
            let mut values = row_with_unknown.values.clone();
            prop_assert_eq!(values.remove(position), Field::empty());
            prop_assert_eq!(&values, &row.values);
        }
    }

    #[test]
    fn timestamp_stripping_is_idempotent(ts in ".{0,40}") {
        let once = strip_non_digits(&ts);
        prop_assert!(once.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(strip_non_digits(&once), once);
    }

    #[test]
    fn distinct_inputs_give_distinct_urls(
        a in ("[a-z0-9:/.-]{0,20}", "[a-z0-9-]{0,12}", "[a-z0-9-]{0,12}"),
        b in ("[a-z0-9:/.-]{0,20}", "[a-z0-9-]{0,12}", "[a-z0-9-]{0,12}"),
    ) {
        let url_a = build_query_url(&a.0, "98", &DateRange::new(a.1.clone(), a.2.clone()));
        let url_b = build_query_url(&b.0, "98", &DateRange::new(b.1.clone(), b.2.clone()));
        prop_assert_eq!(a == b, url_a == url_b);
    }
}
