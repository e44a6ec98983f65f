use fathom_connector::fathom_types::errors::connector::{ConnectorError, FetchError};
use fathom_connector::fathom_types::host_types::{
    ConfigParams, DataRequest, DataResponse, DateRange, RequestedField,
};
use fathom_connector::fathom_types::serde_json::{json, Number};
use fathom_connector::fathom_types::types::Field;
use fathom_connector::{Connector, DatasetteConnector, ReqwestFetcher};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EXPECTED_SQL: &str = "select rowid, site_id, hostname_id, pathname_id, pageviews, visitors, \
     entries, bounce_rate, known_durations, avg_duration, ts from page_stats \
     where pathname_id = '98' and ts >= '2021-01-01' and ts <= '2021-01-23' order by ts desc";

fn sample_request(base_url: String) -> DataRequest {
    DataRequest {
        config_params: ConfigParams {
            base_url,
            pathname_id: Some("98".to_string()),
        },
        date_range: DateRange::new("2021-01-01", "2021-01-23"),
        fields: ["timestamp", "pageviews", "bounce_rate", "average_duration"]
            .into_iter()
            .map(RequestedField::new)
            .collect(),
    }
}

// The blocking client cannot run on a runtime worker thread.
async fn get_data(request: DataRequest) -> Result<DataResponse, ConnectorError> {
    tokio::task::spawn_blocking(move || {
        fathom_tracing::init_telemetry(None, None);
        let fetcher = ReqwestFetcher::new(Some(Duration::from_secs(5)))?;
        DatasetteConnector::new(fetcher).get_data(&request)
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn returns_some_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fathom.json"))
        .and(query_param("_shape", "objects"))
        .and(query_param("sql", EXPECTED_SQL))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "database": "fathom",
            "rows": [
                { "rowid": 10, "pathname_id": 98, "ts": "2021-01-05T10:00:00", "pageviews": 42, "visitors": 30, "avg_duration": 3.5, "bounce_rate": 0.2 }
            ],
            "truncated": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = get_data(sample_request(format!("{}/fathom", server.uri())))
        .await
        .unwrap();

    assert_eq!(response.schema.len(), 4);
    assert_eq!(response.rows.len(), 1);
    assert_eq!(
        response.rows[0].values,
        vec![
            Field::from("20210105100000"),
            Field::from(42_u64),
            Field::Number(Number::from_f64(0.2).unwrap()),
            Field::Number(Number::from_f64(3.5).unwrap()),
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_dates_reach_the_server_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rows": [] })))
        .mount(&server)
        .await;

    let mut request = sample_request(format!("{}/fathom", server.uri()));
    request.date_range = DateRange::new("2021-01-01faction", "2021-01-23");
    let response = get_data(request).await.unwrap();
    assert!(response.rows.is_empty());

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let query = received[0].url.query().unwrap_or_default().to_string();
    assert!(query.contains("ts+%3E%3D+%272021-01-01faction%27"), "{query}");
    assert!(query.contains("ts+%3C%3D+%272021-01-23%27"), "{query}");
}

#[tokio::test(flavor = "multi_thread")]
async fn http_error_status_fails_the_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let error = get_data(sample_request(format!("{}/fathom", server.uri())))
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        ConnectorError::Fetch(FetchError::Status { status: 404, .. })
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn non_json_body_fails_the_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let error = get_data(sample_request(format!("{}/fathom", server.uri())))
        .await
        .unwrap_err();
    assert!(matches!(error, ConnectorError::InvalidResponse(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_base_url_fails_at_fetch() {
    let error = get_data(sample_request(String::new())).await.unwrap_err();
    assert!(matches!(
        error,
        ConnectorError::Fetch(FetchError::Request { .. })
    ));
}
