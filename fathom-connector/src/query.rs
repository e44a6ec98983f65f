use fathom_types::host_types::DateRange;

/// Columns selected from `page_stats`, in query order.
pub const PAGE_STATS_COLUMNS: [&str; 11] = [
    "rowid",
    "site_id",
    "hostname_id",
    "pathname_id",
    "pageviews",
    "visitors",
    "entries",
    "bounce_rate",
    "known_durations",
    "avg_duration",
    "ts",
];

pub const PAGE_STATS_TABLE: &str = "page_stats";

// `_shape=objects` makes Datasette return each row as a JSON object.
const JSON_OBJECTS_ENDPOINT: &str = ".json?_shape=objects&sql=";

/// Builds the Datasette query URL for the page stats of one pathname within
/// `date_range`, newest first.
///
/// The SQL is form-encoded. `base_url`, `pathname_id` and both dates are
/// substituted verbatim: no validation and no escaping, so a malformed base
/// URL only surfaces when the URL is fetched.
pub fn build_query_url(base_url: &str, pathname_id: &str, date_range: &DateRange) -> String {
    format!(
        "{base_url}{JSON_OBJECTS_ENDPOINT}select+{columns}+from+{PAGE_STATS_TABLE}\
         +where+pathname_id+%3D+%27{pathname_id}%27\
         +and+ts+%3E%3D+%27{start}%27\
         +and+ts+%3C%3D+%27{end}%27\
         +order+by+ts+desc",
        columns = PAGE_STATS_COLUMNS.join("%2C+"),
        start = date_range.start_date,
        end = date_range.end_date,
    )
}
