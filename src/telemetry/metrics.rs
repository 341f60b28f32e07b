use std::sync::LazyLock;

use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter},
};

pub static METER: LazyLock<Meter> = LazyLock::new(|| global::meter("store-compliance-api"));

// --- Report Metrics ---

pub static REPORT_QUERIES_TOTAL: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("reports.queries")
        .with_description("Total report operations served")
        .with_unit("{query}")
        .build()
});

pub static REPORT_QUERY_ERRORS: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("reports.query.errors")
        .with_description("Report operations that failed in the store")
        .with_unit("{error}")
        .build()
});

pub static REPORT_ROWS_RETURNED: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("reports.rows")
        .with_description("Rows returned per report operation")
        .with_unit("{row}")
        .build()
});

// --- Database Metrics ---

pub static DB_CONNECT_ATTEMPTS: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("db.connect.attempts")
        .with_description("Attempts to reach the report store at startup")
        .with_unit("{attempt}")
        .build()
});

// --- HTTP Metrics ---

pub static HTTP_REQUESTS_TOTAL: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("http.requests.total")
        .with_description("Total number of HTTP requests")
        .with_unit("{request}")
        .build()
});

pub static HTTP_REQUEST_DURATION: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("http.request.duration")
        .with_description("HTTP request duration in milliseconds")
        .with_unit("ms")
        .with_boundaries(vec![
            1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0,
        ])
        .build()
});
