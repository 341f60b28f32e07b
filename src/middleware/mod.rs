mod http_trace;

pub use http_trace::{HttpMakeSpan, HttpOnResponse, X_REQUEST_ID};
