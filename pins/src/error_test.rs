use super::*;

#[test]
fn transport_and_server_failures_are_retryable() {
    assert!(SearchError::Request("connection reset".into()).retryable());
    assert!(SearchError::Response { status: 429, body: String::new() }.retryable());
    assert!(SearchError::Response { status: 503, body: String::new() }.retryable());
}

#[test]
fn client_and_parse_failures_are_not_retryable() {
    assert!(!SearchError::Response { status: 401, body: String::new() }.retryable());
    assert!(!SearchError::Parse("eof".into()).retryable());
    assert!(!SearchError::MissingAccessKey { var: "UNSPLASH_ACCESS_KEY".into() }.retryable());
}

#[test]
fn display_names_the_missing_variable() {
    let err = SearchError::MissingAccessKey { var: "UNSPLASH_ACCESS_KEY".into() };
    assert_eq!(err.to_string(), "missing access key: env var UNSPLASH_ACCESS_KEY not set");
    assert_eq!(FirebaseError::MissingField("project_id").to_string(), "firebase config field `project_id` is empty");
}
