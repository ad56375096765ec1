use super::*;

fn config() -> FirebaseConfig {
    FirebaseConfig {
        api_key: "api-key".into(),
        auth_domain: "pinboard-demo.firebaseapp.com".into(),
        project_id: "pinboard-demo".into(),
        storage_bucket: "pinboard-demo.appspot.com".into(),
        messaging_sender_id: "1234".into(),
        app_id: "1:1234:web:abcd".into(),
        measurement_id: "G-TEST".into(),
    }
}

#[test]
fn initialize_rejects_missing_api_key() {
    let cfg = FirebaseConfig { api_key: String::new(), ..config() };
    assert_eq!(FirebaseApp::initialize(cfg).unwrap_err(), FirebaseError::MissingField("api_key"));
}

#[test]
fn initialize_rejects_missing_project_id() {
    let cfg = FirebaseConfig { project_id: " ".into(), ..config() };
    assert_eq!(FirebaseApp::initialize(cfg).unwrap_err(), FirebaseError::MissingField("project_id"));
}

#[test]
fn firestore_targets_default_database_documents() {
    let app = FirebaseApp::initialize(config()).unwrap();
    let db = app.firestore();
    assert_eq!(db.project_id, "pinboard-demo");
    assert_eq!(
        db.documents_url,
        "https://firestore.googleapis.com/v1/projects/pinboard-demo/databases/(default)/documents"
    );
}

#[test]
fn auth_and_provider_come_from_config() {
    let app = FirebaseApp::initialize(config()).unwrap();
    assert_eq!(app.auth().auth_domain, "pinboard-demo.firebaseapp.com");
    assert_eq!(app.auth().api_key, "api-key");
    assert_eq!(app.google_provider().provider_id, "google.com");
}
