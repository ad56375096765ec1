use super::*;

#[test]
fn decodes_unsplash_photo_fields() {
    let json = r##"{
        "id": "Dwu85P9SOIk",
        "width": 2448,
        "height": 3264,
        "color": "#6E633A",
        "alt_description": "a wave breaking",
        "urls": {
            "raw": "https://images.unsplash.com/photo-1?ixid=raw",
            "regular": "https://images.unsplash.com/photo-1?w=1080",
            "thumb": "https://images.unsplash.com/photo-1?w=200"
        },
        "user": { "name": "Jo Doe", "username": "jodoe" },
        "links": { "html": "https://unsplash.com/photos/Dwu85P9SOIk" },
        "likes": 12
    }"##;

    let pin: Pin = serde_json::from_str(json).unwrap();
    assert_eq!(pin.id.as_deref(), Some("Dwu85P9SOIk"));
    assert_eq!(pin.width, Some(2448));
    assert_eq!(pin.image_src(), Some("https://images.unsplash.com/photo-1?w=1080"));
    assert_eq!(pin.user.and_then(|u| u.name).as_deref(), Some("Jo Doe"));
    assert!(pin.urls.unwrap().small.is_none());
}

#[test]
fn record_without_urls_decodes_with_no_image_src() {
    let pin: Pin = serde_json::from_str(r#"{ "id": "x" }"#).unwrap();
    assert!(pin.urls.is_none());
    assert_eq!(pin.image_src(), None);
}

#[test]
fn urls_without_regular_has_no_image_src() {
    let pin: Pin = serde_json::from_str(r#"{ "urls": { "thumb": "t" } }"#).unwrap();
    assert_eq!(pin.image_src(), None);
}

#[test]
fn with_regular_sets_only_the_regular_url() {
    let pin = Pin::with_regular("https://img.test/a.jpg");
    assert_eq!(pin.image_src(), Some("https://img.test/a.jpg"));
    assert!(pin.id.is_none());
}
