use super::*;

#[test]
fn build_unsplash_config_requires_a_key() {
    assert!(build_unsplash_config(None, None).is_none());
    assert!(build_unsplash_config(Some("  "), None).is_none());
}

#[test]
fn build_unsplash_config_uses_defaults() {
    let cfg = build_unsplash_config(Some("key"), None).unwrap();
    assert_eq!(cfg, UnsplashConfig::new("key"));
}

#[test]
fn build_unsplash_config_trims_base_url() {
    let cfg = build_unsplash_config(Some("key"), Some("https://proxy.test/unsplash/")).unwrap();
    assert_eq!(cfg.base_url, "https://proxy.test/unsplash");
    assert_eq!(cfg.access_key, "key");
}
