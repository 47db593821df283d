use super::*;

#[test]
fn texts_should_be_distinct() {
    assert_ne!(LOADING_TILT_TEXT, TILT_CONTENT_TEXT);
    assert!(!SHOW_TILT_LABEL.trim().is_empty());
}

#[test]
fn tilt_manifest_should_be_json() {
    let manifest: serde_json::Value =
        serde_json::from_str(TILT_MANIFEST).expect("manifest should be valid json");

    assert!(manifest.is_object());
}
