use super::*;

#[test]
fn fragment_yields_id() {
    assert_eq!(fragment_id(Some("#projects")), Some("projects"));
    assert_eq!(fragment_id(Some(" #about ")), Some("about"));
}

#[test]
fn bare_hash_is_not_intercepted() {
    assert_eq!(fragment_id(Some("#")), None);
}

#[test]
fn missing_or_external_href_is_not_intercepted() {
    assert_eq!(fragment_id(None), None);
    assert_eq!(fragment_id(Some("")), None);
    assert_eq!(fragment_id(Some("/cv.pdf")), None);
    assert_eq!(fragment_id(Some("https://example.com/#top")), None);
}
