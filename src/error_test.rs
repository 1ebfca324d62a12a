use super::*;

#[test]
fn display_messages_name_the_failure() {
    assert_eq!(Error::NoWindow.to_string(), "no global window");
    assert_eq!(Error::NoDocument.to_string(), "window has no document");
    assert_eq!(Error::Storage("quota".into()).to_string(), "storage failed: quota");
}

#[test]
fn js_variant_prefixes_context() {
    let err = Error::Js { context: "query_selector", message: "SyntaxError".into() };
    assert_eq!(err.to_string(), "query_selector: SyntaxError");
}

#[test]
fn serde_errors_convert_into_config_variant() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = parse.into();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().starts_with("config parse failed:"));
}
