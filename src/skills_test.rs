use super::*;

#[test]
fn parses_plain_integers() {
    assert_eq!(parse_level(Some("0")), 0);
    assert_eq!(parse_level(Some("85")), 85);
    assert_eq!(parse_level(Some("100")), 100);
}

#[test]
fn trims_whitespace() {
    assert_eq!(parse_level(Some(" 70 ")), 70);
}

#[test]
fn truncates_decimals() {
    assert_eq!(parse_level(Some("72.9")), 72);
}

#[test]
fn clamps_out_of_range() {
    assert_eq!(parse_level(Some("150")), 100);
    assert_eq!(parse_level(Some("-20")), 0);
}

#[test]
fn missing_or_garbage_is_zero() {
    assert_eq!(parse_level(None), 0);
    assert_eq!(parse_level(Some("")), 0);
    assert_eq!(parse_level(Some("high")), 0);
    assert_eq!(parse_level(Some("80%")), 0);
    assert_eq!(parse_level(Some("NaN")), 0);
    assert_eq!(parse_level(Some("inf")), 0);
}

#[test]
fn fill_width_is_percentage() {
    assert_eq!(fill_width(0), "0%");
    assert_eq!(fill_width(parse_level(Some("90"))), "90%");
}
