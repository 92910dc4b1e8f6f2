use super::*;

#[test]
fn public_prefixes_are_recognized() {
    assert!(is_public("/login/token/abc123"));
    assert!(is_public("/email-verification"));
    assert!(is_public("/set-password?email=a%40x.com"));
    assert!(is_public("/google-set-password?email=a%40x.com&name=A"));
}

#[test]
fn app_routes_are_not_public() {
    assert!(!is_public("/home"));
    assert!(!is_public("/login"));
    assert!(!is_public("/resume-builder"));
    assert!(!is_public("/"));
}
