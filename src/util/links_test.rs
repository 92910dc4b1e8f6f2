use super::*;

#[test]
fn continue_url_values_win_over_direct_params() {
    let (email, token) = confirmation_params(
        Some("https://app.example.com/confirm?email=a%40x.com&token=t-123"),
        Some("other@y.com"),
        Some("t-999"),
    );
    assert_eq!(email.as_deref(), Some("a@x.com"));
    assert_eq!(token.as_deref(), Some("t-123"));
}

#[test]
fn direct_params_fill_missing_continue_url_values() {
    let (email, token) = confirmation_params(
        Some("https://app.example.com/confirm?foo=bar"),
        Some("a%40x.com"),
        Some("t-7"),
    );
    assert_eq!(email.as_deref(), Some("a@x.com"));
    assert_eq!(token.as_deref(), Some("t-7"));
}

#[test]
fn unexpanded_email_placeholder_counts_as_absent() {
    let (email, token) = confirmation_params(None, Some("%EMAIL%"), Some("t-1"));
    assert!(email.is_none());
    assert_eq!(token.as_deref(), Some("t-1"));
}

#[test]
fn no_params_yields_nothing() {
    let (email, token) = confirmation_params(None, None, None);
    assert!(email.is_none());
    assert!(token.is_none());
}

#[test]
fn percent_decode_handles_escapes_plus_and_bad_sequences() {
    assert_eq!(percent_decode("a%40x.com"), "a@x.com");
    assert_eq!(percent_decode("one+two"), "one two");
    assert_eq!(percent_decode("50%"), "50%");
    assert_eq!(percent_decode("%zz"), "%zz");
}
