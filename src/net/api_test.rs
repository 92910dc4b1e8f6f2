use super::*;
use crate::net::types::SessionCheck;

#[test]
fn ok_reply_with_token_succeeds() {
    let reply = parse_auth_reply(
        true,
        r#"{"status":"success","token":"jwt-1","data":{"id":7}}"#,
        "Login failed",
    );
    assert!(reply.success);
    assert_eq!(reply.token.as_deref(), Some("jwt-1"));
    assert!(!reply.needs_password);
}

#[test]
fn unauthorized_reply_surfaces_server_message_verbatim() {
    let reply = parse_auth_reply(false, r#"{"message":"Invalid credentials"}"#, "Login failed");
    assert!(!reply.success);
    assert_eq!(reply.message.as_deref(), Some("Invalid credentials"));
    assert!(reply.token.is_none());
}

#[test]
fn unparseable_failure_body_falls_back_to_action_message() {
    let reply = parse_auth_reply(false, "<html>502</html>", "Signup failed");
    assert!(!reply.success);
    assert_eq!(reply.message.as_deref(), Some("Signup failed"));
}

#[test]
fn ok_reply_with_non_success_status_fails() {
    let reply = parse_auth_reply(
        true,
        r#"{"status":"pending","message":"Verify your email first"}"#,
        "Login failed",
    );
    assert!(!reply.success);
    assert_eq!(reply.message.as_deref(), Some("Verify your email first"));
}

#[test]
fn needs_password_flag_is_carried_through() {
    let reply = parse_auth_reply(
        true,
        r#"{"status":"success","needsPassword":true}"#,
        "Google login failed",
    );
    assert!(reply.success);
    assert!(reply.needs_password);
}

#[test]
fn session_check_body_parses_camel_case() {
    let check: SessionCheck = serde_json::from_str(r#"{"loggedIn":true}"#).expect("check body");
    assert!(check.logged_in);

    let check: SessionCheck = serde_json::from_str("{}").expect("empty body");
    assert!(!check.logged_in);
}
