use super::*;

#[test]
fn endpoints_live_under_the_provider_base() {
    assert_eq!(sign_in_endpoint(), "/auth/v1/token?grant_type=password");
    assert_eq!(sign_up_endpoint(), "/auth/v1/signup");
    assert_eq!(session_endpoint(), "/auth/v1/user");
}

#[test]
fn provider_error_prefers_error_description_then_msg() {
    let body = r#"{"error_description":"Invalid login credentials","msg":"other"}"#;
    assert_eq!(provider_error(body, "Login failed"), "Invalid login credentials");

    let body = r#"{"msg":"User already registered"}"#;
    assert_eq!(provider_error(body, "Signup failed"), "User already registered");
}

#[test]
fn provider_error_falls_back_on_unknown_bodies() {
    assert_eq!(provider_error("{}", "Login failed"), "Login failed");
    assert_eq!(provider_error("<html></html>", "Signup failed"), "Signup failed");
}
