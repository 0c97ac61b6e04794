use super::*;

#[test]
fn signup_requires_both_fields() {
    assert_eq!(validate_signup("", "hunter22"), Err("Enter both email and password."));
    assert_eq!(validate_signup("me@example.com", ""), Err("Enter both email and password."));
}

#[test]
fn signup_rejects_short_passwords() {
    assert_eq!(
        validate_signup("me@example.com", "five5"),
        Err("Password must be at least 6 characters.")
    );
    assert_eq!(
        validate_signup("me@example.com", "sixsix"),
        Ok(("me@example.com".to_owned(), "sixsix".to_owned()))
    );
}
