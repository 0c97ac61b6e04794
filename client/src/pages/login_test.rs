use super::*;

#[test]
fn credentials_are_trimmed_and_required() {
    assert_eq!(
        validate_credentials("  me@example.com  ", "hunter22"),
        Ok(("me@example.com".to_owned(), "hunter22".to_owned()))
    );
    assert_eq!(validate_credentials("", "hunter22"), Err("Enter both email and password."));
    assert_eq!(
        validate_credentials("me@example.com", ""),
        Err("Enter both email and password.")
    );
    assert_eq!(validate_credentials("   ", "pw"), Err("Enter both email and password."));
}
