use super::*;

#[test]
fn accepts_http_and_https_urls() {
    assert_eq!(
        validate_website_url(" https://example.com "),
        Ok("https://example.com".to_owned())
    );
    assert_eq!(
        validate_website_url("http://example.com/docs?page=1"),
        Ok("http://example.com/docs?page=1".to_owned())
    );
}

#[test]
fn rejects_blank_input() {
    assert_eq!(validate_website_url("   "), Err("Enter a website URL."));
}

#[test]
fn rejects_scheme_less_and_non_http_input() {
    assert!(validate_website_url("example.com").is_err());
    assert!(validate_website_url("ftp://example.com").is_err());
    assert!(validate_website_url("not a url").is_err());
}
