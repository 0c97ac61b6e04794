//! Local website-URL validation for the crawler form.
//!
//! Only malformed input is caught here; whether a URL is crawlable is the
//! backend's call.

#[cfg(test)]
#[path = "website_url_test.rs"]
mod website_url_test;

use url::Url;

/// Validate the URL field before submitting a crawl.
///
/// Returns the trimmed input on success.
///
/// # Errors
///
/// An inline-ready message for blank, unparsable, or non-HTTP input.
pub fn validate_website_url(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Enter a website URL.");
    }
    let parsed =
        Url::parse(trimmed).map_err(|_| "Enter a valid URL, including http:// or https://")?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_owned()),
        _ => Err("Enter a valid URL, including http:// or https://"),
    }
}
