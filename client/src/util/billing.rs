//! Display-estimate billing math.
//!
//! The backend and the payment processor own real billing; these helpers
//! only reproduce the advertised per-minute rate for on-screen estimates
//! and formatting. Amounts shown from them are labeled as estimates.

#[cfg(test)]
#[path = "billing_test.rs"]
mod billing_test;

/// Advertised conversation rate in USD per minute.
pub const RATE_USD_PER_MINUTE: f64 = 0.49;

/// Estimated cost of `duration_secs` of conversation at the advertised
/// rate.
#[must_use]
pub fn estimate_cost(duration_secs: u32) -> f64 {
    f64::from(duration_secs) / 60.0 * RATE_USD_PER_MINUTE
}

/// `"12m 30s"` style duration.
#[must_use]
pub fn format_duration(duration_secs: u32) -> String {
    format!("{}m {}s", duration_secs / 60, duration_secs % 60)
}

/// `"$3.68"` style amount.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}
