use super::*;

#[test]
fn two_minutes_cost_just_under_a_dollar() {
    assert!((estimate_cost(120) - 0.98).abs() < 1e-9);
    assert!((estimate_cost(0)).abs() < 1e-9);
}

#[test]
fn estimate_scales_linearly_with_duration() {
    assert!((estimate_cost(1080) - 8.82).abs() < 1e-9);
    assert!((estimate_cost(30) - 0.245).abs() < 1e-9);
}

#[test]
fn durations_format_as_minutes_and_seconds() {
    assert_eq!(format_duration(0), "0m 0s");
    assert_eq!(format_duration(59), "0m 59s");
    assert_eq!(format_duration(120), "2m 0s");
    assert_eq!(format_duration(450), "7m 30s");
}

#[test]
fn amounts_format_with_two_decimals() {
    assert_eq!(format_usd(0.98), "$0.98");
    assert_eq!(format_usd(22.049), "$22.05");
    assert_eq!(format_usd(0.0), "$0.00");
}
