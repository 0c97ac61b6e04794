use super::*;
use crate::util::billing::estimate_cost;

fn record(duration: u32, cost: f64) -> UsageRecord {
    UsageRecord {
        id: String::new(),
        date: "2023-03-15".to_owned(),
        assistant_name: "Customer Support".to_owned(),
        website: "example.com".to_owned(),
        duration,
        cost,
    }
}

#[test]
fn totals_sum_duration_and_backend_costs() {
    let records = [record(120, 0.98), record(450, 3.68), record(1080, 8.82)];
    assert_eq!(total_duration_secs(&records), 1650);
    assert!((total_cost(&records) - 13.48).abs() < 1e-9);
}

#[test]
fn totals_are_zero_without_records() {
    assert_eq!(total_duration_secs(&[]), 0);
    assert!(total_cost(&[]).abs() < 1e-9);
}

#[test]
fn backend_costs_track_the_advertised_rate() {
    // The demo rows were metered at the advertised rate, so the local
    // estimate agrees with the backend figures to the cent.
    let records = [record(120, 0.98), record(450, 3.68), record(1080, 8.82)];
    for row in &records {
        assert!((estimate_cost(row.duration) - row.cost).abs() < 0.01);
    }
}
