use super::*;

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
fn stats_sum_usage_into_whole_minutes_and_cost() {
    let usage = [record(120, 0.98), record(450, 3.68), record(1080, 8.82)];
    let stats = stats_from(2, 1, &usage);

    assert_eq!(stats.websites, 2);
    assert_eq!(stats.assistants, 1);
    assert_eq!(stats.minutes, 27);
    assert!((stats.cost - 13.48).abs() < 1e-9);
}

#[test]
fn stats_for_an_empty_account_are_zero() {
    let stats = stats_from(0, 0, &[]);
    assert_eq!(stats, HomeStats::default());
}

#[test]
fn partial_minutes_round_down() {
    let stats = stats_from(1, 1, &[record(119, 0.97)]);
    assert_eq!(stats.minutes, 1);
}
