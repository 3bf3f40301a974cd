use super::*;
use time::Duration;
use time::macros::datetime;

#[test]
fn group_indian_uses_lakh_grouping() {
    assert_eq!(group_indian(0), "0");
    assert_eq!(group_indian(500), "500");
    assert_eq!(group_indian(1000), "1,000");
    assert_eq!(group_indian(10000), "10,000");
    assert_eq!(group_indian(120_000), "1,20,000");
    assert_eq!(group_indian(12_345_678), "1,23,45,678");
}

#[test]
fn rupee_formats() {
    assert_eq!(rupees(500_000), "₹5,00,000.00");
    assert_eq!(rupees_whole(5000), "₹5,000");
}

#[test]
fn progress_rounds_and_caps() {
    assert_eq!(progress_percent(120_000, 500_000), 24);
    assert_eq!(progress_percent(205_000, 400_000), 51);
    assert_eq!(progress_percent(350_000, 350_000), 100);
    assert_eq!(progress_percent(900, 300), 100);
    assert_eq!(progress_percent(5, 0), 0);
    assert_eq!(progress_percent(1, 200), 1);
}

#[test]
fn initials_take_first_letter_of_each_word() {
    assert_eq!(initials("Amit Sharma"), "AS");
    assert_eq!(initials("john  doe"), "JD");
    assert_eq!(initials(""), "");
}

#[test]
fn date_and_time_formats() {
    let at = datetime!(2023-04-21 14:15 UTC);
    assert_eq!(date(at), "Apr 21, 2023");
    assert_eq!(clock_time(at), "2:15 PM");
    assert_eq!(clock_time(datetime!(2023-04-21 10:30 UTC)), "10:30 AM");
    assert_eq!(month_year(at), "April 2023");
}

#[test]
fn relative_time_buckets() {
    let now = datetime!(2023-06-01 12:00 UTC);
    assert_eq!(relative_time(now - Duration::seconds(10), now), "less than a minute ago");
    assert_eq!(relative_time(now - Duration::minutes(1), now), "1 minute ago");
    assert_eq!(relative_time(now - Duration::minutes(30), now), "30 minutes ago");
    assert_eq!(relative_time(now - Duration::minutes(60), now), "about 1 hour ago");
    assert_eq!(relative_time(now - Duration::hours(5), now), "about 5 hours ago");
    assert_eq!(relative_time(now - Duration::hours(30), now), "1 day ago");
    assert_eq!(relative_time(now - Duration::days(3), now), "3 days ago");
    assert_eq!(relative_time(now - Duration::days(42), now), "about 1 month ago");
    assert_eq!(relative_time(now - Duration::days(120), now), "4 months ago");
    assert_eq!(relative_time(now - Duration::days(365), now), "about 1 year ago");
    assert_eq!(relative_time(now - Duration::days(365 + 180), now), "over 1 year ago");
    assert_eq!(relative_time(now - Duration::days(365 + 330), now), "almost 2 years ago");
}

#[test]
fn relative_time_future_uses_in_prefix() {
    let now = datetime!(2023-06-01 12:00 UTC);
    assert_eq!(relative_time(now + Duration::hours(2), now), "in about 2 hours");
}
