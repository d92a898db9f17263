//! Small display helpers shared by the views.

use chrono::{DateTime, Utc};

/// Humanized distance from now, date-fns style.
pub fn relative_time(at: DateTime<Utc>) -> String {
    let delta = Utc::now().signed_duration_since(at);
    let seconds = delta.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }
    let minutes = delta.num_minutes();
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = delta.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }
    let days = delta.num_days();
    if days < 30 {
        return plural(days, "day");
    }
    at.format("%b %e, %Y").to_string()
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Due-date cell text.
pub fn due_date(at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(at) => at.format("%b %e, %Y").to_string(),
        None => "No due date".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn buckets_read_naturally() {
        let now = Utc::now();
        assert_eq!(relative_time(now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(1)), "1 minute ago");
        assert_eq!(relative_time(now - Duration::minutes(5)), "5 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(3)), "3 hours ago");
        assert_eq!(relative_time(now - Duration::days(2)), "2 days ago");
    }

    #[test]
    fn missing_due_date_has_a_label() {
        assert_eq!(due_date(None), "No due date");
    }
}
