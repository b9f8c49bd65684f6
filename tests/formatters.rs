#[cfg(test)]
mod tests {
    use allio::libs::formatter::{format_relative, progress_percent};
    use chrono::{Duration, Local, Utc};

    #[test]
    fn test_relative_just_now() {
        let timestamp = Utc::now().to_rfc3339();
        assert_eq!(format_relative(&timestamp), "Just now");
    }

    #[test]
    fn test_relative_hours_ago() {
        let timestamp = (Utc::now() - Duration::hours(2)).to_rfc3339();
        assert_eq!(format_relative(&timestamp), "2h ago");

        let timestamp = (Utc::now() - Duration::hours(23)).to_rfc3339();
        assert_eq!(format_relative(&timestamp), "23h ago");
    }

    #[test]
    fn test_relative_yesterday() {
        let timestamp = (Utc::now() - Duration::hours(30)).to_rfc3339();
        assert_eq!(format_relative(&timestamp), "Yesterday");
    }

    #[test]
    fn test_relative_older_shows_date() {
        let moment = Utc::now() - Duration::days(10);
        let expected = moment.with_timezone(&Local).format("%Y-%m-%d").to_string();
        assert_eq!(format_relative(&moment.to_rfc3339()), expected);
    }

    #[test]
    fn test_relative_passes_garbage_through() {
        assert_eq!(format_relative("not a timestamp"), "not a timestamp");
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 8), 0);
        assert_eq!(progress_percent(3, 8), 37);
        assert_eq!(progress_percent(4, 8), 50);
        assert_eq!(progress_percent(8, 8), 100);
    }

    #[test]
    fn test_progress_percent_caps_at_hundred() {
        assert_eq!(progress_percent(12, 8), 100);
    }

    #[test]
    fn test_progress_percent_with_zero_goal() {
        assert_eq!(progress_percent(3, 0), 100);
    }
}
