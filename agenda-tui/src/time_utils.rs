use time::macros::format_description;
use time::{Date, OffsetDateTime, Time, UtcOffset};

pub fn to_local_time(dt: OffsetDateTime) -> OffsetDateTime {
    if let Ok(local_offset) = UtcOffset::current_local_offset() {
        dt.to_offset(local_offset)
    } else {
        dt
    }
}

pub fn local_today() -> Date {
    to_local_time(OffsetDateTime::now_utc()).date()
}

/// Parse a strict `HH:MM` string (two-digit hour 00-23, two-digit minute 00-59).
pub fn parse_hhmm(input: &str) -> Option<Time> {
    let input = input.trim();
    if input.len() != 5 || input.as_bytes().get(2) != Some(&b':') {
        return None;
    }
    Time::parse(input, format_description!("[hour]:[minute]")).ok()
}

/// Years the agenda accepts. Week and history arithmetic stays far from the
/// calendar limits inside this window.
pub const FIRST_YEAR: i32 = 1900;
pub const LAST_YEAR: i32 = 2999;

pub fn in_supported_range(date: Date) -> bool {
    (FIRST_YEAR..=LAST_YEAR).contains(&date.year())
}

/// Parse a `YYYY-MM-DD` date string within the supported years.
pub fn parse_date(input: &str) -> Option<Date> {
    Date::parse(input.trim(), format_description!("[year]-[month]-[day]"))
        .ok()
        .filter(|d| in_supported_range(*d))
}

pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

pub fn format_hhmm(t: Time) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}

/// Hours as `HHh:MMm`, the same shape the statistics panels use.
pub fn format_hours_hm(hours: f64) -> String {
    let minutes = (hours.max(0.0) * 60.0).round() as u64;
    format!("{:02}h:{:02}m", minutes / 60, minutes % 60)
}

/// Friendly label for list separators: "Today", "Yesterday" or the weekday and date.
pub fn relative_day_label(date: Date, today: Date) -> String {
    if date == today {
        "Today".to_string()
    } else if Some(date) == today.previous_day() {
        "Yesterday".to_string()
    } else if Some(date) == today.next_day() {
        "Tomorrow".to_string()
    } else {
        format!("{} {}", weekday_short(date), format_date(date))
    }
}

pub fn weekday_short(date: Date) -> &'static str {
    match date.weekday() {
        time::Weekday::Monday => "Mon",
        time::Weekday::Tuesday => "Tue",
        time::Weekday::Wednesday => "Wed",
        time::Weekday::Thursday => "Thu",
        time::Weekday::Friday => "Fri",
        time::Weekday::Saturday => "Sat",
        time::Weekday::Sunday => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    #[test]
    fn parses_strict_hhmm() {
        assert_eq!(parse_hhmm("09:05"), Some(time!(9:05)));
        assert_eq!(parse_hhmm("23:59"), Some(time!(23:59)));
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("9:05"), None);
        assert_eq!(parse_hhmm("09-05"), None);
        assert_eq!(parse_hhmm(""), None);
    }

    #[test]
    fn parses_and_formats_dates() {
        let d = parse_date("2023-06-10").unwrap();
        assert_eq!(d, date!(2023 - 06 - 10));
        assert_eq!(format_date(d), "2023-06-10");
        assert_eq!(parse_date("2023-13-10"), None);
        assert_eq!(parse_date("9999-12-31"), None);
        assert_eq!(parse_date("0001-01-01"), None);
    }

    #[test]
    fn relative_labels() {
        let today = date!(2025 - 03 - 05);
        assert_eq!(relative_day_label(today, today), "Today");
        assert_eq!(relative_day_label(date!(2025 - 03 - 04), today), "Yesterday");
        assert_eq!(
            relative_day_label(date!(2025 - 03 - 01), today),
            "Sat 2025-03-01"
        );
    }

    #[test]
    fn hours_are_split_into_hours_and_minutes() {
        assert_eq!(format_hours_hm(1.5), "01h:30m");
        assert_eq!(format_hours_hm(0.0), "00h:00m");
        // 1 + 99 + 20 minutes sums to just under two hours as f64.
        let hours = 1.0 / 60.0 + 99.0 / 60.0 + 20.0 / 60.0;
        assert_eq!(format_hours_hm(hours), "02h:00m");
        assert_eq!(format_hours_hm(1.0 - 1e-12), "01h:00m");
    }
}
