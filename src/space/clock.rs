//! Fractional-hour ↔ `HH:MM` conversion.

/// Formats a fractional hour as `HH:MM`, rounding to the nearest minute.
///
/// ```
/// use u_slotfind::space::format_hour;
///
/// assert_eq!(format_hour(9.0), "09:00");
/// assert_eq!(format_hour(13.5), "13:30");
/// ```
pub fn format_hour(hour: f64) -> String {
    let total_minutes = (hour * 60.0).round().max(0.0) as u64;
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Parses `HH:MM` (or `H:MM`) back into a fractional hour.
///
/// Returns `None` for malformed input or minutes outside `0..60`.
pub fn parse_hour(label: &str) -> Option<f64> {
    let (h, m) = label.trim().split_once(':')?;
    let hours: u32 = h.parse().ok()?;
    let minutes: u32 = m.parse().ok()?;
    if minutes >= 60 || m.len() != 2 {
        return None;
    }
    Some(hours as f64 + minutes as f64 / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_and_half_hours() {
        assert_eq!(format_hour(8.0), "08:00");
        assert_eq!(format_hour(16.5), "16:30");
        assert_eq!(format_hour(0.25), "00:15");
    }

    #[test]
    fn test_format_rounds_to_minute() {
        assert_eq!(format_hour(10.0 + 1.0 / 3.0), "10:20");
        assert_eq!(format_hour(9.999_999), "10:00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_hour("09:00"), Some(9.0));
        assert_eq!(parse_hour("9:30"), Some(9.5));
        assert_eq!(parse_hour(" 17:45 "), Some(17.75));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_hour("9"), None);
        assert_eq!(parse_hour("09:60"), None);
        assert_eq!(parse_hour("09:5"), None);
        assert_eq!(parse_hour("ab:cd"), None);
        assert_eq!(parse_hour("-1:00"), None);
    }
}
