//! Shared formatting helpers.

/// Formats a count with a magnitude suffix.
///
/// `>= 1_000_000` renders as millions with one decimal and `M`, `>= 1_000`
/// as thousands with one decimal and `K`, anything smaller as a plain
/// integer. Bar annotations and axis ticks both go through this function.
pub fn format_magnitude(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

/// Formats a share of a whole as a one-decimal percentage, e.g. `"42.5%"`.
pub fn format_percentage(part: u32, total: u32) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", f64::from(part) * 100.0 / f64::from(total))
}

/// Truncates a string to a maximum number of characters with ellipsis.
pub fn truncate_string(input: &str, max_length: usize) -> String {
    if input.chars().count() <= max_length {
        input.to_string()
    } else {
        let kept: String = input.chars().take(max_length.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_magnitude() {
        assert_eq!(format_magnitude(1500.0), "1.5K");
        assert_eq!(format_magnitude(2_500_000.0), "2.5M");
        assert_eq!(format_magnitude(42.0), "42");
        assert_eq!(format_magnitude(999.0), "999");
        assert_eq!(format_magnitude(1000.0), "1.0K");
        assert_eq!(format_magnitude(0.0), "0");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(1, 4), "25.0%");
        assert_eq!(format_percentage(1, 3), "33.3%");
        assert_eq!(format_percentage(5, 0), "0.0%");
    }

    #[test]
    fn test_truncate_string() {
        let input = "This is a very long string that should be truncated";
        assert_eq!(truncate_string(input, 20), "This is a very lo...");
        assert_eq!(truncate_string("Short", 20), "Short");
        assert_eq!(truncate_string("Café Société", 7), "Café...");
    }
}
