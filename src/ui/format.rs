//! Display formatting for the remaining budget

/// Format the budget as fractional hours with thousands separators,
/// e.g. `9,000.0 hours remaining`.
pub fn format_hours(seconds: f64) -> String {
    format!("{} hours remaining", group_thousands(seconds / 3_600.0))
}

/// Format the budget as a wall-clock breakdown, e.g. `374 days, 23:59:59`.
/// Sub-second precision is truncated.
pub fn format_clock(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let secs = total % 60;

    let clock = format!("{}:{:02}:{:02}", hours, minutes, secs);
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

/// Render a non-negative value with one decimal place and `,` grouping in
/// the integer part.
fn group_thousands(value: f64) -> String {
    let text = format!("{:.1}", value);
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "0"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}.{}", grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_are_grouped_by_thousands() {
        assert_eq!(format_hours(32_400_000.0), "9,000.0 hours remaining");
        assert_eq!(format_hours(5_400.0), "1.5 hours remaining");
        assert_eq!(format_hours(0.0), "0.0 hours remaining");
        assert_eq!(
            format_hours(3_600_000_000.0),
            "1,000,000.0 hours remaining"
        );
    }

    #[test]
    fn clock_breakdown_matches_day_boundaries() {
        assert_eq!(format_clock(0.0), "0:00:00");
        assert_eq!(format_clock(86_399.0), "23:59:59");
        assert_eq!(format_clock(86_400.0), "1 day, 0:00:00");
        assert_eq!(format_clock(90_061.0), "1 day, 1:01:01");
        assert_eq!(format_clock(2.0 * 86_400.0 + 59.0), "2 days, 0:00:59");
    }

    #[test]
    fn clock_truncates_fractions_and_clamps_negatives() {
        assert_eq!(format_clock(59.9), "0:00:59");
        assert_eq!(format_clock(-5.0), "0:00:00");
    }
}
