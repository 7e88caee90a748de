/// Formats a movie rating for display; unrated movies show a dash.
pub fn format_rating(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(vote) => format!("⭐ {vote:.1}"),
        None => "⭐ -".to_string(),
    }
}

/// Reduces a server timestamp like `2024-05-01T10:00:00` to its date part.
/// Unrecognized strings pass through untouched.
pub fn format_added_date(add_at: &str) -> &str {
    match add_at.split_once('T') {
        Some((date, _)) => date,
        None => add_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_use_one_decimal_or_a_dash() {
        assert_eq!(format_rating(Some(8.4)), "⭐ 8.4");
        assert_eq!(format_rating(Some(0.0)), "⭐ 0.0");
        assert_eq!(format_rating(None), "⭐ -");
    }

    #[test]
    fn dates_drop_the_time_part() {
        assert_eq!(format_added_date("2024-05-01T10:00:00"), "2024-05-01");
        assert_eq!(format_added_date("2024-05-01"), "2024-05-01");
    }
}
