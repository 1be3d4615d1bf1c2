/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application

use chrono::NaiveDateTime;

/// Format a backend timestamp to DD.MM.YYYY HH:MM format
pub fn format_timestamp(dt: NaiveDateTime) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let dt = NaiveDateTime::parse_from_str("2025-03-15T14:02:26", "%Y-%m-%dT%H:%M:%S").unwrap();
        assert_eq!(format_timestamp(dt), "15.03.2025 14:02");
    }
}
