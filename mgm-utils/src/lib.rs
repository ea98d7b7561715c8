//! Shared utility functions for MGM crates.

/// Number formatting in the dashboard's single hardcoded locale (es-CO):
/// thousands grouped with `.`, decimals separated by `,`.
pub mod numbers {
    /// Format a non-negative value with es-CO grouping.
    ///
    /// Fractional parts keep at most one decimal digit (the precision used
    /// throughout the fixture data); whole values print no decimal part.
    /// `12450.0` formats as `"12.450"`, `245.8` as `"245,8"`.
    pub fn format_number(value: f64) -> String {
        let rounded = (value * 10.0).round() / 10.0;
        let integer = rounded.trunc() as i64;
        let tenths = (((rounded - rounded.trunc()) * 10.0).round() as i64).abs();

        let grouped = group_thousands(integer);
        if tenths == 0 {
            grouped
        } else {
            format!("{grouped},{tenths}")
        }
    }

    /// Format an integer count with es-CO grouping.
    pub fn format_count(value: u32) -> String {
        group_thousands(i64::from(value))
    }

    fn group_thousands(value: i64) -> String {
        let digits = value.abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if value < 0 {
            out.push('-');
        }
        let lead = digits.len() % 3;
        if lead > 0 {
            out.push_str(&digits[..lead]);
            if digits.len() > lead {
                out.push('.');
            }
        }
        for (i, chunk) in digits[lead..].as_bytes().chunks(3).enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push_str(std::str::from_utf8(chunk).unwrap_or(""));
        }
        out
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_thousands_grouping() {
            assert_eq!(format_number(12450.0), "12.450");
            assert_eq!(format_number(45280.0), "45.280");
            assert_eq!(format_number(1234567.0), "1.234.567");
            assert_eq!(format_number(0.0), "0");
            assert_eq!(format_number(999.0), "999");
        }

        #[test]
        fn test_decimal_comma() {
            assert_eq!(format_number(245.8), "245,8");
            assert_eq!(format_number(2.3), "2,3");
            assert_eq!(format_number(3750.0), "3.750");
        }

        #[test]
        fn test_format_count() {
            assert_eq!(format_count(187), "187");
            assert_eq!(format_count(12500), "12.500");
            assert_eq!(format_count(0), "0");
        }
    }
}

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Format a NaiveDate as "DD/MM/YYYY" for display panels.
    pub fn format_date_display(date: &NaiveDate) -> String {
        date.format("%d/%m/%Y").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2025-03-12");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_display_format() {
            let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
            assert_eq!(format_date_display(&date), "15/03/2025");
        }

        #[test]
        fn test_parse_rejects_garbage() {
            assert!(parse_date("not-a-date").is_err());
            assert!(parse_date("2025-13-40").is_err());
        }
    }
}
