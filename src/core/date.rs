const BC_MARKER: &str = "BC";
const AD_MARKER: &str = "AD";

/// Parses the leading year of a node date into a signed year.
///
/// The leading segment is the text before the first `-`. Dates containing
/// `BC` anywhere map to negative years, everything else to positive years.
/// Returns `None` when the leading segment is not an integer.
#[must_use]
pub fn parse_signed_year(date: &str) -> Option<i64> {
    let leading = date.split_once('-').map_or(date, |(head, _)| head);

    if date.contains(BC_MARKER) {
        let magnitude: i64 = strip_marker(leading, BC_MARKER).parse().ok()?;
        Some(-magnitude)
    } else {
        strip_marker(leading, AD_MARKER).parse().ok()
    }
}

/// Sign-preserving `log10(|year| + 1)`; year 0 maps to 0.
#[must_use]
pub fn log_year(year: i64) -> f64 {
    let magnitude = (year.unsigned_abs() as f64 + 1.0).log10();
    if year < 0 { -magnitude } else { magnitude }
}

fn strip_marker<'a>(segment: &'a str, marker: &str) -> &'a str {
    let trimmed = segment.trim();
    trimmed.strip_suffix(marker).unwrap_or(trimmed).trim()
}

#[cfg(test)]
mod tests {
    use super::{log_year, parse_signed_year};

    #[test]
    fn bc_ranges_use_the_leading_year() {
        assert_eq!(parse_signed_year("500-450 BC"), Some(-500));
        assert_eq!(parse_signed_year("500 BC"), Some(-500));
        assert_eq!(parse_signed_year("10000 BC"), Some(-10_000));
    }

    #[test]
    fn ad_and_bare_years_are_positive() {
        assert_eq!(parse_signed_year("1969-400 AD"), Some(1969));
        assert_eq!(parse_signed_year("2024 AD"), Some(2024));
        assert_eq!(parse_signed_year("1-100"), Some(1));
        assert_eq!(parse_signed_year("1905"), Some(1905));
    }

    #[test]
    fn non_numeric_leading_segment_is_rejected() {
        assert_eq!(parse_signed_year(""), None);
        assert_eq!(parse_signed_year("-200 BC"), None);
        assert_eq!(parse_signed_year("circa 300 AD"), None);
        assert_eq!(parse_signed_year("BC"), None);
    }

    #[test]
    fn log_year_preserves_sign() {
        assert_eq!(log_year(0), 0.0);
        assert!((log_year(-500) + 501f64.log10()).abs() <= 1e-12);
        assert!((log_year(9) - 1.0).abs() <= 1e-12);
    }
}
