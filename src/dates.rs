use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Formats a raw date of birth with `format`.
///
/// `raw` is tried as RFC 3339 first, then against each of `input_formats`
/// (as a date, then as a date-time). Missing or unparseable input yields an
/// empty string.
pub fn format_birth_date(raw: Option<&str>, input_formats: &[String], format: &str) -> String {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return String::new(),
    };

    match parse_date(raw, input_formats) {
        Some(date) => date.format(format).to_string(),
        None => {
            tracing::warn!("Unparseable date of birth {:?}, leaving it empty", raw);
            String::new()
        }
    }
}

fn parse_date(raw: &str, input_formats: &[String]) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    input_formats.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(raw, fmt)
            .ok()
            .or_else(|| NaiveDateTime::parse_from_str(raw, fmt).ok().map(|dt| dt.date()))
    })
}

/// Renders a creation timestamp
pub fn format_created_at(now: DateTime<Utc>) -> String {
    now.to_rfc3339()
}
