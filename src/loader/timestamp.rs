use chrono::{DateTime, NaiveDateTime};

/// Layouts tried, in order, when no explicit timestamp format is configured.
///
/// `%.f` accepts an optional fractional part, so each entry also covers
/// whole-second stamps.
pub const BUILTIN_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
];

/// Parse a logger timestamp.
///
/// With `format` set, only that layout is accepted. Otherwise the built-in
/// layouts are tried, then RFC 3339 (offset dropped, local wall time kept).
pub fn parse_timestamp(value: &str, format: Option<&str>) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Some(fmt) = format {
        return NaiveDateTime::parse_from_str(value, fmt).ok();
    }

    BUILTIN_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_local())
        })
}
