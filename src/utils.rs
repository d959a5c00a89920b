use once_cell::sync::Lazy;
use regex::Regex;

// Optional sign and leading digits; anything after them is ignored.
static LEADING_INT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([+-]?)(\d+)").unwrap());

/// Parse the integer prefix of a text field.
///
/// Mirrors how number inputs are read in the browser: `"12abc"` is 12,
/// `"3.7"` is 3, and text with no leading digits has no value. Values too
/// large for `i64` saturate.
///
/// # Examples
/// ```
/// use nitro_timer::utils::parse_int_prefix;
/// assert_eq!(parse_int_prefix(" 42s"), Some(42));
/// assert_eq!(parse_int_prefix("-5"), Some(-5));
/// assert_eq!(parse_int_prefix("abc"), None);
/// ```
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let captures = LEADING_INT_REGEX.captures(input)?;
    let negative = &captures[1] == "-";
    let magnitude = captures[2].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Read a duration field: missing or negative values count as 0. There is
/// no upper bound; 75 seconds is a valid entry.
pub fn clamp_field(input: &str) -> u32 {
    match parse_int_prefix(input) {
        Some(value) if value > 0 => value.min(i64::from(u32::MAX)) as u32,
        _ => 0,
    }
}

pub fn parse_minutes_field(input: &str) -> u32 {
    clamp_field(input)
}

pub fn parse_seconds_field(input: &str) -> u32 {
    clamp_field(input)
}
