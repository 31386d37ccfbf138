use crate::domain::model::ParsedDestination;
use regex::Regex;
use std::sync::LazyLock;

const NUMBER_LEN: usize = 9;

// 前置空白 + 9 位數字 + 可選的 " - " 分隔 + 其餘文字 (名稱)
static DESTINATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]{9})(\s*-\s*)?(.*)").expect("destination pattern is valid")
});

/// Splits a raw destination such as `"912345678 - Alice"` into the number
/// and its label. Returns `None` when the input is missing or does not start
/// with nine digits; callers treat that as "do not submit".
pub fn parse_destination(raw: Option<&str>) -> Option<ParsedDestination> {
    let caps = DESTINATION_RE.captures(raw?)?;
    let number = caps.get(1)?.as_str().to_string();
    let name = caps.get(3).map(|m| m.as_str()).unwrap_or_default().to_string();
    Some(ParsedDestination { number, name })
}

/// Checks whether `value` reads as an integer and, with `check_len`, whether
/// that integer is written with exactly nine characters.
///
/// Parsing takes the longest numeric prefix (leading whitespace and one sign
/// allowed), so `"123456789abc"` is valid while `"abc"` is not. Leading zeros
/// are dropped before the length check: `"012345678"` is only eight digits.
/// Only decimal is read; a `0x` prefix parses as `0`, so `"0x75BCD15"` is
/// not valid even though it is 123456789 in hex.
pub fn is_valid_number(value: &str, check_len: bool) -> bool {
    match canonical_integer(value) {
        None => false,
        Some(canonical) => !check_len || canonical.len() == NUMBER_LEN,
    }
}

pub fn is_valid_number_default(value: &str) -> bool {
    is_valid_number(value, true)
}

/// Decimal form of the integer prefix of `value`, e.g. `" -007x"` -> `"-7"`.
/// Works on the digit string so arbitrarily long inputs never overflow.
fn canonical_integer(value: &str) -> Option<String> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some("0".to_string());
    }

    let mut canonical = String::with_capacity(significant.len() + 1);
    if negative {
        canonical.push('-');
    }
    canonical.push_str(significant);
    Some(canonical)
}
