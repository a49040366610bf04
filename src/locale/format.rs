const GROUPING_SEPARATOR: char = ',';
const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a free-text number with thousands grouping (`12345` → `12,345`).
///
/// Existing grouping separators are ignored while parsing. Text that does not start with
/// a number is returned unchanged, as is the empty string.
pub fn format_numeric_display(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let cleaned = value.replace(GROUPING_SEPARATOR, "");
    match parse_leading_float(&cleaned) {
        Some(number) if number.is_finite() => group_number(number),
        _ => value.to_string(),
    }
}

/// Parses the leading integer of a count selection (`"1 (employer +1)"` → 1).
///
/// Empty, non-numeric, negative or overflowing input counts as zero.
pub fn parse_count(value: &str) -> usize {
    let trimmed = value.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    digits.parse::<usize>().unwrap_or(0)
}

/// Rewrites a stored `YYYY-MM-DD` date as `DD-MM-YYYY` for display.
///
/// Anything that is not three dash-separated parts is returned as is.
pub fn format_date_for_message(value: &str) -> String {
    let parts: Vec<&str> = value.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{day}-{month}-{year}"),
        _ => value.to_string(),
    }
}

fn parse_leading_float(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digit_count = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digit_count += frac_end - frac_start;
        if frac_end > frac_start {
            end = frac_end;
        }
    }
    if digit_count == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    trimmed[..end].parse::<f64>().ok()
}

fn group_number(value: f64) -> String {
    let body = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac)) => (int_part, frac.trim_end_matches('0')),
        None => (body.as_str(), ""),
    };
    let grouped = group_digits(int_part, GROUPING_SEPARATOR);
    let sign = if value < 0.0 && (grouped != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}
