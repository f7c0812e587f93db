//! Free-form salary text handling.
//!
//! Postings carry salary as a display string ("$50,000 - $70,000", "45k"),
//! so search needs a numeric reading of it and job creation needs a
//! canonical display rendering. Both transformations degrade to a neutral
//! value (0 / empty string) instead of failing.

/// Parse free-form salary text into a numeric value.
///
/// A range ("45k-50k") averages its first two segments; surplus segments
/// are dropped. Otherwise only digits, `.` and `k` are kept, duplicate
/// decimal points collapse to the last one, and a trailing `k` multiplies
/// by 1000. Anything unparseable comes back as 0.
pub fn parse_salary(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    if text.contains('-') {
        let mut segments = text.split('-');
        let min = segments.next().unwrap_or("");
        let max = segments.next().unwrap_or("");
        return (parse_salary(min) + parse_salary(max)) / 2.0;
    }

    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == 'k')
        .collect();

    // Keep only the last decimal point
    let cleaned = match cleaned.rfind('.') {
        Some(last) => cleaned
            .char_indices()
            .filter(|(i, c)| *c != '.' || *i == last)
            .map(|(_, c)| c)
            .collect(),
        None => cleaned,
    };

    if let Some(prefix) = cleaned.strip_suffix('k') {
        return prefix.parse::<f64>().map(|v| v * 1000.0).unwrap_or(0.0);
    }

    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Render salary text as a display currency string.
///
/// A two-part range renders as `"$X - $Y"`; anything else is formatted as
/// a single amount. A part with no digits renders as an empty string.
pub fn format_salary_display(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = text.split('-').map(str::trim).collect();
    if parts.len() == 2 {
        return format!("{} - {}", format_part(parts[0]), format_part(parts[1]));
    }
    format_part(text)
}

fn format_part(part: &str) -> String {
    let digits: String = part.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.parse::<u64>() {
        Ok(amount) => format!("${}", group_thousands(amount)),
        Err(_) => String::new(),
    }
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_amounts() {
        assert_eq!(parse_salary("$45,000"), 45000.0);
        assert_eq!(parse_salary("50000"), 50000.0);
        assert_eq!(parse_salary("45.5"), 45.5);
    }

    #[test]
    fn parses_k_notation() {
        assert_eq!(parse_salary("45k"), 45000.0);
        assert_eq!(parse_salary("45.5K"), 45500.0);
    }

    #[test]
    fn averages_ranges() {
        assert_eq!(parse_salary("45k-50k"), 47500.0);
        assert_eq!(parse_salary("$45,000 - $50,000"), 47500.0);
        // only the first two segments participate
        assert_eq!(parse_salary("40k-50k-90k"), 45000.0);
        // open-ended range averages against zero
        assert_eq!(parse_salary("45k-"), 22500.0);
    }

    #[test]
    fn degrades_to_zero() {
        assert_eq!(parse_salary(""), 0.0);
        assert_eq!(parse_salary("abc"), 0.0);
        assert_eq!(parse_salary("k"), 0.0);
        assert_eq!(parse_salary("competitive"), 0.0);
    }

    #[test]
    fn collapses_duplicate_decimal_points() {
        assert_eq!(parse_salary("4.5.6"), 45.6);
    }

    #[test]
    fn formats_single_amounts() {
        assert_eq!(format_salary_display("45000"), "$45,000");
        assert_eq!(format_salary_display("$1,234,567"), "$1,234,567");
        assert_eq!(format_salary_display("500"), "$500");
    }

    #[test]
    fn formats_ranges() {
        assert_eq!(format_salary_display("45000-50000"), "$45,000 - $50,000");
        assert_eq!(format_salary_display(" 45000 - 50000 "), "$45,000 - $50,000");
    }

    #[test]
    fn degrades_to_empty_string() {
        assert_eq!(format_salary_display(""), "");
        assert_eq!(format_salary_display("competitive"), "");
        assert_eq!(format_salary_display("tbd-negotiable"), " - ");
    }
}
