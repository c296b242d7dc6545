//! Number formatting for table cells and parsing for form fields (en-US conventions).

/// Formats a number with `,` thousands separators and a fixed number of
/// decimals.
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if is_negative(value, &formatted) { "-" } else { "" };
    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// `-0.001` rounds to zero and must not print as `-0.00`.
fn is_negative(value: f64, formatted_abs: &str) -> bool {
    value < 0.0 && formatted_abs.chars().any(|c| c.is_ascii_digit() && c != '0')
}

/// US dollar amount: `1234.5` -> `"$1,234.50"`, `-3.0` -> `"-$3.00"`.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "$NaN".to_string();
    }
    let body = format_number_with_decimals(value, 2);
    match body.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None => format!("${}", body),
    }
}

/// Parses a non-negative amount typed into a form field.
pub fn parse_amount(input: &str, what: &str) -> Result<f64, String> {
    let value = input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("{} must be a number", what))?;
    if value < 0.0 {
        return Err(format!("{} cannot be negative", what));
    }
    Ok(value)
}

/// Whole-number counterpart of [`parse_amount`].
pub fn parse_count(input: &str, what: &str) -> Result<i64, String> {
    let value = input
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("{} must be a whole number", what))?;
    if value < 0 {
        return Err(format!("{} cannot be negative", what));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(-1234.56), "-$1,234.56");
        assert_eq!(format_usd(-0.001), "$0.00");
        assert_eq!(format_usd(f64::NAN), "$NaN");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(999.0, 2), "999.00");
        assert_eq!(format_number_with_decimals(100000.0, 0), "100,000");
        assert_eq!(format_number_with_decimals(-1234.0, 0), "-1,234");
    }

    #[test]
    fn test_parse_form_numbers() {
        assert_eq!(parse_amount(" 12.5 ", "Price"), Ok(12.5));
        assert_eq!(parse_amount("", "Price"), Err("Price must be a number".to_string()));
        assert_eq!(parse_amount("NaN", "Price"), Err("Price must be a number".to_string()));
        assert_eq!(parse_amount("-1", "Cost"), Err("Cost cannot be negative".to_string()));
        assert_eq!(parse_count("40", "Stock quantity"), Ok(40));
        assert!(parse_count("4.5", "Stock quantity").is_err());
    }
}
