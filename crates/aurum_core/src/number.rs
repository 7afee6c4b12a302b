//! Number formatting shared by the CSS serializers

use crate::error::ParseError;

/// Format `value` with at most `max_decimals` fractional digits, trimming
/// trailing zeros (`0.170` -> `0.17`, `150.00` -> `150`).
pub fn format_number(value: f32, max_decimals: usize) -> String {
    let mut out = format!("{value:.max_decimals$}");
    if out.contains('.') {
        while out.ends_with('0') {
            out.pop();
        }
        if out.ends_with('.') {
            out.pop();
        }
    }
    if out == "-0" {
        out = "0".to_string();
    }
    out
}

pub(crate) fn parse_number(s: &str) -> Result<f32, ParseError> {
    let s = s.trim();
    let value: f32 = s
        .parse()
        .map_err(|_| ParseError::InvalidNumber(s.to_string()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::InvalidNumber(s.to_string()))
    }
}

/// Format a pixel length; zero is written unitless.
pub fn format_px(value: f32) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}px", format_number(value, 2))
    }
}

pub(crate) fn parse_px(s: &str) -> Result<f32, ParseError> {
    let s = s.trim();
    match s.strip_suffix("px") {
        Some(number) => parse_number(number),
        None if s == "0" => Ok(0.0),
        None => Err(ParseError::InvalidLength(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_trims() {
        assert_eq!(format_number(0.17, 3), "0.17");
        assert_eq!(format_number(150.0, 2), "150");
        assert_eq!(format_number(-0.0001, 2), "0");
        assert_eq!(format_number(12.345, 1), "12.3");
    }

    #[test]
    fn test_lengths() {
        assert_eq!(format_px(0.0), "0");
        assert_eq!(format_px(-3.0), "-3px");
        assert_eq!(parse_px("14px").unwrap(), 14.0);
        assert_eq!(parse_px("0").unwrap(), 0.0);
        assert!(parse_px("2em").is_err());
    }
}
