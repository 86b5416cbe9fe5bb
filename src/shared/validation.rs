use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::borrow::Cow;
use validator::ValidationError;

lazy_static! {
    /// Regex for validating phone numbers as typed into the forms
    /// Optional leading "+", then 8-20 digits, spaces, parentheses or hyphens
    /// - Valid: "(11) 99999-9999", "+55 11 99999 9999", "11999999999"
    /// - Invalid: "12345", "call me", "11-9999-abcd"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9()\s-]{8,20}$").unwrap();
}

/// Rejects strings that are empty once surrounding whitespace is trimmed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Largest amount a NUMERIC(12,2) column holds
pub const MAX_DAILY_RATE: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

fn daily_rate_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Daily rates are money amounts: not negative, at most two decimal places
/// and no larger than [`MAX_DAILY_RATE`].
pub fn validate_daily_rate(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(daily_rate_error("negative", "dailyRate must not be negative"));
    }
    if value.normalize().scale() > 2 {
        return Err(daily_rate_error(
            "scale",
            "dailyRate must have at most two decimal places",
        ));
    }
    if *value > MAX_DAILY_RATE {
        return Err(daily_rate_error("too_large", "dailyRate is too large"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("(11) 99999-9999"));
        assert!(PHONE_REGEX.is_match("+55 11 99999 9999"));
        assert!(PHONE_REGEX.is_match("11999999999"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("12345")); // too short
        assert!(!PHONE_REGEX.is_match("call me")); // letters
        assert!(!PHONE_REGEX.is_match("11-9999-abcd"));
        assert!(!PHONE_REGEX.is_match(""));
    }

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("Ana").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }

    fn rate(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_daily_rate_sign() {
        assert!(validate_daily_rate(&Decimal::ZERO).is_ok());
        assert!(validate_daily_rate(&rate("250.50")).is_ok());
        assert!(validate_daily_rate(&rate("-0.01")).is_err());
    }

    #[test]
    fn test_daily_rate_fits_numeric_12_2() {
        assert_eq!(MAX_DAILY_RATE, rate("9999999999.99"));
        assert!(validate_daily_rate(&MAX_DAILY_RATE).is_ok());
        assert!(validate_daily_rate(&rate("10000000000.00")).is_err());
        assert!(validate_daily_rate(&rate("99999999999.999")).is_err());

        // Trailing zeros are not extra precision
        assert!(validate_daily_rate(&rate("250.500")).is_ok());
        let err = validate_daily_rate(&rate("250.555")).unwrap_err();
        assert_eq!(err.code, "scale");
    }
}
