use crate::error::{CheckoutError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// National registry identifier: exactly 11 digits once formatting
/// characters are stripped.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Hash)]
pub struct NationalId(String);

impl NationalId {
    /// Accepts formatted input ("123.456.789-09") and keeps the digits.
    pub fn parse(raw: &str) -> Result<Self> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != 11 {
            return Err(CheckoutError::Validation(
                "National id must have exactly 11 digits".to_string(),
            ));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Postal code: exactly 8 digits once formatting characters are stripped.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn parse(raw: &str) -> Result<Self> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != 8 {
            return Err(CheckoutError::Validation(
                "Postal code must have exactly 8 digits".to_string(),
            ));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_national_id_strips_formatting() {
        let id = NationalId::parse("123.456.789-09").unwrap();
        assert_eq!(id.as_str(), "12345678909");
    }

    #[test]
    fn test_national_id_rejects_wrong_length() {
        assert!(NationalId::parse("123").is_err());
        assert!(NationalId::parse("123456789012").is_err());
        assert!(NationalId::parse("").is_err());
    }

    #[test]
    fn test_postal_code_strips_formatting() {
        let code = PostalCode::parse("74000-000").unwrap();
        assert_eq!(code.as_str(), "74000000");
    }

    #[test]
    fn test_postal_code_rejects_wrong_length() {
        assert!(PostalCode::parse("7400").is_err());
        assert!(matches!(
            PostalCode::parse("740000000"),
            Err(CheckoutError::Validation(_))
        ));
    }
}
