//! Field validation for investment records.
//!
//! Every entry point that accepts user- or file-supplied values (ledger add,
//! edit, retag, and CSV load) goes through these parsers, so the rules live in
//! one place. Rules are checked in order: ticker, price, quantity, date.

use crate::{Error, Result};

/// Fields that passed validation, ready to become an [`crate::Investment`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFields {
    /// Upper-cased ticker
    pub ticker: String,
    pub price: f64,
    pub quantity: u64,
    pub date: String,
}

/// Validate the four required fields of a record.
///
/// Returns the first failure in rule order.
pub fn validate(ticker: &str, price: &str, quantity: &str, date: &str) -> Result<ValidatedFields> {
    let ticker = parse_ticker(ticker)?;
    let price = parse_price(price)?;
    let quantity = parse_quantity(quantity)?;
    let date = parse_date(date)?;

    Ok(ValidatedFields {
        ticker,
        price,
        quantity,
        date,
    })
}

/// Ticker must be non-empty and ASCII letters only. Returned upper-cased.
pub fn parse_ticker(raw: &str) -> Result<String> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidTicker(
            "Ticker must be letters only.".to_string(),
        ));
    }
    Ok(raw.to_uppercase())
}

/// Price must parse as a finite number greater than zero.
pub fn parse_price(raw: &str) -> Result<f64> {
    let price: f64 = raw
        .trim()
        .parse()
        .ok()
        .filter(|p: &f64| p.is_finite())
        .ok_or_else(|| Error::InvalidPrice("Price must be a number greater than 0.".to_string()))?;

    check_price(price)
}

/// Positivity check shared by string and numeric price inputs.
pub fn check_price(price: f64) -> Result<f64> {
    if price.is_nan() {
        return Err(Error::InvalidPrice(
            "Price must be a number greater than 0.".to_string(),
        ));
    }
    if price <= 0.0 {
        return Err(Error::InvalidPrice(
            "Price must be greater than 0.".to_string(),
        ));
    }
    Ok(price)
}

/// Quantity must parse as an integer greater than zero.
pub fn parse_quantity(raw: &str) -> Result<u64> {
    let quantity: i64 = raw.trim().parse().map_err(|_| {
        Error::InvalidQuantity("Quantity must be an integer greater than 0.".to_string())
    })?;

    if quantity <= 0 {
        return Err(Error::InvalidQuantity(
            "Quantity must be greater than 0.".to_string(),
        ));
    }
    Ok(quantity as u64)
}

/// Date must be non-blank. The format is not checked.
pub fn parse_date(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(Error::InvalidDate("Date cannot be empty.".to_string()));
    }
    Ok(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_validate_ok() {
        let fields = validate("msft", "310.5", "3", "2025-01-02").unwrap();
        assert_eq!(fields.ticker, "MSFT");
        assert_eq!(fields.price, 310.5);
        assert_eq!(fields.quantity, 3);
        assert_eq!(fields.date, "2025-01-02");
    }

    #[test]
    fn test_ticker_rejects_digits_and_symbols() {
        for bad in ["", "BRK.B", "AAPL1", "A B", "T-MOBILE", "€URO", "ÄPFEL"] {
            let err = parse_ticker(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidTicker, "ticker {bad:?}");
        }
    }

    #[test]
    fn test_price_rules() {
        assert_eq!(parse_price(" 12.5 ").unwrap(), 12.5);

        let not_number = parse_price("twelve").unwrap_err();
        assert_eq!(not_number.kind(), ErrorKind::InvalidPrice);
        assert!(not_number.to_string().contains("a number"));

        for bad in ["0", "-1", "-0.01", "0.0"] {
            let err = parse_price(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidPrice);
            assert!(!err.to_string().contains("a number"), "price {bad:?}");
        }

        for bad in ["NaN", "inf", "-inf", ""] {
            assert_eq!(parse_price(bad).unwrap_err().kind(), ErrorKind::InvalidPrice);
        }
    }

    #[test]
    fn test_check_price() {
        assert_eq!(check_price(0.01).unwrap(), 0.01);
        assert!(check_price(0.0).is_err());
        assert!(check_price(f64::NAN).is_err());
    }

    #[test]
    fn test_quantity_rules() {
        assert_eq!(parse_quantity("10").unwrap(), 10);
        assert_eq!(parse_quantity("+4").unwrap(), 4);

        let not_integer = parse_quantity("2.5").unwrap_err();
        assert_eq!(not_integer.kind(), ErrorKind::InvalidQuantity);
        assert!(not_integer.to_string().contains("an integer"));

        for bad in ["0", "-3"] {
            let err = parse_quantity(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidQuantity);
            assert!(!err.to_string().contains("an integer"));
        }
    }

    #[test]
    fn test_date_rules() {
        assert_eq!(parse_date("2025-10-07").unwrap(), "2025-10-07");
        // format is not validated
        assert_eq!(parse_date("yesterday").unwrap(), "yesterday");
        assert_eq!(parse_date("").unwrap_err().kind(), ErrorKind::InvalidDate);
        assert_eq!(parse_date("   ").unwrap_err().kind(), ErrorKind::InvalidDate);
    }

    #[test]
    fn test_rule_order() {
        // Every field is bad: the ticker is reported first.
        let err = validate("1", "x", "y", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTicker);

        let err = validate("ABC", "x", "y", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPrice);

        let err = validate("ABC", "1", "y", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuantity);

        let err = validate("ABC", "1", "1", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
    }
}
