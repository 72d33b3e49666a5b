//! Line item model

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{ReceiptResult, ValidationError};
use crate::money::{format_dollars, parse_price};

/// A single named, priced entry on a receipt
///
/// Built only through [`LineItem::parse`], so every instance has a
/// non-empty trimmed name and a non-negative price with scale 2.
/// No mutators are exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    name: String,
    price: Decimal,
}

impl LineItem {
    /// Validate raw form input and build an item
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyName`] when `name` is blank, otherwise
    /// whatever [`parse_price`] rejects.
    pub fn parse(name: &str, raw_price: &str) -> ReceiptResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let price = parse_price(raw_price)?;

        Ok(Self {
            name: name.to_string(),
            price,
        })
    }

    /// Item label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price, always two fraction digits
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Receipt line, e.g. `Coffee: $2.50`
    pub fn display_line(&self) -> String {
        format!("{}: {}", self.name, format_dollars(self.price))
    }
}

impl std::fmt::Display for LineItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_name() {
        let item = LineItem::parse("  Coffee ", "2.5").unwrap();
        assert_eq!(item.name(), "Coffee");
        assert_eq!(item.price().to_string(), "2.50");
        assert_eq!(item.to_string(), "Coffee: $2.50");
    }

    #[test]
    fn test_parse_rejects_blank_name() {
        assert_eq!(LineItem::parse("", "1"), Err(ValidationError::EmptyName));
        assert_eq!(LineItem::parse(" \t", "1"), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_checked_before_price() {
        assert_eq!(LineItem::parse("", "abc"), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_price_serializes_as_string() {
        let item = LineItem::parse("Bagel", "3").unwrap();
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"name":"Bagel","price":"3.00"}"#);
    }
}
