//! Estimate output and currency formatting
//!
//! The engine hands a UI exactly two display artifacts: a formatted currency
//! string and an optional ranked importance list. Formatting matches the
//! original interface: rupee symbol, thousands-grouped, rounded to whole
//! units.

use serde::Serialize;

use crate::ml::model::FeatureImportance;

/// Currency symbol used for display
pub const CURRENCY_SYMBOL: &str = "₹";

/// One completed price estimate
#[derive(Debug, Clone, Serialize)]
pub struct Estimate {
    /// Predicted resale price in currency units
    pub price: f64,

    /// Raw model output (log1p of price)
    pub log_price: f64,

    /// Price formatted for display, e.g. `₹452,310`
    pub formatted_price: String,

    /// Ranked feature importances, when the model artifact carries them
    pub importance: Option<Vec<FeatureImportance>>,
}

/// Format a price for display
///
/// Rounds to whole currency units and groups digits in threes.
///
/// # Example
///
/// ```
/// use resale_engine::display::format_currency;
///
/// assert_eq!(format_currency(452310.4), "₹452,310");
/// assert_eq!(format_currency(9.0), "₹9");
/// ```
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}{}", CURRENCY_SYMBOL, sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_currency(1_234_567.0), "₹1,234,567");
        assert_eq!(format_currency(452_310.4), "₹452,310");
    }

    #[test]
    fn test_format_small_amounts() {
        assert_eq!(format_currency(0.0), "₹0");
        assert_eq!(format_currency(9.0), "₹9");
        assert_eq!(format_currency(999.0), "₹999");
        assert_eq!(format_currency(1_000.0), "₹1,000");
    }

    #[test]
    fn test_format_rounds() {
        assert_eq!(format_currency(1_499.5), "₹1,500");
        assert_eq!(format_currency(1_499.4), "₹1,499");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_currency(-1_234.0), "₹-1,234");
    }
}
