//! Parsing of display price strings like `"$29/month"`.

use once_cell::sync::Lazy;
use regex::Regex;

static DOLLAR_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\s?([0-9][0-9,]*(?:\.[0-9]{1,2})?)").unwrap());

/// Extract a monthly amount from a display price.
///
/// "Free" anywhere in the text means `0`. Otherwise the first dollar
/// amount wins. Text without either ("Custom", "Contact sales") is `None`.
pub fn parse_price_text(text: &str) -> Option<f64> {
    if text.to_lowercase().contains("free") {
        return Some(0.0);
    }

    DOLLAR_AMOUNT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok())
}
