use splitpot_application::CurrencyCode;

/// Symbol for the common display currencies. Unknown codes fall back to
/// code-suffix rendering in `format_amount`.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" | "CAD" | "AUD" | "NZD" | "HKD" | "SGD" | "MXN" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" | "CNY" => Some("¥"),
        "KRW" => Some("₩"),
        "INR" => Some("₹"),
        "CHF" => Some("CHF "),
        _ => None,
    }
}

/// `"$12.34"` for known codes, `"12.34 SEK"` otherwise. Two decimal places
/// always; the engine already emits whole cents.
pub fn format_amount(amount: f64, currency: &CurrencyCode) -> String {
    match currency_symbol(currency.as_str()) {
        Some(symbol) => format!("{symbol}{amount:.2}"),
        None => format!("{amount:.2} {currency}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::usd(12.34, "USD", "$12.34")]
    #[case::eur(0.5, "EUR", "€0.50")]
    #[case::gbp(1000.0, "GBP", "£1000.00")]
    #[case::jpy(5.0, "JPY", "¥5.00")]
    #[case::unknown_code(12.34, "SEK", "12.34 SEK")]
    fn formats_amounts(#[case] amount: f64, #[case] code: &str, #[case] expected: &str) {
        assert_eq!(format_amount(amount, &CurrencyCode::new(code)), expected);
    }

    #[test]
    fn codes_are_normalized_to_uppercase() {
        assert_eq!(format_amount(1.0, &CurrencyCode::new("usd")), "$1.00");
    }
}
