/// Currency label baked into every money-bearing template.
pub const CURRENCY_LABEL: &str = "EGP";

/// Two-decimal display rendering. All user-visible amounts go through here.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// An amount followed by the fixed currency label, the way every listing and
/// invoice line displays money.
pub fn format_labeled(amount: f64) -> String {
    format!("{} {CURRENCY_LABEL}", format_amount(amount))
}
