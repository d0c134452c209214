//! Rupiah string helpers used at the operator-input boundary.
//!
//! Teller input arrives as decorated strings ("Rp 1.500.000", "5,5"). These
//! helpers normalize them before the typed operations run; parse failures
//! yield zero so a typo never aborts a session.

/// Parse a decorated rupiah string into a whole-rupiah amount.
///
/// Strips every "." thousands separator and every "Rp" marker, trims
/// whitespace, then parses the remainder as an integer. Anything
/// unparseable yields 0.
pub fn parse_rupiah(input: &str) -> i64 {
    let cleaned = input.replace('.', "").replace("Rp", "");
    cleaned.trim().parse::<i64>().unwrap_or(0)
}

/// Format an amount as whole rupiah with "." thousands separators,
/// e.g. `1050000.0` becomes `"Rp 1.050.000"`.
pub fn format_rupiah(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("Rp -{}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Parse an interest-rate field that may use a comma decimal ("5,5" == 5.5).
/// Unparseable input yields 0.0.
pub fn parse_percent(input: &str) -> f64 {
    input.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0)
}
