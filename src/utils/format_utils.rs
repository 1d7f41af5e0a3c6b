/// Ratio to percent text with two decimals: `0.0512` -> `"5.12%"`.
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Relative change with an explicit sign on gains: `0.0123` -> `"+1.23%"`.
/// Zero and losses carry no extra sign (`"0.00%"`, `"-1.23%"`).
pub fn format_signed_change(change: f64) -> String {
    let sign = if change > 0.0 { "+" } else { "" };
    format!("{}{}", sign, format_percentage(change))
}
