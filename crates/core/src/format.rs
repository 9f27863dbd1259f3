/// Formats a value with an SI magnitude prefix for display.
///
/// Values are scaled into a readable range and printed with two decimals:
///
/// | Range             | Scale     | Suffix |
/// |-------------------|-----------|--------|
/// | `≥ 1000`          | ÷ 1000    | `k`    |
/// | `[0.001, 1)`      | × 1000    | `m`    |
/// | `(0, 0.001)`      | × 10⁶     | `µ`    |
/// | anything else     | none      | none   |
///
/// Zero is printed as the literal `"0"`. Negative values are not scaled.
///
/// The output is lossy and meant for people, not for parsing back. The range
/// is picked before rounding, so a value just under a boundary can print as
/// `1000.00` rather than `1.00k`.
///
/// # Examples
///
/// ```
/// use rcsim_core::format_engineering;
///
/// assert_eq!(format_engineering(0.0001), "100.00µ");
/// assert_eq!(format_engineering(1500.0), "1.50k");
/// ```
#[must_use]
pub fn format_engineering(value: f64) -> String {
    if value == 0.0 {
        "0".to_owned()
    } else if value >= 1000.0 {
        format!("{:.2}k", value / 1000.0)
    } else if value >= 1.0 {
        format!("{value:.2}")
    } else if value >= 0.001 {
        format!("{:.2}m", value * 1000.0)
    } else if value > 0.0 {
        format!("{:.2}µ", value * 1_000_000.0)
    } else {
        format!("{value:.2}")
    }
}
