/// Renders `value` like C's `%lf`: six fractional digits, `inf`/`-inf`/`nan`
/// for the non-finite cases.
pub fn format_fixed6(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        format!("{:.6}", value)
    }
}
