//! Форматирование весов и счётчиков для таблиц

/// Weight with at most two decimals and a decimal comma (`12,5`).
/// Trailing zeros are dropped.
pub fn format_weight(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };
    trimmed.replace('.', ",")
}

/// Missing weight renders as a dash
pub fn format_opt_weight(value: Option<f64>) -> String {
    value.map(format_weight).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(25.0), "25");
        assert_eq!(format_weight(12.5), "12,5");
        assert_eq!(format_weight(0.333), "0,33");
        assert_eq!(format_weight(-0.001), "0");
        assert_eq!(format_opt_weight(None), "-");
    }
}
