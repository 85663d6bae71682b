//! Tab labels - единственный источник правды для заголовков табов.

/// Возвращает читаемый заголовок таба для данного ключа.
///
/// Fallback: пустая строка (ключ не зарегистрирован).
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Справочники ───────────────────────────────────────────────────
        "a001_model" => "Modeller",
        "a002_dimension" => "Boyutlar",
        "a003_criterion" => "Kriterler",
        "a004_indicator" => "Göstergeler",

        // ── Eşleşme ───────────────────────────────────────────────────────
        "a006_mapping" => "Eşleşme",

        // ── Fallback ──────────────────────────────────────────────────────
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_has_no_label() {
        assert_eq!(tab_label_for_key("a003_criterion"), "Kriterler");
        assert_eq!(tab_label_for_key("a999_unknown"), "");
    }
}
