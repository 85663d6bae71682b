//! API utilities for frontend-backend communication
//!
//! Адрес API задаётся при сборке переменной `API_BASE_URL`.

/// Used when `API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:5063";

/// Base URL for API requests, without a trailing slash
pub fn api_base() -> String {
    normalize_base(option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE))
}

/// Full API URL from a path starting with `/api/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Full API URL with encoded query parameters.
///
/// Repeated keys are kept, which is how list filters are sent.
pub fn api_url_with_query(path: &str, pairs: &[(&str, String)]) -> String {
    let url = api_url(path);
    let query = encode_query(pairs);
    if query.is_empty() {
        url
    } else {
        format!("{}?{}", url, query)
    }
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}

fn encode_query(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("https://api.example.org///"), "https://api.example.org");
        assert_eq!(normalize_base("  "), DEFAULT_API_BASE);
    }

    #[test]
    fn test_encode_query_repeats_keys() {
        let q = encode_query(&[
            ("DilAdlari", "Türkçe".to_string()),
            ("DilAdlari", "English".to_string()),
            ("Aktif", "1".to_string()),
        ]);
        assert_eq!(q, "DilAdlari=T%C3%BCrk%C3%A7e&DilAdlari=English&Aktif=1");
    }

    #[test]
    fn test_url_without_query() {
        assert!(api_url_with_query("/api/Boyutlar/tree", &[]).ends_with("/api/Boyutlar/tree"));
    }
}
