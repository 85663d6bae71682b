//! Отменяемые GET-запросы к API.
//!
//! A page owns one [`RequestSlot`] per logical request. Starting a request
//! aborts the one still in flight, and the slot aborts itself when the page
//! unmounts, so a stale response never reaches the view.

use gloo_net::http::Request;
use leptos::prelude::*;
use serde_json::Value;
use thiserror::Error;
use web_sys::{AbortController, AbortSignal};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Aborted by a newer request or by unmount; never shown to the user
    #[error("istek iptal edildi")]
    Cancelled,
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("ağ hatası: {0}")]
    Network(String),
    #[error("yanıt çözümlenemedi: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }

    /// Text for the error banner
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Cancelled => String::new(),
            FetchError::Http { status, .. } => format!("Sunucu hatası ({})", status),
            FetchError::Network(_) => "Sunucuya ulaşılamadı".to_string(),
            FetchError::Decode(_) => "Sunucu yanıtı okunamadı".to_string(),
        }
    }
}

/// Holder of the abort handle of the latest request.
#[derive(Clone, Copy)]
pub struct RequestSlot {
    current: StoredValue<Option<AbortController>, LocalStorage>,
}

impl RequestSlot {
    /// Creates the slot and aborts its request when the owner is cleaned up
    pub fn new() -> Self {
        let slot = Self {
            current: StoredValue::new_local(None),
        };
        on_cleanup(move || slot.abort());
        slot
    }

    /// Aborts the previous request and hands out the signal of a new one.
    pub fn start(&self) -> Option<AbortSignal> {
        self.abort();
        let controller = match AbortController::new() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("AbortController unavailable: {:?}", e);
                return None;
            }
        };
        let signal = controller.signal();
        self.current.try_set_value(Some(controller));
        Some(signal)
    }

    pub fn abort(&self) {
        if let Some(Some(controller)) = self.current.try_update_value(|c| c.take()) {
            controller.abort();
        }
    }
}

impl Default for RequestSlot {
    fn default() -> Self {
        Self::new()
    }
}

fn is_aborted(signal: Option<&AbortSignal>) -> bool {
    signal.map(|s| s.aborted()).unwrap_or(false)
}

/// GET `url` and parse the body as JSON. An empty body is `null`.
pub async fn get_json(url: &str, signal: Option<&AbortSignal>) -> Result<Value, FetchError> {
    let result = send_get(url, signal).await;
    match &result {
        Err(e) if e.is_cancelled() => log::debug!("GET {} cancelled", url),
        Err(e) => log::error!("GET {} failed: {}", url, e),
        Ok(_) => {}
    }
    result
}

async fn send_get(url: &str, signal: Option<&AbortSignal>) -> Result<Value, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| map_transport_error(e, signal))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| map_transport_error(e, signal))?;

    // Ответ пришёл, но запрос уже отменён
    if is_aborted(signal) {
        return Err(FetchError::Cancelled);
    }
    if !response.ok() {
        return Err(FetchError::Http { status, body: text });
    }
    parse_body(&text)
}

fn map_transport_error(err: gloo_net::Error, signal: Option<&AbortSignal>) -> FetchError {
    if is_aborted(signal) {
        return FetchError::Cancelled;
    }
    match err {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => FetchError::Cancelled,
        other => FetchError::Network(other.to_string()),
    }
}

fn parse_body(text: &str) -> Result<Value, FetchError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body("  "), Ok(Value::Null));
        assert_eq!(parse_body("[1]"), Ok(serde_json::json!([1])));
        assert!(matches!(parse_body("<html>"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_cancelled_is_silent() {
        assert!(FetchError::Cancelled.is_cancelled());
        assert_eq!(FetchError::Cancelled.user_message(), "");
        let http = FetchError::Http {
            status: 500,
            body: "boom".into(),
        };
        assert!(!http.is_cancelled());
        assert_eq!(http.to_string(), "HTTP 500: boom");
    }
}
