use super::dto::LanguageOption;
use chrono::{DateTime, Duration, Utc};

pub const LANGUAGE_CACHE_TTL_MINUTES: i64 = 10;

/// Список языков с моментом загрузки.
///
/// One instance is owned by the language service; pages never keep their own
/// copy.
#[derive(Debug, Clone)]
pub struct LanguageCache {
    items: Vec<LanguageOption>,
    loaded_at: Option<DateTime<Utc>>,
    ttl: Duration,
}

impl Default for LanguageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageCache {
    pub fn new() -> Self {
        Self::with_ttl(Duration::minutes(LANGUAGE_CACHE_TTL_MINUTES))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            items: Vec::new(),
            loaded_at: None,
            ttl,
        }
    }

    pub fn items(&self) -> &[LanguageOption] {
        &self.items
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|l| l.name.clone()).collect()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn store(&mut self, items: Vec<LanguageOption>, now: DateTime<Utc>) {
        self.items = items;
        self.loaded_at = Some(now);
    }

    /// Loaded and younger than the TTL
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        match self.loaded_at {
            Some(at) => now - at < self.ttl,
            None => false,
        }
    }

    /// Keeps the items for display, forces the next load
    pub fn invalidate(&mut self) {
        self.loaded_at = None;
    }
}
