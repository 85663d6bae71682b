//! Общий для всех страниц список языков.
//!
//! Provided once through context. The list is reused while the cache is
//! fresh; `refresh` reloads it and cancels a load still in flight.

use crate::domain::a005_language::api::fetch_languages;
use crate::shared::fetch::RequestSlot;
use chrono::Utc;
use contracts::domain::a005_language::{LanguageCache, LanguageOption};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct LanguageService {
    cache: StoredValue<LanguageCache>,
    slot: RequestSlot,
    pub items: RwSignal<Vec<LanguageOption>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl LanguageService {
    pub fn new() -> Self {
        Self {
            cache: StoredValue::new(LanguageCache::new()),
            slot: RequestSlot::new(),
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Loads the list unless a fresh copy is cached or a load is running.
    pub fn ensure_loaded(&self) {
        let fresh = self.cache.with_value(|c| c.is_fresh(Utc::now()));
        if fresh {
            let cached = self.cache.with_value(|c| c.items().to_vec());
            if self.items.with_untracked(|items| *items != cached) {
                self.items.set(cached);
            }
            return;
        }
        if self.loading.get_untracked() {
            return;
        }
        self.refresh();
    }

    /// Forced reload
    pub fn refresh(&self) {
        let this = *self;
        let signal = self.slot.start();
        this.loading.set(true);
        this.error.set(None);

        spawn_local(async move {
            match fetch_languages(signal.as_ref()).await {
                Ok(list) => {
                    log::debug!("languages loaded: {}", list.len());
                    this.cache
                        .update_value(|c| c.store(list.clone(), Utc::now()));
                    this.items.set(list);
                    this.loading.set(false);
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => {
                    this.cache.update_value(|c| c.invalidate());
                    this.error.set(Some(e.user_message()));
                    this.loading.set(false);
                }
            }
        });
    }

    pub fn names(&self) -> Signal<Vec<String>> {
        let items = self.items;
        Signal::derive(move || items.with(|list| list.iter().map(|l| l.name.clone()).collect()))
    }
}

impl Default for LanguageService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_languages() -> LanguageService {
    use_context::<LanguageService>().expect("LanguageService context not found")
}
