//! Список, загружаемый с сервера: элементы, флаг загрузки и ошибка.

use super::fetch::{FetchError, RequestSlot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use web_sys::AbortSignal;

/// Reactive holder of one fetched list.
///
/// On failure the items are cleared and `error` carries the banner text.
/// A cancelled load leaves every signal untouched: the newer load owns them.
pub struct RemoteList<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub loaded: RwSignal<bool>,
    slot: RequestSlot,
}

impl<T: Send + Sync + 'static> Clone for RemoteList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RemoteList<T> {}

impl<T: Send + Sync + 'static> RemoteList<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            loaded: RwSignal::new(false),
            slot: RequestSlot::new(),
        }
    }

    /// Runs `fetch` with a fresh abort signal, cancelling the previous load.
    pub fn load<F, Fut>(&self, what: &'static str, fetch: F)
    where
        F: FnOnce(Option<AbortSignal>) -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, FetchError>> + 'static,
    {
        let signal = self.slot.start();
        self.loading.set(true);
        self.error.set(None);

        let this = *self;
        spawn_local(async move {
            match fetch(signal).await {
                Ok(items) => {
                    log::debug!("{}: {} rows", what, items.len());
                    this.items.set(items);
                    this.loaded.set(true);
                    this.loading.set(false);
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => {
                    this.items.set(Vec::new());
                    this.error.set(Some(e.user_message()));
                    this.loaded.set(true);
                    this.loading.set(false);
                }
            }
        });
    }

    /// Drops the items and aborts a load still in flight
    pub fn clear(&self) {
        self.slot.abort();
        self.items.set(Vec::new());
        self.error.set(None);
        self.loading.set(false);
        self.loaded.set(false);
    }

    pub fn is_empty(&self) -> bool {
        self.items.with(|items| items.is_empty())
    }
}

impl<T: Send + Sync + 'static> Default for RemoteList<T> {
    fn default() -> Self {
        Self::new()
    }
}
