use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::language_service::LanguageService;
use leptos::prelude::*;

/// Корневой компонент. Авторизации нет, консоль открывается сразу.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    // Один список языков на всё приложение (с TTL)
    provide_context(LanguageService::new());

    view! { <Shell /> }
}
