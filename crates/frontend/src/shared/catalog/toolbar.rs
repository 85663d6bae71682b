use super::state::{filter_chips, CatalogFilters};
use crate::shared::components::ui::{ChipToggleGroup, FilterChips, Select};
use crate::shared::language_service::use_languages;
use crate::shared::list_utils::SearchInput;
use contracts::enums::{StatusCode, StatusFilter};
use contracts::shared::catalog::LanguageFilter;
use leptos::prelude::*;
use thaw::*;

/// Панель фильтров страницы справочника.
#[component]
pub fn CatalogToolbar(
    filters: CatalogFilters,
    /// Names offered by the search autocomplete
    #[prop(into)]
    hints: Signal<Vec<String>>,
    #[prop(into)]
    loading: Signal<bool>,
    on_refresh: Callback<()>,
    #[prop(optional, into)]
    search_placeholder: String,
) -> impl IntoView {
    let languages = use_languages();
    languages.ensure_loaded();
    let language_names = languages.names();

    let (is_filter_expanded, set_is_filter_expanded) = signal(false);

    let chips = Signal::derive(move || filter_chips(&filters.params()));
    let active_filters_count = Signal::derive(move || chips.with(|c| c.len()));

    let status_options = Signal::derive(|| {
        StatusFilter::options()
            .iter()
            .map(|f| (f.value().to_string(), f.label().to_string()))
            .collect::<Vec<_>>()
    });
    let status_chip_options = Signal::derive(|| {
        StatusCode::all()
            .iter()
            .map(|s| (s.code().to_string(), s.label().to_string()))
            .collect::<Vec<_>>()
    });
    let selected_status_codes = Signal::derive(move || {
        filters
            .selected_statuses
            .get()
            .iter()
            .map(|s| s.code().to_string())
            .collect::<Vec<_>>()
    });

    let language_options = Signal::derive(move || {
        let mut options = vec![("all".to_string(), "Tümü".to_string())];
        options.extend(language_names.get().into_iter().map(|n| (n.clone(), n)));
        options.push(("multiple".to_string(), "Çoklu seçim".to_string()));
        options
    });
    let language_chip_options =
        Signal::derive(move || language_names.get().into_iter().map(|n| (n.clone(), n)).collect::<Vec<_>>());

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| set_is_filter_expanded.update(|e| *e = !*e)
                >
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_filter_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                    <span class="filter-panel__title">"Filtreler"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! { <span class="filter-panel__badge">{count}</span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>

                <div class="filter-panel-header__center">
                    <SearchInput
                        value=filters.search
                        hints=hints
                        placeholder=search_placeholder
                    />
                </div>

                <div class="filter-panel-header__right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_refresh.run(())
                        disabled=loading
                    >
                        {move || if loading.get() { "Yükleniyor..." } else { "Yenile" }}
                    </Button>
                </div>
            </div>

            <Show when=move || is_filter_expanded.get()>
                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Large align=FlexAlign::Start>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Select
                                label="Durum".to_string()
                                value=Signal::derive(move || filters.status_filter.get().value().to_string())
                                options=status_options
                                on_change=Callback::new(move |v: String| {
                                    filters.status_filter.set(StatusFilter::from_value(&v))
                                })
                            />
                            <Show when=move || filters.status_filter.get() == StatusFilter::Multiple>
                                <ChipToggleGroup
                                    options=status_chip_options
                                    selected=selected_status_codes
                                    on_toggle=Callback::new(move |code: String| {
                                        if let Some(status) = code.parse::<u8>().ok().and_then(StatusCode::from_code) {
                                            filters.toggle_status(status);
                                        }
                                    })
                                />
                            </Show>
                        </Flex>

                        <Flex vertical=true gap=FlexGap::Small>
                            <Select
                                label="Dil".to_string()
                                value=Signal::derive(move || filters.language_filter.get().value())
                                options=language_options
                                disabled=languages.loading
                                on_change=Callback::new(move |v: String| {
                                    filters.language_filter.set(LanguageFilter::from_value(&v))
                                })
                            />
                            <Show when=move || filters.language_filter.get() == LanguageFilter::Multiple>
                                <ChipToggleGroup
                                    options=language_chip_options
                                    selected=filters.selected_languages
                                    on_toggle=Callback::new(move |name: String| filters.toggle_language(name))
                                />
                            </Show>
                            {move || languages.error.get().map(|err| view! {
                                <span class="form__hint form__hint--error">{err}</span>
                            })}
                        </Flex>
                    </Flex>
                </div>
            </Show>

            <FilterChips
                chips=chips
                on_remove=Callback::new(move |id: String| filters.remove(&id))
                on_clear=Callback::new(move |_| filters.reset())
            />
        </div>
    }
}
