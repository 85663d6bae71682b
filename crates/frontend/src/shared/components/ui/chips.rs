use crate::shared::icons::icon;
use leptos::prelude::*;

/// Набор переключаемых чипов для множественного выбора.
#[component]
pub fn ChipToggleGroup(
    /// (value, label)
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)]
    selected: Signal<Vec<String>>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="chip-group">
            <For
                each=move || options.get()
                key=|(val, _)| val.clone()
                children=move |(val, label)| {
                    let val_for_check = val.clone();
                    let is_on = move || selected.with(|s| s.contains(&val_for_check));
                    view! {
                        <button
                            class="chip"
                            class:chip--selected=is_on
                            on:click=move |_| on_toggle.run(val.clone())
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}

/// Active filter shown as a removable chip
#[derive(Clone, Debug, PartialEq)]
pub struct FilterChip {
    pub id: String,
    pub label: String,
}

/// Активные фильтры с кнопкой «Temizle».
#[component]
pub fn FilterChips(
    #[prop(into)]
    chips: Signal<Vec<FilterChip>>,
    on_remove: Callback<String>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || chips.with(|c| !c.is_empty())>
            <div class="filter-chips">
                <For
                    each=move || chips.get()
                    key=|chip| chip.id.clone()
                    children=move |chip| {
                        let id = chip.id.clone();
                        view! {
                            <span class="filter-chip">
                                {chip.label}
                                <button
                                    class="filter-chip__remove"
                                    title="Kaldır"
                                    on:click=move |_| on_remove.run(id.clone())
                                >
                                    {icon("x")}
                                </button>
                            </span>
                        }
                    }
                />
                <button class="filter-chips__clear" on:click=move |_| on_clear.run(())>
                    "Temizle"
                </button>
            </div>
        </Show>
    }
}
