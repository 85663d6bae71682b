use leptos::prelude::*;

/// Нативный select для фильтров (Dil, Durum).
///
/// `options` are `(value, label)` pairs; the selected option follows `value`
/// through `prop:value`, so a reset from outside is reflected at once.
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="form__group">
            {move || label.get().map(|l| view! { <span class="form__label">{l}</span> })}
            <select
                class="form__select"
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(val, text)| {
                            let selected = val == current;
                            view! { <option value=val selected=selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
