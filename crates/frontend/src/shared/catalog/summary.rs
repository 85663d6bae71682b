use crate::shared::remote::RemoteList;
use leptos::prelude::*;

/// Блок сводки по выбранной строке: заголовок, ошибка, пустое состояние.
#[component]
pub fn SummarySection<T>(
    #[prop(into)]
    title: Signal<String>,
    data: RemoteList<T>,
    empty_text: &'static str,
    children: ChildrenFn,
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    let children = StoredValue::new(children);
    let show_table = move || !data.is_empty();

    view! {
        <div class="summary">
            <h2 class="summary__title">{move || title.get()}</h2>
            {move || data.error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}
            {move || {
                if show_table() {
                    children.with_value(|c| c()).into_any()
                } else if data.loading.get() {
                    view! { <div class="table__loading">"Yükleniyor..."</div> }.into_any()
                } else if data.error.with(|e| e.is_none()) {
                    view! { <div class="table__empty">{empty_text}</div> }.into_any()
                } else {
                    ().into_any()
                }
            }}
        </div>
    }
}
