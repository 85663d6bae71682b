use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Middle mouse button
const AUX_BUTTON: i16 = 1;

/// Заголовок вкладки: клик активирует, крестик или средняя кнопка закрывает.
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let key = StoredValue::new(tab.key);

    let is_active =
        Memo::new(move |_| key.with_value(|k| ctx.active.get().as_deref() == Some(k.as_str())));

    let close = move || key.with_value(|k| ctx.close_tab(k));

    view! {
        <div
            class="tab"
            class:active=is_active
            on:click=move |_| key.with_value(|k| ctx.activate_tab(k))
            on:auxclick=move |ev: MouseEvent| {
                if ev.button() == AUX_BUTTON {
                    close();
                }
            }
        >
            <span class="tab__title">{tab.title}</span>
            <button
                class="tab-close"
                title="Kapat"
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    close();
                }
            >
                "×"
            </button>
        </div>
    }
}
