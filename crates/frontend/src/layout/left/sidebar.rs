//! Sidebar: меню справочников и экрана сопоставления

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalog",
            label: "Tanımlar",
            icon: "database",
            items: vec![
                ("a001_model", tab_label_for_key("a001_model"), "layers"),
                ("a002_dimension", tab_label_for_key("a002_dimension"), "folder-closed"),
                ("a003_criterion", tab_label_for_key("a003_criterion"), "list"),
                ("a004_indicator", tab_label_for_key("a004_indicator"), "activity"),
            ],
        },
        MenuGroup {
            id: "mapping",
            label: "Eşleşme",
            icon: "git-branch",
            items: vec![("a006_mapping", tab_label_for_key("a006_mapping"), "git-branch")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Все группы раскрыты: пунктов немного
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let is_expanded = move || expanded_groups.get().contains(&group_id_for_exp);
                let is_expanded_for_show = is_expanded.clone();

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <span class="app-sidebar__icon">{icon(group.icon)}</span>
                            <span class="app-sidebar__label">{group.label}</span>
                            <span class="app-sidebar__chevron">
                                {move || if is_expanded() { icon("chevron-down") } else { icon("chevron-right") }}
                            </span>
                        </div>

                        <Show when=is_expanded_for_show>
                            {group.items.iter().map(|(key, label, item_icon)| {
                                let key = *key;
                                let label = *label;
                                view! {
                                    <div
                                        class="app-sidebar__item app-sidebar__item--child"
                                        class:app-sidebar__item--active=move || {
                                            ctx.active.get().as_deref() == Some(key)
                                        }
                                        style:padding-left="32px"
                                        on:click=move |_| ctx.open_tab(key, label)
                                    >
                                        <span class="app-sidebar__icon">{icon(item_icon)}</span>
                                        <span class="app-sidebar__label">{label}</span>
                                    </div>
                                }
                            }).collect_view()}
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
