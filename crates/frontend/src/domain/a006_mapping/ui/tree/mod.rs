pub mod widget;

use self::widget::{kind_class, TreeLineRow};
use crate::domain::a006_mapping::api::fetch_navigation;
use crate::shared::catalog::state::toggle;
use crate::shared::components::ui::{Badge, ChipToggleGroup, Select};
use crate::shared::language_service::use_languages;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_TREE;
use crate::shared::remote::RemoteList;
use contracts::domain::a006_mapping::{all_node_keys, visible_lines, NavModel, NavigationForm, NodeKind};
use contracts::enums::{StatusCode, StatusFilter};
use contracts::shared::catalog::LanguageFilter;
use leptos::ev::MouseEvent;
use leptos::logging::log;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

#[component]
pub fn MappingTree() -> impl IntoView {
    let languages = use_languages();
    languages.ensure_loaded();
    let language_names = languages.names();

    let models: RemoteList<NavModel> = RemoteList::new();
    let expanded = RwSignal::new(HashSet::<String>::new());

    let language = RwSignal::new(LanguageFilter::All);
    let selected_languages = RwSignal::new(Vec::<String>::new());
    let status = RwSignal::new(StatusFilter::All);
    let selected_statuses = RwSignal::new(Vec::<StatusCode>::new());
    let model_keyword = RwSignal::new(String::new());
    let dimension_keyword = RwSignal::new(String::new());
    let criterion_keyword = RwSignal::new(String::new());
    let indicator_keyword = RwSignal::new(String::new());

    // Ключевые слова через запятую уходят списком (ModelKelimeler и т.д.)
    let current_form = move || NavigationForm {
        language: language.get_untracked(),
        selected_languages: selected_languages.get_untracked(),
        status: status.get_untracked(),
        selected_statuses: selected_statuses.get_untracked(),
        model_text: model_keyword.get_untracked(),
        dimension_text: dimension_keyword.get_untracked(),
        criterion_text: criterion_keyword.get_untracked(),
        indicator_text: indicator_keyword.get_untracked(),
    };

    let load_tree = move || {
        let filter = current_form().to_filter();
        log!("Loading navigation tree ({} params)", filter.query_pairs().len());
        expanded.set(HashSet::new());
        models.load("navigation", move |signal| async move {
            fetch_navigation(&filter, signal.as_ref()).await
        });
    };

    Effect::new(move |_| {
        if !models.loaded.get_untracked() {
            load_tree();
        }
    });

    let lines = Memo::new(move |_| {
        let open = expanded.get();
        models.items.with(|items| visible_lines(items, &open))
    });

    let toggle_node = Callback::new(move |key: String| {
        expanded.update(|set| {
            if !set.remove(&key) {
                set.insert(key);
            }
        });
    });
    let expand_all = move |_: MouseEvent| expanded.set(models.items.with(|items| all_node_keys(items)));
    let collapse_all = move |_: MouseEvent| expanded.set(HashSet::new());

    let reset_filters = move |_: MouseEvent| {
        language.set(LanguageFilter::All);
        selected_languages.set(Vec::new());
        status.set(StatusFilter::All);
        selected_statuses.set(Vec::new());
        for keyword in [model_keyword, dimension_keyword, criterion_keyword, indicator_keyword] {
            keyword.set(String::new());
        }
        load_tree();
    };

    let language_options = Signal::derive(move || {
        let mut options = vec![("all".to_string(), "Tümü".to_string())];
        options.extend(language_names.get().into_iter().map(|n| (n.clone(), n)));
        options.push(("multiple".to_string(), "Çoklu seçim".to_string()));
        options
    });
    let language_chip_options =
        Signal::derive(move || language_names.get().into_iter().map(|n| (n.clone(), n)).collect::<Vec<_>>());
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
        selected_statuses.with(|list| list.iter().map(|s| s.code().to_string()).collect::<Vec<_>>())
    });

    let legend = [
        NodeKind::Model,
        NodeKind::Dimension,
        NodeKind::Criterion,
        NodeKind::Indicator,
    ]
    .into_iter()
    .map(|kind| {
        view! {
            <span class=format!("tree-legend__item {}", kind_class(kind))>{kind.label()}</span>
        }
    })
    .collect_view();

    view! {
        <PageFrame page_id="a006_mapping--tree" category=PAGE_CAT_TREE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Eşleşme"</h1>
                    <Badge variant="primary".to_string()>
                        {move || format!("{} model", models.items.with(|m| m.len()))}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <div class="tree-legend">{legend}</div>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Select
                                    label="Dil".to_string()
                                    value=Signal::derive(move || language.get().value())
                                    options=language_options
                                    on_change=Callback::new(move |v: String| language.set(LanguageFilter::from_value(&v)))
                                />
                                <Show when=move || language.get() == LanguageFilter::Multiple>
                                    <ChipToggleGroup
                                        options=language_chip_options
                                        selected=selected_languages
                                        on_toggle=Callback::new(move |name: String| {
                                            selected_languages.update(|list| toggle(list, name))
                                        })
                                    />
                                </Show>
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Select
                                    label="Durum".to_string()
                                    value=Signal::derive(move || status.get().value().to_string())
                                    options=status_options
                                    on_change=Callback::new(move |v: String| status.set(StatusFilter::from_value(&v)))
                                />
                                <Show when=move || status.get() == StatusFilter::Multiple>
                                    <ChipToggleGroup
                                        options=status_chip_options
                                        selected=selected_status_codes
                                        on_toggle=Callback::new(move |code: String| {
                                            if let Some(s) = code.parse::<u8>().ok().and_then(StatusCode::from_code) {
                                                selected_statuses.update(|list| toggle(list, s));
                                            }
                                        })
                                    />
                                </Show>
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Model:"</Label>
                                <Input value=model_keyword placeholder="Model adı, virgülle çoklu" />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Boyut:"</Label>
                                <Input value=dimension_keyword placeholder="Boyut adı, virgülle çoklu" />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Kriter:"</Label>
                                <Input value=criterion_keyword placeholder="Kriter adı, virgülle çoklu" />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Gösterge:"</Label>
                                <Input value=indicator_keyword placeholder="Gösterge adı, virgülle çoklu" />
                            </Flex>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| load_tree()
                                disabled=Signal::derive(move || models.loading.get())
                            >
                                {move || if models.loading.get() { "Yükleniyor..." } else { "Uygula" }}
                            </Button>
                            <Button appearance=ButtonAppearance::Secondary on_click=reset_filters>
                                "Temizle"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="tree-toolbar">
                    <Button appearance=ButtonAppearance::Subtle on_click=expand_all>"Tümünü Aç"</Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=collapse_all>"Tümünü Kapat"</Button>
                </div>

                {move || models.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="tree">
                    <For
                        each=move || lines.get()
                        key=|line| (line.key.clone(), line.expanded)
                        children=move |line| view! { <TreeLineRow line=line on_toggle=toggle_node /> }
                    />
                </div>

                <Show when=move || {
                    !models.loading.get() && models.error.with(|e| e.is_none()) && models.is_empty()
                }>
                    <div class="table__empty">"Kayıt bulunamadı"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
