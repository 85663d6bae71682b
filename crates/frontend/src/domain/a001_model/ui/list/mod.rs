pub mod state;

use self::state::{create_details, create_state};
use crate::domain::a001_model::api::{fetch_model_details, fetch_models};
use crate::shared::catalog::{CatalogTable, CatalogToolbar, ExtraColumns, SummarySection};
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_model::ModelExtra;
use contracts::shared::catalog::search_hints;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

impl ExtraColumns for ModelExtra {
    fn headers() -> Vec<&'static str> {
        vec!["HİYERARŞİ", "TÜR", "HASTANE TÜRLERİ", "KAPSAM"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.hierarchy.clone(),
            self.model_type.clone(),
            self.hospital_types.join(", "),
            self.scope.clone(),
        ]
    }
}

#[component]
pub fn ModelList() -> impl IntoView {
    let state = create_state();
    let details = create_details();
    let displayed = state.displayed();
    let hints = Signal::derive(move || displayed.with(|rows| search_hints(rows)));

    let load_items = move || {
        state
            .rows
            .load("models", |signal| async move { fetch_models(signal.as_ref()).await });
    };

    Effect::new(move |_| {
        if !state.rows.loaded.get_untracked() {
            log!("Loading models...");
            load_items();
        }
    });

    // Выбор строки → детализация выбранной модели или её перевода
    let selection = Memo::new(move |_| state.selection.get());
    Effect::new(move |_| match selection.get() {
        Some(sel) => {
            let id = sel.lookup_id();
            details.load("model details", move |signal| async move {
                fetch_model_details(id, signal.as_ref()).await
            });
        }
        None => details.clear(),
    });

    let selected_name = Signal::derive(move || {
        let sel = selection.get()?;
        displayed.with(|rows| sel.resolve(rows).map(|r| r.name.clone()))
    });

    view! {
        <PageFrame page_id="a001_model--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Modeller"</h1>
                    <Badge variant="primary".to_string()>
                        {move || displayed.with(|rows| rows.len()).to_string()}
                    </Badge>
                </div>
            </div>

            <div class="page__content">
                <CatalogToolbar
                    filters=state.filters
                    hints=hints
                    loading=state.rows.loading
                    on_refresh=Callback::new(move |_| load_items())
                    search_placeholder="Model adı veya kısa adı..."
                />

                {move || state.rows.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <CatalogTable
                    state=state
                    rows=displayed
                    name_header="MODEL ADI"
                    short_name_header="MODEL KISA ADI"
                />

                <Show when=move || selection.with(|s| s.is_some())>
                    <SummarySection
                        title=Signal::derive(move || format!("Model Detayı: {}", selected_name.get().unwrap_or_default()))
                        data=details
                        empty_text="Detay bulunamadı"
                    >
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Kullanıcı Türü"</TableHeaderCell>
                                    <TableHeaderCell>"Boyut Sayısı"</TableHeaderCell>
                                    <TableHeaderCell>"Kriter Sayısı"</TableHeaderCell>
                                    <TableHeaderCell>"Gösterge Sayısı"</TableHeaderCell>
                                    <TableHeaderCell>"Cevap Eklenme Durumu"</TableHeaderCell>
                                    <TableHeaderCell>"Durum"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || details.items.get().into_iter().enumerate()
                                    key=|(idx, d)| (*idx, d.user_type.clone())
                                    children=move |(_, d)| view! {
                                        <TableRow>
                                            <TableCell>{d.user_type}</TableCell>
                                            <TableCell>{d.dimension_count}</TableCell>
                                            <TableCell>{d.criterion_count}</TableCell>
                                            <TableCell>{d.indicator_count}</TableCell>
                                            <TableCell>{d.answer_status}</TableCell>
                                            <TableCell><StatusBadge status=d.status /></TableCell>
                                        </TableRow>
                                    }
                                />
                            </TableBody>
                        </Table>
                    </SummarySection>
                </Show>
            </div>
        </PageFrame>
    }
}
