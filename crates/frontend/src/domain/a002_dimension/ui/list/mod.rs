pub mod state;

use self::state::{create_models, create_state};
use crate::domain::a002_dimension::api::{fetch_dimension_models, fetch_dimensions};
use crate::shared::catalog::{CatalogTable, CatalogToolbar, SummarySection};
use crate::shared::components::ui::Badge;
use crate::shared::number_format::format_weight;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::shared::catalog::search_hints;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DimensionList() -> impl IntoView {
    let state = create_state();
    let models = create_models();
    let displayed = state.displayed();
    let hints = Signal::derive(move || displayed.with(|rows| search_hints(rows)));

    let load_items = move || {
        state
            .rows
            .load("dimensions", |signal| async move { fetch_dimensions(signal.as_ref()).await });
    };

    Effect::new(move |_| {
        if !state.rows.loaded.get_untracked() {
            log!("Loading dimensions...");
            load_items();
        }
    });

    let selection = Memo::new(move |_| state.selection.get());
    Effect::new(move |_| match selection.get() {
        Some(sel) => {
            let id = sel.lookup_id();
            models.load("dimension models", move |signal| async move {
                fetch_dimension_models(id, signal.as_ref()).await
            });
        }
        None => models.clear(),
    });

    let summary_title = Signal::derive(move || {
        let name = selection
            .get()
            .and_then(|sel| displayed.with(|rows| sel.resolve(rows).map(|r| r.name.clone())))
            .unwrap_or_default();
        format!("Boyutun Kullanıldığı Modeller: {}", name)
    });

    view! {
        <PageFrame page_id="a002_dimension--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Boyutlar"</h1>
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
                    search_placeholder="Boyut adı veya kısa adı..."
                />

                {move || state.rows.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <CatalogTable state=state rows=displayed name_header="ADI" short_name_header="KISA AD" />

                <Show when=move || selection.with(|s| s.is_some())>
                    <SummarySection
                        title=summary_title
                        data=models
                        empty_text="Bu boyut hiçbir modelde kullanılmıyor"
                    >
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Model Adı"</TableHeaderCell>
                                    <TableHeaderCell>"Kriter Sayısı"</TableHeaderCell>
                                    <TableHeaderCell>"Gösterge Sayısı"</TableHeaderCell>
                                    <TableHeaderCell>"Model Ağırlığı"</TableHeaderCell>
                                    <TableHeaderCell>"Karşılanma Düzeyi"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || models.items.get().into_iter().enumerate()
                                    key=|(idx, m)| (*idx, m.model_id)
                                    children=move |(_, m)| view! {
                                        <TableRow>
                                            <TableCell>{m.model_name}</TableCell>
                                            <TableCell>{m.criterion_count}</TableCell>
                                            <TableCell>{m.indicator_count}</TableCell>
                                            <TableCell>{format_weight(m.model_weight)}</TableCell>
                                            <TableCell>{m.coverage_level}</TableCell>
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
