use super::state::CatalogListState;
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_ranges, match_ranges};
use contracts::shared::catalog::selection::{child_key, root_key};
use contracts::shared::catalog::{DisplayRow, EntityRow, RowSelection};
use leptos::prelude::*;
use thaw::*;

/// Entity specific columns, placed between DİL and DURUM.
pub trait ExtraColumns {
    fn headers() -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
}

impl ExtraColumns for () {
    fn headers() -> Vec<&'static str> {
        Vec::new()
    }

    fn cells(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Таблица справочника с раскрываемыми переводами.
#[component]
pub fn CatalogTable<X>(
    state: CatalogListState<X>,
    #[prop(into)]
    rows: Signal<Vec<DisplayRow<X>>>,
    name_header: &'static str,
    short_name_header: &'static str,
) -> impl IntoView
where
    X: ExtraColumns + Clone + PartialEq + Send + Sync + 'static,
{
    let search = state.filters.search;
    let loading = state.rows.loading;
    let failed = Signal::derive(move || state.rows.error.with(|e| e.is_some()));

    let header_cells = X::headers()
        .into_iter()
        .map(|h| view! { <TableHeaderCell>{h}</TableHeaderCell> })
        .collect_view();

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%; min-width: 800px;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=36.0>""</TableHeaderCell>
                        <TableHeaderCell min_width=220.0>{name_header}</TableHeaderCell>
                        <TableHeaderCell>{short_name_header}</TableHeaderCell>
                        <TableHeaderCell>"DİL"</TableHeaderCell>
                        {header_cells}
                        <TableHeaderCell>"DURUM"</TableHeaderCell>
                        <TableHeaderCell>"TARİH"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let expanded = state.expanded.get();
                        let selected_key = state.selection.get().map(|s| s.row_key());
                        let query = search.get();
                        rows.get()
                            .into_iter()
                            .map(|display| {
                                let is_open = expanded.contains(&display.row().id);
                                render_display_row(state, display, is_open, selected_key.as_deref(), &query)
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>

            <Show when=move || loading.get() && rows.with(|r| r.is_empty())>
                <div class="table__loading">"Yükleniyor..."</div>
            </Show>
            <Show when=move || !loading.get() && !failed.get() && rows.with(|r| r.is_empty())>
                <div class="table__empty">"Kayıt bulunamadı"</div>
            </Show>
        </div>
    }
}

fn render_display_row<X>(
    state: CatalogListState<X>,
    display: DisplayRow<X>,
    is_open: bool,
    selected_key: Option<&str>,
    query: &str,
) -> AnyView
where
    X: ExtraColumns + Clone + PartialEq + Send + Sync + 'static,
{
    let parent_id = display.parent_id();
    let row = display.into_row();
    let root_id = row.id;
    let is_selected = selected_key == Some(root_key(root_id).as_str());
    let has_children = row.has_children();

    let children = if is_open {
        row.children
            .iter()
            .map(|child| {
                let is_child_selected = selected_key == Some(child_key(root_id, child.id).as_str());
                let selection = RowSelection::translation(root_id, child.id);
                let cells = row_cells(child, query, None, true);
                view! {
                    <TableRow
                        class:table__row--child=true
                        class:table__row--selected=is_child_selected
                        on:click=move |_| state.select(selection)
                    >
                        <TableCell>""</TableCell>
                        {cells}
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    } else {
        ().into_any()
    };

    let children_count = row.children.len();
    let expander = if has_children {
        view! {
            <button
                class="table__expander"
                title=if is_open { "Çevirileri gizle" } else { "Çevirileri göster" }
                on:click=move |ev| {
                    ev.stop_propagation();
                    state.toggle_expanded(root_id);
                }
            >
                {icon(if is_open { "chevron-down" } else { "chevron-right" })}
                <span class="table__expander-count">{children_count}</span>
            </button>
        }
        .into_any()
    } else {
        ().into_any()
    };

    let cells = row_cells(&row, query, parent_id, false);
    view! {
        <TableRow
            class:table__row--selected=is_selected
            class:table__row--promoted=parent_id.is_some()
            attr:style="cursor: pointer;"
            on:click=move |_| state.select(RowSelection::root(root_id))
        >
            <TableCell>{expander}</TableCell>
            {cells}
        </TableRow>
        {children}
    }
    .into_any()
}

fn row_cells<X: ExtraColumns>(
    row: &EntityRow<X>,
    query: &str,
    promoted_from: Option<i64>,
    is_translation: bool,
) -> AnyView {
    let name_ranges = match_ranges(&row.name, query);
    let short_ranges = match_ranges(&row.short_name, query);
    let promoted_badge = promoted_from.map(|parent| {
        view! {
            <span title=format!("Kök kayıt #{}", parent)>
                <Badge variant="primary".to_string()>"çeviri"</Badge>
            </span>
        }
    });
    let extra_cells = row
        .extra
        .cells()
        .into_iter()
        .map(|text| view! { <TableCell><TableCellLayout truncate=true>{text}</TableCellLayout></TableCell> })
        .collect_view();
    let name_view = highlight_ranges(&row.name, &name_ranges);
    let short_name_view = highlight_ranges(&row.short_name, &short_ranges);
    let language = row.language.clone();
    let status = row.status;
    let date = format_opt_date(row.date.as_deref());

    view! {
        <TableCell>
            <TableCellLayout truncate=true>
                {is_translation.then(|| view! { <span class="table__indent">"↳ "</span> })}
                {name_view}
                {promoted_badge}
            </TableCellLayout>
        </TableCell>
        <TableCell>
            <TableCellLayout truncate=true>{short_name_view}</TableCellLayout>
        </TableCell>
        <TableCell>{language}</TableCell>
        {extra_cells}
        <TableCell><StatusBadge status=status /></TableCell>
        <TableCell>{date}</TableCell>
    }
    .into_any()
}
