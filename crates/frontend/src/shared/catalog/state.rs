use crate::shared::components::ui::FilterChip;
use crate::shared::remote::RemoteList;
use contracts::enums::{StatusCode, StatusFilter};
use contracts::shared::catalog::{
    apply_filters, DisplayRow, EntityRow, FilterParams, LanguageFilter, RowSelection,
};
use leptos::prelude::*;
use std::collections::HashSet;

pub const CHIP_SEARCH: &str = "search";
pub const CHIP_LANGUAGE: &str = "language";
pub const CHIP_STATUS: &str = "status";

/// Значения фильтров панели инструментов.
#[derive(Clone, Copy)]
pub struct CatalogFilters {
    pub search: RwSignal<String>,
    pub status_filter: RwSignal<StatusFilter>,
    pub selected_statuses: RwSignal<Vec<StatusCode>>,
    pub language_filter: RwSignal<LanguageFilter>,
    pub selected_languages: RwSignal<Vec<String>>,
    promote_children_by_status: bool,
}

impl CatalogFilters {
    pub fn new(promote_children_by_status: bool) -> Self {
        Self {
            search: RwSignal::new(String::new()),
            status_filter: RwSignal::new(StatusFilter::All),
            selected_statuses: RwSignal::new(Vec::new()),
            language_filter: RwSignal::new(LanguageFilter::All),
            selected_languages: RwSignal::new(Vec::new()),
            promote_children_by_status,
        }
    }

    /// Tracked snapshot for the filter pipeline
    pub fn params(&self) -> FilterParams {
        FilterParams {
            search: self.search.get(),
            status_filter: self.status_filter.get(),
            selected_statuses: self.selected_statuses.get(),
            language_filter: self.language_filter.get(),
            selected_languages: self.selected_languages.get(),
            promote_children_by_status: self.promote_children_by_status,
        }
    }

    pub fn toggle_status(&self, status: StatusCode) {
        self.selected_statuses.update(|list| toggle(list, status));
    }

    pub fn toggle_language(&self, name: String) {
        self.selected_languages.update(|list| toggle(list, name));
    }

    /// Removes the filter behind a chip id
    pub fn remove(&self, chip_id: &str) {
        match chip_id {
            CHIP_SEARCH => self.search.set(String::new()),
            CHIP_LANGUAGE => {
                self.language_filter.set(LanguageFilter::All);
                self.selected_languages.set(Vec::new());
            }
            CHIP_STATUS => {
                self.status_filter.set(StatusFilter::All);
                self.selected_statuses.set(Vec::new());
            }
            other => log::warn!("unknown filter chip '{}'", other),
        }
    }

    pub fn reset(&self) {
        for id in [CHIP_SEARCH, CHIP_LANGUAGE, CHIP_STATUS] {
            self.remove(id);
        }
    }
}

/// Adds the value, or removes it when already present
pub fn toggle<T: PartialEq>(list: &mut Vec<T>, value: T) {
    if let Some(pos) = list.iter().position(|v| *v == value) {
        list.remove(pos);
    } else {
        list.push(value);
    }
}

/// Чипы активных фильтров: поиск, язык, статус.
pub fn filter_chips(params: &FilterParams) -> Vec<FilterChip> {
    let mut chips = Vec::new();

    let search = params.search.trim();
    if !search.is_empty() {
        chips.push(FilterChip {
            id: CHIP_SEARCH.to_string(),
            label: format!("Ara: \"{}\"", search),
        });
    }

    let language = match &params.language_filter {
        LanguageFilter::All => None,
        LanguageFilter::Single(name) => Some(name.clone()),
        LanguageFilter::Multiple => Some(joined_or_none(params.selected_languages.clone())),
    };
    if let Some(text) = language {
        chips.push(FilterChip {
            id: CHIP_LANGUAGE.to_string(),
            label: format!("Dil: {}", text),
        });
    }

    let status = match params.status_filter {
        StatusFilter::All => None,
        StatusFilter::Multiple => Some(joined_or_none(
            params
                .selected_statuses
                .iter()
                .map(|s| s.label().to_string())
                .collect(),
        )),
        single => Some(single.label().to_string()),
    };
    if let Some(text) = status {
        chips.push(FilterChip {
            id: CHIP_STATUS.to_string(),
            label: format!("Durum: {}", text),
        });
    }

    chips
}

fn joined_or_none(items: Vec<String>) -> String {
    if items.is_empty() {
        "seçim yok".to_string()
    } else {
        items.join(", ")
    }
}

/// Состояние страницы справочника.
pub struct CatalogListState<X: Send + Sync + 'static> {
    pub rows: RemoteList<EntityRow<X>>,
    pub filters: CatalogFilters,
    /// Roots whose translations are shown
    pub expanded: RwSignal<HashSet<i64>>,
    pub selection: RwSignal<Option<RowSelection>>,
}

impl<X: Send + Sync + 'static> Clone for CatalogListState<X> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<X: Send + Sync + 'static> Copy for CatalogListState<X> {}

impl<X> CatalogListState<X>
where
    X: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(promote_children_by_status: bool) -> Self {
        Self {
            rows: RemoteList::new(),
            filters: CatalogFilters::new(promote_children_by_status),
            expanded: RwSignal::new(HashSet::new()),
            selection: RwSignal::new(None),
        }
    }

    /// Rows after the filter pipeline
    pub fn displayed(&self) -> Memo<Vec<DisplayRow<X>>> {
        let rows = self.rows.items;
        let filters = self.filters;
        Memo::new(move |_| {
            let params = filters.params();
            rows.with(|items| apply_filters(items, &params))
        })
    }

    pub fn toggle_expanded(&self, root_id: i64) {
        self.expanded.update(|set| {
            if !set.remove(&root_id) {
                set.insert(root_id);
            }
        });
    }

    /// Clicking the selected row again clears the selection
    pub fn select(&self, selection: RowSelection) {
        self.selection.update(|current| {
            *current = if *current == Some(selection) {
                None
            } else {
                Some(selection)
            };
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_chips_for_defaults() {
        assert!(filter_chips(&FilterParams::default()).is_empty());
        let blank = FilterParams {
            search: "   ".into(),
            ..Default::default()
        };
        assert!(filter_chips(&blank).is_empty());
    }

    #[test]
    fn test_chip_labels() {
        let params = FilterParams {
            search: " hijyen ".into(),
            status_filter: StatusFilter::Multiple,
            selected_statuses: vec![StatusCode::Active, StatusCode::Draft],
            language_filter: LanguageFilter::Single("Türkçe".into()),
            ..Default::default()
        };
        let labels: Vec<String> = filter_chips(&params).into_iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec![
                "Ara: \"hijyen\"".to_string(),
                "Dil: Türkçe".to_string(),
                "Durum: Aktif, Taslak".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_multiple_selection_chip() {
        let params = FilterParams {
            language_filter: LanguageFilter::Multiple,
            ..Default::default()
        };
        let chips = filter_chips(&params);
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].id, CHIP_LANGUAGE);
        assert_eq!(chips[0].label, "Dil: seçim yok");
    }

    #[test]
    fn test_toggle() {
        let mut list = vec![1, 2];
        toggle(&mut list, 2);
        assert_eq!(list, vec![1]);
        toggle(&mut list, 3);
        assert_eq!(list, vec![1, 3]);
    }
}
