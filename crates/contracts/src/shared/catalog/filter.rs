//! Filter pipeline of the list pages.
//!
//! Stages run in a fixed order: language projection, free-text search, then
//! status. Later stages see the rows produced by earlier ones.

use super::row::EntityRow;
use crate::enums::{StatusCode, StatusFilter};
use crate::shared::text::{fold_search, normalize_lang};
use serde::{Deserialize, Serialize};

/// Row as shown in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisplayRow<X> {
    Root(EntityRow<X>),
    /// A translation standing in for its root
    Promoted { row: EntityRow<X>, parent_id: i64 },
}

impl<X> DisplayRow<X> {
    pub fn row(&self) -> &EntityRow<X> {
        match self {
            DisplayRow::Root(row) | DisplayRow::Promoted { row, .. } => row,
        }
    }

    pub fn into_row(self) -> EntityRow<X> {
        match self {
            DisplayRow::Root(row) | DisplayRow::Promoted { row, .. } => row,
        }
    }

    pub fn parent_id(&self) -> Option<i64> {
        match self {
            DisplayRow::Root(_) => None,
            DisplayRow::Promoted { parent_id, .. } => Some(*parent_id),
        }
    }

    pub fn is_promoted(&self) -> bool {
        matches!(self, DisplayRow::Promoted { .. })
    }
}

/// Language selector of the toolbar
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LanguageFilter {
    #[default]
    All,
    Single(String),
    /// Uses `FilterParams::selected_languages`
    Multiple,
}

impl LanguageFilter {
    /// Toolbar select value: `all`, `multiple` or a language name
    pub fn from_value(value: &str) -> Self {
        match value {
            "" | "all" => LanguageFilter::All,
            "multiple" => LanguageFilter::Multiple,
            name => LanguageFilter::Single(name.to_string()),
        }
    }

    pub fn value(&self) -> String {
        match self {
            LanguageFilter::All => "all".to_string(),
            LanguageFilter::Multiple => "multiple".to_string(),
            LanguageFilter::Single(name) => name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterParams {
    pub search: String,
    pub status_filter: StatusFilter,
    pub selected_statuses: Vec<StatusCode>,
    pub language_filter: LanguageFilter,
    pub selected_languages: Vec<String>,
    /// Criterion and indicator lists promote translations whose status
    /// matches when the root's does not
    pub promote_children_by_status: bool,
}

impl FilterParams {
    fn accepts_status(&self, status: StatusCode) -> bool {
        self.status_filter.accepts(status, &self.selected_statuses)
    }
}

pub fn apply_filters<X: Clone>(rows: &[EntityRow<X>], params: &FilterParams) -> Vec<DisplayRow<X>> {
    let projected = project_language(rows, &params.language_filter, &params.selected_languages);

    let q = fold_search(params.search.trim());
    let searched = projected
        .into_iter()
        .filter(|r| matches_search(r.row(), &q));

    let mut out = Vec::new();
    for display in searched {
        if params.accepts_status(display.row().status) {
            out.push(if params.promote_children_by_status {
                retain_children(display, |c| params.accepts_status(c.status))
            } else {
                display
            });
            continue;
        }
        if !params.promote_children_by_status {
            continue;
        }
        let parent_id = display.row().id;
        out.extend(
            display
                .row()
                .children
                .iter()
                .filter(|c| params.accepts_status(c.status) && matches_search(c, &q))
                .map(|c| DisplayRow::Promoted {
                    row: c.without_children(),
                    parent_id,
                }),
        );
    }
    out
}

/// Language projection. `All` keeps every row untouched.
pub fn project_language<X: Clone>(
    rows: &[EntityRow<X>],
    filter: &LanguageFilter,
    selected: &[String],
) -> Vec<DisplayRow<X>> {
    match filter {
        LanguageFilter::All => rows.iter().cloned().map(DisplayRow::Root).collect(),
        LanguageFilter::Single(lang) => {
            let wanted = normalize_lang(lang);
            rows.iter()
                .filter_map(|r| {
                    if normalize_lang(&r.language) == wanted {
                        return Some(DisplayRow::Root(r.without_children()));
                    }
                    r.children
                        .iter()
                        .find(|c| normalize_lang(&c.language) == wanted)
                        .map(|c| DisplayRow::Promoted {
                            row: c.without_children(),
                            parent_id: r.id,
                        })
                })
                .collect()
        }
        LanguageFilter::Multiple => {
            let wanted: Vec<String> = selected.iter().map(|l| normalize_lang(l)).collect();
            let is_wanted = |lang: &str| wanted.contains(&normalize_lang(lang));
            let mut out = Vec::new();
            for r in rows {
                if is_wanted(&r.language) {
                    let mut root = r.clone();
                    root.children.retain(|c| is_wanted(&c.language));
                    out.push(DisplayRow::Root(root));
                } else {
                    out.extend(r.children.iter().filter(|c| is_wanted(&c.language)).map(|c| {
                        DisplayRow::Promoted {
                            row: c.without_children(),
                            parent_id: r.id,
                        }
                    }));
                }
            }
            out
        }
    }
}

/// `q` is already trimmed and folded with [`fold_search`], the same key the
/// autocomplete uses; empty matches everything.
pub fn matches_search<X>(row: &EntityRow<X>, q: &str) -> bool {
    q.is_empty() || fold_search(&row.name).contains(q) || fold_search(&row.short_name).contains(q)
}

fn retain_children<X>(display: DisplayRow<X>, keep: impl Fn(&EntityRow<X>) -> bool) -> DisplayRow<X> {
    match display {
        DisplayRow::Root(mut row) => {
            row.children.retain(|c| keep(c));
            DisplayRow::Root(row)
        }
        promoted => promoted,
    }
}

/// Autocomplete hints: the visible names
pub fn search_hints<X>(rows: &[DisplayRow<X>]) -> Vec<String> {
    rows.iter()
        .map(|r| r.row().name.clone())
        .filter(|n| !n.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, name: &str, lang: &str, status: StatusCode) -> EntityRow<()> {
        EntityRow {
            id,
            name: name.to_string(),
            short_name: format!("K{id}"),
            language: lang.to_string(),
            status,
            date: None,
            extra: (),
            children: Vec::new(),
        }
    }

    fn with_children(mut r: EntityRow<()>, children: Vec<EntityRow<()>>) -> EntityRow<()> {
        r.children = children;
        r
    }

    fn sample() -> Vec<EntityRow<()>> {
        vec![
            with_children(
                row(1, "Hasta Güvenliği", "Türkçe", StatusCode::Active),
                vec![row(11, "Patient Safety", "English", StatusCode::Draft)],
            ),
            with_children(
                row(2, "Kalite", "Türkçe", StatusCode::Draft),
                vec![
                    row(21, "Quality", "English", StatusCode::Active),
                    row(22, "Qualität", "Deutsch", StatusCode::Active),
                ],
            ),
            row(3, "Only English", "ENGLISH", StatusCode::Passive),
        ]
    }

    #[test]
    fn test_all_is_identity() {
        let rows = sample();
        let out = apply_filters(&rows, &FilterParams::default());
        let back: Vec<_> = out.into_iter().map(DisplayRow::into_row).collect();
        assert_eq!(back, rows);

        let promoting = FilterParams {
            promote_children_by_status: true,
            ..Default::default()
        };
        let out = apply_filters(&rows, &promoting);
        assert!(out.iter().all(|r| !r.is_promoted()));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_single_language_promotes_translation() {
        let rows = vec![with_children(
            row(1, "Hasta Güvenliği", "Türkçe", StatusCode::Active),
            vec![row(11, "Patient Safety", "English", StatusCode::Draft)],
        )];
        let params = FilterParams {
            language_filter: LanguageFilter::Single("English".into()),
            ..Default::default()
        };
        let out = apply_filters(&rows, &params);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].parent_id(), Some(1));
        let r = out[0].row();
        assert_eq!(r.name, "Patient Safety");
        assert_eq!(r.short_name, "K11");
        assert_eq!(r.status, StatusCode::Draft);
        assert!(r.children.is_empty());
    }

    #[test]
    fn test_single_language_root_hides_translations() {
        let params = FilterParams {
            language_filter: LanguageFilter::Single("türkçe".into()),
            ..Default::default()
        };
        let out = apply_filters(&sample(), &params);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| !r.is_promoted() && r.row().children.is_empty()));
    }

    #[test]
    fn test_single_language_case_and_diacritics() {
        let params = FilterParams {
            language_filter: LanguageFilter::Single("english".into()),
            ..Default::default()
        };
        let out = apply_filters(&sample(), &params);
        let ids: Vec<i64> = out.iter().map(|r| r.row().id).collect();
        assert_eq!(ids, vec![11, 21, 3]);
    }

    #[test]
    fn test_multiple_languages() {
        let params = FilterParams {
            language_filter: LanguageFilter::Multiple,
            selected_languages: vec!["English".into(), "Deutsch".into()],
            ..Default::default()
        };
        let out = apply_filters(&sample(), &params);
        let ids: Vec<i64> = out.iter().map(|r| r.row().id).collect();
        assert_eq!(ids, vec![11, 21, 22, 3]);
        assert!(out[1].is_promoted() && out[2].is_promoted());
        assert!(!out[3].is_promoted());

        let none = FilterParams {
            language_filter: LanguageFilter::Multiple,
            ..Default::default()
        };
        assert!(apply_filters(&sample(), &none).is_empty());
    }

    #[test]
    fn test_multiple_languages_filters_root_children() {
        let params = FilterParams {
            language_filter: LanguageFilter::Multiple,
            selected_languages: vec!["Türkçe".into(), "Deutsch".into()],
            ..Default::default()
        };
        let out = apply_filters(&sample(), &params);
        assert_eq!(out.len(), 2);
        assert!(out[0].row().children.is_empty());
        assert_eq!(out[1].row().children.len(), 1);
        assert_eq!(out[1].row().children[0].id, 22);
    }

    #[test]
    fn test_search_name_or_short_name() {
        let params = FilterParams {
            search: "  kal ".into(),
            ..Default::default()
        };
        let out = apply_filters(&sample(), &params);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].row().id, 2);

        let params = FilterParams {
            search: "k3".into(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&sample(), &params)[0].row().id, 3);
    }

    #[test]
    fn test_search_folds_turkish_i() {
        let rows = vec![
            row(1, "İstanbul İl Sağlık", "Türkçe", StatusCode::Active),
            row(2, "ISPARTA", "Türkçe", StatusCode::Active),
            row(3, "Güvenlik", "Türkçe", StatusCode::Active),
        ];
        let ids = |search: &str| -> Vec<i64> {
            let params = FilterParams {
                search: search.into(),
                ..Default::default()
            };
            apply_filters(&rows, &params).iter().map(|r| r.row().id).collect()
        };
        assert_eq!(ids("ist"), vec![1]);
        assert_eq!(ids("isp"), vec![2]);
        assert_eq!(ids("GUV"), vec![3]);
    }

    #[test]
    fn test_status_without_promotion_drops_root() {
        let params = FilterParams {
            status_filter: StatusFilter::Multiple,
            selected_statuses: vec![StatusCode::Active],
            ..Default::default()
        };
        let out = apply_filters(&sample(), &params);
        let ids: Vec<i64> = out.iter().map(|r| r.row().id).collect();
        assert_eq!(ids, vec![1]);
        // the root keeps its translations untouched
        assert_eq!(out[0].row().children.len(), 1);
    }

    #[test]
    fn test_status_promotes_matching_children() {
        let rows = vec![with_children(
            row(2, "Kalite", "Türkçe", StatusCode::Draft),
            vec![row(21, "Quality", "English", StatusCode::Active)],
        )];
        let params = FilterParams {
            status_filter: StatusFilter::Multiple,
            selected_statuses: vec![StatusCode::Active],
            promote_children_by_status: true,
            ..Default::default()
        };
        let out = apply_filters(&rows, &params);
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0],
            DisplayRow::Promoted {
                row: row(21, "Quality", "English", StatusCode::Active),
                parent_id: 2,
            }
        );
    }

    #[test]
    fn test_status_promotion_trims_matching_root_children() {
        let params = FilterParams {
            status_filter: StatusFilter::Active,
            promote_children_by_status: true,
            ..Default::default()
        };
        let out = apply_filters(&sample(), &params);
        let ids: Vec<i64> = out.iter().map(|r| r.row().id).collect();
        assert_eq!(ids, vec![1, 21, 22]);
        assert!(out[0].row().children.is_empty());
    }

    #[test]
    fn test_language_filter_values() {
        assert_eq!(LanguageFilter::from_value("all"), LanguageFilter::All);
        assert_eq!(LanguageFilter::from_value("multiple"), LanguageFilter::Multiple);
        assert_eq!(
            LanguageFilter::from_value("English"),
            LanguageFilter::Single("English".into())
        );
        assert_eq!(LanguageFilter::Single("English".into()).value(), "English");
    }
}
