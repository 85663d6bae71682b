use crate::enums::StatusCode;
use serde::{Deserialize, Serialize};

/// Общие поля строки справочника (корень или перевод).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RowBase {
    pub id: i64,
    pub name: String,
    pub short_name: String,
    pub language: String,
    pub status: StatusCode,
    /// ISO timestamp as sent by the API
    pub date: Option<String>,
}

/// Table row of one catalog entity.
///
/// A root with non-empty `children` has translations in other languages.
/// Translations are one level deep: a child never carries children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRow<X> {
    pub id: i64,
    pub name: String,
    pub short_name: String,
    pub language: String,
    pub status: StatusCode,
    pub date: Option<String>,
    /// Entity specific columns
    pub extra: X,
    pub children: Vec<EntityRow<X>>,
}

impl<X: Clone> EntityRow<X> {
    pub fn from_base(base: RowBase, extra: X) -> Self {
        Self {
            id: base.id,
            name: base.name,
            short_name: base.short_name,
            language: base.language,
            status: base.status,
            date: base.date,
            extra,
            children: Vec::new(),
        }
    }

    /// Same row with the translations hidden
    pub fn without_children(&self) -> Self {
        Self {
            children: Vec::new(),
            ..self.clone()
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Raw tree record of one entity endpoint.
pub trait TreeRecord: Sized {
    type Extra: Clone;

    fn base(&self) -> RowBase;
    fn extra(&self) -> Self::Extra;
    /// Nested same-entity records (translations)
    fn translations(&self) -> &[Self];
}

/// Trees send translations under `translations` or `children`; the first
/// non-empty list is used.
pub fn pick_translations<'a, T>(translations: &'a [T], children: &'a [T]) -> &'a [T] {
    if translations.is_empty() {
        children
    } else {
        translations
    }
}

/// Maps a raw tree record to a row. Translations of translations are dropped.
pub fn map_tree_row<R: TreeRecord>(raw: &R) -> EntityRow<R::Extra> {
    let mut row = EntityRow::from_base(raw.base(), raw.extra());
    row.children = raw
        .translations()
        .iter()
        .map(|t| EntityRow::from_base(t.base(), t.extra()))
        .collect();
    row
}

pub fn map_tree_rows<R: TreeRecord>(raw: &[R]) -> Vec<EntityRow<R::Extra>> {
    raw.iter().map(map_tree_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Raw {
        id: i64,
        lang: &'static str,
        nested: Vec<Raw>,
    }

    impl TreeRecord for Raw {
        type Extra = ();

        fn base(&self) -> RowBase {
            RowBase {
                id: self.id,
                name: format!("n{}", self.id),
                language: self.lang.to_string(),
                ..Default::default()
            }
        }

        fn extra(&self) -> Self::Extra {}

        fn translations(&self) -> &[Self] {
            &self.nested
        }
    }

    #[test]
    fn test_translations_are_one_level_deep() {
        let raw = Raw {
            id: 1,
            lang: "Türkçe",
            nested: vec![Raw {
                id: 2,
                lang: "English",
                nested: vec![Raw {
                    id: 3,
                    lang: "Deutsch",
                    nested: vec![],
                }],
            }],
        };
        let row = map_tree_row(&raw);
        assert_eq!(row.children.len(), 1);
        assert_eq!(row.children[0].id, 2);
        assert!(row.children[0].children.is_empty());
        assert_eq!(row.status, StatusCode::Passive);
    }
}
