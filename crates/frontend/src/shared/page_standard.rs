//! Категории страниц внутри вкладок.
//!
//! Every tab page carries an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"a002_dimension--list"`) and a `data-page-category` attribute.
//! The entity half matches the `domain/` directory of the page.

/// Справочник: таблица с фильтрами и сводкой по выбранной строке.
pub const PAGE_CAT_LIST: &str = "list";

/// Иерархическое представление (дерево Eşleşme).
pub const PAGE_CAT_TREE: &str = "tree";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_TREE];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_model--list"));
        assert!(is_valid_page_id("a006_mapping--tree"));
        assert!(!is_valid_page_id("a001_model"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_model--dashboard"));
    }
}
