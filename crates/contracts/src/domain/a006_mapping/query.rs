use crate::enums::{StatusCode, StatusFilter};
use crate::shared::catalog::LanguageFilter;
use serde::{Deserialize, Serialize};

/// Фильтр навигационного запроса.
///
/// Multi-valued criteria are sent as repeated parameters, empty values are
/// never sent. `language` applies to the model language only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavigationFilter {
    pub language: Option<String>,
    pub languages: Vec<String>,
    pub status: Option<StatusCode>,
    pub statuses: Vec<StatusCode>,
    pub model_keyword: Option<String>,
    pub model_keywords: Vec<String>,
    pub dimension_keyword: Option<String>,
    pub dimension_keywords: Vec<String>,
    pub criterion_keyword: Option<String>,
    pub criterion_keywords: Vec<String>,
    pub indicator_keyword: Option<String>,
    pub indicator_keywords: Vec<String>,
}

impl NavigationFilter {
    pub const PATH: &'static str = "/api/Eslesme/navigation";

    /// Query parameters in the order the backend documents them: lists
    /// first, then the single values.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &'static str, value: String| {
            if !value.trim().is_empty() {
                pairs.push((key, value));
            }
        };

        for v in &self.languages {
            push("DilAdlari", v.clone());
        }
        for s in &self.statuses {
            push("Aktifler", s.code().to_string());
        }
        for v in &self.model_keywords {
            push("ModelKelimeler", v.clone());
        }
        for v in &self.dimension_keywords {
            push("BoyutKelimeler", v.clone());
        }
        for v in &self.criterion_keywords {
            push("KriterKelimeler", v.clone());
        }
        for v in &self.indicator_keywords {
            push("GostergeKelimeler", v.clone());
        }

        push("DilAdi", self.language.clone().unwrap_or_default());
        push("Aktif", self.status.map(|s| s.code().to_string()).unwrap_or_default());
        push("ModelKelime", self.model_keyword.clone().unwrap_or_default());
        push("BoyutKelime", self.dimension_keyword.clone().unwrap_or_default());
        push("KriterKelime", self.criterion_keyword.clone().unwrap_or_default());
        push("GostergeKelime", self.indicator_keyword.clone().unwrap_or_default());

        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

/// Keyword box input: one term is a single keyword, comma separated terms
/// become the multi-valued criterion.
pub fn split_keywords(input: &str) -> (Option<String>, Vec<String>) {
    let mut terms: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    match terms.len() {
        0 => (None, Vec::new()),
        1 => (terms.pop(), Vec::new()),
        _ => (None, terms),
    }
}

/// Состояние формы фильтров страницы Eşleşme.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationForm {
    pub language: LanguageFilter,
    pub selected_languages: Vec<String>,
    pub status: StatusFilter,
    pub selected_statuses: Vec<StatusCode>,
    pub model_text: String,
    pub dimension_text: String,
    pub criterion_text: String,
    pub indicator_text: String,
}

impl NavigationForm {
    /// `Multiple` sends the chip selection as repeated parameters; an empty
    /// selection sends nothing and leaves that level unrestricted.
    pub fn to_filter(&self) -> NavigationFilter {
        let (language, languages) = match &self.language {
            LanguageFilter::All => (None, Vec::new()),
            LanguageFilter::Single(name) => (Some(name.clone()), Vec::new()),
            LanguageFilter::Multiple => (None, self.selected_languages.clone()),
        };
        let statuses = if self.status == StatusFilter::Multiple {
            self.selected_statuses.clone()
        } else {
            Vec::new()
        };
        let (model_keyword, model_keywords) = split_keywords(&self.model_text);
        let (dimension_keyword, dimension_keywords) = split_keywords(&self.dimension_text);
        let (criterion_keyword, criterion_keywords) = split_keywords(&self.criterion_text);
        let (indicator_keyword, indicator_keywords) = split_keywords(&self.indicator_text);

        NavigationFilter {
            language,
            languages,
            status: self.status.status(),
            statuses,
            model_keyword,
            model_keywords,
            dimension_keyword,
            dimension_keywords,
            criterion_keyword,
            criterion_keywords,
            indicator_keyword,
            indicator_keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keywords() {
        assert_eq!(split_keywords("  "), (None, Vec::<String>::new()));
        assert_eq!(split_keywords(" hijyen "), (Some("hijyen".to_string()), Vec::<String>::new()));
        assert_eq!(
            split_keywords("hijyen, , el"),
            (None, vec!["hijyen".to_string(), "el".to_string()])
        );
    }

    #[test]
    fn test_form_multi_selection_becomes_repeated_params() {
        let form = NavigationForm {
            language: LanguageFilter::Multiple,
            selected_languages: vec!["Türkçe".into(), "English".into()],
            status: StatusFilter::Multiple,
            selected_statuses: vec![StatusCode::Active, StatusCode::Draft],
            model_text: "klasik".into(),
            criterion_text: "el, hijyen".into(),
            ..Default::default()
        };
        assert_eq!(
            form.to_filter().query_pairs(),
            vec![
                ("DilAdlari", "Türkçe".to_string()),
                ("DilAdlari", "English".to_string()),
                ("Aktifler", "1".to_string()),
                ("Aktifler", "2".to_string()),
                ("KriterKelimeler", "el".to_string()),
                ("KriterKelimeler", "hijyen".to_string()),
                ("ModelKelime", "klasik".to_string()),
            ]
        );
    }

    #[test]
    fn test_form_single_values_ignore_chip_selection() {
        let form = NavigationForm {
            language: LanguageFilter::Single("English".into()),
            selected_languages: vec!["Türkçe".into()],
            status: StatusFilter::Passive,
            selected_statuses: vec![StatusCode::Active],
            ..Default::default()
        };
        let filter = form.to_filter();
        assert!(filter.languages.is_empty());
        assert!(filter.statuses.is_empty());
        assert_eq!(
            filter.query_pairs(),
            vec![("DilAdi", "English".to_string()), ("Aktif", "0".to_string())]
        );
        assert!(NavigationForm::default().to_filter().is_empty());
    }

    #[test]
    fn test_empty_filter_has_no_params() {
        assert!(NavigationFilter::default().is_empty());
        let blank = NavigationFilter {
            model_keyword: Some("  ".into()),
            languages: vec![String::new()],
            ..Default::default()
        };
        assert!(blank.is_empty());
    }

    #[test]
    fn test_pairs_order_and_repeats() {
        let filter = NavigationFilter {
            language: Some("Türkçe".into()),
            languages: vec!["Türkçe".into(), "English".into()],
            statuses: vec![StatusCode::Active, StatusCode::Draft],
            status: Some(StatusCode::Passive),
            criterion_keywords: vec!["hijyen".into()],
            indicator_keyword: Some("oran".into()),
            ..Default::default()
        };
        let pairs = filter.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("DilAdlari", "Türkçe".to_string()),
                ("DilAdlari", "English".to_string()),
                ("Aktifler", "1".to_string()),
                ("Aktifler", "2".to_string()),
                ("KriterKelimeler", "hijyen".to_string()),
                ("DilAdi", "Türkçe".to_string()),
                ("Aktif", "0".to_string()),
                ("GostergeKelime", "oran".to_string()),
            ]
        );
    }
}
