use crate::domain::a006_mapping::NavModel;
use crate::enums::StatusCode;
use crate::shared::catalog::{pick_translations, EntityRow, RowBase, TreeRecord};
use crate::shared::wire::lenient;
use serde::{Deserialize, Serialize};

// ============================================================================
// GET /api/Kriterler/tree
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CriterionTreeDto {
    #[serde(rename = "kriterId", default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(rename = "kriterAdi", default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(rename = "kriterAlias", default, deserialize_with = "lenient::string")]
    pub short_name: String,
    #[serde(rename = "aktif", default)]
    pub status: StatusCode,
    #[serde(rename = "dilAdi", default, deserialize_with = "lenient::string")]
    pub language: String,
    #[serde(rename = "olusturmaZamani", default, deserialize_with = "lenient::opt_string")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub translations: Vec<CriterionTreeDto>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub children: Vec<CriterionTreeDto>,
}

pub type CriterionRow = EntityRow<()>;

impl TreeRecord for CriterionTreeDto {
    type Extra = ();

    fn base(&self) -> RowBase {
        RowBase {
            id: self.id,
            name: self.name.clone(),
            short_name: self.short_name.clone(),
            language: self.language.clone(),
            status: self.status,
            date: self.created_at.clone(),
        }
    }

    fn extra(&self) -> Self::Extra {}

    fn translations(&self) -> &[Self] {
        pick_translations(&self.translations, &self.children)
    }
}

// ============================================================================
// GET /api/Kriterler/{id}/models
// ============================================================================

const DEFAULT_LEVEL: &str = "Puanlı";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CriterionModelSummary {
    #[serde(rename = "modelId", default, deserialize_with = "lenient::int")]
    pub model_id: i64,
    #[serde(rename = "modelAdi", default, deserialize_with = "lenient::string")]
    pub model_name: String,
    #[serde(rename = "boyutId", default, deserialize_with = "lenient::opt_int")]
    pub dimension_id: Option<i64>,
    #[serde(rename = "boyutAdi", default, deserialize_with = "lenient::string")]
    pub dimension_name: String,
    #[serde(rename = "boyutAgirligi", default, deserialize_with = "lenient::float")]
    pub dimension_weight: f64,
    #[serde(rename = "kriterAgirligi", default, deserialize_with = "lenient::float")]
    pub criterion_weight: f64,
    /// Вес критерия внутри модели
    #[serde(rename = "kriterModelAgirligi", default, deserialize_with = "lenient::float")]
    pub model_weight: f64,
    #[serde(rename = "gostergeSayisi", default, deserialize_with = "lenient::count")]
    pub indicator_count: u32,
    #[serde(rename = "seviyeId", default, deserialize_with = "lenient::opt_int")]
    pub level_id: Option<i64>,
    #[serde(rename = "seviyeAdi", default, deserialize_with = "lenient::string")]
    pub level_name: String,
}

impl CriterionModelSummary {
    pub fn level(&self) -> &str {
        if self.level_name.trim().is_empty() {
            DEFAULT_LEVEL
        } else {
            &self.level_name
        }
    }
}

/// Replaces indicator counts with the ones of the navigation tree.
///
/// The dimension is matched by id, by name when the summary has no id.
/// Summaries without a counterpart keep their own count.
pub fn enrich_indicator_counts(summaries: &mut [CriterionModelSummary], navigation: &[NavModel]) {
    for summary in summaries.iter_mut() {
        let Some(model) = navigation.iter().find(|m| m.id == summary.model_id) else {
            continue;
        };
        let dimension = match summary.dimension_id.filter(|id| *id != 0) {
            Some(id) => model.dimensions.iter().find(|d| d.id == id),
            None => model
                .dimensions
                .iter()
                .find(|d| d.name == summary.dimension_name),
        };
        if let Some(dimension) = dimension {
            summary.indicator_count = dimension.indicator_count;
        }
    }
}
