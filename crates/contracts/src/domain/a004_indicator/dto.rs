use crate::enums::StatusCode;
use crate::shared::catalog::{pick_translations, EntityRow, RowBase, TreeRecord};
use crate::shared::wire::lenient;
use serde::{Deserialize, Serialize};

// ============================================================================
// GET /api/Gostergeler/tree
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorTreeDto {
    #[serde(rename = "gostergeId", default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(rename = "gostergeAdi", default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(rename = "gostergeAllias", default, deserialize_with = "lenient::string")]
    pub short_name: String,
    #[serde(rename = "aktif", default)]
    pub status: StatusCode,
    #[serde(rename = "dilAdi", default, deserialize_with = "lenient::string")]
    pub language: String,
    #[serde(rename = "olusturmaZamani", default, deserialize_with = "lenient::opt_string")]
    pub created_at: Option<String>,
    /// Названия типов ответа
    #[serde(rename = "cevapTuruAdlari", default, deserialize_with = "lenient::string_list")]
    pub answer_types: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub translations: Vec<IndicatorTreeDto>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub children: Vec<IndicatorTreeDto>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorExtra {
    pub answer_types: Vec<String>,
}

pub type IndicatorRow = EntityRow<IndicatorExtra>;

impl TreeRecord for IndicatorTreeDto {
    type Extra = IndicatorExtra;

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

    fn extra(&self) -> Self::Extra {
        IndicatorExtra {
            answer_types: self.answer_types.clone(),
        }
    }

    fn translations(&self) -> &[Self] {
        pick_translations(&self.translations, &self.children)
    }
}

// ============================================================================
// GET /api/Gostergeler/{id}/models
// ============================================================================

const DEFAULT_LEVEL: &str = "-";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorModelSummary {
    #[serde(rename = "modelId", default, deserialize_with = "lenient::int")]
    pub model_id: i64,
    #[serde(rename = "modelAdi", default, deserialize_with = "lenient::string")]
    pub model_name: String,
    #[serde(rename = "boyutId", default, deserialize_with = "lenient::opt_int")]
    pub dimension_id: Option<i64>,
    #[serde(rename = "boyutAdi", default, deserialize_with = "lenient::string")]
    pub dimension_name: String,
    /// Отсутствует для плоской иерархии (Boyut → Gösterge)
    #[serde(rename = "kriterId", default, deserialize_with = "lenient::opt_int")]
    pub criterion_id: Option<i64>,
    #[serde(rename = "kriterAdi", default, deserialize_with = "lenient::opt_string")]
    pub criterion_name: Option<String>,
    #[serde(rename = "boyutAgirligi", default, deserialize_with = "lenient::float")]
    pub dimension_weight: f64,
    #[serde(rename = "kriterAgirligi", default, deserialize_with = "lenient::float")]
    pub criterion_weight: f64,
    #[serde(rename = "gostergeAgirligi", default, deserialize_with = "lenient::float")]
    pub indicator_weight: f64,
    #[serde(rename = "modelAgirligi", default, deserialize_with = "lenient::float")]
    pub model_weight: f64,
    #[serde(rename = "seviyeAdi", default, deserialize_with = "lenient::string")]
    pub level_name: String,
    #[serde(rename = "hiyerarsiTipi", default, deserialize_with = "lenient::string")]
    pub hierarchy_kind: String,
}

impl IndicatorModelSummary {
    pub fn level(&self) -> &str {
        if self.level_name.trim().is_empty() {
            DEFAULT_LEVEL
        } else {
            &self.level_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::map_tree_rows;
    use crate::shared::wire::decode_list;
    use serde_json::json;

    #[test]
    fn test_children_and_answer_types() {
        let raw: Vec<IndicatorTreeDto> = decode_list(json!([{
            "gostergeId": 100, "gostergeAdi": "Düşme Oranı", "gostergeAllias": "DO",
            "aktif": "Pasif", "dilAdi": "Türkçe",
            "cevapTuruAdlari": ["Evet/Hayır", "Sayısal"],
            "children": [{"gostergeId": 101, "gostergeAdi": "Fall Rate", "dilAdi": "English", "aktif": 1}]
        }]));
        let rows = map_tree_rows(&raw);
        assert_eq!(rows[0].extra.answer_types, vec!["Evet/Hayır", "Sayısal"]);
        assert_eq!(rows[0].children.len(), 1);
        assert!(rows[0].children[0].extra.answer_types.is_empty());
        assert_eq!(rows[0].status, StatusCode::Passive);
    }

    #[test]
    fn test_summary_optional_criterion() {
        let rows: Vec<IndicatorModelSummary> = decode_list(json!([
            {"modelId": 1, "boyutAdi": "Kalite", "kriterAdi": null, "hiyerarsiTipi": "Boyut → Gösterge"},
            {"modelId": 2, "boyutAdi": "Kalite", "kriterAdi": "El Hijyeni", "seviyeAdi": "S2", "gostergeAgirligi": "2.5"}
        ]));
        assert_eq!(rows[0].criterion_name, None);
        assert_eq!(rows[0].level(), "-");
        assert_eq!(rows[1].criterion_name.as_deref(), Some("El Hijyeni"));
        assert_eq!(rows[1].indicator_weight, 2.5);
        assert_eq!(rows[1].level(), "S2");
    }
}
