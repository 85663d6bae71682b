use crate::enums::StatusCode;
use crate::shared::catalog::{pick_translations, EntityRow, RowBase, TreeRecord};
use crate::shared::wire::lenient;
use serde::{Deserialize, Serialize};

// ============================================================================
// GET /api/Boyutlar/tree
// ============================================================================

/// Boyut (dimension) with its translations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DimensionTreeDto {
    #[serde(rename = "boyutId", default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(rename = "boyutAdi", default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(rename = "boyutAllias", default, deserialize_with = "lenient::string")]
    pub short_name: String,
    #[serde(rename = "aktif", default)]
    pub status: StatusCode,
    #[serde(rename = "dilAdi", default, deserialize_with = "lenient::string")]
    pub language: String,
    #[serde(rename = "olusturmaZamani", default, deserialize_with = "lenient::opt_string")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub translations: Vec<DimensionTreeDto>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub children: Vec<DimensionTreeDto>,
}

pub type DimensionRow = EntityRow<()>;

impl TreeRecord for DimensionTreeDto {
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
// GET /api/Boyutlar/{id}/models
// ============================================================================

/// Model that uses the selected dimension
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionModelSummary {
    #[serde(rename = "modelId", default, deserialize_with = "lenient::int")]
    pub model_id: i64,
    #[serde(rename = "modelAdi", default, deserialize_with = "lenient::string")]
    pub model_name: String,
    #[serde(rename = "kriterSayisi", default, deserialize_with = "lenient::count")]
    pub criterion_count: u32,
    #[serde(rename = "gostergeSayisi", default, deserialize_with = "lenient::count")]
    pub indicator_count: u32,
    #[serde(rename = "modelAgirligi", default, deserialize_with = "lenient::float")]
    pub model_weight: f64,
    #[serde(rename = "karsilanmaDuzeyi", default, deserialize_with = "lenient::string")]
    pub coverage_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::map_tree_rows;
    use crate::shared::wire::decode_list;
    use serde_json::json;

    #[test]
    fn test_pascal_case_tree() {
        let raw: Vec<DimensionTreeDto> = decode_list(json!([{
            "BoyutId": 4,
            "BoyutAdi": "Hasta Hakları",
            "BoyutAllias": "HH",
            "Aktif": "Aktif",
            "DilAdi": "Türkçe",
            "OlusturmaZamani": "2024-03-15T10:00:00",
            "Translations": [
                {"BoyutId": 5, "BoyutAdi": "Patient Rights", "DilAdi": "English", "Aktif": null}
            ]
        }]));
        let rows = map_tree_rows(&raw);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.id, 4);
        assert_eq!(row.short_name, "HH");
        assert_eq!(row.status, StatusCode::Active);
        assert_eq!(row.date.as_deref(), Some("2024-03-15T10:00:00"));
        assert_eq!(row.children.len(), 1);
        assert_eq!(row.children[0].name, "Patient Rights");
        assert_eq!(row.children[0].short_name, "");
        assert_eq!(row.children[0].status, StatusCode::Passive);
    }

    #[test]
    fn test_missing_fields_default() {
        let raw: Vec<DimensionTreeDto> = decode_list(json!([{}]));
        let rows = map_tree_rows(&raw);
        assert_eq!(rows[0].id, 0);
        assert_eq!(rows[0].name, "");
        assert_eq!(rows[0].status, StatusCode::Passive);
        assert!(rows[0].date.is_none());
        assert!(rows[0].children.is_empty());
    }

    #[test]
    fn test_models_summary() {
        let rows: Vec<DimensionModelSummary> = decode_list(json!([{
            "ModelId": 1, "ModelAdi": "SKS Hastane", "KriterSayisi": 12,
            "GostergeSayisi": 40, "ModelAgirligi": null, "KarsilanmaDuzeyi": "Tam"
        }]));
        assert_eq!(rows[0].model_name, "SKS Hastane");
        assert_eq!(rows[0].criterion_count, 12);
        assert_eq!(rows[0].indicator_count, 40);
        assert_eq!(rows[0].model_weight, 0.0);
        assert_eq!(rows[0].coverage_level, "Tam");
    }
}
