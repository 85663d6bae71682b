use crate::enums::StatusCode;
use crate::shared::catalog::{pick_translations, EntityRow, RowBase, TreeRecord};
use crate::shared::wire::lenient;
use serde::{Deserialize, Serialize};

// ============================================================================
// GET /api/Modeller
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserTypeDto {
    #[serde(rename = "kullaniciTuruId", default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(rename = "kullaniciTuruAdi", default, deserialize_with = "lenient::string")]
    pub name: String,
}

/// Модель оценки с переводами в `children`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelTreeDto {
    #[serde(rename = "modelId", default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(rename = "modelResmiAdi", default, deserialize_with = "lenient::string")]
    pub official_name: String,
    #[serde(rename = "modelAliasAdi", default, deserialize_with = "lenient::string")]
    pub alias: String,
    #[serde(rename = "modelAciklama", default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(rename = "dilAdi", default, deserialize_with = "lenient::string")]
    pub language: String,
    #[serde(rename = "olusturmaZamani", default, deserialize_with = "lenient::opt_string")]
    pub created_at: Option<String>,
    #[serde(rename = "aktif", default)]
    pub status: StatusCode,
    /// true: Boyut → Gösterge, false: Boyut → Kriter → Gösterge
    #[serde(rename = "hiyerarsi", default, deserialize_with = "lenient::boolean")]
    pub flat_hierarchy: bool,
    #[serde(rename = "hiyerarsiAciklama", default, deserialize_with = "lenient::string")]
    pub hierarchy_description: String,
    #[serde(rename = "modelTuruAdi", default, deserialize_with = "lenient::string")]
    pub model_type_name: String,
    #[serde(rename = "seviyeAraligi", default, deserialize_with = "lenient::opt_string")]
    pub level_range: Option<String>,
    #[serde(rename = "kullaniciKapsami", default, deserialize_with = "lenient::string")]
    pub user_scope: String,
    #[serde(rename = "kullaniciTurleri", default, deserialize_with = "lenient::list")]
    pub user_types: Vec<UserTypeDto>,
    #[serde(rename = "hastaneTurleri", default, deserialize_with = "lenient::string_list")]
    pub hospital_types: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub translations: Vec<ModelTreeDto>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub children: Vec<ModelTreeDto>,
}

impl ModelTreeDto {
    /// `Seviyeli (<range>)` for level based models, the type name otherwise
    pub fn type_label(&self) -> String {
        match &self.level_range {
            Some(range) => format!("Seviyeli ({})", range),
            None => self.model_type_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelExtra {
    pub hierarchy: String,
    pub flat_hierarchy: bool,
    pub model_type: String,
    pub hospital_types: Vec<String>,
    pub scope: String,
    pub user_types: Vec<String>,
}

pub type ModelRow = EntityRow<ModelExtra>;

impl TreeRecord for ModelTreeDto {
    type Extra = ModelExtra;

    fn base(&self) -> RowBase {
        RowBase {
            id: self.id,
            name: self.official_name.clone(),
            short_name: self.alias.clone(),
            language: self.language.clone(),
            status: self.status,
            date: self.created_at.clone(),
        }
    }

    fn extra(&self) -> Self::Extra {
        ModelExtra {
            hierarchy: self.hierarchy_description.clone(),
            flat_hierarchy: self.flat_hierarchy,
            model_type: self.type_label(),
            hospital_types: self.hospital_types.clone(),
            scope: self.user_scope.clone(),
            user_types: self.user_types.iter().map(|u| u.name.clone()).collect(),
        }
    }

    fn translations(&self) -> &[Self] {
        pick_translations(&self.translations, &self.children)
    }
}

// ============================================================================
// GET /api/Modeller/{id}/details
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelDetail {
    #[serde(rename = "modelId", default, deserialize_with = "lenient::int")]
    pub model_id: i64,
    #[serde(rename = "kullaniciTuruAdi", default, deserialize_with = "lenient::string")]
    pub user_type: String,
    #[serde(rename = "boyutSayisi", default, deserialize_with = "lenient::count")]
    pub dimension_count: u32,
    #[serde(rename = "kriterSayisi", default, deserialize_with = "lenient::count")]
    pub criterion_count: u32,
    #[serde(rename = "gostergeSayisi", default, deserialize_with = "lenient::count")]
    pub indicator_count: u32,
    /// Состояние добавления ответов
    #[serde(rename = "cevapEklenmeDurumu", default, deserialize_with = "lenient::string")]
    pub answer_status: String,
    #[serde(rename = "aktif", default)]
    pub status: StatusCode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::map_tree_rows;
    use crate::shared::wire::decode_list;
    use serde_json::json;

    #[test]
    fn test_model_row_extras() {
        let raw: Vec<ModelTreeDto> = decode_list(json!([{
            "modelId": 1, "modelResmiAdi": "Sağlıkta Kalite Standartları", "modelAliasAdi": null,
            "dilAdi": "Türkçe", "aktif": 1, "hiyerarsi": false,
            "hiyerarsiAciklama": "Boyut → Kriter → Gösterge",
            "modelTuruAdi": "Puanlı", "seviyeAraligi": "1-5",
            "kullaniciKapsami": "Hastane",
            "kullaniciTurleri": [{"kullaniciTuruId": 3, "kullaniciTuruAdi": "Değerlendirici"}],
            "hastaneTurleri": ["Devlet", "Özel"],
            "children": [{"modelId": 2, "modelResmiAdi": "Quality Standards", "dilAdi": "English", "aktif": 2}]
        }]));
        let rows = map_tree_rows(&raw);
        let row = &rows[0];
        assert_eq!(row.short_name, "");
        assert_eq!(row.extra.model_type, "Seviyeli (1-5)");
        assert_eq!(row.extra.hospital_types, vec!["Devlet", "Özel"]);
        assert_eq!(row.extra.user_types, vec!["Değerlendirici"]);
        assert_eq!(row.children[0].status, StatusCode::Draft);
        assert_eq!(row.children[0].extra.model_type, "");
    }

    #[test]
    fn test_type_label_without_range() {
        let dto = ModelTreeDto {
            model_type_name: "Puanlı".into(),
            ..Default::default()
        };
        assert_eq!(dto.type_label(), "Puanlı");
    }

    #[test]
    fn test_details() {
        let rows: Vec<ModelDetail> = decode_list(json!([{
            "ModelId": 1, "KullaniciTuruAdi": "Yönetici", "BoyutSayisi": 4,
            "KriterSayisi": "12", "GostergeSayisi": 50, "CevapEklenmeDurumu": "Tamamlandı", "Aktif": true
        }]));
        assert_eq!(rows[0].criterion_count, 12);
        assert_eq!(rows[0].status, StatusCode::Active);
    }
}
