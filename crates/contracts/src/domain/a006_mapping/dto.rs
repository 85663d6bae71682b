use crate::enums::StatusCode;
use crate::shared::wire::lenient;
use serde::{Deserialize, Serialize};

// ============================================================================
// GET /api/Eslesme/navigation
// ============================================================================
//
// `aktif` is optional on every level: absent means "same as the parent".

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavIndicatorDto {
    #[serde(rename = "gostergeId", default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(rename = "gostergeAdi", default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(rename = "eslesmeId", default, deserialize_with = "lenient::opt_int")]
    pub mapping_id: Option<i64>,
    #[serde(rename = "aktif", default)]
    pub status: Option<StatusCode>,
    #[serde(rename = "modelIciAgirlik", default, deserialize_with = "lenient::opt_float")]
    pub weight_in_model: Option<f64>,
    #[serde(rename = "boyutIciAgirlik", default, deserialize_with = "lenient::opt_float")]
    pub weight_in_dimension: Option<f64>,
    #[serde(rename = "kriterIciAgirlik", default, deserialize_with = "lenient::opt_float")]
    pub weight_in_criterion: Option<f64>,
    #[serde(rename = "agirlik", default, deserialize_with = "lenient::opt_float")]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavCriterionDto {
    #[serde(rename = "kriterId", default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(rename = "kriterAdi", default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(rename = "aktif", default)]
    pub status: Option<StatusCode>,
    #[serde(rename = "gostergeSayisi", default, deserialize_with = "lenient::opt_count")]
    pub indicator_count: Option<u32>,
    #[serde(rename = "modelIciAgirlik", default, deserialize_with = "lenient::opt_float")]
    pub weight_in_model: Option<f64>,
    #[serde(rename = "kriterIciAgirlik", default, deserialize_with = "lenient::opt_float")]
    pub weight_in_dimension: Option<f64>,
    /// (Boyut * Kriter) / 100
    #[serde(rename = "agirlik", default, deserialize_with = "lenient::opt_float")]
    pub weight: Option<f64>,
    #[serde(rename = "gostergeler", default, deserialize_with = "lenient::list")]
    pub indicators: Vec<NavIndicatorDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavDimensionDto {
    #[serde(rename = "boyutId", default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(rename = "boyutAdi", default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(rename = "aktif", default)]
    pub status: Option<StatusCode>,
    #[serde(rename = "kriterSayisi", default, deserialize_with = "lenient::opt_count")]
    pub criterion_count: Option<u32>,
    #[serde(rename = "gostergeSayisi", default, deserialize_with = "lenient::opt_count")]
    pub indicator_count: Option<u32>,
    #[serde(rename = "boyutIciAgirlik", default, deserialize_with = "lenient::opt_float")]
    pub weight: Option<f64>,
    /// Backend sends the dimension weight under this name as well
    #[serde(rename = "modelIciAgirlik", default, deserialize_with = "lenient::opt_float")]
    pub weight_in_model: Option<f64>,
    /// Заполняется для плоской иерархии (Boyut → Gösterge)
    #[serde(rename = "gostergeler", default, deserialize_with = "lenient::opt_list")]
    pub indicators: Option<Vec<NavIndicatorDto>>,
    #[serde(rename = "kriterler", default, deserialize_with = "lenient::list")]
    pub criteria: Vec<NavCriterionDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavModelDto {
    #[serde(rename = "modelId", default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(rename = "modelAdi", default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(rename = "aktif", default)]
    pub status: Option<StatusCode>,
    /// true: Boyut → Gösterge, false: Boyut → Kriter → Gösterge
    #[serde(rename = "hiyerarsi", default, deserialize_with = "lenient::opt_boolean")]
    pub flat_hierarchy: Option<bool>,
    #[serde(rename = "dilAdi", default, deserialize_with = "lenient::opt_string")]
    pub language: Option<String>,
    #[serde(rename = "boyutSayisi", default, deserialize_with = "lenient::opt_count")]
    pub dimension_count: Option<u32>,
    #[serde(rename = "kriterSayisi", default, deserialize_with = "lenient::opt_count")]
    pub criterion_count: Option<u32>,
    #[serde(rename = "gostergeSayisi", default, deserialize_with = "lenient::opt_count")]
    pub indicator_count: Option<u32>,
    #[serde(rename = "boyutlar", default, deserialize_with = "lenient::list")]
    pub dimensions: Vec<NavDimensionDto>,
}
