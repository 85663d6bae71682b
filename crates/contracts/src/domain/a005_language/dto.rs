use crate::shared::text::turkish_cmp;
use crate::shared::wire::lenient;
use serde::{Deserialize, Serialize};

/// Элемент GET /api/Diller/select
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageOption {
    #[serde(rename = "dilId", default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(rename = "dilAdi", default, deserialize_with = "lenient::string")]
    pub name: String,
}

/// Turkish alphabetical order, the way the language selects list them
pub fn sort_languages(items: &mut [LanguageOption]) {
    items.sort_by(|a, b| turkish_cmp(&a.name, &b.name));
}
