use crate::shared::api_utils::api_url;
use crate::shared::fetch::{get_json, FetchError};
use contracts::domain::a005_language::{sort_languages, LanguageOption};
use contracts::shared::wire::decode_list;
use web_sys::AbortSignal;

const API_PATH: &str = "/api/Diller/select";

/// Языки для селекторов, в турецком алфавитном порядке
pub async fn fetch_languages(signal: Option<&AbortSignal>) -> Result<Vec<LanguageOption>, FetchError> {
    let body = get_json(&api_url(API_PATH), signal).await?;
    let mut items: Vec<LanguageOption> = decode_list(body);
    items.retain(|l| !l.name.trim().is_empty());
    sort_languages(&mut items);
    Ok(items)
}
