use crate::shared::api_utils::api_url;
use crate::shared::fetch::{get_json, FetchError};
use contracts::domain::a001_model::{ModelDetail, ModelRow, ModelTreeDto};
use contracts::shared::catalog::map_tree_rows;
use contracts::shared::wire::decode_list;
use web_sys::AbortSignal;

const API_PATH: &str = "/api/Modeller";

pub async fn fetch_models(signal: Option<&AbortSignal>) -> Result<Vec<ModelRow>, FetchError> {
    let body = get_json(&api_url(API_PATH), signal).await?;
    Ok(map_tree_rows(&decode_list::<ModelTreeDto>(body)))
}

/// Детализация модели по типам пользователей
pub async fn fetch_model_details(
    model_id: i64,
    signal: Option<&AbortSignal>,
) -> Result<Vec<ModelDetail>, FetchError> {
    let url = api_url(&format!("{}/{}/details", API_PATH, model_id));
    let body = get_json(&url, signal).await?;
    Ok(decode_list(body))
}
