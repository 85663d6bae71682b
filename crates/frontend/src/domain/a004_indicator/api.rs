use crate::shared::api_utils::api_url;
use crate::shared::fetch::{get_json, FetchError};
use contracts::domain::a004_indicator::{IndicatorModelSummary, IndicatorRow, IndicatorTreeDto};
use contracts::shared::catalog::map_tree_rows;
use contracts::shared::wire::decode_list;
use web_sys::AbortSignal;

const API_PATH: &str = "/api/Gostergeler";

pub async fn fetch_indicators(signal: Option<&AbortSignal>) -> Result<Vec<IndicatorRow>, FetchError> {
    let body = get_json(&api_url(&format!("{}/tree", API_PATH)), signal).await?;
    Ok(map_tree_rows(&decode_list::<IndicatorTreeDto>(body)))
}

pub async fn fetch_indicator_models(
    indicator_id: i64,
    signal: Option<&AbortSignal>,
) -> Result<Vec<IndicatorModelSummary>, FetchError> {
    let url = api_url(&format!("{}/{}/models", API_PATH, indicator_id));
    Ok(decode_list(get_json(&url, signal).await?))
}
