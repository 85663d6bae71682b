use crate::shared::api_utils::api_url;
use crate::shared::fetch::{get_json, FetchError};
use contracts::domain::a002_dimension::{DimensionModelSummary, DimensionRow, DimensionTreeDto};
use contracts::shared::catalog::map_tree_rows;
use contracts::shared::wire::decode_list;
use web_sys::AbortSignal;

const API_PATH: &str = "/api/Boyutlar";

pub async fn fetch_dimensions(signal: Option<&AbortSignal>) -> Result<Vec<DimensionRow>, FetchError> {
    let body = get_json(&api_url(&format!("{}/tree", API_PATH)), signal).await?;
    Ok(map_tree_rows(&decode_list::<DimensionTreeDto>(body)))
}

/// Модели, в которых используется измерение
pub async fn fetch_dimension_models(
    dimension_id: i64,
    signal: Option<&AbortSignal>,
) -> Result<Vec<DimensionModelSummary>, FetchError> {
    let url = api_url(&format!("{}/{}/models", API_PATH, dimension_id));
    Ok(decode_list(get_json(&url, signal).await?))
}
