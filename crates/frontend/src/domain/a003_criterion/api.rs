use crate::domain::a006_mapping::api::fetch_navigation;
use crate::shared::api_utils::api_url;
use crate::shared::fetch::{get_json, FetchError};
use contracts::domain::a003_criterion::{
    enrich_indicator_counts, CriterionModelSummary, CriterionRow, CriterionTreeDto,
};
use contracts::domain::a006_mapping::NavigationFilter;
use contracts::shared::catalog::map_tree_rows;
use contracts::shared::wire::decode_list;
use web_sys::AbortSignal;

const API_PATH: &str = "/api/Kriterler";

pub async fn fetch_criteria(signal: Option<&AbortSignal>) -> Result<Vec<CriterionRow>, FetchError> {
    let body = get_json(&api_url(&format!("{}/tree", API_PATH)), signal).await?;
    Ok(map_tree_rows(&decode_list::<CriterionTreeDto>(body)))
}

/// Модели критерия. Число индикаторов берётся из навигационного дерева,
/// если оно доступно.
pub async fn fetch_criterion_models(
    criterion_id: i64,
    signal: Option<&AbortSignal>,
) -> Result<Vec<CriterionModelSummary>, FetchError> {
    let url = api_url(&format!("{}/{}/models", API_PATH, criterion_id));
    let mut summaries: Vec<CriterionModelSummary> = decode_list(get_json(&url, signal).await?);
    if summaries.is_empty() {
        return Ok(summaries);
    }

    match fetch_navigation(&NavigationFilter::default(), signal).await {
        Ok(navigation) => enrich_indicator_counts(&mut summaries, &navigation),
        Err(FetchError::Cancelled) => return Err(FetchError::Cancelled),
        Err(e) => log::warn!("criterion {}: counts not enriched: {}", criterion_id, e),
    }
    Ok(summaries)
}
