use crate::shared::api_utils::api_url_with_query;
use crate::shared::fetch::{get_json, FetchError};
use contracts::domain::a006_mapping::{normalize_to_tree, NavModel, NavModelDto, NavigationFilter};
use contracts::shared::wire::decode_list;
use web_sys::AbortSignal;

/// Навигационное дерево Model → Boyut → [Kriter →] Gösterge, уже нормализованное
pub async fn fetch_navigation(
    filter: &NavigationFilter,
    signal: Option<&AbortSignal>,
) -> Result<Vec<NavModel>, FetchError> {
    let url = api_url_with_query(NavigationFilter::PATH, &filter.query_pairs());
    let body = get_json(&url, signal).await?;
    Ok(normalize_to_tree(&decode_list::<NavModelDto>(body)))
}
