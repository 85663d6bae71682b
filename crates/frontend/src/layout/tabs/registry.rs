//! Tab content registry - единственный источник правды для маппинга tab.key → View

use crate::domain::a001_model::ui::list::ModelList;
use crate::domain::a002_dimension::ui::list::DimensionList;
use crate::domain::a003_criterion::ui::list::CriterionList;
use crate::domain::a004_indicator::ui::list::IndicatorList;
use crate::domain::a006_mapping::ui::tree::MappingTree;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// Неизвестный ключ даёт placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_model" => view! { <ModelList /> }.into_any(),
        "a002_dimension" => view! { <DimensionList /> }.into_any(),
        "a003_criterion" => view! { <CriterionList /> }.into_any(),
        "a004_indicator" => view! { <IndicatorList /> }.into_any(),
        "a006_mapping" => view! { <MappingTree /> }.into_any(),
        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Sayfa bulunamadı"}</div> }.into_any()
        }
    }
}
